use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum FocusError {
    /// A claim that was not on top of the stack was released. The claim is
    /// removed anyway, but this indicates a bug in the releasing component's
    /// teardown order and is surfaced rather than swallowed.
    #[error("focus claim released out of order (owner: {owner})")]
    OutOfOrderRelease { owner: String },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FocusMode {
    Normal,
    Exclusive,
}

/// Who an incoming key event should be delivered to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Dispatch {
    /// A claim is active; only this owner's handler may see the event.
    Owner(String),
    /// No claim is held; every normal handler of the mounted view sees it.
    Broadcast,
    /// Non-interactive input source; nothing is dispatched.
    Inert,
}

/// One-shot handle to release a specific claim. Consuming it twice, or after
/// the claim is already gone, is always a safe no-op; teardown paths may
/// race with each other.
#[derive(Debug)]
pub struct ReleaseToken {
    serial: u64,
}

#[derive(Clone, Debug)]
struct Claim {
    serial: u64,
    owner: String,
    mode: FocusMode,
}

/// Process-wide arbitration of keyboard input. Components push claims when
/// they need uncontested input (a text field capturing every character); only
/// the top claim's owner receives events while any claim is held.
#[derive(Debug)]
pub struct FocusArbiter {
    stack: Vec<Claim>,
    next_serial: u64,
    interactive: bool,
}

impl FocusArbiter {
    pub fn new(interactive: bool) -> Self {
        Self {
            stack: Vec::new(),
            next_serial: 1,
            interactive,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn push(&mut self, owner: &str, mode: FocusMode) -> ReleaseToken {
        let serial = self.next_serial;
        self.next_serial += 1;
        self.stack.push(Claim {
            serial,
            owner: owner.to_string(),
            mode,
        });
        ReleaseToken { serial }
    }

    /// Release the claim the token was minted for. Already-gone claims are a
    /// no-op; a claim that is still present but buried under newer claims is
    /// removed and reported as an out-of-order release.
    pub fn release(&mut self, token: &ReleaseToken) -> Result<(), FocusError> {
        let Some(position) = self
            .stack
            .iter()
            .position(|claim| claim.serial == token.serial)
        else {
            return Ok(());
        };

        let on_top = position + 1 == self.stack.len();
        let claim = self.stack.remove(position);
        if on_top {
            Ok(())
        } else {
            Err(FocusError::OutOfOrderRelease { owner: claim.owner })
        }
    }

    /// Drop every claim held by `owner`. Used on view unmount so a departing
    /// view can never leak a claim that would block input forever.
    pub fn release_owned_by(&mut self, owner: &str) {
        self.stack.retain(|claim| claim.owner != owner);
    }

    /// True when `owner`'s handler is allowed to react to input: either no
    /// claim is held anywhere (shared mode) or `owner` holds the top claim.
    pub fn is_active(&self, owner: &str) -> bool {
        match self.stack.last() {
            None => true,
            Some(top) => top.owner == owner,
        }
    }

    /// Mode of the active claim, if any. Exclusive means printable
    /// characters are forwarded verbatim to the owner instead of being
    /// interpreted as navigation aliases.
    pub fn active_mode(&self) -> Option<FocusMode> {
        self.stack.last().map(|claim| claim.mode)
    }

    /// Arbitration decision for one incoming key event.
    pub fn route(&self) -> Dispatch {
        if !self.interactive {
            return Dispatch::Inert;
        }
        match self.stack.last() {
            Some(top) => Dispatch::Owner(top.owner.clone()),
            None => Dispatch::Broadcast,
        }
    }

    #[cfg(test)]
    pub fn claim_count(&self) -> usize {
        self.stack.len()
    }
}
