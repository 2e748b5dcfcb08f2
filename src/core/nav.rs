use crate::core::focus::FocusArbiter;
use thiserror::Error;

/// Identifier of a registered top-level screen.
pub type ViewId = &'static str;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum NavError {
    /// `navigate` was handed an id that was never registered. This is a bug
    /// in the calling code; the transition is refused and the current view
    /// stays mounted.
    #[error("unknown view id: {0}")]
    UnknownView(String),

    #[error("duplicate view id registered: {0}")]
    DuplicateView(String),
}

/// What a navigation step decided.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavOutcome {
    /// A different view is now mounted.
    Mounted(ViewId),
    /// `back()` on the entry view with empty history: the host should exit.
    Exit,
}

/// Stack-based router over registered views. History is append-only except
/// for pop-on-back; forward navigation never deduplicates entries.
#[derive(Debug)]
pub struct Navigator {
    registered: Vec<ViewId>,
    current: ViewId,
    history: Vec<ViewId>,
}

impl Navigator {
    pub fn new(entry: ViewId, views: &[ViewId]) -> Result<Self, NavError> {
        let mut registered: Vec<ViewId> = Vec::with_capacity(views.len());
        for view in views {
            if registered.contains(view) {
                return Err(NavError::DuplicateView((*view).to_string()));
            }
            registered.push(*view);
        }
        if !registered.contains(&entry) {
            return Err(NavError::UnknownView(entry.to_string()));
        }
        Ok(Self {
            registered,
            current: entry,
            history: Vec::new(),
        })
    }

    pub fn current(&self) -> ViewId {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Mount `target`, pushing the current view onto history. The departing
    /// view's focus claims are released so a screen can never leak input
    /// ownership past its own lifetime.
    pub fn navigate(
        &mut self,
        target: ViewId,
        arbiter: &mut FocusArbiter,
    ) -> Result<NavOutcome, NavError> {
        if !self.registered.contains(&target) {
            return Err(NavError::UnknownView(target.to_string()));
        }
        arbiter.release_owned_by(self.current);
        self.history.push(self.current);
        self.current = target;
        Ok(NavOutcome::Mounted(target))
    }

    /// Pop one history entry and re-mount it. On the entry view with nothing
    /// left to pop, signals exit instead.
    pub fn back(&mut self, arbiter: &mut FocusArbiter) -> NavOutcome {
        arbiter.release_owned_by(self.current);
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                NavOutcome::Mounted(previous)
            }
            None => NavOutcome::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWS: &[ViewId] = &["home", "logs", "settings"];

    fn navigator() -> (Navigator, FocusArbiter) {
        (
            Navigator::new("home", VIEWS).expect("registry"),
            FocusArbiter::new(true),
        )
    }

    #[test]
    fn navigate_pushes_and_back_pops() {
        let (mut nav, mut arbiter) = navigator();
        assert_eq!(
            nav.navigate("logs", &mut arbiter),
            Ok(NavOutcome::Mounted("logs"))
        );
        assert_eq!(
            nav.navigate("settings", &mut arbiter),
            Ok(NavOutcome::Mounted("settings"))
        );
        assert_eq!(nav.depth(), 2);

        assert_eq!(nav.back(&mut arbiter), NavOutcome::Mounted("logs"));
        assert_eq!(nav.back(&mut arbiter), NavOutcome::Mounted("home"));
        assert_eq!(nav.current(), "home");
    }

    #[test]
    fn unknown_view_fails_fast_and_leaves_state_unchanged() {
        let (mut nav, mut arbiter) = navigator();
        nav.navigate("logs", &mut arbiter).expect("known view");

        let error = nav.navigate("wizard", &mut arbiter).unwrap_err();
        assert_eq!(error, NavError::UnknownView("wizard".to_string()));
        assert_eq!(nav.current(), "logs");
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn back_on_entry_view_signals_exit() {
        let (mut nav, mut arbiter) = navigator();
        assert_eq!(nav.back(&mut arbiter), NavOutcome::Exit);
        assert_eq!(nav.current(), "home");
    }

    #[test]
    fn forward_navigation_never_deduplicates_history() {
        let (mut nav, mut arbiter) = navigator();
        nav.navigate("logs", &mut arbiter).expect("nav");
        nav.navigate("home", &mut arbiter).expect("nav");
        nav.navigate("logs", &mut arbiter).expect("nav");
        assert_eq!(nav.depth(), 3);

        assert_eq!(nav.back(&mut arbiter), NavOutcome::Mounted("home"));
        assert_eq!(nav.back(&mut arbiter), NavOutcome::Mounted("logs"));
        assert_eq!(nav.back(&mut arbiter), NavOutcome::Mounted("home"));
        assert_eq!(nav.back(&mut arbiter), NavOutcome::Exit);
    }

    #[test]
    fn leaving_a_view_releases_its_focus_claims() {
        use crate::core::focus::FocusMode;

        let (mut nav, mut arbiter) = navigator();
        nav.navigate("logs", &mut arbiter).expect("nav");
        arbiter.push("logs", FocusMode::Exclusive);

        nav.back(&mut arbiter);
        assert!(arbiter.is_active("home"));
        assert_eq!(arbiter.claim_count(), 0);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let error = Navigator::new("home", &["home", "logs", "home"]).unwrap_err();
        assert_eq!(error, NavError::DuplicateView("home".to_string()));
    }

    #[test]
    fn entry_view_must_be_registered() {
        let error = Navigator::new("missing", VIEWS).unwrap_err();
        assert_eq!(error, NavError::UnknownView("missing".to_string()));
    }
}
