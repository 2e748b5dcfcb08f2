use crate::core::viewport::{Window, compute_window};

/// Outcome of feeding a key to a cursor. `Activated` carries the index the
/// caller should act on; the cursor itself never touches item data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListOutcome {
    Ignored,
    Moved,
    Activated(usize),
}

/// Selection + scroll state for one windowed list. The item collection is
/// owned by the caller; the cursor only tracks `len`.
///
/// Invariant after every mutation: when `len > 0`,
/// `scroll_offset <= selected < scroll_offset + viewport_height`.
#[derive(Clone, Debug)]
pub struct ListCursor {
    len: usize,
    selected: Option<usize>,
    scroll_offset: usize,
    viewport_height: usize,
    wrap_around: bool,
    follow: bool,
}

impl ListCursor {
    pub fn new(len: usize, viewport_height: usize) -> Self {
        Self {
            len,
            selected: if len == 0 { None } else { Some(0) },
            scroll_offset: 0,
            viewport_height: viewport_height.max(1),
            wrap_around: false,
            follow: false,
        }
    }

    pub fn with_wrap_around(mut self, wrap_around: bool) -> Self {
        self.wrap_around = wrap_around;
        self
    }

    /// Start in follow-latest mode with the tail selected.
    pub fn following(mut self) -> Self {
        self.set_following(true);
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    pub fn set_wrap_around(&mut self, wrap_around: bool) {
        self.wrap_around = wrap_around;
    }

    /// Engage or disengage follow-latest directly. Engaging jumps to the
    /// tail; on an empty list the mode still sticks, so the first lines to
    /// arrive select the tail rather than index 0.
    pub fn set_following(&mut self, follow: bool) {
        self.follow = follow;
        if follow && self.len > 0 {
            self.selected = Some(self.len - 1);
        }
        self.reveal_selection();
    }

    /// Visible slice for rendering, recomputed from current state.
    pub fn window(&self) -> Window {
        compute_window(
            self.len,
            self.viewport_height,
            self.selected.unwrap_or(0),
            self.scroll_offset,
        )
    }

    /// The caller replaced the item collection. Selection is re-clamped (a
    /// shrink must never leave a dangling index) and follow mode pins the
    /// selection to the new tail on growth.
    pub fn set_len(&mut self, len: usize) {
        let grew = len > self.len;
        self.len = len;

        if len == 0 {
            self.selected = None;
            self.scroll_offset = 0;
            return;
        }

        self.selected = match self.selected {
            _ if self.follow && grew => Some(len - 1),
            Some(index) => Some(index.min(len - 1)),
            None => Some(if self.follow { len - 1 } else { 0 }),
        };
        self.reveal_selection();
    }

    /// The hosting view resized or toggled auxiliary rows.
    pub fn set_viewport_height(&mut self, viewport_height: usize) {
        self.viewport_height = viewport_height.max(1);
        self.reveal_selection();
    }

    pub fn move_up(&mut self) -> ListOutcome {
        let Some(selected) = self.selected else {
            return ListOutcome::Ignored;
        };
        let next = if selected == 0 {
            if !self.wrap_around {
                return ListOutcome::Ignored;
            }
            self.len - 1
        } else {
            selected - 1
        };
        self.move_to(next)
    }

    pub fn move_down(&mut self) -> ListOutcome {
        let Some(selected) = self.selected else {
            return ListOutcome::Ignored;
        };
        let next = if selected + 1 >= self.len {
            if !self.wrap_around {
                return ListOutcome::Ignored;
            }
            0
        } else {
            selected + 1
        };
        self.move_to(next)
    }

    pub fn page_up(&mut self) -> ListOutcome {
        let Some(selected) = self.selected else {
            return ListOutcome::Ignored;
        };
        self.move_to(selected.saturating_sub(self.viewport_height))
    }

    pub fn page_down(&mut self) -> ListOutcome {
        let Some(selected) = self.selected else {
            return ListOutcome::Ignored;
        };
        self.move_to((selected + self.viewport_height).min(self.len - 1))
    }

    pub fn jump_to_start(&mut self) -> ListOutcome {
        if self.selected.is_none() {
            return ListOutcome::Ignored;
        }
        let outcome = self.move_to(0);
        self.scroll_offset = 0;
        outcome
    }

    /// Jumping to the end re-engages follow-latest; it is the explicit
    /// "catch up with the tail" gesture.
    pub fn jump_to_end(&mut self) -> ListOutcome {
        if self.selected.is_none() {
            return ListOutcome::Ignored;
        }
        let outcome = self.move_to(self.len - 1);
        self.follow = true;
        outcome
    }

    /// Programmatic selection restore, used by callers that re-find an item
    /// after replacing the collection (e.g. keeping the same log line
    /// selected across a filter change). Clamps, reveals, and does not
    /// count as manual movement: follow mode is left as-is.
    pub fn select(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.selected = Some(index.min(self.len - 1));
        self.reveal_selection();
    }

    pub fn activate(&self) -> ListOutcome {
        match self.selected {
            Some(index) => ListOutcome::Activated(index),
            None => ListOutcome::Ignored,
        }
    }

    fn move_to(&mut self, index: usize) -> ListOutcome {
        // Any manual movement disengages follow mode until the user jumps
        // back to the tail.
        self.follow = false;
        let moved = self.selected != Some(index);
        self.selected = Some(index);
        self.reveal_selection();
        if moved { ListOutcome::Moved } else { ListOutcome::Ignored }
    }

    fn reveal_selection(&mut self) {
        let window = compute_window(
            self.len,
            self.viewport_height,
            self.selected.unwrap_or(0),
            self.scroll_offset,
        );
        self.scroll_offset = window.scroll_offset;
    }
}
