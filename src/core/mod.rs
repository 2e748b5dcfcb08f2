pub mod focus;
pub mod height;
pub mod keys;
pub mod list;
pub mod nav;
pub mod viewport;

pub use focus::{Dispatch, FocusArbiter, FocusError, FocusMode, ReleaseToken};
pub use height::HeightBudget;
pub use keys::{NavKey, logical_key};
pub use list::{ListCursor, ListOutcome};
pub use nav::{NavError, NavOutcome, Navigator, ViewId};
pub use viewport::{Scrollbar, Window, compute_window, scrollbar};
