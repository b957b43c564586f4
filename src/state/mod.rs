//! Application state for filingsview.
//!
//! Public re-exports keep the `crate::state::*` paths short for the event,
//! logic, and UI layers.

pub mod app_state;
pub mod filter;
pub mod modal;
pub mod types;

pub use app_state::{AppState, Rect4};
pub use filter::{FilterState, PER_PAGE};
pub use modal::Modal;
pub use types::{
    ALL_LABEL, Dropdown, DropdownId, FilingRecord, FilingsPage, FilterChoice, FilterSelection,
    Focus, PageRequest, PageResponse,
};

