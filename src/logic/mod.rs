//! Core non-UI logic: request building, response application, and the
//! pure view models the UI paints.

pub mod dispatch;
pub mod options;
pub mod pagination;
pub mod query;
pub mod response;
pub mod rows;

pub use dispatch::{PageAction, dispatch};
pub use pagination::{PaginationView, render_pagination};
pub use query::{search, send_query};
pub use response::{ResponseOutcome, apply_page_response};
pub use rows::{RowsView, render_rows};
