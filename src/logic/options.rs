//! Rebuild filter dropdowns from the values the service reports.

use crate::state::{ALL_LABEL, Dropdown, FilterChoice};

/// What: Rebuild a dropdown's options from the available values.
///
/// Inputs:
/// - `current`: Dropdown as it is now (its selection is the one to preserve).
/// - `available`: Distinct values for the current identifier, in service order.
///
/// Output:
/// - New dropdown with options `All` followed by `available`, closed.
///
/// Details:
/// - The previous selection survives only if it is `All` or still offered;
///   otherwise the dropdown falls back to `All`.
/// - Blank and repeated values from the service are skipped, and so is a literal
///   `"All"`: the sentinel already stands for it and must never reach the query.
#[must_use]
pub fn reconcile(current: &Dropdown, available: &[String]) -> Dropdown {
    let mut options = Vec::with_capacity(available.len() + 1);
    options.push(FilterChoice::All);
    for value in available {
        let choice = FilterChoice::Value(value.clone());
        if value.trim().is_empty() || value.trim() == ALL_LABEL || options.contains(&choice) {
            continue;
        }
        options.push(choice);
    }
    let selected = if options.contains(&current.selected) {
        current.selected.clone()
    } else {
        tracing::debug!(
            stale = %current.selected,
            "selected filter no longer available; falling back to All"
        );
        FilterChoice::All
    };
    let highlighted = options.iter().position(|o| *o == selected).unwrap_or(0);
    Dropdown {
        options,
        selected,
        open: false,
        highlighted,
    }
}
