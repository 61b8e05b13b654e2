//! Default values for coffee-mixer configuration.

pub use crate::model::DEFAULT_CHART_MAX;

/// Default summary bar width in terminal cells.
pub const DEFAULT_BAR_WIDTH: usize = 20;

/// Upper bound accepted for `display.bar_width`.
pub const MAX_BAR_WIDTH: usize = 200;

/// Number of "did you mean" suggestions shown for an unresolved option.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;
