//! Report type definitions.

use crate::config::{DisplayConfig, DEFAULT_BAR_WIDTH};
use crate::model::DEFAULT_CHART_MAX;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary on a terminal, JSON otherwise
    #[default]
    Auto,
    /// Profile with bars (colored)
    Summary,
    /// Per-category contribution table
    Table,
    /// Structured JSON output
    Json,
    /// Plain recipe text, one ingredient per line
    Text,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Values are clamped to `[0, chart_max]` for display
    pub chart_max: f64,
    /// Width of profile bars in terminal cells
    pub bar_width: usize,
    /// Include per-category contributions
    pub show_breakdown: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_max: DEFAULT_CHART_MAX,
            bar_width: DEFAULT_BAR_WIDTH,
            show_breakdown: false,
        }
    }
}

impl ReportConfig {
    #[must_use]
    pub fn from_display(display: &DisplayConfig) -> Self {
        Self {
            chart_max: display.chart_max,
            bar_width: display.bar_width,
            show_breakdown: display.show_breakdown,
        }
    }

    #[must_use]
    pub const fn with_breakdown(mut self, show: bool) -> Self {
        self.show_breakdown = show;
        self
    }
}
