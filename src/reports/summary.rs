//! Terminal reports: profile bars and a contribution table.

use super::{ProfileContext, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::config::DEFAULT_SUGGESTION_LIMIT;
use crate::model::{FlavorDimension, FlavorProfile};
use crate::scoring::{peak_sweetness, temperature_curve, CategoryContribution, Resolution};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

use super::recipe_text::format_amount;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Pad to a display width, counting wide characters correctly.
fn pad_right(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

fn pad_left(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{text}", " ".repeat(width.saturating_sub(used)))
}

/// A bar of `width` cells filled in proportion to `value / max`.
fn bar(value: f64, max: f64, width: usize) -> (String, String) {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64).round() as usize).min(width);
    ("█".repeat(filled), "░".repeat(width - filled))
}

fn unresolved_line(context: &ProfileContext<'_>, contribution: &CategoryContribution) -> String {
    let subject = match contribution.resolution {
        Resolution::UnknownBrand => format!(
            "brand '{}' for '{}'",
            contribution.brand.as_deref().unwrap_or_default(),
            contribution.option
        ),
        _ => format!("'{}'", contribution.option),
    };
    let mut line = format!(
        "{}: {} {subject}",
        contribution.category,
        contribution.resolution.label()
    );
    if contribution.resolution == Resolution::UnknownOption {
        let suggestions = context.catalog.suggest(
            &contribution.category,
            &contribution.option,
            DEFAULT_SUGGESTION_LIMIT,
        );
        if !suggestions.is_empty() {
            let _ = write!(line, " (did you mean: {}?)", suggestions.join(", "));
        }
    }
    line
}

fn signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn profile_lines(&self, profile: &FlavorProfile, config: &ReportConfig) -> Vec<String> {
        let label_width = FlavorDimension::ALL
            .iter()
            .map(|d| UnicodeWidthStr::width(d.label()))
            .max()
            .unwrap_or(0);
        let chart = profile.chart_values(config.chart_max);

        profile
            .iter()
            .zip(chart)
            .map(|((dimension, value), (_, clamped))| {
                let (filled, empty) = bar(clamped, config.chart_max, config.bar_width);
                let marker = if value > clamped { " +" } else { "" };
                format!(
                    "  {} {}{} {}{marker}",
                    pad_right(dimension.label(), label_width),
                    self.color(&filled, "green"),
                    self.color(&empty, "dim"),
                    pad_left(&format!("{value:.2}"), 6),
                )
            })
            .collect()
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_profile_report(
        &self,
        context: &ProfileContext<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let profile = &context.breakdown.profile;

        let title = format!("Flavor Profile: {}", context.display_name());
        lines.push(self.color(&title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.extend(self.profile_lines(profile, config));
        lines.push(String::new());

        let dominant = profile
            .dominant()
            .map_or_else(|| "none".to_string(), |d| d.label().to_string());
        lines.push(format!("{}  {dominant}", self.color("Dominant:", "cyan")));
        if let Some(peak) = peak_sweetness(&temperature_curve(profile)) {
            lines.push(format!(
                "{}  {}°C (sweetness {:.1})",
                self.color("Sweetest at:", "cyan"),
                peak.temp_c,
                peak.sweetness
            ));
        }

        let active = context.breakdown.contributing().count();
        lines.push(format!(
            "{}  {active} active {}",
            self.color("Ingredients:", "cyan"),
            if active == 1 { "category" } else { "categories" }
        ));

        let unresolved: Vec<String> = context
            .breakdown
            .unresolved()
            .map(|c| unresolved_line(context, c))
            .collect();
        if !unresolved.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Unresolved (scored as zero):", "yellow"));
            for line in unresolved {
                lines.push(format!("  {line}"));
            }
        }

        if config.show_breakdown {
            lines.push(String::new());
            lines.push(self.color("Contributions:", "bold"));
            for contribution in context.breakdown.contributing() {
                let total = contribution.total();
                let parts: Vec<String> = total
                    .iter()
                    .filter(|(_, v)| *v != 0.0)
                    .map(|(d, v)| format!("{d} {}", signed(v)))
                    .collect();
                lines.push(format!(
                    "  {} {} ×{:.2}  {}",
                    self.color(&contribution.category, "cyan"),
                    contribution
                        .option_label
                        .as_deref()
                        .unwrap_or(&contribution.option),
                    contribution.multiplier,
                    if parts.is_empty() {
                        "no effect".to_string()
                    } else {
                        parts.join(", ")
                    }
                ));
            }
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Short column headers for the dimensions.
const DIMENSION_HEADERS: [&str; 7] = ["Swe", "Bit", "Aci", "Bod", "Aro", "Aft", "Caf"];

/// Aligned per-category contribution table
pub struct TableReporter {
    colored: bool,
}

impl TableReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn row(cells: &[String], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                // Text columns left-aligned, numbers right-aligned
                if i < 2 {
                    pad_right(cell, *width)
                } else {
                    pad_left(cell, *width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_profile_report(
        &self,
        context: &ProfileContext<'_>,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut rows: Vec<Vec<String>> = Vec::new();

        let mut header = vec![
            "Category".to_string(),
            "Selection".to_string(),
            "Amount".to_string(),
            "Mult".to_string(),
        ];
        header.extend(DIMENSION_HEADERS.iter().map(ToString::to_string));
        rows.push(header);

        for contribution in &context.breakdown.contributions {
            if contribution.resolution == Resolution::Skipped {
                continue;
            }
            let mut selection = contribution
                .option_label
                .clone()
                .unwrap_or_else(|| contribution.option.clone());
            if let Some(ref brand) = contribution.brand {
                let _ = write!(selection, " / {brand}");
            }
            if contribution.resolution.is_unresolved() {
                selection.push_str(" (?)");
            }
            let unit = contribution.unit.map_or("", |u| u.symbol());
            let total = contribution.total();

            let mut row = vec![
                contribution.category.clone(),
                selection,
                format!("{}{unit}", format_amount(contribution.amount)),
                format!("{:.2}", contribution.multiplier),
            ];
            row.extend(FlavorDimension::ALL.iter().map(|d| format!("{:.2}", total.get(*d))));
            rows.push(row);
        }

        let mut total_row = vec![
            "Total".to_string(),
            String::new(),
            String::new(),
            String::new(),
        ];
        total_row.extend(
            context
                .breakdown
                .profile
                .to_array()
                .iter()
                .map(|v| format!("{v:.2}")),
        );
        rows.push(total_row);

        let columns = rows[0].len();
        let widths: Vec<usize> = (0..columns)
            .map(|i| {
                rows.iter()
                    .map(|r| UnicodeWidthStr::width(r[i].as_str()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(rows.len() + 2);
        let last = rows.len() - 1;
        for (i, row) in rows.iter().enumerate() {
            let line = Self::row(row, &widths);
            if i == 0 || i == last {
                lines.push(ansi_color(&line, "bold", self.colored));
            } else {
                lines.push(line);
            }
            if i == 0 || i + 1 == last {
                let rule_width: usize = widths.iter().sum::<usize>() + 2 * (columns - 1);
                lines.push(ansi_color(&"─".repeat(rule_width), "dim", self.colored));
            }
        }
        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::{Recipe, Selection};

    fn context_for(recipe: &Recipe) -> ProfileContext<'_> {
        ProfileContext::new(recipe, Catalog::builtin())
    }

    #[test]
    fn test_bar_proportions() {
        assert_eq!(bar(5.0, 10.0, 10), ("█".repeat(5), "░".repeat(5)));
        assert_eq!(bar(0.0, 10.0, 4), (String::new(), "░".repeat(4)));
        assert_eq!(bar(12.0, 10.0, 4), ("█".repeat(4), String::new()));
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad_right("café", 6), "café  ");
        assert_eq!(pad_left("咖啡", 6), "  咖啡");
    }

    #[test]
    fn test_summary_report() {
        let recipe = Recipe::new()
            .with("coffeeBeans", Selection::new("arabica", 20.0))
            .with("syrup", Selection::new("vanila-syrup", 15.0))
            .with_name("Morning");
        let context = context_for(&recipe);
        let report = SummaryReporter::new()
            .no_color()
            .generate_profile_report(&context, &ReportConfig::default())
            .unwrap();

        assert!(report.starts_with("Flavor Profile: Morning"));
        assert!(report.contains("Acidity"));
        assert!(report.contains("  4.00"));
        assert!(report.contains("Dominant:  Aroma"));
        assert!(report.contains("syrup: unknown option 'vanila-syrup'"));
        assert!(report.contains("did you mean: vanilla-syrup"));
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_summary_shows_sweetest_temperature() {
        let recipe = Recipe::new().with("syrup", Selection::new("caramel-syrup", 30.0));
        let report = SummaryReporter::new()
            .no_color()
            .generate_profile_report(&context_for(&recipe), &ReportConfig::default())
            .unwrap();
        assert!(report.contains("Sweetest at:  40°C (sweetness 14.8)"));

        let bitter = Recipe::new().with("coffeeBeans", Selection::new("arabica", 20.0));
        let report = SummaryReporter::new()
            .no_color()
            .generate_profile_report(&context_for(&bitter), &ReportConfig::default())
            .unwrap();
        assert!(!report.contains("Sweetest at:"));
    }

    #[test]
    fn test_summary_marks_clamped_values() {
        let recipe = Recipe::new().with("coffeeBeans", Selection::new("arabica", 100.0));
        let report = SummaryReporter::new()
            .no_color()
            .generate_profile_report(&context_for(&recipe), &ReportConfig::default())
            .unwrap();
        assert!(report.contains("30.00 +"));
    }

    #[test]
    fn test_summary_breakdown_section() {
        let recipe = Recipe::new().with("coffeeBeans", Selection::new("arabica", 20.0));
        let config = ReportConfig::default().with_breakdown(true);
        let report = SummaryReporter::new()
            .no_color()
            .generate_profile_report(&context_for(&recipe), &config)
            .unwrap();
        assert!(report.contains("Contributions:"));
        assert!(report.contains("coffeeBeans Arabica ×2.00  acidity +4.00"));
    }

    #[test]
    fn test_table_report() {
        let recipe = Recipe::new()
            .with("coffeeBeans", Selection::new("arabica", 20.0))
            .with("milk", Selection::new("whole-milk", 30.0).with_brand("greenfields"));
        let report = TableReporter::new()
            .no_color()
            .generate_profile_report(&context_for(&recipe), &ReportConfig::default())
            .unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert!(lines[0].starts_with("Category"));
        assert!(lines.iter().any(|l| l.starts_with("milk") && l.contains("Whole Milk / greenfields")));
        assert!(lines.iter().any(|l| l.starts_with("Total")));
    }
}
