//! JSON report generator.

use super::{ProfileContext, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{FlavorProfile, Recipe};
use crate::scoring::{peak_sweetness, temperature_curve, CategoryContribution, TastePoint};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Whether to only include the profile
    summary_only: bool,
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            summary_only: false,
            pretty: true,
        }
    }

    /// Create a reporter that leaves out the recipe and breakdown
    #[must_use]
    pub const fn summary_only() -> Self {
        Self {
            summary_only: true,
            pretty: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn entry<'a>(&self, context: &'a ProfileContext<'_>, config: &ReportConfig) -> JsonProfileEntry<'a> {
        let profile = context.breakdown.profile;
        let chart = profile
            .chart_values(config.chart_max)
            .into_iter()
            .map(|(dimension, value)| (dimension.name(), value))
            .collect();
        let unresolved: Vec<&CategoryContribution> = context.breakdown.unresolved().collect();
        let curve = temperature_curve(&profile);

        JsonProfileEntry {
            name: context.recipe.name.as_deref(),
            recipe: (!self.summary_only).then_some(context.recipe),
            profile,
            chart: JsonChart {
                max: config.chart_max,
                values: chart,
            },
            dominant: profile.dominant().map(|d| d.name()),
            temperature: JsonTemperature {
                peak_sweetness: peak_sweetness(&curve),
                curve,
            },
            unresolved,
            breakdown: (!self.summary_only && config.show_breakdown)
                .then_some(context.breakdown.contributions.as_slice()),
        }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    /// Render several recipes into one document with a `profiles` array.
    pub fn generate_batch_report(
        &self,
        contexts: &[ProfileContext<'_>],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonBatchReport {
            metadata: metadata(),
            profiles: contexts.iter().map(|c| self.entry(c, config)).collect(),
        };
        self.render(&report)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_profile_report(
        &self,
        context: &ProfileContext<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonProfileReport {
            metadata: metadata(),
            entry: self.entry(context, config),
        };
        self.render(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

fn metadata() -> JsonReportMetadata {
    JsonReportMetadata {
        tool: ToolInfo {
            name: "coffee-mixer".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: Utc::now().to_rfc3339(),
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonProfileReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    entry: JsonProfileEntry<'a>,
}

#[derive(Serialize)]
struct JsonBatchReport<'a> {
    metadata: JsonReportMetadata,
    profiles: Vec<JsonProfileEntry<'a>>,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonProfileEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recipe: Option<&'a Recipe>,
    profile: FlavorProfile,
    chart: JsonChart,
    dominant: Option<&'static str>,
    temperature: JsonTemperature,
    unresolved: Vec<&'a CategoryContribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a [CategoryContribution]>,
}

#[derive(Serialize)]
struct JsonTemperature {
    peak_sweetness: Option<TastePoint>,
    curve: Vec<TastePoint>,
}

#[derive(Serialize)]
struct JsonChart {
    max: f64,
    values: IndexMap<&'static str, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::Selection;
    use serde_json::Value;

    fn sample() -> Recipe {
        Recipe::new()
            .with("coffeeBeans", Selection::new("arabica", 40.0))
            .with("milk", Selection::new("goat-milk", 30.0))
            .with_name("Strong")
    }

    #[test]
    fn test_json_report_structure() {
        let recipe = sample();
        let context = ProfileContext::new(&recipe, Catalog::builtin());
        let config = ReportConfig::default().with_breakdown(true);
        let output = JsonReporter::new()
            .generate_profile_report(&context, &config)
            .unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["metadata"]["tool"]["name"], "coffee-mixer");
        assert_eq!(json["name"], "Strong");
        assert_eq!(json["profile"]["aroma"], 12.0);
        assert_eq!(json["chart"]["values"]["aroma"], 10.0);
        assert_eq!(json["dominant"], "aroma");
        assert_eq!(json["temperature"]["curve"].as_array().unwrap().len(), 15);
        assert_eq!(json["temperature"]["curve"][0]["temp_c"], 20.0);
        assert_eq!(json["temperature"]["peak_sweetness"], Value::Null);
        assert_eq!(json["unresolved"][0]["category"], "milk");
        assert_eq!(json["unresolved"][0]["resolution"], "unknown_option");
        assert_eq!(json["breakdown"].as_array().unwrap().len(), 8);
        assert_eq!(json["recipe"]["selections"]["coffeeBeans"]["amount"], 40.0);
    }

    #[test]
    fn test_summary_only_and_compact() {
        let recipe = sample();
        let context = ProfileContext::new(&recipe, Catalog::builtin());
        let output = JsonReporter::summary_only()
            .pretty(false)
            .generate_profile_report(&context, &ReportConfig::default().with_breakdown(true))
            .unwrap();
        assert!(!output.contains('\n'));
        let json: Value = serde_json::from_str(&output).unwrap();
        assert!(json.get("recipe").is_none());
        assert!(json.get("breakdown").is_none());
        assert!(json.get("profile").is_some());
    }

    #[test]
    fn test_batch_report() {
        let first = sample();
        let second = Recipe::new();
        let catalog = Catalog::builtin();
        let contexts = vec![
            ProfileContext::new(&first, catalog),
            ProfileContext::new(&second, catalog),
        ];
        let output = JsonReporter::new()
            .generate_batch_report(&contexts, &ReportConfig::default())
            .unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        let profiles = json["profiles"].as_array().unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[1]["dominant"], Value::Null);
        assert_eq!(profiles[1]["temperature"]["curve"][14]["acidity"], 0.0);
    }
}
