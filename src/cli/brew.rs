//! Brew math command handler.

use crate::brew_math::BrewReport;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::Result;

fn render_text(report: &BrewReport) -> String {
    let mut lines = vec![
        format!("Dose:        {:.1} g", report.dose_g),
        format!("Yield:       {:.1} g", report.yield_g),
        format!("Brew ratio:  {}", report.ratio_display()),
    ];
    if let Some(tds) = report.tds_pct {
        lines.push(format!("TDS:         {tds:.2}%"));
    }
    match (report.extraction_yield, report.verdict) {
        (Some(ey), Some(verdict)) => {
            lines.push(format!("Extraction:  {ey:.2}%"));
            lines.push(format!("Verdict:     {verdict}"));
            lines.push(format!("             {}", verdict.advice()));
        }
        _ if report.tds_pct.is_some() => lines.push("Extraction:  N/A".to_string()),
        _ => {}
    }
    lines.join("\n")
}

/// Compute brew ratio and, with a TDS reading, extraction yield.
///
/// Returns the validation exit code when the inputs give no ratio.
pub fn run_brew_math(
    dose_g: f64,
    yield_g: f64,
    tds_pct: Option<f64>,
    config: &AppConfig,
) -> Result<i32> {
    let report = BrewReport::compute(dose_g, yield_g, tds_pct);

    let content = if config.output.format == ReportFormat::Json {
        serde_json::to_string_pretty(&report)?
    } else {
        render_text(&report)
    };
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&content, &target, config.behavior.quiet)?;

    if report.ratio.is_none() {
        tracing::warn!("Dose and yield must both be positive");
        return Ok(exit_codes::VALIDATION_FAILED);
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let text = render_text(&BrewReport::compute(18.0, 36.0, Some(10.0)));
        assert!(text.contains("Brew ratio:  1 : 2.00"));
        assert!(text.contains("Extraction:  20.00%"));
        assert!(text.contains("Verdict:     Ideal Extraction"));

        let text = render_text(&BrewReport::compute(18.0, 36.0, None));
        assert!(!text.contains("Extraction"));
    }

    #[test]
    fn test_run_brew_math_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(dir.path().join("brew.json")))
            .build();
        assert_eq!(
            run_brew_math(18.0, 40.0, Some(9.0), &config).unwrap(),
            exit_codes::SUCCESS
        );
        assert_eq!(
            run_brew_math(0.0, 40.0, None, &config).unwrap(),
            exit_codes::VALIDATION_FAILED
        );
    }
}
