//! Barista math: brew ratio and extraction yield.
//!
//! Inputs are grams for dose and beverage yield, and percent for total
//! dissolved solids. Non-positive inputs yield `None`.

use serde::Serialize;
use std::fmt;

/// Extraction yield below this is under-extracted (percent).
pub const IDEAL_EXTRACTION_MIN: f64 = 18.0;
/// Extraction yield above this is over-extracted (percent).
pub const IDEAL_EXTRACTION_MAX: f64 = 22.0;

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Beverage yield per gram of dose, the `N` in `1 : N`.
#[must_use]
pub fn brew_ratio(dose_g: f64, yield_g: f64) -> Option<f64> {
    (positive(dose_g) && positive(yield_g)).then(|| yield_g / dose_g)
}

/// Extraction yield in percent: `yield * tds / dose`.
#[must_use]
pub fn extraction_yield(dose_g: f64, yield_g: f64, tds_pct: f64) -> Option<f64> {
    (positive(dose_g) && positive(yield_g) && positive(tds_pct)).then(|| yield_g * tds_pct / dose_g)
}

/// Where an extraction yield falls relative to the ideal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionVerdict {
    UnderExtracted,
    Ideal,
    OverExtracted,
}

impl ExtractionVerdict {
    #[must_use]
    pub fn classify(extraction_yield_pct: f64) -> Self {
        if extraction_yield_pct < IDEAL_EXTRACTION_MIN {
            Self::UnderExtracted
        } else if extraction_yield_pct > IDEAL_EXTRACTION_MAX {
            Self::OverExtracted
        } else {
            Self::Ideal
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::UnderExtracted => "Under-extracted",
            Self::Ideal => "Ideal Extraction",
            Self::OverExtracted => "Over-extracted",
        }
    }

    /// Tasting note and adjustment hint.
    #[must_use]
    pub const fn advice(&self) -> &'static str {
        match self {
            Self::UnderExtracted => {
                "Tends to taste sour and thin. Grind finer, brew longer or use hotter water."
            }
            Self::Ideal => "Within the 18-22% window for a balanced, sweet cup.",
            Self::OverExtracted => {
                "Tends to taste bitter and hollow. Grind coarser, brew shorter or use cooler water."
            }
        }
    }
}

impl fmt::Display for ExtractionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// All barista math for one shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrewReport {
    pub dose_g: f64,
    pub yield_g: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tds_pct: Option<f64>,
    pub ratio: Option<f64>,
    pub extraction_yield: Option<f64>,
    pub verdict: Option<ExtractionVerdict>,
}

impl BrewReport {
    #[must_use]
    pub fn compute(dose_g: f64, yield_g: f64, tds_pct: Option<f64>) -> Self {
        let extraction = tds_pct.and_then(|tds| extraction_yield(dose_g, yield_g, tds));
        Self {
            dose_g,
            yield_g,
            tds_pct,
            ratio: brew_ratio(dose_g, yield_g),
            extraction_yield: extraction,
            verdict: extraction.map(ExtractionVerdict::classify),
        }
    }

    /// Ratio formatted as `1 : N.NN`, or `N/A`.
    #[must_use]
    pub fn ratio_display(&self) -> String {
        self.ratio
            .map_or_else(|| "N/A".to_string(), |r| format!("1 : {r:.2}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brew_ratio() {
        assert_eq!(brew_ratio(18.0, 36.0), Some(2.0));
        assert_eq!(brew_ratio(0.0, 36.0), None);
        assert_eq!(brew_ratio(18.0, -1.0), None);
    }

    #[test]
    fn test_extraction_yield() {
        assert_eq!(extraction_yield(18.0, 36.0, 10.0), Some(20.0));
        assert_eq!(extraction_yield(18.0, 36.0, 0.0), None);
        assert_eq!(extraction_yield(f64::NAN, 36.0, 10.0), None);
    }

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(ExtractionVerdict::classify(17.99), ExtractionVerdict::UnderExtracted);
        assert_eq!(ExtractionVerdict::classify(18.0), ExtractionVerdict::Ideal);
        assert_eq!(ExtractionVerdict::classify(22.0), ExtractionVerdict::Ideal);
        assert_eq!(ExtractionVerdict::classify(22.01), ExtractionVerdict::OverExtracted);
    }

    #[test]
    fn test_brew_report() {
        let report = BrewReport::compute(18.0, 36.0, Some(12.0));
        assert_eq!(report.ratio_display(), "1 : 2.00");
        assert_eq!(report.extraction_yield, Some(24.0));
        assert_eq!(report.verdict, Some(ExtractionVerdict::OverExtracted));

        let report = BrewReport::compute(18.0, 0.0, None);
        assert_eq!(report.ratio_display(), "N/A");
        assert_eq!(report.verdict, None);
    }
}
