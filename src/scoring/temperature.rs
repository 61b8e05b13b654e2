//! Taste perception as a drink cools.
//!
//! A simple model over the finished profile: sweetness reads strongest
//! around 42°C, bitterness fades as the cup cools and acidity dips
//! slightly between hot and cold. Only those three dimensions move.

use crate::model::FlavorProfile;
use serde::Serialize;

/// Serving temperature with no cooling effect (°C).
pub const HOT_C: f64 = 90.0;
/// Temperature at which cooling effects are complete (°C).
pub const COOL_C: f64 = 20.0;
/// Spacing of [`temperature_curve`] samples (°C).
pub const CURVE_STEP_C: u32 = 5;

/// Temperature where sweetness perception peaks (°C).
const SWEETNESS_PEAK_C: f64 = 42.0;

/// Perceived sweetness, bitterness and acidity at one temperature.
///
/// Values are rounded to one decimal and floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TastePoint {
    pub temp_c: f64,
    pub sweetness: f64,
    pub bitterness: f64,
    pub acidity: f64,
}

fn round_tenth(value: f64) -> f64 {
    ((value * 10.0).round() / 10.0).max(0.0)
}

/// Perceived taste of `profile` at `temp_c` degrees Celsius.
#[must_use]
pub fn taste_at_temperature(profile: &FlavorProfile, temp_c: f64) -> TastePoint {
    // 0 at 90°C, 1 at 20°C and below
    let cool = ((HOT_C - temp_c) / (HOT_C - COOL_C)).clamp(0.0, 1.0);

    let sweet_factor = 1.0 - (temp_c - SWEETNESS_PEAK_C).abs() / 50.0;
    let acid_factor = (1.0 - cool) * 1.2 + cool * 1.1;
    let bitter_factor = 1.0 - cool * 0.6;

    TastePoint {
        temp_c,
        sweetness: round_tenth(profile.sweetness * (1.0 + sweet_factor * 0.5)),
        bitterness: round_tenth(profile.bitterness * bitter_factor),
        acidity: round_tenth(profile.acidity * acid_factor),
    }
}

/// Samples from 20°C to 90°C every 5°C, coolest first.
#[must_use]
pub fn temperature_curve(profile: &FlavorProfile) -> Vec<TastePoint> {
    (COOL_C as u32..=HOT_C as u32)
        .step_by(CURVE_STEP_C as usize)
        .map(|t| taste_at_temperature(profile, f64::from(t)))
        .collect()
}

/// The sample with the highest perceived sweetness.
///
/// Ties go to the cooler sample. `None` when no sample is sweet at all.
#[must_use]
pub fn peak_sweetness(curve: &[TastePoint]) -> Option<TastePoint> {
    curve
        .iter()
        .filter(|p| p.sweetness > 0.0)
        .fold(None, |best: Option<&TastePoint>, point| match best {
            Some(top) if point.sweetness <= top.sweetness => Some(top),
            _ => Some(point),
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even_profile() -> FlavorProfile {
        FlavorProfile {
            sweetness: 10.0,
            bitterness: 10.0,
            acidity: 10.0,
            body: 7.0,
            ..FlavorProfile::zero()
        }
    }

    #[test]
    fn test_cold_cup() {
        let point = taste_at_temperature(&even_profile(), 20.0);
        assert_eq!(point.sweetness, 12.8);
        assert_eq!(point.bitterness, 4.0);
        assert_eq!(point.acidity, 11.0);
    }

    #[test]
    fn test_sweet_spot() {
        let point = taste_at_temperature(&even_profile(), 42.0);
        assert_eq!(point.sweetness, 15.0);
        assert_eq!(point.bitterness, 5.9);
        assert_eq!(point.acidity, 11.3);
    }

    #[test]
    fn test_hot_cup() {
        let point = taste_at_temperature(&even_profile(), 90.0);
        assert_eq!(point.sweetness, 10.2);
        assert_eq!(point.bitterness, 10.0);
        assert_eq!(point.acidity, 12.0);
    }

    #[test]
    fn test_cool_factor_saturates_below_range() {
        let below = taste_at_temperature(&even_profile(), 5.0);
        assert_eq!(below.bitterness, 4.0);
        assert_eq!(below.acidity, 11.0);
    }

    #[test]
    fn test_curve_and_peak() {
        let curve = temperature_curve(&even_profile());
        assert_eq!(curve.len(), 15);
        assert_eq!(curve.first().map(|p| p.temp_c), Some(20.0));
        assert_eq!(curve.last().map(|p| p.temp_c), Some(90.0));

        let peak = peak_sweetness(&curve).unwrap();
        assert_eq!(peak.temp_c, 40.0);
        assert_eq!(peak.sweetness, 14.8);
    }

    #[test]
    fn test_zero_profile() {
        let curve = temperature_curve(&FlavorProfile::zero());
        assert!(curve
            .iter()
            .all(|p| p.sweetness == 0.0 && p.bitterness == 0.0 && p.acidity == 0.0));
        assert_eq!(peak_sweetness(&curve), None);
    }
}
