//! Flavor dimensions, sparse score maps and the seven-dimensional profile.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Upper bound used when clamping profile values for charting.
pub const DEFAULT_CHART_MAX: f64 = 10.0;

/// One of the seven named flavor dimensions.
///
/// The declaration order is the canonical order used for iteration,
/// serialization of profiles and tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlavorDimension {
    Sweetness,
    Bitterness,
    Acidity,
    Body,
    Aroma,
    Aftertaste,
    Caffeine,
}

impl FlavorDimension {
    /// All dimensions in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Sweetness,
        Self::Bitterness,
        Self::Acidity,
        Self::Body,
        Self::Aroma,
        Self::Aftertaste,
        Self::Caffeine,
    ];

    /// Machine name, as used in catalog files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sweetness => "sweetness",
            Self::Bitterness => "bitterness",
            Self::Acidity => "acidity",
            Self::Body => "body",
            Self::Aroma => "aroma",
            Self::Aftertaste => "aftertaste",
            Self::Caffeine => "caffeine",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sweetness => "Sweetness",
            Self::Bitterness => "Bitterness",
            Self::Acidity => "Acidity",
            Self::Body => "Body",
            Self::Aroma => "Aroma",
            Self::Aftertaste => "Aftertaste",
            Self::Caffeine => "Caffeine",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FlavorDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FlavorDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == lower)
            .ok_or_else(|| {
                format!(
                    "Unknown flavor dimension '{s}'. Valid options: {}",
                    Self::ALL.map(|d| d.name()).join(", ")
                )
            })
    }
}

/// Sparse per-dimension weights.
///
/// Only the dimensions an ingredient affects are present; an absent
/// dimension reads as zero. Unknown keys are rejected on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap(BTreeMap<FlavorDimension, f64>);

impl ScoreMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declared weight for a dimension, zero when absent.
    #[must_use]
    pub fn get(&self, dimension: FlavorDimension) -> f64 {
        self.0.get(&dimension).copied().unwrap_or(0.0)
    }

    /// Whether the dimension is declared (even if declared as zero).
    #[must_use]
    pub fn declares(&self, dimension: FlavorDimension) -> bool {
        self.0.contains_key(&dimension)
    }

    pub fn insert(&mut self, dimension: FlavorDimension, weight: f64) {
        self.0.insert(dimension, weight);
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, dimension: FlavorDimension, weight: f64) -> Self {
        self.insert(dimension, weight);
        self
    }

    /// Declared entries in canonical dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (FlavorDimension, f64)> + '_ {
        self.0.iter().map(|(d, w)| (*d, *w))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Every declared weight multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|(d, w)| (*d, w * factor)).collect())
    }
}

impl FromIterator<(FlavorDimension, f64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (FlavorDimension, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The seven-dimensional flavor vector produced by the aggregator.
///
/// Values produced by scoring are floored at zero but not bounded above.
/// Use [`FlavorProfile::chart_values`] for a display-range view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlavorProfile {
    pub sweetness: f64,
    pub bitterness: f64,
    pub acidity: f64,
    pub body: f64,
    pub aroma: f64,
    pub aftertaste: f64,
    pub caffeine: f64,
}

impl FlavorProfile {
    /// A profile with all seven fields at zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            sweetness: 0.0,
            bitterness: 0.0,
            acidity: 0.0,
            body: 0.0,
            aroma: 0.0,
            aftertaste: 0.0,
            caffeine: 0.0,
        }
    }

    /// Build a profile from values in canonical dimension order.
    #[must_use]
    pub const fn from_array(values: [f64; 7]) -> Self {
        Self {
            sweetness: values[0],
            bitterness: values[1],
            acidity: values[2],
            body: values[3],
            aroma: values[4],
            aftertaste: values[5],
            caffeine: values[6],
        }
    }

    /// Values in canonical dimension order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 7] {
        [
            self.sweetness,
            self.bitterness,
            self.acidity,
            self.body,
            self.aroma,
            self.aftertaste,
            self.caffeine,
        ]
    }

    #[must_use]
    pub const fn get(&self, dimension: FlavorDimension) -> f64 {
        self.to_array()[dimension.index()]
    }

    pub fn set(&mut self, dimension: FlavorDimension, value: f64) {
        let field = match dimension {
            FlavorDimension::Sweetness => &mut self.sweetness,
            FlavorDimension::Bitterness => &mut self.bitterness,
            FlavorDimension::Acidity => &mut self.acidity,
            FlavorDimension::Body => &mut self.body,
            FlavorDimension::Aroma => &mut self.aroma,
            FlavorDimension::Aftertaste => &mut self.aftertaste,
            FlavorDimension::Caffeine => &mut self.caffeine,
        };
        *field = value;
    }

    /// `(dimension, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FlavorDimension, f64)> {
        let values = self.to_array();
        FlavorDimension::ALL
            .into_iter()
            .map(move |d| (d, values[d.index()]))
    }

    /// Display view: every value clamped into `[0, max]`.
    #[must_use]
    pub fn chart_values(&self, max: f64) -> [(FlavorDimension, f64); 7] {
        let upper = if max.is_finite() && max > 0.0 {
            max
        } else {
            DEFAULT_CHART_MAX
        };
        let values = self.to_array();
        FlavorDimension::ALL.map(|d| (d, values[d.index()].clamp(0.0, upper)))
    }

    /// The strongest dimension. Ties resolve to canonical order; an
    /// all-zero profile has no dominant dimension.
    #[must_use]
    pub fn dominant(&self) -> Option<FlavorDimension> {
        let mut best: Option<(FlavorDimension, f64)> = None;
        for (dimension, value) in self.iter() {
            if value <= 0.0 {
                continue;
            }
            match best {
                Some((_, top)) if value <= top => {}
                _ => best = Some((dimension, value)),
            }
        }
        best.map(|(d, _)| d)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, v)| v == 0.0)
    }

    /// Sum over all seven dimensions.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.to_array().iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_parse() {
        assert_eq!(
            "Sweetness".parse::<FlavorDimension>(),
            Ok(FlavorDimension::Sweetness)
        );
        assert_eq!(" body ".parse::<FlavorDimension>(), Ok(FlavorDimension::Body));
        assert!("umami".parse::<FlavorDimension>().is_err());
    }

    #[test]
    fn test_score_map_absent_is_zero() {
        let scores = ScoreMap::new().with(FlavorDimension::Acidity, 2.0);
        assert_eq!(scores.get(FlavorDimension::Acidity), 2.0);
        assert_eq!(scores.get(FlavorDimension::Caffeine), 0.0);
        assert!(!scores.declares(FlavorDimension::Caffeine));
    }

    #[test]
    fn test_score_map_rejects_unknown_dimension() {
        let parsed: Result<ScoreMap, _> = serde_json::from_str(r#"{"umami": 1}"#);
        assert!(parsed.is_err());

        let parsed: ScoreMap = serde_json::from_str(r#"{"aroma": -1, "body": 0.5}"#).unwrap();
        assert_eq!(parsed.get(FlavorDimension::Aroma), -1.0);
        assert_eq!(parsed.get(FlavorDimension::Body), 0.5);
    }

    #[test]
    fn test_profile_get_set_roundtrip_every_dimension() {
        let mut profile = FlavorProfile::zero();
        for (i, dimension) in FlavorDimension::ALL.into_iter().enumerate() {
            profile.set(dimension, i as f64 + 1.0);
        }
        assert_eq!(profile.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(profile.get(FlavorDimension::Aroma), 5.0);
    }

    #[test]
    fn test_chart_values_clamp() {
        let profile = FlavorProfile {
            body: 14.0,
            aroma: 3.5,
            ..FlavorProfile::zero()
        };
        let chart = profile.chart_values(DEFAULT_CHART_MAX);
        assert_eq!(chart[3], (FlavorDimension::Body, 10.0));
        assert_eq!(chart[4], (FlavorDimension::Aroma, 3.5));
        // The underlying value is untouched
        assert_eq!(profile.body, 14.0);
    }

    #[test]
    fn test_dominant() {
        assert_eq!(FlavorProfile::zero().dominant(), None);

        let profile = FlavorProfile {
            acidity: 4.0,
            aroma: 4.0,
            body: 1.0,
            ..FlavorProfile::zero()
        };
        assert_eq!(profile.dominant(), Some(FlavorDimension::Acidity));
    }

    #[test]
    fn test_profile_serializes_all_fields() {
        let json = serde_json::to_value(FlavorProfile::zero()).unwrap();
        for dimension in FlavorDimension::ALL {
            assert_eq!(json[dimension.name()], 0.0);
        }
    }
}
