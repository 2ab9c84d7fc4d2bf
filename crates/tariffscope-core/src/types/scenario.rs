//! Scenario types: identifiers, tariff inputs, and derived market impact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scenario identifier.
///
/// Predefined scenarios use fixed slugs (`baseline`, `moderate`,
/// `significant`, `severe`, `trade-war`); custom scenarios use generated
/// `custom-<millis>` ids.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScenarioId(pub String);

impl ScenarioId {
    /// Create a new scenario ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this id uses the generated custom-scenario prefix.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.0.starts_with("custom-")
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ScenarioId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ScenarioId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The two independent tariff inputs driving every projection.
///
/// Both are percentage rates; well-formed scenarios use non-negative
/// values but the projection layer does not reject negatives (validation
/// is the lifecycle's responsibility).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TariffLevels {
    /// Tariff rate applied to China-origin goods (%).
    pub china: f64,
    /// Tariff rate applied to globally-sourced goods (%).
    pub global: f64,
}

impl TariffLevels {
    /// Creates a new tariff level pair.
    #[must_use]
    pub fn new(china: f64, global: f64) -> Self {
        Self { china, global }
    }

    /// Returns true if both rates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.china.is_finite() && self.global.is_finite()
    }
}

/// Derived market-index impacts for a scenario (signed percentages).
///
/// Overwritten whenever the scenario's tariff levels change; never edited
/// directly by callers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketImpact {
    /// Projected ASX 200 move (%); non-positive for non-negative tariffs.
    pub asx200: f64,
    /// Projected USD/AUD move (%); non-negative for non-negative tariffs.
    pub usdaud: f64,
}

impl MarketImpact {
    /// Creates a new market impact pair.
    #[must_use]
    pub fn new(asx200: f64, usdaud: f64) -> Self {
        Self { asx200, usdaud }
    }
}

/// A named combination of tariff rates, a probability, and derived
/// market impact figures.
///
/// Predefined scenarios are seeded once at store construction and never
/// mutated or persisted. Custom scenarios are owned by the store and go
/// through the create/update/delete lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier.
    pub id: ScenarioId,

    /// Display label; non-empty for valid scenarios.
    pub name: String,

    /// Free-text description; may be empty.
    pub description: String,

    /// The two tariff inputs.
    pub tariff_levels: TariffLevels,

    /// Caller-supplied likelihood in [0, 1]. Probabilities are independent
    /// tags and are not normalized across the scenario set.
    pub probability: f64,

    /// Derived market impact, recomputed whenever tariff levels change.
    pub market_impact: MarketImpact,
}

impl Scenario {
    /// Creates a new scenario with zero tariffs and zero impact.
    #[must_use]
    pub fn new(id: impl Into<ScenarioId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            tariff_levels: TariffLevels::default(),
            probability: 0.0,
            market_impact: MarketImpact::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the tariff levels.
    #[must_use]
    pub fn with_tariff_levels(mut self, levels: TariffLevels) -> Self {
        self.tariff_levels = levels;
        self
    }

    /// Sets the probability.
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Sets the derived market impact.
    #[must_use]
    pub fn with_market_impact(mut self, impact: MarketImpact) -> Self {
        self.market_impact = impact;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("custom-1", "Test")
            .with_description("A test scenario")
            .with_tariff_levels(TariffLevels::new(15.0, 5.0))
            .with_probability(0.2)
            .with_market_impact(MarketImpact::new(-3.75, 2.75));

        assert_eq!(scenario.id.as_str(), "custom-1");
        assert_eq!(scenario.name, "Test");
        assert_eq!(scenario.tariff_levels.china, 15.0);
        assert_eq!(scenario.market_impact.usdaud, 2.75);
    }

    #[test]
    fn test_custom_id_prefix() {
        assert!(ScenarioId::from("custom-1714000000000").is_custom());
        assert!(!ScenarioId::from("baseline").is_custom());
    }

    #[test]
    fn test_tariff_levels_finite() {
        assert!(TariffLevels::new(15.0, 5.0).is_finite());
        assert!(!TariffLevels::new(f64::NAN, 5.0).is_finite());
        assert!(!TariffLevels::new(15.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_scenario_serde_roundtrip() {
        let scenario = Scenario::new("custom-2", "Roundtrip")
            .with_tariff_levels(TariffLevels::new(25.0, 10.0))
            .with_probability(0.3);

        let json = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(scenario, back);
    }
}
