//! Predefined tariff scenario catalog.
//!
//! The five predefined scenarios span current tariff levels through a
//! full trade war. They are seeded fresh at store construction, never
//! persisted, and never mutated by lifecycle operations. Their market
//! impact figures are fixed calibrated values, not re-derived from the
//! projection formula.

use tariffscope_core::types::{MarketImpact, Scenario, TariffLevels};

/// Standard predefined scenarios.
pub mod predefined {
    use super::*;

    /// Current tariff levels with no changes.
    #[must_use]
    pub fn baseline() -> Scenario {
        Scenario::new("baseline", "Baseline (Current Tariffs)")
            .with_description("Current tariff levels with no changes")
            .with_tariff_levels(TariffLevels::new(7.5, 2.5))
            .with_probability(0.15)
            .with_market_impact(MarketImpact::new(0.0, 0.0))
    }

    /// Moderate increase in tariffs on Chinese goods.
    #[must_use]
    pub fn moderate() -> Scenario {
        Scenario::new("moderate", "Moderate Tariff Increase")
            .with_description("Moderate increase in tariffs on Chinese goods")
            .with_tariff_levels(TariffLevels::new(15.0, 5.0))
            .with_probability(0.35)
            .with_market_impact(MarketImpact::new(-2.5, 1.8))
    }

    /// Significant increase on Chinese goods with moderate global tariffs.
    #[must_use]
    pub fn significant() -> Scenario {
        Scenario::new("significant", "Significant Tariff Increase")
            .with_description(
                "Significant increase in tariffs on Chinese goods and moderate global tariffs",
            )
            .with_tariff_levels(TariffLevels::new(25.0, 10.0))
            .with_probability(0.30)
            .with_market_impact(MarketImpact::new(-5.2, 3.5))
    }

    /// Severe increase on Chinese goods with significant global tariffs.
    #[must_use]
    pub fn severe() -> Scenario {
        Scenario::new("severe", "Severe Tariff Increase")
            .with_description(
                "Severe increase in tariffs on Chinese goods and significant global tariffs",
            )
            .with_tariff_levels(TariffLevels::new(35.0, 15.0))
            .with_probability(0.15)
            .with_market_impact(MarketImpact::new(-8.7, 5.2))
    }

    /// Maximum tariffs on Chinese goods and high global tariffs.
    #[must_use]
    pub fn trade_war() -> Scenario {
        Scenario::new("trade-war", "Full Trade War")
            .with_description("Maximum tariffs on Chinese goods and high global tariffs")
            .with_tariff_levels(TariffLevels::new(50.0, 25.0))
            .with_probability(0.05)
            .with_market_impact(MarketImpact::new(-15.3, 8.7))
    }

    /// Returns all predefined scenarios in escalation order.
    #[must_use]
    pub fn all() -> Vec<Scenario> {
        vec![baseline(), moderate(), significant(), severe(), trade_war()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_catalog() {
        let scenarios = predefined::all();
        assert_eq!(scenarios.len(), 5);

        let ids: Vec<&str> = scenarios.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["baseline", "moderate", "significant", "severe", "trade-war"]
        );
    }

    #[test]
    fn test_escalation_order() {
        let scenarios = predefined::all();
        for pair in scenarios.windows(2) {
            assert!(pair[0].tariff_levels.china < pair[1].tariff_levels.china);
            assert!(pair[0].market_impact.asx200 >= pair[1].market_impact.asx200);
        }
    }

    #[test]
    fn test_baseline_is_neutral() {
        let baseline = predefined::baseline();
        assert_eq!(baseline.market_impact, MarketImpact::new(0.0, 0.0));
    }

    #[test]
    fn test_no_predefined_id_is_custom() {
        for scenario in predefined::all() {
            assert!(!scenario.id.is_custom());
        }
    }
}
