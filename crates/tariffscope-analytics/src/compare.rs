//! Scenario comparison and classification helpers.
//!
//! Everything here reads scenarios and tables; nothing mutates. The
//! band types translate raw percentages into the qualitative labels the
//! presentation layer displays.

use serde::{Deserialize, Serialize};
use tariffscope_core::types::{Scenario, ScenarioId, Sector};

use crate::tables::{InstrumentImpactTable, SectorImpactTable};

/// Market-level differences between two scenarios (b relative to a).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketComparison {
    /// ASX 200 impact difference (%).
    pub asx200_delta: f64,
    /// USD/AUD impact difference (%).
    pub usdaud_delta: f64,
    /// Probability difference.
    pub probability_delta: f64,
}

/// Compares the market impacts of two scenarios.
#[must_use]
pub fn compare_market(a: &Scenario, b: &Scenario) -> MarketComparison {
    MarketComparison {
        asx200_delta: b.market_impact.asx200 - a.market_impact.asx200,
        usdaud_delta: b.market_impact.usdaud - a.market_impact.usdaud,
        probability_delta: b.probability - a.probability,
    }
}

/// A sector's impacts under two scenarios and their difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorDelta {
    /// The sector compared.
    pub sector: Sector,
    /// Impact under the first scenario (%).
    pub a: f64,
    /// Impact under the second scenario (%).
    pub b: f64,
    /// `b - a` (%).
    pub delta: f64,
}

/// Compares two scenarios sector by sector, most negative difference
/// first. Sectors missing an entry for either id are skipped.
#[must_use]
pub fn compare_sectors(
    table: &SectorImpactTable,
    a: &ScenarioId,
    b: &ScenarioId,
) -> Vec<SectorDelta> {
    let mut deltas: Vec<SectorDelta> = Sector::all()
        .iter()
        .filter_map(|&sector| {
            let impact_a = table.get(sector, a)?;
            let impact_b = table.get(sector, b)?;
            Some(SectorDelta {
                sector,
                a: impact_a,
                b: impact_b,
                delta: impact_b - impact_a,
            })
        })
        .collect();
    deltas.sort_by(|x, y| x.delta.partial_cmp(&y.delta).unwrap_or(std::cmp::Ordering::Equal));
    deltas
}

/// An instrument's impacts under two scenarios and their difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentDelta {
    /// Exchange symbol.
    pub symbol: String,
    /// Impact under the first scenario (%).
    pub a: f64,
    /// Impact under the second scenario (%).
    pub b: f64,
    /// `b - a` (%).
    pub delta: f64,
}

/// Compares two scenarios instrument by instrument, most negative
/// difference first.
#[must_use]
pub fn compare_instruments(
    table: &InstrumentImpactTable,
    a: &ScenarioId,
    b: &ScenarioId,
) -> Vec<InstrumentDelta> {
    let mut deltas: Vec<InstrumentDelta> = table
        .records()
        .filter_map(|record| {
            let impact_a = record.impacts.get(a)?;
            let impact_b = record.impacts.get(b)?;
            Some(InstrumentDelta {
                symbol: record.instrument.symbol.clone(),
                a: *impact_a,
                b: *impact_b,
                delta: impact_b - impact_a,
            })
        })
        .collect();
    deltas.sort_by(|x, y| x.delta.partial_cmp(&y.delta).unwrap_or(std::cmp::Ordering::Equal));
    deltas
}

/// Ranks sectors by their impact under one scenario, worst (most
/// negative) first.
#[must_use]
pub fn rank_sectors(table: &SectorImpactTable, id: &ScenarioId) -> Vec<(Sector, f64)> {
    let mut ranked: Vec<(Sector, f64)> = Sector::all()
        .iter()
        .filter_map(|&sector| table.get(sector, id).map(|impact| (sector, impact)))
        .collect();
    ranked.sort_by(|x, y| x.1.partial_cmp(&y.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

/// The `n` most negatively impacted sectors under a scenario.
#[must_use]
pub fn worst_sectors(table: &SectorImpactTable, id: &ScenarioId, n: usize) -> Vec<(Sector, f64)> {
    let mut ranked = rank_sectors(table, id);
    ranked.truncate(n);
    ranked
}

/// The `n` least negatively impacted sectors under a scenario, best
/// first.
#[must_use]
pub fn best_sectors(table: &SectorImpactTable, id: &ScenarioId, n: usize) -> Vec<(Sector, f64)> {
    let mut ranked = rank_sectors(table, id);
    ranked.reverse();
    ranked.truncate(n);
    ranked
}

/// Qualitative tariff sensitivity, classified from the magnitude of an
/// entity's trade-war impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensitivityBand {
    /// Trade-war impact magnitude above 15%.
    VeryHigh,
    /// Above 10%.
    High,
    /// Above 5%.
    Medium,
    /// 5% or below.
    Low,
}

impl SensitivityBand {
    /// Classifies from a trade-war impact percentage (sign ignored).
    #[must_use]
    pub fn from_trade_war_impact(impact: f64) -> Self {
        let magnitude = impact.abs();
        if magnitude > 15.0 {
            Self::VeryHigh
        } else if magnitude > 10.0 {
            Self::High
        } else if magnitude > 5.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Qualitative likelihood of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbabilityBand {
    /// Probability at or above 0.5.
    HighlyLikely,
    /// At or above 0.3.
    Moderate,
    /// At or above 0.1.
    Low,
    /// Below 0.1.
    Unlikely,
}

impl ProbabilityBand {
    /// Classifies a probability in [0, 1].
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.5 {
            Self::HighlyLikely
        } else if probability >= 0.3 {
            Self::Moderate
        } else if probability >= 0.1 {
            Self::Low
        } else {
            Self::Unlikely
        }
    }
}

/// Qualitative severity of a market impact figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactSeverity {
    /// Favorable or neutral move.
    Positive,
    /// Mild adverse move.
    Mild,
    /// Moderate adverse move.
    Moderate,
    /// Severe adverse move.
    Severe,
}

impl ImpactSeverity {
    /// Classifies an ASX 200 impact (adverse moves are negative).
    #[must_use]
    pub fn for_asx200(impact: f64) -> Self {
        if impact >= 0.0 {
            Self::Positive
        } else if impact > -5.0 {
            Self::Mild
        } else if impact > -10.0 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }

    /// Classifies a USD/AUD impact (adverse moves for the AUD are
    /// positive).
    #[must_use]
    pub fn for_usdaud(impact: f64) -> Self {
        if impact <= 0.0 {
            Self::Positive
        } else if impact < 5.0 {
            Self::Mild
        } else if impact < 10.0 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }
}

/// Generates narrative implication lines for a scenario: index and
/// currency outlook, the three worst and best sectors, and a
/// positioning note keyed on probability.
#[must_use]
pub fn scenario_implications(scenario: &Scenario, table: &SectorImpactTable) -> Vec<String> {
    let mut implications = Vec::new();

    implications.push(match ImpactSeverity::for_asx200(scenario.market_impact.asx200) {
        ImpactSeverity::Positive => {
            "The ASX 200 is expected to remain stable or show slight gains.".to_string()
        }
        ImpactSeverity::Mild => "The ASX 200 is expected to experience mild losses.".to_string(),
        ImpactSeverity::Moderate => {
            "The ASX 200 is expected to experience moderate losses.".to_string()
        }
        ImpactSeverity::Severe => {
            "The ASX 200 is expected to experience significant losses.".to_string()
        }
    });

    implications.push(match ImpactSeverity::for_usdaud(scenario.market_impact.usdaud) {
        ImpactSeverity::Positive => {
            "The Australian Dollar is expected to remain stable or strengthen against the US Dollar."
                .to_string()
        }
        ImpactSeverity::Mild => {
            "The Australian Dollar is expected to weaken slightly against the US Dollar.".to_string()
        }
        ImpactSeverity::Moderate => {
            "The Australian Dollar is expected to weaken moderately against the US Dollar."
                .to_string()
        }
        ImpactSeverity::Severe => {
            "The Australian Dollar is expected to weaken significantly against the US Dollar."
                .to_string()
        }
    });

    let worst = worst_sectors(table, &scenario.id, 3);
    if !worst.is_empty() {
        let names: Vec<&str> = worst.iter().map(|(sector, _)| sector.name()).collect();
        implications.push(format!(
            "The most negatively impacted sectors are expected to be {}.",
            names.join(", ")
        ));
    }

    let best = best_sectors(table, &scenario.id, 3);
    if !best.is_empty() {
        let names: Vec<&str> = best.iter().map(|(sector, _)| sector.name()).collect();
        implications.push(format!(
            "The least negatively impacted sectors are expected to be {}.",
            names.join(", ")
        ));
    }

    implications.push(if scenario.probability >= 0.3 {
        "Given the higher probability of this scenario, consider positioning your portfolio accordingly."
            .to_string()
    } else {
        "Given the lower probability of this scenario, consider hedging strategies rather than full portfolio repositioning."
            .to_string()
    });

    implications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::predefined;
    use approx::assert_relative_eq;

    #[test]
    fn test_compare_market() {
        let comparison = compare_market(&predefined::moderate(), &predefined::significant());

        // significant (-5.2, 3.5, p 0.30) vs moderate (-2.5, 1.8, p 0.35)
        assert_relative_eq!(comparison.asx200_delta, -2.7);
        assert_relative_eq!(comparison.usdaud_delta, 1.7);
        assert_relative_eq!(comparison.probability_delta, -0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_compare_sectors_sorted_and_complete() {
        let table = SectorImpactTable::seeded();
        let deltas = compare_sectors(
            &table,
            &ScenarioId::from("baseline"),
            &ScenarioId::from("trade-war"),
        );

        assert_eq!(deltas.len(), Sector::all().len());
        for pair in deltas.windows(2) {
            assert!(pair[0].delta <= pair[1].delta);
        }
        // Consumer Discretionary takes the hardest trade-war hit.
        assert_eq!(deltas[0].sector, Sector::ConsumerDiscretionary);
    }

    #[test]
    fn test_compare_instruments_worst_first() {
        let table = InstrumentImpactTable::seeded();
        let deltas = compare_instruments(
            &table,
            &ScenarioId::from("baseline"),
            &ScenarioId::from("trade-war"),
        );

        assert_eq!(deltas.len(), 28);
        assert_eq!(deltas[0].symbol, "TWE.AX");
        assert_relative_eq!(deltas[0].delta, -29.8);
    }

    #[test]
    fn test_worst_and_best_sectors() {
        let table = SectorImpactTable::seeded();
        let id = ScenarioId::from("severe");

        let worst = worst_sectors(&table, &id, 3);
        let best = best_sectors(&table, &id, 3);

        assert_eq!(worst.len(), 3);
        assert_eq!(worst[0].0, Sector::ConsumerDiscretionary);
        assert_eq!(best[0].0, Sector::Utilities);
        assert!(worst[0].1 <= best[0].1);
    }

    #[test]
    fn test_sensitivity_band_boundaries() {
        assert_eq!(SensitivityBand::from_trade_war_impact(-18.2), SensitivityBand::VeryHigh);
        assert_eq!(SensitivityBand::from_trade_war_impact(-12.0), SensitivityBand::High);
        assert_eq!(SensitivityBand::from_trade_war_impact(-7.8), SensitivityBand::Medium);
        assert_eq!(SensitivityBand::from_trade_war_impact(-4.5), SensitivityBand::Low);
        assert_eq!(SensitivityBand::from_trade_war_impact(5.0), SensitivityBand::Low);
    }

    #[test]
    fn test_probability_band_boundaries() {
        assert_eq!(ProbabilityBand::from_probability(0.5), ProbabilityBand::HighlyLikely);
        assert_eq!(ProbabilityBand::from_probability(0.35), ProbabilityBand::Moderate);
        assert_eq!(ProbabilityBand::from_probability(0.15), ProbabilityBand::Low);
        assert_eq!(ProbabilityBand::from_probability(0.05), ProbabilityBand::Unlikely);
    }

    #[test]
    fn test_impact_severity() {
        assert_eq!(ImpactSeverity::for_asx200(0.0), ImpactSeverity::Positive);
        assert_eq!(ImpactSeverity::for_asx200(-2.5), ImpactSeverity::Mild);
        assert_eq!(ImpactSeverity::for_asx200(-8.7), ImpactSeverity::Moderate);
        assert_eq!(ImpactSeverity::for_asx200(-15.3), ImpactSeverity::Severe);

        assert_eq!(ImpactSeverity::for_usdaud(0.0), ImpactSeverity::Positive);
        assert_eq!(ImpactSeverity::for_usdaud(3.5), ImpactSeverity::Mild);
        assert_eq!(ImpactSeverity::for_usdaud(8.7), ImpactSeverity::Moderate);
        assert_eq!(ImpactSeverity::for_usdaud(12.0), ImpactSeverity::Severe);
    }

    #[test]
    fn test_scenario_implications() {
        let table = SectorImpactTable::seeded();
        let implications = scenario_implications(&predefined::trade_war(), &table);

        assert_eq!(implications.len(), 5);
        assert!(implications[0].contains("significant losses"));
        assert!(implications[2].contains("Consumer Discretionary"));
        assert!(implications[4].contains("hedging"));
    }
}
