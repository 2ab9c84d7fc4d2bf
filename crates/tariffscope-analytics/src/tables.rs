//! Impact table value objects.
//!
//! The sector and instrument tables map each entity to its impact
//! percentage under every scenario id alive in the store. Entries for
//! the predefined scenario ids are fixed sample values; entries for
//! custom ids are produced by the projector and merged in by the store.
//!
//! The tables are plain values with explicit merge operations; no
//! component mutates them as a hidden side effect.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tariffscope_core::types::{instrument_catalog, Instrument, ScenarioId, Sector};

use crate::projection::ScenarioProjection;

/// Fixed sample sector impacts for the predefined scenarios, in
/// (moderate, significant, severe, trade-war) order. Baseline is zero
/// for every sector.
const SECTOR_SEED: &[(Sector, [f64; 4])] = &[
    (Sector::Materials, [-3.2, -6.8, -10.5, -18.2]),
    (Sector::Financials, [-2.1, -4.5, -7.8, -14.3]),
    (Sector::Energy, [-1.8, -4.2, -7.5, -12.8]),
    (Sector::Healthcare, [-0.8, -2.1, -3.5, -6.2]),
    (Sector::ConsumerStaples, [-1.2, -2.8, -4.5, -8.3]),
    (Sector::ConsumerDiscretionary, [-3.5, -7.2, -11.5, -19.8]),
    (Sector::Industrials, [-2.8, -5.9, -9.2, -16.5]),
    (Sector::Technology, [-2.5, -5.2, -8.7, -15.3]),
    (Sector::Utilities, [-0.5, -1.2, -2.3, -4.5]),
    (Sector::RealEstate, [-1.5, -3.2, -5.8, -10.2]),
    (Sector::CommunicationServices, [-1.2, -2.5, -4.2, -7.8]),
];

/// Fixed sample instrument impacts for the predefined scenarios, keyed
/// by symbol, same column order as [`SECTOR_SEED`].
const INSTRUMENT_SEED: &[(&str, [f64; 4])] = &[
    ("BHP.AX", [-4.2, -8.7, -13.5, -22.8]),
    ("RIO.AX", [-4.0, -8.3, -12.8, -21.5]),
    ("FMG.AX", [-5.2, -10.5, -16.2, -27.5]),
    ("CBA.AX", [-2.5, -5.2, -8.5, -15.2]),
    ("NAB.AX", [-2.3, -4.8, -8.0, -14.5]),
    ("WBC.AX", [-2.2, -4.5, -7.8, -14.0]),
    ("ANZ.AX", [-2.8, -5.5, -9.2, -16.5]),
    ("WDS.AX", [-2.0, -4.2, -7.5, -13.2]),
    ("STO.AX", [-1.8, -4.0, -7.2, -12.8]),
    ("CSL.AX", [-1.2, -2.5, -4.2, -7.5]),
    ("RMD.AX", [-1.5, -3.0, -5.0, -8.8]),
    ("WOW.AX", [-0.8, -1.8, -3.2, -5.8]),
    ("COL.AX", [-0.7, -1.5, -2.8, -5.2]),
    ("JBH.AX", [-3.8, -7.8, -12.5, -21.2]),
    ("WES.AX", [-2.5, -5.2, -8.5, -15.0]),
    ("TCL.AX", [-1.0, -2.2, -3.8, -6.8]),
    ("QAN.AX", [-3.0, -6.2, -10.0, -17.5]),
    ("XRO.AX", [-2.0, -4.2, -7.0, -12.5]),
    ("WTC.AX", [-2.8, -5.8, -9.5, -16.8]),
    ("AGL.AX", [-0.5, -1.2, -2.2, -4.0]),
    ("ORG.AX", [-0.6, -1.5, -2.5, -4.5]),
    ("GMG.AX", [-2.2, -4.5, -7.5, -13.2]),
    ("SGP.AX", [-1.2, -2.8, -4.8, -8.5]),
    ("TLS.AX", [-0.8, -1.8, -3.2, -5.8]),
    ("TPG.AX", [-1.5, -3.2, -5.5, -9.8]),
    ("TWE.AX", [-5.5, -11.2, -17.5, -29.8]),
    ("MIN.AX", [-5.0, -10.2, -15.8, -26.5]),
    ("JHX.AX", [-3.8, -7.8, -12.5, -21.5]),
];

const SEED_COLUMNS: [&str; 4] = ["moderate", "significant", "severe", "trade-war"];

fn seed_row(values: &[f64; 4]) -> HashMap<ScenarioId, f64> {
    let mut row: HashMap<ScenarioId, f64> = SEED_COLUMNS
        .iter()
        .zip(values.iter())
        .map(|(id, v)| (ScenarioId::from(*id), *v))
        .collect();
    row.insert(ScenarioId::from("baseline"), 0.0);
    row
}

/// Impact per sector per scenario id (%, negative = adverse).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectorImpactTable {
    entries: HashMap<Sector, HashMap<ScenarioId, f64>>,
}

impl SectorImpactTable {
    /// Creates the table seeded with the fixed predefined-scenario
    /// values for every sector.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            entries: SECTOR_SEED
                .iter()
                .map(|(sector, values)| (*sector, seed_row(values)))
                .collect(),
        }
    }

    /// Looks up the impact for a sector under a scenario.
    #[must_use]
    pub fn get(&self, sector: Sector, id: &ScenarioId) -> Option<f64> {
        self.entries.get(&sector)?.get(id).copied()
    }

    /// Returns the full impact row for a sector.
    #[must_use]
    pub fn impacts_for(&self, sector: Sector) -> Option<&HashMap<ScenarioId, f64>> {
        self.entries.get(&sector)
    }

    /// Merges a scenario's projected sector impacts, overwriting any
    /// prior entries for that id.
    pub fn merge_scenario(&mut self, id: &ScenarioId, impacts: &HashMap<Sector, f64>) {
        for (sector, impact) in impacts {
            self.entries
                .entry(*sector)
                .or_default()
                .insert(id.clone(), *impact);
        }
    }

    /// Returns true if every sector carries an entry for every given
    /// scenario id (the store's completeness invariant).
    #[must_use]
    pub fn covers<'a>(&self, ids: impl IntoIterator<Item = &'a ScenarioId>) -> bool {
        let ids: Vec<&ScenarioId> = ids.into_iter().collect();
        Sector::all().iter().all(|sector| {
            self.entries
                .get(sector)
                .is_some_and(|row| ids.iter().all(|id| row.contains_key(id)))
        })
    }
}

/// Per-instrument impact record: the instrument's reference data plus
/// its impact under each scenario id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentImpacts {
    /// Instrument reference data (name, sector, exposures, sensitivity).
    pub instrument: Instrument,
    /// Impact per scenario id (%, negative = adverse).
    pub impacts: HashMap<ScenarioId, f64>,
}

/// Impact per instrument per scenario id, keyed by symbol.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstrumentImpactTable {
    entries: HashMap<String, InstrumentImpacts>,
}

impl InstrumentImpactTable {
    /// Creates the table seeded with the fixed predefined-scenario
    /// values for every cataloged instrument.
    #[must_use]
    pub fn seeded() -> Self {
        let entries = instrument_catalog()
            .iter()
            .map(|instrument| {
                let values = INSTRUMENT_SEED
                    .iter()
                    .find(|(symbol, _)| *symbol == instrument.symbol)
                    .map(|(_, values)| values)
                    .unwrap_or(&[0.0; 4]);
                (
                    instrument.symbol.clone(),
                    InstrumentImpacts {
                        instrument: instrument.clone(),
                        impacts: seed_row(values),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Looks up the impact for an instrument under a scenario.
    #[must_use]
    pub fn get(&self, symbol: &str, id: &ScenarioId) -> Option<f64> {
        self.entries.get(symbol)?.impacts.get(id).copied()
    }

    /// Returns the full record for an instrument.
    #[must_use]
    pub fn record(&self, symbol: &str) -> Option<&InstrumentImpacts> {
        self.entries.get(symbol)
    }

    /// Iterates all records (symbol-keyed, unordered).
    pub fn records(&self) -> impl Iterator<Item = &InstrumentImpacts> {
        self.entries.values()
    }

    /// Merges a scenario's projected instrument impacts, overwriting any
    /// prior entries for that id. Symbols outside the catalog are
    /// ignored.
    pub fn merge_scenario(&mut self, id: &ScenarioId, impacts: &HashMap<String, f64>) {
        for (symbol, impact) in impacts {
            if let Some(record) = self.entries.get_mut(symbol) {
                record.impacts.insert(id.clone(), *impact);
            }
        }
    }

    /// Returns true if every instrument carries an entry for every given
    /// scenario id.
    #[must_use]
    pub fn covers<'a>(&self, ids: impl IntoIterator<Item = &'a ScenarioId>) -> bool {
        let ids: Vec<&ScenarioId> = ids.into_iter().collect();
        instrument_catalog().iter().all(|instrument| {
            self.entries
                .get(&instrument.symbol)
                .is_some_and(|record| ids.iter().all(|id| record.impacts.contains_key(id)))
        })
    }
}

/// Merges one scenario's full projection into both tables.
pub fn merge_projection(
    sectors: &mut SectorImpactTable,
    instruments: &mut InstrumentImpactTable,
    id: &ScenarioId,
    projection: &ScenarioProjection,
) {
    sectors.merge_scenario(id, &projection.sectors);
    instruments.merge_scenario(id, &projection.instruments);
}
