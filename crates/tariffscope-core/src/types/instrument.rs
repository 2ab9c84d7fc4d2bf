//! Instrument reference data for the covered ASX universe.
//!
//! The catalog is fixed sample data: 28 large-cap ASX instruments with
//! qualitative China/US exposure ratings and a tariff sensitivity
//! coefficient on a 0–10 scale (distinct from the 0.3–1.3 sector scale).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::sector::Sector;

/// Qualitative exposure rating for an instrument's revenue dependence on
/// a trading partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExposureLevel {
    /// Little to no direct exposure.
    Low,
    /// Moderate exposure.
    Medium,
    /// Elevated exposure.
    MediumHigh,
    /// Significant exposure.
    High,
    /// Dominant share of revenue exposed.
    VeryHigh,
}

impl ExposureLevel {
    /// Returns a human-readable label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for ExposureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Reference data for a covered instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Exchange symbol (e.g. `BHP.AX`).
    pub symbol: String,
    /// Company display name.
    pub name: String,
    /// GICS sector.
    pub sector: Sector,
    /// Revenue exposure to China.
    pub china_exposure: ExposureLevel,
    /// Revenue exposure to the United States.
    pub us_exposure: ExposureLevel,
    /// Tariff sensitivity coefficient (0–10 scale).
    pub tariff_sensitivity: f64,
}

impl Instrument {
    /// Creates a new instrument record.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        sector: Sector,
        china_exposure: ExposureLevel,
        us_exposure: ExposureLevel,
        tariff_sensitivity: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            sector,
            china_exposure,
            us_exposure,
            tariff_sensitivity,
        }
    }
}

static CATALOG: Lazy<Vec<Instrument>> = Lazy::new(|| {
    use ExposureLevel::{High, Low, Medium, MediumHigh, VeryHigh};
    use Sector::*;

    vec![
        Instrument::new("BHP.AX", "BHP Group", Materials, High, Medium, 8.5),
        Instrument::new("RIO.AX", "Rio Tinto", Materials, High, Medium, 8.2),
        Instrument::new("FMG.AX", "Fortescue Metals", Materials, VeryHigh, Low, 9.2),
        Instrument::new("CBA.AX", "Commonwealth Bank", Financials, Medium, Low, 5.5),
        Instrument::new("NAB.AX", "National Australia Bank", Financials, Medium, Low, 5.2),
        Instrument::new("WBC.AX", "Westpac Banking", Financials, Medium, Low, 5.0),
        Instrument::new("ANZ.AX", "ANZ Banking", Financials, MediumHigh, Low, 5.8),
        Instrument::new("WDS.AX", "Woodside Energy", Energy, Medium, Low, 4.8),
        Instrument::new("STO.AX", "Santos", Energy, Medium, Low, 4.5),
        Instrument::new("CSL.AX", "CSL Limited", Healthcare, Low, High, 3.2),
        Instrument::new("RMD.AX", "ResMed", Healthcare, Low, High, 3.5),
        Instrument::new("WOW.AX", "Woolworths Group", ConsumerStaples, Low, Low, 2.5),
        Instrument::new("COL.AX", "Coles Group", ConsumerStaples, Low, Low, 2.2),
        Instrument::new("JBH.AX", "JB Hi-Fi", ConsumerDiscretionary, High, Medium, 7.5),
        Instrument::new("WES.AX", "Wesfarmers", ConsumerDiscretionary, Medium, Low, 5.2),
        Instrument::new("TCL.AX", "Transurban Group", Industrials, Low, Low, 2.8),
        Instrument::new("QAN.AX", "Qantas Airways", Industrials, Medium, Medium, 6.2),
        Instrument::new("XRO.AX", "Xero", Technology, Low, Medium, 4.5),
        Instrument::new("WTC.AX", "WiseTech Global", Technology, Medium, Medium, 5.8),
        Instrument::new("AGL.AX", "AGL Energy", Utilities, Low, Low, 2.0),
        Instrument::new("ORG.AX", "Origin Energy", Utilities, Low, Low, 2.2),
        Instrument::new("GMG.AX", "Goodman Group", RealEstate, Medium, Medium, 4.8),
        Instrument::new("SGP.AX", "Stockland", RealEstate, Low, Low, 3.2),
        Instrument::new("TLS.AX", "Telstra", CommunicationServices, Low, Low, 2.5),
        Instrument::new("TPG.AX", "TPG Telecom", CommunicationServices, Medium, Low, 3.8),
        Instrument::new("TWE.AX", "Treasury Wine Estates", ConsumerStaples, VeryHigh, Medium, 9.5),
        Instrument::new("MIN.AX", "Mineral Resources", Materials, VeryHigh, Low, 9.0),
        Instrument::new("JHX.AX", "James Hardie", Materials, Low, VeryHigh, 7.8),
    ]
});

/// Returns the fixed instrument catalog.
#[must_use]
pub fn instrument_catalog() -> &'static [Instrument] {
    &CATALOG
}
