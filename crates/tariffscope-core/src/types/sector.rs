//! Sector classification for ASX-listed equities.
//!
//! This module provides the fixed GICS sector set used by the impact
//! tables, along with each sector's tariff sensitivity coefficient.

use serde::{Deserialize, Serialize};
use std::fmt;

/// GICS sector for ASX-listed equities.
///
/// The set is closed: every sector impact table carries exactly these
/// eleven entries, so table completeness is checkable by iterating
/// [`Sector::all`].
///
/// # Examples
///
/// ```
/// use tariffscope_core::types::Sector;
///
/// assert_eq!(Sector::Materials.sensitivity(), 1.2);
/// assert_eq!(Sector::Utilities.name(), "Utilities");
/// assert_eq!(Sector::all().len(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    /// Mining, metals and construction materials
    Materials,
    /// Banks, insurers and diversified financials
    Financials,
    /// Oil, gas and consumable fuels
    Energy,
    /// Pharmaceuticals, biotech and health equipment
    Healthcare,
    /// Food, beverage and household staples
    ConsumerStaples,
    /// Retail, autos and consumer services
    ConsumerDiscretionary,
    /// Capital goods, transport and commercial services
    Industrials,
    /// Software and IT services
    Technology,
    /// Electric, gas and water utilities
    Utilities,
    /// REITs and real estate management
    RealEstate,
    /// Telecom and media
    CommunicationServices,
}

impl Sector {
    /// Returns all sectors in a standard order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Materials,
            Self::Financials,
            Self::Energy,
            Self::Healthcare,
            Self::ConsumerStaples,
            Self::ConsumerDiscretionary,
            Self::Industrials,
            Self::Technology,
            Self::Utilities,
            Self::RealEstate,
            Self::CommunicationServices,
        ]
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Materials => "Materials",
            Self::Financials => "Financials",
            Self::Energy => "Energy",
            Self::Healthcare => "Healthcare",
            Self::ConsumerStaples => "Consumer Staples",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::Industrials => "Industrials",
            Self::Technology => "Technology",
            Self::Utilities => "Utilities",
            Self::RealEstate => "Real Estate",
            Self::CommunicationServices => "Communication Services",
        }
    }

    /// Returns the sector's tariff sensitivity coefficient.
    ///
    /// Sensitivities sit on a roughly 0.3–1.3 scale: Materials and
    /// Consumer Discretionary are the most exposed to tariff moves,
    /// Utilities the least.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        match self {
            Self::Materials => 1.2,
            Self::Financials => 0.9,
            Self::Energy => 0.8,
            Self::Healthcare => 0.4,
            Self::ConsumerStaples => 0.5,
            Self::ConsumerDiscretionary => 1.3,
            Self::Industrials => 1.1,
            Self::Technology => 1.0,
            Self::Utilities => 0.3,
            Self::RealEstate => 0.7,
            Self::CommunicationServices => 0.6,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sectors_covered() {
        assert_eq!(Sector::all().len(), 11);
    }

    #[test]
    fn test_sensitivity_range() {
        for sector in Sector::all() {
            let s = sector.sensitivity();
            assert!(s >= 0.3 && s <= 1.3, "{sector} sensitivity out of range");
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Sector::ConsumerStaples.to_string(), "Consumer Staples");
        assert_eq!(Sector::RealEstate.to_string(), "Real Estate");
    }
}
