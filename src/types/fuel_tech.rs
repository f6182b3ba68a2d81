//! The fuel-technology category table: which technology codes count as
//! fossil, which as renewable, and which are consumption loads that never
//! count as generation at all.

use std::collections::HashSet;

const FOSSIL_TECHS: [&str; 9] = [
    "gas_recip",
    "gas_ocgt",
    "gas_ccgt",
    "gas_steam",
    "gas_lfg",
    "gas_wcmg",
    "distillate",
    "coal_brown",
    "coal_black",
];

const RENEWABLE_TECHS: [&str; 6] = [
    "solar_utility",
    "solar_rooftop",
    "wind",
    "hydro",
    "bioenergy_biomass",
    "bioenergy_biogas",
];

// Pumping and charging loads draw from the grid rather than feeding it.
const EXCLUDED_TECHS: [&str; 2] = ["pumps", "battery_charging"];

/// The bucket a fuel-technology code falls into.
///
/// [`FuelCategory::Other`] codes (storage discharge, imports, exports and the
/// like) still count toward total generation but toward neither share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelCategory {
    Fossil,
    Renewable,
    Other,
}

/// Category membership table for fuel-technology codes.
///
/// [`FuelTechCategories::default`] carries the NEM tables this crate ships
/// with; tests and callers with different grids can construct their own.
#[derive(Debug, Clone)]
pub struct FuelTechCategories {
    fossil: HashSet<String>,
    renewable: HashSet<String>,
    excluded: HashSet<String>,
}

impl FuelTechCategories {
    pub fn new(
        fossil: impl IntoIterator<Item = impl Into<String>>,
        renewable: impl IntoIterator<Item = impl Into<String>>,
        excluded: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            fossil: fossil.into_iter().map(Into::into).collect(),
            renewable: renewable.into_iter().map(Into::into).collect(),
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    /// The bucket `fuel_tech` contributes its generation to.
    pub fn category(&self, fuel_tech: &str) -> FuelCategory {
        if self.fossil.contains(fuel_tech) {
            FuelCategory::Fossil
        } else if self.renewable.contains(fuel_tech) {
            FuelCategory::Renewable
        } else {
            FuelCategory::Other
        }
    }

    /// Whether `fuel_tech` is a consumption load to drop outright.
    pub fn is_excluded(&self, fuel_tech: &str) -> bool {
        self.excluded.contains(fuel_tech)
    }
}

impl Default for FuelTechCategories {
    fn default() -> Self {
        Self::new(FOSSIL_TECHS, RENEWABLE_TECHS, EXCLUDED_TECHS)
    }
}
