//! Physical dimensions and the fixed set of measuring units.
//!
//! Every [`Unit`] belongs to exactly one [`PhysicalDimension`] and carries a
//! conversion factor expressing how many of this unit make up one base unit
//! of its dimension (kilogram, litre, kilometre, kilowatt-hour, CO2e and
//! kilogram CO2e respectively).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The physical dimension measured by a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhysicalDimension {
    Mass,
    Volume,
    Distance,
    Energy,
    WarmingPotential,
    Co2e,
    /// Recipe units such as pieces or slices. Never convertible.
    Other,
}

/// Measuring units known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    // mass, base kilogram
    Ton,
    Kilogram,
    MetricPound,
    Gram,
    Milligram,
    Microgram,
    Pound,
    Ounce,
    Grain,
    // volume, base litre
    Hectolitre,
    Litre,
    Decilitre,
    Centilitre,
    Barrel,
    GallonLiquid,
    GallonDry,
    CupLiquid,
    CupDry,
    GillLiquid,
    GillDry,
    TablespoonLiquid,
    TablespoonDry,
    TeaspoonLiquid,
    TeaspoonDry,
    // distance, base kilometre
    Kilometer,
    Meter,
    Yard,
    Mile,
    NauticalMile,
    // energy, base kilowatt-hour
    KilowattHour,
    WattHour,
    Joule,
    Kilocalorie,
    BritishThermalUnit,
    // warming potential, base CO2e
    Co2e,
    Co2,
    Ch4,
    N2o,
    // CO2 equivalent mass, base kg CO2e
    KgCo2e,
    GCo2e,
    TCo2e,
    // not physical
    Piece,
    Slice,
    Unitless,
}

impl Unit {
    /// Every unit, in declaration order.
    pub const ALL: [Unit; 44] = [
        Unit::Ton,
        Unit::Kilogram,
        Unit::MetricPound,
        Unit::Gram,
        Unit::Milligram,
        Unit::Microgram,
        Unit::Pound,
        Unit::Ounce,
        Unit::Grain,
        Unit::Hectolitre,
        Unit::Litre,
        Unit::Decilitre,
        Unit::Centilitre,
        Unit::Barrel,
        Unit::GallonLiquid,
        Unit::GallonDry,
        Unit::CupLiquid,
        Unit::CupDry,
        Unit::GillLiquid,
        Unit::GillDry,
        Unit::TablespoonLiquid,
        Unit::TablespoonDry,
        Unit::TeaspoonLiquid,
        Unit::TeaspoonDry,
        Unit::Kilometer,
        Unit::Meter,
        Unit::Yard,
        Unit::Mile,
        Unit::NauticalMile,
        Unit::KilowattHour,
        Unit::WattHour,
        Unit::Joule,
        Unit::Kilocalorie,
        Unit::BritishThermalUnit,
        Unit::Co2e,
        Unit::Co2,
        Unit::Ch4,
        Unit::N2o,
        Unit::KgCo2e,
        Unit::GCo2e,
        Unit::TCo2e,
        Unit::Piece,
        Unit::Slice,
        Unit::Unitless,
    ];

    fn definition(self) -> (&'static str, PhysicalDimension, f64) {
        use PhysicalDimension::*;
        match self {
            Unit::Ton => ("t", Mass, 0.001),
            Unit::Kilogram => ("kg", Mass, 1.0),
            Unit::MetricPound => ("mlb", Mass, 2.0),
            Unit::Gram => ("g", Mass, 1000.0),
            Unit::Milligram => ("mg", Mass, 1_000_000.0),
            Unit::Microgram => ("µg", Mass, 1_000_000_000.0),
            Unit::Pound => ("lb", Mass, 2.2046226218488),
            Unit::Ounce => ("oz", Mass, 35.27396194958),
            Unit::Grain => ("gr", Mass, 15432.358352941),
            Unit::Hectolitre => ("hl", Volume, 0.01),
            Unit::Litre => ("l", Volume, 1.0),
            Unit::Decilitre => ("dl", Volume, 10.0),
            Unit::Centilitre => ("cl", Volume, 100.0),
            Unit::Barrel => ("bbl", Volume, 0.0062848352758387),
            Unit::GallonLiquid => ("gal", Volume, 0.26417205235815),
            Unit::GallonDry => ("gal", Volume, 0.22702074606721),
            Unit::CupLiquid => ("cup", Volume, 4.2267528377304),
            Unit::CupDry => ("cup", Volume, 3.6323319370754),
            Unit::GillLiquid => ("gill", Volume, 8.4535056754607),
            Unit::GillDry => ("gill", Volume, 7.2646638741508),
            Unit::TablespoonLiquid => ("tbsp", Volume, 67.6280454036864),
            Unit::TablespoonDry => ("tbsp", Volume, 58.1173109932064),
            Unit::TeaspoonLiquid => ("tsp", Volume, 202.8841362110592),
            Unit::TeaspoonDry => ("tsp", Volume, 174.3519329796192),
            Unit::Kilometer => ("km", Distance, 1.0),
            Unit::Meter => ("m", Distance, 1000.0),
            Unit::Yard => ("yd", Distance, 1093.6132983377),
            Unit::Mile => ("mi", Distance, 0.62137119223733),
            Unit::NauticalMile => ("nmi", Distance, 0.53995680345572),
            Unit::KilowattHour => ("kWh", Energy, 1.0),
            Unit::WattHour => ("Wh", Energy, 1000.0),
            Unit::Joule => ("J", Energy, 3_600_000.0),
            Unit::Kilocalorie => ("kcal", Energy, 859.84522785899),
            Unit::BritishThermalUnit => ("BTU", Energy, 3412.1416331279),
            Unit::Co2e => ("CO2e", WarmingPotential, 1.0),
            Unit::Co2 => ("CO2", WarmingPotential, 1.0),
            Unit::Ch4 => ("CH4", WarmingPotential, 25.0),
            Unit::N2o => ("N2O", WarmingPotential, 298.0),
            Unit::KgCo2e => ("kg CO2e", Co2e, 1.0),
            Unit::GCo2e => ("g CO2e", Co2e, 1000.0),
            Unit::TCo2e => ("t CO2e", Co2e, 0.001),
            Unit::Piece => ("piece", Other, 1.0),
            Unit::Slice => ("slice", Other, 1.0),
            Unit::Unitless => ("", Other, 1.0),
        }
    }

    /// Short display form, e.g. `kg` or `kg CO2e`.
    pub fn abbreviation(self) -> &'static str {
        self.definition().0
    }

    pub fn dimension(self) -> PhysicalDimension {
        self.definition().1
    }

    /// How many of this unit make up one base unit of its dimension.
    pub fn factor(self) -> f64 {
        self.definition().2
    }

    /// True if both units measure the same dimension and that dimension is not
    /// [`PhysicalDimension::Other`].
    pub fn is_convertible(self, target: Unit) -> bool {
        self.dimension() == target.dimension() && self.dimension() != PhysicalDimension::Other
    }

    /// Factor turning an amount in this unit into an amount in `target`.
    pub fn conversion_factor(self, target: Unit) -> Result<f64> {
        if !self.is_convertible(target) {
            return Err(Error::IncompatibleUnits {
                from: self,
                to: target,
            });
        }
        Ok(target.factor() / self.factor())
    }

    /// Convert `value` expressed in this unit into `target`.
    pub fn convert(self, value: f64, target: Unit) -> Result<f64> {
        if !self.is_convertible(target) {
            return Err(Error::IncompatibleUnits {
                from: self,
                to: target,
            });
        }
        Ok(value * target.factor() / self.factor())
    }

    /// The base unit of this unit's dimension, if it has one.
    pub fn base(self) -> Option<Unit> {
        match self.dimension() {
            PhysicalDimension::Mass => Some(Unit::Kilogram),
            PhysicalDimension::Volume => Some(Unit::Litre),
            PhysicalDimension::Distance => Some(Unit::Kilometer),
            PhysicalDimension::Energy => Some(Unit::KilowattHour),
            PhysicalDimension::WarmingPotential => Some(Unit::Co2e),
            PhysicalDimension::Co2e => Some(Unit::KgCo2e),
            PhysicalDimension::Other => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Parses a variant name (`kilogram`, `KG_CO2E`) or an abbreviation (`kg`,
/// `kg CO2e`). Ambiguous abbreviations such as `gal` resolve to the liquid
/// measure.
impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::UnknownUnit {
                value: s.to_string(),
            });
        }

        if let Some(unit) = Unit::ALL.iter().find(|u| u.abbreviation() == trimmed) {
            return Ok(*unit);
        }

        let wanted = normalize(trimmed);
        Unit::ALL
            .iter()
            .find(|u| normalize(&format!("{u:?}")) == wanted || normalize(u.abbreviation()) == wanted)
            .copied()
            .ok_or_else(|| Error::UnknownUnit {
                value: trimmed.to_string(),
            })
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
