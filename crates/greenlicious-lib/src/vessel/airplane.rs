//! Airplane specifications, consumption profiles and flight emissions.
//!
//! Fuel burn comes from an empirical consumption profile (distance flown →
//! kerosene burned) interpolated over the requested distance. The flight's
//! CO2e is then allocated by weight to a single payload.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::interpolation::{interpolate, Breakpoint, Extrapolation};
use crate::quantity::Quantity;
use crate::rfi::rfi_factor;
use crate::units::Unit;

use super::constants::{
    CARGO_LOAD_FACTOR, KEROSENE_FACTOR, PASSENGER_LOAD_FACTOR, PASSENGER_WEIGHT_KG,
};
use super::standard_models::StandardModel;
use super::{Shipment, Vessel, VesselKind};

/// Size cluster of an airplane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AirplaneSize {
    Small,
    Medium,
    Big,
}

impl AirplaneSize {
    pub fn name(self) -> &'static str {
        match self {
            AirplaneSize::Small => "small",
            AirplaneSize::Medium => "medium",
            AirplaneSize::Big => "big",
        }
    }
}

impl fmt::Display for AirplaneSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AirplaneSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(AirplaneSize::Small),
            "medium" => Ok(AirplaneSize::Medium),
            "big" => Ok(AirplaneSize::Big),
            _ => Err(Error::UnknownVariant {
                kind: "airplane size",
                value: s.to_string(),
            }),
        }
    }
}

/// Kerosene burned (kg) over a flight distance (km), ascending by distance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionProfile {
    entries: Vec<Breakpoint>,
}

impl ConsumptionProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from `(distance_km, fuel_kg)` pairs in any order.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut profile = Self::new();
        for (distance_km, fuel_kg) in entries {
            profile.add_entry(distance_km, fuel_kg)?;
        }
        Ok(profile)
    }

    /// Profile from a table already known to be ascending and non-negative.
    pub(crate) fn from_sorted(entries: Vec<Breakpoint>) -> Self {
        Self { entries }
    }

    /// Record the fuel burned over `distance_km`, replacing any previous entry
    /// for the same distance.
    pub fn add_entry(&mut self, distance_km: f64, fuel_kg: f64) -> Result<()> {
        if !distance_km.is_finite() || !fuel_kg.is_finite() || distance_km < 0.0 || fuel_kg < 0.0
        {
            return Err(Error::InvalidConsumptionEntry {
                distance_km,
                fuel_kg,
            });
        }

        let idx = self.entries.partition_point(|bp| bp.x < distance_km);
        match self.entries.get_mut(idx) {
            Some(existing) if existing.x == distance_km => existing.y = fuel_kg,
            _ => self
                .entries
                .insert(idx, Breakpoint::new(distance_km, fuel_kg)),
        }
        Ok(())
    }

    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest tabulated distance, if any.
    pub fn max_distance_km(&self) -> Option<f64> {
        self.entries.last().map(|bp| bp.x)
    }

    /// Interpolated kerosene burn (kg) for `distance_km`.
    pub fn fuel_kg(&self, distance_km: f64) -> Result<f64> {
        interpolate(&self.entries, distance_km, Extrapolation::Proportional)
    }
}

/// Physical data of an airplane type as used for emission calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirplaneSpecification {
    pub size: AirplaneSize,
    /// Passenger seats; zero for pure freighters.
    pub seats: u32,
    pub max_range_km: u32,
    /// Cargo payload capacity in kg.
    pub max_payload_kg: u32,
    pub consumption: ConsumptionProfile,
}

impl AirplaneSpecification {
    pub fn new(
        size: AirplaneSize,
        seats: u32,
        max_range_km: u32,
        max_payload_kg: u32,
        consumption: ConsumptionProfile,
    ) -> Self {
        Self {
            size,
            seats,
            max_range_km,
            max_payload_kg,
            consumption,
        }
    }

    pub fn has_consumption_data(&self) -> bool {
        !self.consumption.is_empty()
    }

    pub fn add_consumption_entry(&mut self, distance_km: f64, fuel_kg: f64) -> Result<()> {
        self.consumption.add_entry(distance_km, fuel_kg)
    }

    /// Validate that the specification can be used to price a shipment.
    pub fn validate(&self) -> Result<()> {
        if !self.has_consumption_data() {
            return Err(Error::AirplaneDataValidation {
                message: "consumption profile must not be empty".to_string(),
            });
        }
        if self.max_payload_kg == 0 && self.seats == 0 {
            return Err(Error::AirplaneDataValidation {
                message: "airplane needs cargo capacity or seats".to_string(),
            });
        }
        Ok(())
    }
}

/// Parameters of the weight-based allocation of a flight's emissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// Share of the cargo capacity in use (0, 1].
    pub cargo_load_factor: f64,
    /// Share of seats occupied (0, 1].
    pub passenger_load_factor: f64,
    /// Allocation weight of one passenger including luggage.
    pub passenger_weight_kg: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            cargo_load_factor: CARGO_LOAD_FACTOR,
            passenger_load_factor: PASSENGER_LOAD_FACTOR,
            passenger_weight_kg: PASSENGER_WEIGHT_KG,
        }
    }
}

impl AllocationConfig {
    pub fn validate(&self) -> Result<()> {
        for (value, field) in [
            (self.cargo_load_factor, "cargo_load_factor"),
            (self.passenger_load_factor, "passenger_load_factor"),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(Error::InvalidConfig {
                    message: format!("{field} must be within (0, 1], got {value}"),
                });
            }
        }

        if !self.passenger_weight_kg.is_finite() || self.passenger_weight_kg <= 0.0 {
            return Err(Error::InvalidConfig {
                message: format!(
                    "passenger_weight_kg must be finite and positive, got {}",
                    self.passenger_weight_kg
                ),
            });
        }

        Ok(())
    }

    /// Payload weight (kg) actually carried on an average flight of `spec`.
    ///
    /// ```text
    /// capacity = max_payload_kg × cargo_load_factor
    ///          + seats × passenger_weight_kg × passenger_load_factor
    /// ```
    pub fn capacity_kg(&self, spec: &AirplaneSpecification) -> f64 {
        f64::from(spec.max_payload_kg) * self.cargo_load_factor
            + f64::from(spec.seats) * self.passenger_weight_kg * self.passenger_load_factor
    }
}

/// An airplane ready to price flights.
#[derive(Debug, Clone, PartialEq)]
pub struct Airplane {
    specification: AirplaneSpecification,
    allocation: AllocationConfig,
    use_rfi: bool,
}

impl Airplane {
    /// Airplane with default allocation and RFI correction enabled for
    /// [`Vessel`] calculations.
    pub fn new(specification: AirplaneSpecification) -> Self {
        Self {
            specification,
            allocation: AllocationConfig::default(),
            use_rfi: true,
        }
    }

    pub fn standard(model: StandardModel) -> Self {
        Self::new(model.specification().clone())
    }

    /// Whether [`Vessel`] calculations apply the radiative forcing index.
    pub fn with_rfi(mut self, use_rfi: bool) -> Self {
        self.use_rfi = use_rfi;
        self
    }

    pub fn with_allocation(mut self, allocation: AllocationConfig) -> Result<Self> {
        allocation.validate()?;
        self.allocation = allocation;
        Ok(self)
    }

    pub fn specification(&self) -> &AirplaneSpecification {
        &self.specification
    }

    pub fn allocation(&self) -> &AllocationConfig {
        &self.allocation
    }

    pub fn uses_rfi(&self) -> bool {
        self.use_rfi
    }

    /// Payload weight over which a flight's emissions are split.
    pub fn allocation_capacity(&self) -> Result<Quantity> {
        let capacity = self.allocation.capacity_kg(&self.specification);
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(Error::InvalidConfig {
                message: "airplane has no payload capacity to allocate emissions to".to_string(),
            });
        }
        Ok(Quantity::new(capacity, Unit::Kilogram))
    }

    /// Kerosene burned by the whole flight.
    pub fn fuel_consumption(&self, distance: &Quantity) -> Result<Quantity> {
        let km = distance.positive_amount_in(Unit::Kilometer, "flight distance")?;
        self.check_range(km);
        let fuel = self.specification.consumption.fuel_kg(km)?;
        Ok(Quantity::new(fuel, Unit::Kilogram))
    }

    /// CO2e of the whole flight, optionally corrected by the RFI.
    pub fn total_co2e(&self, distance: &Quantity, use_rfi: bool) -> Result<Quantity> {
        let fuel = self.fuel_consumption(distance)?.amount();
        let mut co2e = fuel * KEROSENE_FACTOR;
        if use_rfi {
            co2e *= rfi_factor(distance)?;
        }
        debug!(fuel_kg = fuel, co2e_kg = co2e, use_rfi, "flight emission");
        Ok(Quantity::new(co2e, Unit::KgCo2e))
    }

    /// Flight CO2e per km flown.
    pub fn total_co2e_per_km(&self, distance: &Quantity, use_rfi: bool) -> Result<Quantity> {
        let km = distance.positive_amount_in(Unit::Kilometer, "flight distance")?;
        let total = self.total_co2e(distance, use_rfi)?;
        Ok(Quantity::new(total.amount() / km, Unit::KgCo2e))
    }

    /// CO2e allocated to `payload` on a flight over `distance`.
    pub fn co2e(&self, distance: &Quantity, payload: &Quantity, use_rfi: bool) -> Result<Quantity> {
        let share = self.payload_share(payload)?;
        let total = self.total_co2e(distance, use_rfi)?;
        Ok(Quantity::new(total.amount() * share, Unit::KgCo2e))
    }

    /// CO2e allocated to `payload` per km flown.
    pub fn co2e_per_km(
        &self,
        distance: &Quantity,
        payload: &Quantity,
        use_rfi: bool,
    ) -> Result<Quantity> {
        let km = distance.positive_amount_in(Unit::Kilometer, "flight distance")?;
        let co2e = self.co2e(distance, payload, use_rfi)?;
        Ok(Quantity::new(co2e.amount() / km, Unit::KgCo2e))
    }

    fn payload_share(&self, payload: &Quantity) -> Result<f64> {
        let payload_kg = payload.non_negative_amount_in(Unit::Kilogram, "payload")?;
        let capacity = self.allocation_capacity()?.amount();
        Ok(payload_kg / capacity)
    }

    fn check_range(&self, km: f64) {
        let max_range = f64::from(self.specification.max_range_km);
        if max_range > 0.0 && km > max_range {
            warn!(
                distance_km = km,
                max_range_km = max_range,
                "flight distance exceeds airplane range"
            );
        }
        if let Some(max_tabulated) = self.specification.consumption.max_distance_km() {
            if km > max_tabulated {
                warn!(
                    distance_km = km,
                    max_tabulated_km = max_tabulated,
                    "extrapolating consumption profile beyond its last entry"
                );
            }
        }
    }
}

impl Vessel for Airplane {
    fn kind(&self) -> VesselKind {
        VesselKind::Air
    }

    fn energy_for(&self, shipment: &Shipment) -> Result<Quantity> {
        let share = self.payload_share(&shipment.weight)?;
        let fuel = self.fuel_consumption(&shipment.distance)?;
        Ok(fuel.scale(share))
    }

    fn co2e_for(&self, shipment: &Shipment) -> Result<Quantity> {
        self.co2e(&shipment.distance, &shipment.weight, self.use_rfi)
    }

    fn co2e_per_km_for(&self, shipment: &Shipment) -> Result<Quantity> {
        self.co2e_per_km(&shipment.distance, &shipment.weight, self.use_rfi)
    }
}
