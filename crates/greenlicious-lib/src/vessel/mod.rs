//! Vessel models turning distance and payload into CO2e.
//!
//! This module is organized into focused submodules:
//!
//! - [`airplane`] - Airplane specifications, consumption profiles and flight emissions
//! - [`standard_models`] - The fixed catalog of standard airplane models
//! - [`catalog`] - Airplane catalog loading and lookup
//! - [`cargo_ship`] - Container ship emission factors per route
//! - [`electric_train`] - Electric train consumption per landscape and train size
//! - [`constants`] - Shared emission and allocation constants
//!
//! Every model implements [`Vessel`], so a caller can price a [`Shipment`]
//! without knowing which kind of vessel carries it.
//!
//! # Example
//!
//! ```
//! use greenlicious_lib::vessel::{
//!     total_co2e, Airplane, CargoShip, ShippingRoute, Shipment, StandardModel, Vessel,
//! };
//! use greenlicious_lib::{Quantity, TransportClass, Unit};
//!
//! let weight = Quantity::new(1.0, Unit::Ton);
//! let by_sea = Shipment::new(weight, Quantity::new(9000.0, Unit::Kilometer), TransportClass::Bulk);
//! let by_air = Shipment::new(weight, Quantity::new(800.0, Unit::Kilometer), TransportClass::Bulk);
//!
//! let ship = CargoShip::new().on_route(ShippingRoute::Transpacific);
//! let plane = Airplane::standard(StandardModel::Freighter767_300);
//!
//! let legs = [(&ship as &dyn Vessel, &by_sea), (&plane as &dyn Vessel, &by_air)];
//! let total = total_co2e(legs).unwrap();
//! assert!(total.amount() > ship.co2e_for(&by_sea).unwrap().amount());
//! ```

pub mod airplane;
pub mod cargo_ship;
pub mod catalog;
pub mod constants;
pub mod electric_train;
pub mod standard_models;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::quantity::Quantity;
use crate::transport_class::TransportClass;
use crate::units::Unit;

pub use airplane::{
    Airplane, AirplaneSize, AirplaneSpecification, AllocationConfig, ConsumptionProfile,
};
pub use cargo_ship::{CargoShip, ShippingRoute};
pub use catalog::{AirplaneCatalog, CatalogEntry};
pub use constants::{
    CARGO_LOAD_FACTOR, HEAVY_FUEL_OIL_FACTOR, KEROSENE_FACTOR, PASSENGER_LOAD_FACTOR,
    PASSENGER_WEIGHT_KG,
};
pub use electric_train::{ElectricTrain, Landscape, TrainModel};
pub use standard_models::{StandardModel, STANDARD_DISTANCES_KM};

/// Broad mode of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VesselKind {
    Air,
    Sea,
    Rail,
}

impl fmt::Display for VesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VesselKind::Air => "air",
            VesselKind::Sea => "sea",
            VesselKind::Rail => "rail",
        };
        f.write_str(name)
    }
}

/// Goods moved over a single leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub weight: Quantity,
    pub distance: Quantity,
    pub transport_class: TransportClass,
}

impl Shipment {
    pub fn new(weight: Quantity, distance: Quantity, transport_class: TransportClass) -> Self {
        Self {
            weight,
            distance,
            transport_class,
        }
    }
}

/// Capability shared by every vessel model.
///
/// Implementors carry their own configuration (route, landscape, RFI
/// handling, ...) and only need the shipment to produce a result.
pub trait Vessel: Send + Sync {
    fn kind(&self) -> VesselKind;

    /// Fuel or energy attributable to the shipment: kg kerosene, kg heavy fuel
    /// oil or kWh depending on the vessel.
    fn energy_for(&self, shipment: &Shipment) -> Result<Quantity>;

    /// CO2e attributable to the shipment, in kg CO2e.
    fn co2e_for(&self, shipment: &Shipment) -> Result<Quantity>;

    /// CO2e attributable to the shipment per km travelled, in kg CO2e.
    fn co2e_per_km_for(&self, shipment: &Shipment) -> Result<Quantity> {
        let km = shipment
            .distance
            .positive_amount_in(Unit::Kilometer, "distance")?;
        let total = self.co2e_for(shipment)?.convert(Unit::KgCo2e)?;
        Ok(Quantity::new(total.amount() / km, Unit::KgCo2e))
    }
}

/// Sum the CO2e of every leg of a transport chain.
pub fn total_co2e<'a, I>(legs: I) -> Result<Quantity>
where
    I: IntoIterator<Item = (&'a dyn Vessel, &'a Shipment)>,
{
    let mut total = Quantity::new(0.0, Unit::KgCo2e);
    for (vessel, shipment) in legs {
        let leg = vessel.co2e_for(shipment)?;
        debug!(vessel = %vessel.kind(), co2e = %leg, "priced transport leg");
        total = total.add(&leg)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_emits_nothing() {
        let legs: Vec<(&dyn Vessel, &Shipment)> = Vec::new();
        assert_eq!(total_co2e(legs).unwrap(), Quantity::new(0.0, Unit::KgCo2e));
    }

    #[test]
    fn chain_total_is_sum_of_legs() {
        let ship = CargoShip::new();
        let train = ElectricTrain::new(TrainModel::EuropeanStandard).with_energy_mix(0.4);
        let sea = Shipment::new(
            Quantity::new(2.0, Unit::Ton),
            Quantity::new(12_000.0, Unit::Kilometer),
            TransportClass::Average,
        );
        let rail = Shipment::new(
            Quantity::new(2.0, Unit::Ton),
            Quantity::new(600.0, Unit::Kilometer),
            TransportClass::Average,
        );

        let expected = ship.co2e_for(&sea).unwrap().amount() + train.co2e_for(&rail).unwrap().amount();
        let legs = [(&ship as &dyn Vessel, &sea), (&train as &dyn Vessel, &rail)];
        let total = total_co2e(legs).unwrap();
        assert!((total.amount() - expected).abs() < 1e-9);
        assert_eq!(total.unit(), Unit::KgCo2e);
    }

    #[test]
    fn per_km_default_divides_by_distance() {
        let ship = CargoShip::new();
        let shipment = Shipment::new(
            Quantity::new(1.0, Unit::Ton),
            Quantity::new(500.0, Unit::Kilometer),
            TransportClass::Bulk,
        );
        let total = ship.co2e_for(&shipment).unwrap().amount();
        let per_km = ship.co2e_per_km_for(&shipment).unwrap().amount();
        assert!((per_km * 500.0 - total).abs() < 1e-12);
    }
}
