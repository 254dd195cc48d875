//! Container ship emissions per transport class and trade lane.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::quantity::Quantity;
use crate::transport_class::TransportClass;
use crate::units::Unit;

use super::constants::HEAVY_FUEL_OIL_FACTOR;
use super::{Shipment, Vessel, VesselKind};

/// kg CO2e per kg per km on the global average route, indexed by
/// [`TransportClass::table_index`].
const BASE_CO2E_PER_KG_KM: [f64; 3] = [0.000_011_59, 0.000_016, 0.000_028];

/// Trade lane, scaling the global average emission factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingRoute {
    #[default]
    GlobalAverage,
    AsiaNorthEurope,
    AsiaMediterranean,
    Transpacific,
    Transatlantic,
    Panama,
    Suez,
    IntraAsia,
    IntraEurope,
}

impl ShippingRoute {
    pub const ALL: [ShippingRoute; 9] = [
        ShippingRoute::GlobalAverage,
        ShippingRoute::AsiaNorthEurope,
        ShippingRoute::AsiaMediterranean,
        ShippingRoute::Transpacific,
        ShippingRoute::Transatlantic,
        ShippingRoute::Panama,
        ShippingRoute::Suez,
        ShippingRoute::IntraAsia,
        ShippingRoute::IntraEurope,
    ];

    /// Multiplier applied to the global average factor.
    pub fn emission_factor(self) -> f64 {
        match self {
            ShippingRoute::GlobalAverage => 1.0,
            ShippingRoute::AsiaNorthEurope => 0.84,
            ShippingRoute::AsiaMediterranean => 0.92,
            ShippingRoute::Transpacific => 0.96,
            ShippingRoute::Transatlantic => 1.13,
            ShippingRoute::Panama => 1.10,
            ShippingRoute::Suez => 0.89,
            ShippingRoute::IntraAsia => 1.24,
            ShippingRoute::IntraEurope => 1.38,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShippingRoute::GlobalAverage => "global-average",
            ShippingRoute::AsiaNorthEurope => "asia-north-europe",
            ShippingRoute::AsiaMediterranean => "asia-mediterranean",
            ShippingRoute::Transpacific => "transpacific",
            ShippingRoute::Transatlantic => "transatlantic",
            ShippingRoute::Panama => "panama",
            ShippingRoute::Suez => "suez",
            ShippingRoute::IntraAsia => "intra-asia",
            ShippingRoute::IntraEurope => "intra-europe",
        }
    }
}

impl fmt::Display for ShippingRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShippingRoute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ShippingRoute::ALL
            .into_iter()
            .find(|route| route.name() == wanted)
            .ok_or_else(|| Error::UnknownVariant {
                kind: "shipping route",
                value: s.to_string(),
            })
    }
}

/// Container ship sailing a fixed trade lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CargoShip {
    route: ShippingRoute,
}

impl CargoShip {
    /// Ship on the global average route.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_route(mut self, route: ShippingRoute) -> Self {
        self.route = route;
        self
    }

    pub fn route(&self) -> ShippingRoute {
        self.route
    }

    /// kg CO2e emitted per kg of cargo per km on `route`.
    pub fn co2e_per_kg_km(&self, class: TransportClass, route: ShippingRoute) -> Quantity {
        let factor = BASE_CO2E_PER_KG_KM[class.table_index()] * route.emission_factor();
        Quantity::new(factor, Unit::KgCo2e)
    }

    /// CO2e of moving `weight` of `class` goods over `distance` on `route`.
    pub fn co2e(
        &self,
        weight: &Quantity,
        class: TransportClass,
        distance: &Quantity,
        route: ShippingRoute,
    ) -> Result<Quantity> {
        let kg = weight.non_negative_amount_in(Unit::Kilogram, "weight")?;
        let km = distance.non_negative_amount_in(Unit::Kilometer, "distance")?;
        let per_kg_km = self.co2e_per_kg_km(class, route).amount();
        let co2e = kg * km * per_kg_km;
        debug!(
            weight_kg = kg,
            distance_km = km,
            %class,
            %route,
            co2e_kg = co2e,
            "sea freight emission"
        );
        Ok(Quantity::new(co2e, Unit::KgCo2e))
    }
}

impl Vessel for CargoShip {
    fn kind(&self) -> VesselKind {
        VesselKind::Sea
    }

    fn energy_for(&self, shipment: &Shipment) -> Result<Quantity> {
        let co2e = self.co2e_for(shipment)?;
        Ok(Quantity::new(
            co2e.amount() / HEAVY_FUEL_OIL_FACTOR,
            Unit::Kilogram,
        ))
    }

    fn co2e_for(&self, shipment: &Shipment) -> Result<Quantity> {
        self.co2e(
            &shipment.weight,
            shipment.transport_class,
            &shipment.distance,
            self.route,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_kg_km(class: TransportClass, route: ShippingRoute) -> f64 {
        CargoShip::new()
            .co2e_per_kg_km(class, route)
            .convert(Unit::KgCo2e)
            .unwrap()
            .amount()
    }

    #[test]
    fn global_average_factors() {
        let route = ShippingRoute::GlobalAverage;
        assert!((per_kg_km(TransportClass::Average, route) - 0.000016).abs() < 1e-8);
        assert!((per_kg_km(TransportClass::Bulk, route) - 0.00001159).abs() < 1e-8);
        assert!((per_kg_km(TransportClass::Volume, route) - 0.000028).abs() < 1e-8);
        assert_eq!(
            per_kg_km(TransportClass::Unknown, route),
            per_kg_km(TransportClass::Average, route)
        );
    }

    #[test]
    fn routes_scale_the_factor() {
        let expected = 0.000016 * ShippingRoute::Panama.emission_factor();
        assert!((per_kg_km(TransportClass::Average, ShippingRoute::Panama) - expected).abs() < 1e-8);
    }

    #[test]
    fn co2e_is_weight_times_distance_times_factor() {
        let ship = CargoShip::new();
        let co2e = ship
            .co2e(
                &Quantity::new(1.0, Unit::Kilogram),
                TransportClass::Average,
                &Quantity::new(1.0, Unit::Kilometer),
                ShippingRoute::Transpacific,
            )
            .unwrap();
        let expected = 0.000016 * ShippingRoute::Transpacific.emission_factor();
        assert!((co2e.amount_in(Unit::KgCo2e).unwrap() - expected).abs() < 1e-8);

        let heavier = ship
            .co2e(
                &Quantity::new(2.0, Unit::Ton),
                TransportClass::Bulk,
                &Quantity::new(500.0, Unit::Kilometer),
                ShippingRoute::GlobalAverage,
            )
            .unwrap();
        assert!((heavier.amount() - 2000.0 * 500.0 * 0.00001159).abs() < 1e-9);
    }

    #[test]
    fn rejects_mismatched_units() {
        let err = CargoShip::new()
            .co2e(
                &Quantity::new(1.0, Unit::Kilometer),
                TransportClass::Bulk,
                &Quantity::new(1.0, Unit::Kilometer),
                ShippingRoute::GlobalAverage,
            )
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn vessel_uses_configured_route() {
        let ship = CargoShip::new().on_route(ShippingRoute::IntraEurope);
        let shipment = Shipment::new(
            Quantity::new(100.0, Unit::Kilogram),
            Quantity::new(100.0, Unit::Kilometer),
            TransportClass::Volume,
        );
        let co2e = ship.co2e_for(&shipment).unwrap().amount();
        assert!((co2e - 10_000.0 * 0.000028 * 1.38).abs() < 1e-9);

        let fuel = ship.energy_for(&shipment).unwrap();
        assert_eq!(fuel.unit(), Unit::Kilogram);
        assert!((fuel.amount() * HEAVY_FUEL_OIL_FACTOR - co2e).abs() < 1e-12);
    }

    #[test]
    fn parses_route_names() {
        assert_eq!(
            "INTRA_EUROPE".parse::<ShippingRoute>().unwrap(),
            ShippingRoute::IntraEurope
        );
        assert_eq!("suez".parse::<ShippingRoute>().unwrap(), ShippingRoute::Suez);
        assert!("north-pole".parse::<ShippingRoute>().is_err());
    }
}
