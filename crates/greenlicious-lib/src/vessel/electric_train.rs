//! Electric freight trains.
//!
//! Consumption is tabulated for a standard European train on hilly terrain
//! and scaled by landscape and train size. CO2e follows from the kWh drawn
//! times the emission factor of the regional energy mix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::quantity::Quantity;
use crate::transport_class::TransportClass;
use crate::units::Unit;

use super::{Shipment, Vessel, VesselKind};

/// kWh per kg per km for a standard train on hilly terrain, indexed by
/// [`TransportClass::table_index`].
const HILL_KWH_PER_KG_KM: [f64; 3] = [0.000_027_61, 0.000_031_855, 0.000_041_41];

/// Terrain a train crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Landscape {
    Flat,
    #[default]
    Hill,
    Mountain,
}

impl Landscape {
    pub const ALL: [Landscape; 3] = [Landscape::Flat, Landscape::Hill, Landscape::Mountain];

    pub fn consumption_factor(self) -> f64 {
        match self {
            Landscape::Flat => 0.9,
            Landscape::Hill => 1.0,
            Landscape::Mountain => 1.1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Landscape::Flat => "flat",
            Landscape::Hill => "hill",
            Landscape::Mountain => "mountain",
        }
    }
}

impl fmt::Display for Landscape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Landscape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Landscape::ALL
            .into_iter()
            .find(|landscape| landscape.name() == wanted)
            .ok_or_else(|| Error::UnknownVariant {
                kind: "landscape",
                value: s.to_string(),
            })
    }
}

/// Train size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainModel {
    #[default]
    EuropeanStandard,
    InternationalBig,
}

impl TrainModel {
    pub const ALL: [TrainModel; 2] = [TrainModel::EuropeanStandard, TrainModel::InternationalBig];

    /// Consumption relative to the European standard train.
    pub fn size_factor(self) -> f64 {
        match self {
            TrainModel::EuropeanStandard => 1.0,
            TrainModel::InternationalBig => 0.4235,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TrainModel::EuropeanStandard => "european-standard",
            TrainModel::InternationalBig => "international-big",
        }
    }
}

impl fmt::Display for TrainModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrainModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        TrainModel::ALL
            .into_iter()
            .find(|model| model.name() == wanted)
            .ok_or_else(|| Error::UnknownVariant {
                kind: "train model",
                value: s.to_string(),
            })
    }
}

/// Electric freight train.
///
/// The landscape and energy mix set here are used by the [`Vessel`]
/// implementation; the inherent methods take them as arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricTrain {
    model: TrainModel,
    landscape: Landscape,
    energy_mix: f64,
}

impl ElectricTrain {
    /// Train on hilly terrain with an energy mix of 0 kg CO2e/kWh.
    pub fn new(model: TrainModel) -> Self {
        Self {
            model,
            landscape: Landscape::default(),
            energy_mix: 0.0,
        }
    }

    pub fn in_landscape(mut self, landscape: Landscape) -> Self {
        self.landscape = landscape;
        self
    }

    /// Emission factor of the electricity drawn, in kg CO2e per kWh.
    pub fn with_energy_mix(mut self, energy_mix: f64) -> Self {
        self.energy_mix = energy_mix;
        self
    }

    pub fn model(&self) -> TrainModel {
        self.model
    }

    pub fn landscape(&self) -> Landscape {
        self.landscape
    }

    pub fn energy_mix(&self) -> f64 {
        self.energy_mix
    }

    /// kWh drawn per kg of cargo per km.
    pub fn fuel_consumption(&self, landscape: Landscape, class: TransportClass) -> Quantity {
        let kwh = HILL_KWH_PER_KG_KM[class.table_index()]
            * landscape.consumption_factor()
            * self.model.size_factor();
        Quantity::new(kwh, Unit::KilowattHour)
    }

    /// kg CO2e per kg of cargo per km.
    pub fn co2e_per_kg_km(
        &self,
        energy_mix: f64,
        landscape: Landscape,
        class: TransportClass,
    ) -> Result<Quantity> {
        check_energy_mix(energy_mix)?;
        let kwh = self.fuel_consumption(landscape, class).amount();
        Ok(Quantity::new(kwh * energy_mix, Unit::KgCo2e))
    }

    /// kg CO2e per kg of cargo over `distance`.
    pub fn co2e_per_kg(
        &self,
        distance: &Quantity,
        energy_mix: f64,
        landscape: Landscape,
        class: TransportClass,
    ) -> Result<Quantity> {
        let km = distance.non_negative_amount_in(Unit::Kilometer, "distance")?;
        let per_kg_km = self.co2e_per_kg_km(energy_mix, landscape, class)?;
        Ok(per_kg_km.scale(km))
    }

    /// CO2e of moving `weight` over `distance`.
    pub fn co2e(
        &self,
        weight: &Quantity,
        distance: &Quantity,
        energy_mix: f64,
        landscape: Landscape,
        class: TransportClass,
    ) -> Result<Quantity> {
        let kg = weight.non_negative_amount_in(Unit::Kilogram, "weight")?;
        let per_kg = self.co2e_per_kg(distance, energy_mix, landscape, class)?;
        let co2e = per_kg.scale(kg);
        debug!(
            model = %self.model,
            %landscape,
            %class,
            weight_kg = kg,
            co2e_kg = co2e.amount(),
            "rail freight emission"
        );
        Ok(co2e)
    }
}

fn check_energy_mix(energy_mix: f64) -> Result<()> {
    if !energy_mix.is_finite() || energy_mix < 0.0 {
        return Err(Error::quantity(
            "energy mix",
            format!("must be finite and non-negative, got {energy_mix}"),
        ));
    }
    Ok(())
}

impl Vessel for ElectricTrain {
    fn kind(&self) -> VesselKind {
        VesselKind::Rail
    }

    fn energy_for(&self, shipment: &Shipment) -> Result<Quantity> {
        let kg = shipment
            .weight
            .non_negative_amount_in(Unit::Kilogram, "weight")?;
        let km = shipment
            .distance
            .non_negative_amount_in(Unit::Kilometer, "distance")?;
        let per_kg_km = self.fuel_consumption(self.landscape, shipment.transport_class);
        Ok(per_kg_km.scale(kg * km))
    }

    fn co2e_for(&self, shipment: &Shipment) -> Result<Quantity> {
        self.co2e(
            &shipment.weight,
            &shipment.distance,
            self.energy_mix,
            self.landscape,
            shipment.transport_class,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY_MIX: f64 = 0.67;

    fn consumption(train: &ElectricTrain, landscape: Landscape, class: TransportClass) -> f64 {
        train.fuel_consumption(landscape, class).amount()
    }

    #[test]
    fn standard_train_consumption() {
        let train = ElectricTrain::new(TrainModel::EuropeanStandard);
        let cases = [
            (Landscape::Hill, TransportClass::Bulk, 0.000_027_61),
            (Landscape::Flat, TransportClass::Bulk, 0.000_024_85),
            (Landscape::Mountain, TransportClass::Bulk, 0.000_030_37),
            (Landscape::Mountain, TransportClass::Average, 0.000_035_04),
            (Landscape::Mountain, TransportClass::Unknown, 0.000_035_04),
            (Landscape::Mountain, TransportClass::Volume, 0.000_045_55),
        ];
        for (landscape, class, expected) in cases {
            let actual = consumption(&train, landscape, class);
            assert!(
                (actual - expected).abs() < 5e-9,
                "{landscape}/{class}: {actual} != {expected}"
            );
        }
    }

    #[test]
    fn big_train_consumes_less() {
        let big = ElectricTrain::new(TrainModel::InternationalBig);
        let actual = consumption(&big, Landscape::Mountain, TransportClass::Volume);
        assert!((actual - 0.000_019_29).abs() < 5e-9);
        assert_eq!(
            big.fuel_consumption(Landscape::Flat, TransportClass::Bulk).unit(),
            Unit::KilowattHour
        );
    }

    #[test]
    fn co2e_chains_consumption_mix_distance_and_weight() {
        let train = ElectricTrain::new(TrainModel::EuropeanStandard);
        let kwh = consumption(&train, Landscape::Hill, TransportClass::Average);

        let per_kg_km = train
            .co2e_per_kg_km(ENERGY_MIX, Landscape::Hill, TransportClass::Average)
            .unwrap();
        assert_eq!(per_kg_km.amount(), kwh * ENERGY_MIX);

        let distance = Quantity::new(250_000.0, Unit::Meter);
        let per_kg = train
            .co2e_per_kg(&distance, ENERGY_MIX, Landscape::Hill, TransportClass::Average)
            .unwrap();
        assert!((per_kg.amount() - kwh * ENERGY_MIX * 250.0).abs() < 1e-15);

        let weight = Quantity::new(1000.0, Unit::Gram);
        let co2e = train
            .co2e(
                &weight,
                &distance,
                ENERGY_MIX,
                Landscape::Hill,
                TransportClass::Average,
            )
            .unwrap();
        assert!((co2e.amount() - kwh * ENERGY_MIX * 250.0).abs() < 1e-15);
        assert_eq!(co2e.unit(), Unit::KgCo2e);
    }

    #[test]
    fn rejects_invalid_energy_mix() {
        let train = ElectricTrain::new(TrainModel::EuropeanStandard);
        for mix in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(train
                .co2e_per_kg_km(mix, Landscape::Flat, TransportClass::Bulk)
                .is_err());
        }
        assert_eq!(
            train
                .co2e_per_kg_km(0.0, Landscape::Flat, TransportClass::Bulk)
                .unwrap()
                .amount(),
            0.0
        );
    }

    #[test]
    fn vessel_energy_is_kwh_for_the_whole_shipment() {
        let train = ElectricTrain::new(TrainModel::EuropeanStandard)
            .in_landscape(Landscape::Flat)
            .with_energy_mix(0.5);
        let shipment = Shipment::new(
            Quantity::new(1.0, Unit::Ton),
            Quantity::new(100.0, Unit::Kilometer),
            TransportClass::Bulk,
        );
        let energy = train.energy_for(&shipment).unwrap();
        assert_eq!(energy.unit(), Unit::KilowattHour);
        assert!((energy.amount() - 0.000_027_61 * 0.9 * 100_000.0).abs() < 1e-9);

        let co2e = train.co2e_for(&shipment).unwrap();
        assert!((co2e.amount() - energy.amount() * 0.5).abs() < 1e-9);
    }

    #[test]
    fn parses_landscape_and_model() {
        assert_eq!("Mountain".parse::<Landscape>().unwrap(), Landscape::Mountain);
        assert_eq!(
            "INTERNATIONAL_BIG".parse::<TrainModel>().unwrap(),
            TrainModel::InternationalBig
        );
        assert!("swamp".parse::<Landscape>().is_err());
    }
}
