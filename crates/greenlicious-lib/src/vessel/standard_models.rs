//! The six standard airplane types shipped with the library.
//!
//! Consumption profiles follow the EMEP/EEA air pollutant emission inventory
//! guidebook: kerosene burned (kg) over the standard flight distances below.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::interpolation::Breakpoint;

use super::airplane::{AirplaneSize, AirplaneSpecification, ConsumptionProfile};

/// Distances (km) at which the standard consumption profiles are tabulated.
pub const STANDARD_DISTANCES_KM: [f64; 18] = [
    232.0, 463.0, 926.0, 1389.0, 1852.0, 2778.0, 3704.0, 4630.0, 5556.0, 6482.0, 7408.0, 8334.0,
    9260.0, 10186.0, 11112.0, 12038.0, 12964.0, 13890.0,
];

const B747_FUEL_KG: [f64; 18] = [
    6331.0, 9058.0, 13405.0, 17751.0, 22097.0, 30922.0, 40267.0, 49480.0, 59577.0, 69888.0,
    80789.0, 91986.0, 103611.0, 115553.0, 128171.0, 141254.0, 155563.0, 169088.0,
];

const B767_FUEL_KG: [f64; 15] = [
    3030.0, 4305.0, 6485.0, 8665.0, 10845.0, 15409.0, 20287.0, 24804.0, 29909.0, 35239.0, 40631.0,
    46314.0, 52208.0, 58557.0, 64501.0,
];

const B737_FUEL_KG: [f64; 7] = [1800.0, 2495.0, 3727.0, 4950.0, 6191.0, 8722.0, 11438.0];

const B757_FUEL_KG: [f64; 11] = [
    2423.0, 3410.0, 5070.0, 6724.0, 8391.0, 11846.0, 15407.0, 19026.0, 22348.0, 25683.0, 28968.0,
];

const FOKKER100_FUEL_KG: [f64; 7] = [1468.0, 2079.0, 3212.0, 4286.0, 5480.0, 7796.0, 10400.0];

/// Standard airplane types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardModel {
    #[serde(rename = "F_747_400F")]
    Freighter747_400,
    #[serde(rename = "F_767_300F")]
    Freighter767_300,
    #[serde(rename = "F_737_200C")]
    Convertible737_200,
    #[serde(rename = "P_747_400")]
    Passenger747_400,
    #[serde(rename = "P_757_200")]
    Passenger757_200,
    #[serde(rename = "P_FOKKER100")]
    PassengerFokker100,
}

static SPECIFICATIONS: Lazy<Vec<AirplaneSpecification>> = Lazy::new(|| {
    StandardModel::ALL
        .iter()
        .map(|model| model.build_specification())
        .collect()
});

impl StandardModel {
    pub const ALL: [StandardModel; 6] = [
        StandardModel::Freighter747_400,
        StandardModel::Freighter767_300,
        StandardModel::Convertible737_200,
        StandardModel::Passenger747_400,
        StandardModel::Passenger757_200,
        StandardModel::PassengerFokker100,
    ];

    /// Catalog code, e.g. `F_747_400F`.
    pub fn code(self) -> &'static str {
        match self {
            StandardModel::Freighter747_400 => "F_747_400F",
            StandardModel::Freighter767_300 => "F_767_300F",
            StandardModel::Convertible737_200 => "F_737_200C",
            StandardModel::Passenger747_400 => "P_747_400",
            StandardModel::Passenger757_200 => "P_757_200",
            StandardModel::PassengerFokker100 => "P_FOKKER100",
        }
    }

    pub fn specification(self) -> &'static AirplaneSpecification {
        &SPECIFICATIONS[self.index()]
    }

    fn index(self) -> usize {
        match self {
            StandardModel::Freighter747_400 => 0,
            StandardModel::Freighter767_300 => 1,
            StandardModel::Convertible737_200 => 2,
            StandardModel::Passenger747_400 => 3,
            StandardModel::Passenger757_200 => 4,
            StandardModel::PassengerFokker100 => 5,
        }
    }

    fn build_specification(self) -> AirplaneSpecification {
        let (size, max_payload_kg, max_range_km, seats, fuel): (_, _, _, _, &[f64]) = match self {
            StandardModel::Freighter747_400 => (AirplaneSize::Big, 112_600, 8230, 0, &B747_FUEL_KG[..]),
            StandardModel::Freighter767_300 => {
                (AirplaneSize::Medium, 53_700, 6025, 0, &B767_FUEL_KG[..])
            }
            StandardModel::Convertible737_200 => {
                (AirplaneSize::Small, 17_300, 2240, 0, &B737_FUEL_KG[..])
            }
            StandardModel::Passenger747_400 => {
                (AirplaneSize::Big, 14_000, 13_450, 416, &B747_FUEL_KG[..])
            }
            StandardModel::Passenger757_200 => {
                (AirplaneSize::Medium, 4000, 7222, 200, &B757_FUEL_KG[..])
            }
            StandardModel::PassengerFokker100 => {
                (AirplaneSize::Small, 1000, 3170, 85, &FOKKER100_FUEL_KG[..])
            }
        };

        let entries = STANDARD_DISTANCES_KM
            .iter()
            .zip(fuel)
            .map(|(&km, &kg)| Breakpoint::new(km, kg))
            .collect();

        AirplaneSpecification::new(
            size,
            seats,
            max_range_km,
            max_payload_kg,
            ConsumptionProfile::from_sorted(entries),
        )
    }
}

impl fmt::Display for StandardModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StandardModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        if let Some(model) = StandardModel::ALL
            .into_iter()
            .find(|model| model.code().eq_ignore_ascii_case(wanted))
        {
            return Ok(model);
        }

        let codes = StandardModel::ALL.iter().map(|model| model.code());
        Err(Error::UnknownAirplaneModel {
            name: s.to_string(),
            suggestions: super::catalog::suggest_names(wanted, codes, 3),
        })
    }
}
