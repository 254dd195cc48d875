//! Emission and allocation constants shared by the vessel models.

/// kg CO2e emitted per kg of kerosene burned (tank-to-wheel).
pub const KEROSENE_FACTOR: f64 = 3.15;

/// kg CO2e emitted per kg of heavy fuel oil burned (IMO default).
pub const HEAVY_FUEL_OIL_FACTOR: f64 = 3.114;

/// Average share of the cargo capacity in use on a flight.
pub const CARGO_LOAD_FACTOR: f64 = 0.65;

/// Average share of seats occupied on a passenger flight.
pub const PASSENGER_LOAD_FACTOR: f64 = 0.8;

/// Allocation weight of one passenger including luggage, in kg.
pub const PASSENGER_WEIGHT_KG: f64 = 100.0;
