//! Greenlicious transport emission engine.
//!
//! This crate converts physical quantities between units and computes the
//! CO2-equivalent emissions of moving goods by airplane, container ship and
//! electric train. Higher-level consumers (the CLI, product footprint
//! calculators) should only depend on the items exported here.
//!

pub mod error;
pub mod interpolation;
pub mod quantity;
pub mod rfi;
pub mod transport_class;
pub mod units;
pub mod vessel;

pub use error::{Error, Result};
pub use interpolation::{interpolate, Breakpoint, Extrapolation, PiecewiseLinear};
pub use quantity::Quantity;
pub use rfi::{rfi_factor, RFI_BREAKPOINTS};
pub use transport_class::TransportClass;
pub use units::{PhysicalDimension, Unit};
pub use vessel::{
    total_co2e, Airplane, AirplaneCatalog, AirplaneSize, AirplaneSpecification, AllocationConfig,
    CargoShip, CatalogEntry, ConsumptionProfile, ElectricTrain, Landscape, Shipment,
    ShippingRoute, StandardModel, TrainModel, Vessel, VesselKind,
};
