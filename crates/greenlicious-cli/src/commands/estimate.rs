//! Single-leg emission estimates for air, sea and rail freight.

use anyhow::{Context, Result};
use clap::Args;

use greenlicious_lib::vessel::{
    Airplane, AllocationConfig, CargoShip, ElectricTrain, Landscape, Shipment, ShippingRoute,
    TrainModel, Vessel,
};
use greenlicious_lib::{AirplaneCatalog, Quantity, TransportClass};

use crate::output::{EstimateReport, OutputFormat, Render};

#[derive(Args, Debug, Clone)]
pub struct AirArgs {
    /// Airplane model name or code, e.g. F_747_400F.
    #[arg(long)]
    pub model: String,
    /// Flight distance, e.g. "5000 km".
    #[arg(long)]
    pub distance: Quantity,
    /// Payload weight, e.g. "1 t".
    #[arg(long)]
    pub payload: Quantity,
    /// Skip the radiative forcing correction.
    #[arg(long)]
    pub no_rfi: bool,
    /// Share of the cargo capacity in use, in (0, 1].
    #[arg(long)]
    pub cargo_load_factor: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct SeaArgs {
    #[arg(long)]
    pub weight: Quantity,
    #[arg(long)]
    pub distance: Quantity,
    #[arg(long, default_value = "unknown")]
    pub class: TransportClass,
    #[arg(long, default_value = "global-average")]
    pub route: ShippingRoute,
}

#[derive(Args, Debug, Clone)]
pub struct RailArgs {
    #[arg(long)]
    pub weight: Quantity,
    #[arg(long)]
    pub distance: Quantity,
    #[arg(long, default_value = "unknown")]
    pub class: TransportClass,
    #[arg(long, default_value = "hill")]
    pub landscape: Landscape,
    #[arg(long, default_value = "european-standard")]
    pub train: TrainModel,
    /// Emission factor of the electricity mix in kg CO2e per kWh.
    #[arg(long)]
    pub energy_mix: f64,
}

pub fn handle_air(
    catalog: &AirplaneCatalog,
    args: &AirArgs,
    format: OutputFormat,
) -> Result<String> {
    let entry = catalog
        .resolve(&args.model)
        .context("failed to select airplane")?;

    let mut plane = Airplane::new(entry.specification.clone()).with_rfi(!args.no_rfi);
    if let Some(cargo_load_factor) = args.cargo_load_factor {
        plane = plane
            .with_allocation(AllocationConfig {
                cargo_load_factor,
                ..AllocationConfig::default()
            })
            .context("invalid allocation settings")?;
    }

    let rfi = if args.no_rfi { "without RFI" } else { "with RFI" };
    let shipment = Shipment::new(args.payload, args.distance, TransportClass::Unknown);
    estimate(&plane, &shipment, format!("{}, {rfi}", entry.name))?.render(format)
}

pub fn handle_sea(args: &SeaArgs, format: OutputFormat) -> Result<String> {
    let ship = CargoShip::new().on_route(args.route);
    let shipment = Shipment::new(args.weight, args.distance, args.class);
    let description = format!("{} route, {} goods", args.route, args.class);
    estimate(&ship, &shipment, description)?.render(format)
}

pub fn handle_rail(args: &RailArgs, format: OutputFormat) -> Result<String> {
    let train = ElectricTrain::new(args.train)
        .in_landscape(args.landscape)
        .with_energy_mix(args.energy_mix);
    let shipment = Shipment::new(args.weight, args.distance, args.class);
    let description = format!(
        "{} train, {} landscape, {} goods",
        args.train, args.landscape, args.class
    );
    estimate(&train, &shipment, description)?.render(format)
}

fn estimate(vessel: &dyn Vessel, shipment: &Shipment, description: String) -> Result<EstimateReport> {
    let energy = vessel
        .energy_for(shipment)
        .context("failed to compute fuel consumption")?;
    let co2e = vessel
        .co2e_for(shipment)
        .context("failed to compute CO2e")?;
    let co2e_per_km = vessel
        .co2e_per_km_for(shipment)
        .context("failed to compute CO2e per km")?;

    Ok(EstimateReport {
        vessel: vessel.kind(),
        description,
        weight: shipment.weight,
        distance: shipment.distance,
        energy,
        co2e,
        co2e_per_km,
    })
}
