use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use greenlicious_cli::commands::airplanes::{handle_list_airplanes, load_catalog};
use greenlicious_cli::commands::convert::{handle_convert, handle_rfi};
use greenlicious_cli::commands::estimate::{
    handle_air, handle_rail, handle_sea, AirArgs, RailArgs, SeaArgs,
};
use greenlicious_cli::output::OutputFormat;
use greenlicious_lib::{Quantity, Unit};

#[derive(Parser, Debug)]
#[command(author, version, about = "Unit conversion and transport CO2e estimates")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// CSV file with additional airplane models.
    #[arg(long, env = "GREENLICIOUS_AIRPLANE_DATA", global = true)]
    airplane_data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a quantity into another unit, e.g. `convert "1.5 t" kg`.
    Convert {
        /// Quantity with unit, e.g. "1.5 t".
        quantity: Quantity,
        /// Target unit name or abbreviation.
        unit: Unit,
    },
    /// Print the radiative forcing index for a flight distance.
    Rfi {
        /// Flight distance, e.g. "2783 km".
        distance: Quantity,
    },
    /// List the airplane models available for `air`.
    Airplanes,
    /// Estimate emissions of air freight.
    Air(AirArgs),
    /// Estimate emissions of container ship freight.
    Sea(SeaArgs),
    /// Estimate emissions of electric train freight.
    Rail(RailArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let format = cli.format;

    let output = match &cli.command {
        Command::Convert { quantity, unit } => handle_convert(*quantity, *unit, format)?,
        Command::Rfi { distance } => handle_rfi(*distance, format)?,
        Command::Airplanes => {
            let catalog = load_catalog(cli.airplane_data.as_deref())?;
            handle_list_airplanes(&catalog, format)?
        }
        Command::Air(args) => {
            let catalog = load_catalog(cli.airplane_data.as_deref())?;
            handle_air(&catalog, args, format)?
        }
        Command::Sea(args) => handle_sea(args, format)?,
        Command::Rail(args) => handle_rail(args, format)?,
    };

    println!("{output}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
