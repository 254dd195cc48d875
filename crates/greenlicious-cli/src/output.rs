//! Output formatting for command results.
//!
//! Every command builds a serializable report and renders it either as
//! aligned text or as pretty-printed JSON.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use greenlicious_lib::vessel::CatalogEntry;
use greenlicious_lib::{Quantity, VesselKind};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Result of a single-leg emission estimate.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub vessel: VesselKind,
    pub description: String,
    pub weight: Quantity,
    pub distance: Quantity,
    pub energy: Quantity,
    pub co2e: Quantity,
    pub co2e_per_km: Quantity,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub input: Quantity,
    pub output: Quantity,
}

#[derive(Debug, Clone, Serialize)]
pub struct RfiReport {
    pub distance: Quantity,
    pub factor: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AirplaneSummary {
    pub name: String,
    pub size: String,
    pub seats: u32,
    pub max_range_km: u32,
    pub max_payload_kg: u32,
    pub profile_entries: usize,
}

impl From<&CatalogEntry> for AirplaneSummary {
    fn from(entry: &CatalogEntry) -> Self {
        let spec = &entry.specification;
        Self {
            name: entry.name.clone(),
            size: spec.size.to_string(),
            seats: spec.seats,
            max_range_km: spec.max_range_km,
            max_payload_kg: spec.max_payload_kg,
            profile_entries: spec.consumption.len(),
        }
    }
}

/// Text or JSON rendering of a report.
pub trait Render: Serialize {
    fn text(&self) -> String;

    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.text()),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("failed to serialize output as JSON")
            }
        }
    }
}

impl Render for EstimateReport {
    fn text(&self) -> String {
        let energy_label = match self.vessel {
            VesselKind::Rail => "Energy",
            VesselKind::Air | VesselKind::Sea => "Fuel",
        };
        [
            format!("Transport:   {} ({})", self.vessel, self.description),
            format!("Weight:      {}", self.weight),
            format!("Distance:    {}", self.distance),
            format!("{energy_label:<13}{:.3}", self.energy),
            format!("CO2e:        {:.3}", self.co2e),
            format!("CO2e per km: {:.6}", self.co2e_per_km),
        ]
        .join("\n")
    }
}

impl Render for ConversionReport {
    fn text(&self) -> String {
        format!("{} = {}", self.input, self.output)
    }
}

impl Render for RfiReport {
    fn text(&self) -> String {
        format!("RFI factor for {}: {:.4}", self.distance, self.factor)
    }
}

impl Render for Vec<AirplaneSummary> {
    fn text(&self) -> String {
        if self.is_empty() {
            return "No airplanes available in catalog.".to_string();
        }

        let mut lines = vec![
            format!("Available airplanes ({}):", self.len()),
            format!(
                "{:<16} {:<7} {:>6} {:>10} {:>13} {:>8}",
                "Name", "Size", "Seats", "Range (km)", "Payload (kg)", "Entries"
            ),
        ];
        for plane in self {
            lines.push(format!(
                "{:<16} {:<7} {:>6} {:>10} {:>13} {:>8}",
                plane.name,
                plane.size,
                plane.seats,
                plane.max_range_km,
                plane.max_payload_kg,
                plane.profile_entries
            ));
        }
        lines.join("\n")
    }
}
