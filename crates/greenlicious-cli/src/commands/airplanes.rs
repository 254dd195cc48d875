//! Airplane catalog loading and listing.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use greenlicious_lib::AirplaneCatalog;

use crate::output::{AirplaneSummary, OutputFormat, Render};

/// Standard models, extended with the models in `extra` when given.
pub fn load_catalog(extra: Option<&Path>) -> Result<AirplaneCatalog> {
    let mut catalog = AirplaneCatalog::standard();
    if let Some(path) = extra {
        let custom = AirplaneCatalog::from_path(path)
            .with_context(|| format!("failed to load airplane data from {}", path.display()))?;
        catalog
            .merge(custom)
            .with_context(|| format!("airplane data in {} clashes with the catalog", path.display()))?;
    }
    debug!(models = catalog.len(), "airplane catalog ready");
    Ok(catalog)
}

/// List every airplane in the catalog.
pub fn handle_list_airplanes(catalog: &AirplaneCatalog, format: OutputFormat) -> Result<String> {
    let summaries: Vec<AirplaneSummary> = catalog
        .entries_sorted()
        .into_iter()
        .map(AirplaneSummary::from)
        .collect();
    summaries.render(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_standard_models_by_default() {
        let catalog = load_catalog(None).unwrap();
        let text = handle_list_airplanes(&catalog, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Available airplanes (6):"));
        assert!(text.contains("P_FOKKER100"));
    }

    #[test]
    fn missing_override_file_is_reported_with_path() {
        let err = load_catalog(Some(Path::new("/nonexistent/airplanes.csv"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/airplanes.csv"));
    }
}
