//! Unit conversion and RFI lookup.

use anyhow::{Context, Result};

use greenlicious_lib::{rfi_factor, Quantity, Unit};

use crate::output::{ConversionReport, OutputFormat, RfiReport, Render};

/// Convert `quantity` into `target`.
pub fn handle_convert(quantity: Quantity, target: Unit, format: OutputFormat) -> Result<String> {
    let output = quantity
        .convert(target)
        .with_context(|| format!("cannot convert {quantity} to {}", target.abbreviation()))?;
    ConversionReport {
        input: quantity,
        output,
    }
    .render(format)
}

/// Report the radiative forcing index for a flight over `distance`.
pub fn handle_rfi(distance: Quantity, format: OutputFormat) -> Result<String> {
    let factor = rfi_factor(&distance).context("failed to compute RFI factor")?;
    RfiReport { distance, factor }.render(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_compatible_units() {
        let text = handle_convert(
            Quantity::new(1.5, Unit::Ton),
            Unit::Kilogram,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(text, "1.5 t = 1500 kg");
    }

    #[test]
    fn incompatible_conversion_keeps_library_error_as_source() {
        let err = handle_convert(
            Quantity::new(1.0, Unit::Kilometer),
            Unit::Kilogram,
            OutputFormat::Text,
        )
        .unwrap_err();
        assert!(err.to_string().contains("cannot convert 1 km to kg"));
        assert!(err
            .downcast_ref::<greenlicious_lib::Error>()
            .is_some_and(|e| e.is_invalid_argument()));
    }

    #[test]
    fn rfi_text_has_four_decimals() {
        let text = handle_rfi(Quantity::new(563.0, Unit::Kilometer), OutputFormat::Text).unwrap();
        assert_eq!(text, "RFI factor for 563 km: 1.2041");
    }
}
