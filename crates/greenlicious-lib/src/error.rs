use thiserror::Error;

use crate::units::Unit;

/// Convenient result alias for the greenlicious library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant except [`Error::Io`] describes an invalid argument handed to
/// the engine; see [`Error::is_invalid_argument`].
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when converting between units of different (or no) physical dimension.
    #[error("cannot convert {from:?} into {to:?}: the units describe different dimensions")]
    IncompatibleUnits { from: Unit, to: Unit },

    /// Raised when a quantity is outside the domain of a calculation.
    #[error("invalid {field}: {message}")]
    InvalidQuantity {
        field: &'static str,
        message: String,
    },

    /// Raised when an interpolation table is empty or not strictly ascending.
    #[error("invalid interpolation table: {message}")]
    InvalidTable { message: String },

    /// Raised when a consumption profile entry is negative or non-finite.
    #[error(
        "invalid consumption entry ({distance_km} km, {fuel_kg} kg): distance and fuel must be finite and non-negative"
    )]
    InvalidConsumptionEntry { distance_km: f64, fuel_kg: f64 },

    /// Raised when calculation parameters fail validation.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Raised when a unit name or abbreviation is not recognised.
    #[error("unknown unit: '{value}'")]
    UnknownUnit { value: String },

    /// Raised when a named enumeration value (route, landscape, ...) is not recognised.
    #[error("unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Raised when an airplane model could not be found in the catalog.
    #[error("unknown airplane model: {name}{}", format_suggestions(.suggestions))]
    UnknownAirplaneModel {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when airplane data fails validation.
    #[error("invalid airplane data: {message}")]
    AirplaneDataValidation { message: String },

    /// Raised when the same airplane model is defined twice.
    #[error("duplicate airplane model encountered: {name}")]
    DuplicateAirplaneModel { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for every error caused by the caller's arguments or data rather than the environment.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Error::Io(_))
    }

    pub(crate) fn quantity(field: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidQuantity {
            field,
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
