//! Radiative Forcing Index (RFI) for aviation emissions.
//!
//! The share of a flight spent near the stratosphere grows with distance and
//! so does the warming effect beyond the emitted CO2. The factor follows the
//! EcoTransIT table: 1.0 for flights up to 500 km, rising to 2.87 for flights
//! of 10 000 km and longer, linear in between.

use tracing::trace;

use crate::error::Result;
use crate::interpolation::{interpolate, Breakpoint, Extrapolation};
use crate::quantity::Quantity;
use crate::units::Unit;

/// Distance (km) to RFI factor breakpoints.
pub const RFI_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(500.0, 1.0),
    Breakpoint::new(750.0, 1.81),
    Breakpoint::new(1000.0, 2.18),
    Breakpoint::new(2000.0, 2.52),
    Breakpoint::new(4000.0, 2.73),
    Breakpoint::new(10000.0, 2.87),
];

/// RFI factor for a flight over `distance`.
///
/// # Errors
///
/// Fails if `distance` is not a distance quantity or is not strictly positive.
///
/// # Examples
///
/// ```
/// use greenlicious_lib::{rfi::rfi_factor, Quantity, Unit};
///
/// let factor = rfi_factor(&Quantity::new(1000.0, Unit::Kilometer)).unwrap();
/// assert_eq!(factor, 2.18);
/// ```
pub fn rfi_factor(distance: &Quantity) -> Result<f64> {
    let km = distance.positive_amount_in(Unit::Kilometer, "flight distance")?;
    let factor = interpolate(&RFI_BREAKPOINTS, km, Extrapolation::Clamp)?;
    trace!(distance_km = km, factor, "rfi factor");
    Ok(factor)
}
