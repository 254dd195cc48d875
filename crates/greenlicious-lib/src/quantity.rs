//! Amounts bound to a unit.
//!
//! [`Quantity`] is an immutable `Copy` value: conversion and arithmetic return
//! new quantities, so a value handed to a vessel model can never be changed
//! behind the caller's back.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::units::{PhysicalDimension, Unit};

/// A numeric amount measured in a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    amount: f64,
    unit: Unit,
}

impl Quantity {
    pub const fn new(amount: f64, unit: Unit) -> Self {
        Self { amount, unit }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> PhysicalDimension {
        self.unit.dimension()
    }

    /// Express this quantity in `target`.
    pub fn convert(&self, target: Unit) -> Result<Quantity> {
        Ok(Quantity::new(self.amount_in(target)?, target))
    }

    /// The bare amount of this quantity expressed in `target`.
    pub fn amount_in(&self, target: Unit) -> Result<f64> {
        self.unit.convert(self.amount, target)
    }

    /// Sum of both quantities, in this quantity's unit.
    pub fn add(&self, other: &Quantity) -> Result<Quantity> {
        let other = other.amount_in(self.unit)?;
        Ok(Quantity::new(self.amount + other, self.unit))
    }

    /// Difference of both quantities, in this quantity's unit.
    pub fn subtract(&self, other: &Quantity) -> Result<Quantity> {
        let other = other.amount_in(self.unit)?;
        Ok(Quantity::new(self.amount - other, self.unit))
    }

    /// Multiply the amount by a dimensionless factor, keeping the unit.
    pub fn scale(&self, factor: f64) -> Quantity {
        Quantity::new(self.amount * factor, self.unit)
    }

    /// Compare against `other` after converting it into this quantity's unit.
    pub fn try_cmp(&self, other: &Quantity) -> Result<Ordering> {
        let other_amount = other.amount_in(self.unit)?;
        self.amount.partial_cmp(&other_amount).ok_or_else(|| {
            Error::quantity(
                "comparison",
                format!("{} and {} are not comparable", self, other),
            )
        })
    }

    pub fn greater_than(&self, other: &Quantity) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    /// Amount in `unit`, required to be finite and strictly positive.
    pub(crate) fn positive_amount_in(&self, unit: Unit, field: &'static str) -> Result<f64> {
        let value = self.checked_amount_in(unit, field)?;
        if value <= 0.0 {
            return Err(Error::quantity(
                field,
                format!("must be positive, got {}", self),
            ));
        }
        Ok(value)
    }

    /// Amount in `unit`, required to be finite and non-negative.
    pub(crate) fn non_negative_amount_in(&self, unit: Unit, field: &'static str) -> Result<f64> {
        let value = self.checked_amount_in(unit, field)?;
        if value < 0.0 {
            return Err(Error::quantity(
                field,
                format!("must not be negative, got {}", self),
            ));
        }
        Ok(value)
    }

    fn checked_amount_in(&self, unit: Unit, field: &'static str) -> Result<f64> {
        if !self.unit.is_convertible(unit) {
            return Err(Error::quantity(
                field,
                format!(
                    "expected a {:?} quantity, got {}",
                    unit.dimension(),
                    self
                ),
            ));
        }
        let value = self.amount_in(unit)?;
        if !value.is_finite() {
            return Err(Error::quantity(
                field,
                format!("must be finite, got {}", self),
            ));
        }
        Ok(value)
    }
}

/// Formats as `<amount> <abbreviation>`; a precision applies to the amount.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.amount)?,
            None => write!(f, "{}", self.amount)?,
        }
        if !self.unit.abbreviation().is_empty() {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}

/// Parses `"<amount><unit>"` with optional whitespace, e.g. `"1.5 t"`,
/// `"250km"` or `"0.5 kg CO2e"`.
impl FromStr for Quantity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let split = trimmed
            .char_indices()
            .find(|(i, c)| {
                !(c.is_ascii_digit()
                    || *c == '.'
                    || ((*c == '-' || *c == '+') && *i == 0)
                    || ((*c == 'e' || *c == 'E') && is_exponent(trimmed, *i)))
            })
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());

        let (number, unit) = trimmed.split_at(split);
        let amount: f64 = number.parse().map_err(|_| {
            Error::quantity("quantity", format!("'{s}' does not start with a number"))
        })?;
        let unit: Unit = unit.parse()?;
        Ok(Quantity::new(amount, unit))
    }
}

// `1e3km` carries an exponent, `5 kg CO2e` and `3eggs` do not.
fn is_exponent(s: &str, index: usize) -> bool {
    let bytes = s.as_bytes();
    index > 0
        && bytes[index - 1].is_ascii_digit()
        && bytes
            .get(index + 1)
            .map(|b| b.is_ascii_digit() || *b == b'-' || *b == b'+')
            .unwrap_or(false)
}
