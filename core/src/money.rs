//! Money represented as cents.
//!
//! Prices and order totals are exact integers of cents internally and decimal
//! dollar numbers on the wire, so a 29.99 book ordered three times totals
//! exactly 89.97.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Money amount in cents (positive or negative)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Zero dollars
    pub const ZERO: Self = Self(0);

    /// Creates a new money amount from cents
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates a new money amount from a decimal dollar value, rounded to the
    /// nearest cent
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // dollar inputs are far below i64 cents range
    pub fn from_dollars(dollars: f64) -> Self {
        Self((dollars * 100.0).round() as i64)
    }

    /// Returns the value in cents
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns the value in dollars (as floating point, for display/wire)
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // i64 to f64 precision loss is acceptable for display
    pub fn dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whether this amount is below zero
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, qty: i64) -> Self {
        Self(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.dollars())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.dollars())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        if !dollars.is_finite() {
            return Err(serde::de::Error::custom("money amount must be finite"));
        }
        Ok(Self::from_dollars(dollars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line_total() {
        let price = Money::from_cents(2999);
        let total = price * 3;
        assert_eq!(total, Money::from_cents(8997));
        assert!((total.dollars() - 89.97).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_dollars_rounds_to_cents() {
        assert_eq!(Money::from_dollars(29.99).cents(), 2999);
        assert_eq!(Money::from_dollars(0.005).cents(), 1);
        assert_eq!(Money::from_dollars(-1.25).cents(), -125);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_cents(100), Money::from_cents(250)];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 350);
    }

    #[test]
    fn test_serde_round_trip() {
        let price = Money::from_cents(1250);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "12.5");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(2999).to_string(), "$29.99");
    }
}
