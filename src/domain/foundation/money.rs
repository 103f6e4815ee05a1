//! Money value object held in minor units.
//!
//! The API speaks major units (`"price": 12.5`), the payment processor and
//! the stores speak cents. All conversions go through this type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::ValidationError;

/// Non-negative amount of money in minor units (cents) of a 2-decimal currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates an amount from minor units.
    pub fn from_cents(cents: i64) -> Result<Self, ValidationError> {
        if cents < 0 {
            return Err(ValidationError::out_of_range("price", 0, i64::MAX, cents));
        }
        Ok(Self(cents))
    }

    /// Creates an amount from major units, rounding to the nearest cent.
    pub fn from_major(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::invalid_format("price", "must be a finite number"));
        }
        let cents = (amount * 100.0).round();
        if cents < 0.0 || cents > i64::MAX as f64 {
            return Err(ValidationError::invalid_format(
                "price",
                format!("{} is not a valid amount", amount),
            ));
        }
        Ok(Self(cents as i64))
    }

    /// Returns the amount in minor units.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount in major units, exact to two decimal places.
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_major(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_major_converts_to_cents() {
        assert_eq!(Money::from_major(25.0).unwrap().cents(), 2500);
        assert_eq!(Money::from_major(12.5).unwrap().cents(), 1250);
    }

    #[test]
    fn from_major_rounds_float_noise() {
        // 0.1 + 0.2 is not exactly 0.3 in binary floating point
        assert_eq!(Money::from_major(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_major(19.999).unwrap().cents(), 2000);
    }

    #[test]
    fn from_major_rejects_negative_and_non_finite() {
        assert!(Money::from_major(-1.0).is_err());
        assert!(Money::from_major(f64::NAN).is_err());
        assert!(Money::from_major(f64::INFINITY).is_err());
    }

    #[test]
    fn from_cents_rejects_negative() {
        assert!(Money::from_cents(-5).is_err());
        assert_eq!(Money::from_cents(5).unwrap().cents(), 5);
    }

    #[test]
    fn sum_adds_amounts() {
        let total: Money = [1050, 250, 1]
            .into_iter()
            .map(|c| Money::from_cents(c).unwrap())
            .sum();
        assert_eq!(total.cents(), 1301);
        assert_eq!(total.to_string(), "13.01");
    }

    #[test]
    fn serde_uses_major_units() {
        let money: Money = serde_json::from_str("14.5").unwrap();
        assert_eq!(money.cents(), 1450);
        assert_eq!(serde_json::to_string(&money).unwrap(), "14.5");
    }

    #[test]
    fn serde_rejects_negative() {
        let result: Result<Money, _> = serde_json::from_str("-3");
        assert!(result.is_err());
    }
}
