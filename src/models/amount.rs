//! Amount type for representing expense values
//!
//! Wraps a `Decimal` so totals are exact. Serialized as a plain JSON number
//! written digit for digit, so what is saved is exactly what was entered.
//!
//! `Decimal` holds at most 28 digits after the point and magnitudes up to
//! about 7.9e28; anything outside that is rejected as out of range rather
//! than rounded.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Currency symbols accepted in front of a typed amount
const CURRENCY_SYMBOLS: &[char] = &['₹', '$', '€', '£'];

/// A monetary amount of any sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create an amount from a decimal value
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Create an amount from an integer number of currency units
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Get the underlying decimal
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Lossy conversion for spreadsheet cells
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Parse an amount typed by the user
    ///
    /// Accepts formats: "10", "10.5", "-3.25", "+4", "₹10.50", "1e3", "5.".
    /// Rejects empty input and anything that is not a decimal literal, such
    /// as "nan" or "inf". Well-formed numbers that `Decimal` cannot hold
    /// ("1e30", "1e-40") are `OutOfRange`.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim_start_matches(CURRENCY_SYMBOLS).trim_start();
        let literal = DecimalLiteral::split(rest)
            .ok_or_else(|| AmountParseError::InvalidFormat(trimmed.to_string()))?;

        let value = literal
            .to_decimal()
            .ok_or_else(|| AmountParseError::OutOfRange(trimmed.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol and two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + *a)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number = serde_json::Number::from_str(&self.0.normalize().to_string())
            .map_err(ser::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        Amount::parse(&number.to_string()).map_err(de::Error::custom)
    }
}

/// An unsigned decimal literal split into its parts, underscores removed
struct DecimalLiteral {
    integer: String,
    fraction: String,
    exponent: Option<String>,
}

impl DecimalLiteral {
    /// Split `digits[.digits][e[+-]digits]`; `None` if `s` is not of that shape
    fn split(s: &str) -> Option<Self> {
        let (mantissa, exponent) = match s.split_once(|c: char| c == 'e' || c == 'E') {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (s, None),
        };

        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit() || c == '_');
        if !is_digits(integer) || !is_digits(fraction) {
            return None;
        }
        if !mantissa.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        let exponent = match exponent {
            None => None,
            Some(exp) => {
                let unsigned = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
                if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                Some(exp.to_string())
            }
        };

        let strip = |part: &str| part.chars().filter(|c| *c != '_').collect::<String>();
        Some(Self {
            integer: strip(integer),
            fraction: strip(fraction),
            exponent,
        })
    }

    /// Convert to a `Decimal`; `None` if it does not fit
    fn to_decimal(&self) -> Option<Decimal> {
        let integer = if self.integer.is_empty() { "0" } else { &self.integer };
        let mantissa = if self.fraction.is_empty() {
            integer.to_string()
        } else {
            format!("{}.{}", integer, self.fraction)
        };

        match &self.exponent {
            None => Decimal::from_str(&mantissa).ok(),
            Some(exp) => Decimal::from_scientific(&format!("{}e{}", mantissa, exp)).ok(),
        }
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
    /// A valid number too large, too small or too precise to store exactly
    OutOfRange(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is required"),
            AmountParseError::InvalidFormat(s) => {
                write!(f, "Invalid amount '{}'. Must be a number", s)
            }
            AmountParseError::OutOfRange(s) => write!(
                f,
                "Amount '{}' is out of range. Use at most 28 decimal places and a value below 7.9e28",
                s
            ),
        }
    }
}

impl std::error::Error for AmountParseError {}
