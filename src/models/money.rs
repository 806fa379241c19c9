//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so totals never accumulate
//! floating-point drift. On the wire an amount is a plain JSON number in whole
//! currency units (`2500.5`), which is what the persisted ledger and export
//! files carry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Largest magnitude, in cents, that a JSON number carries exactly
    pub const MAX_CENTS: i64 = (1 << 53) - 1;

    /// Create a Money amount from a decimal number, rounding to the nearest cent
    ///
    /// Returns `None` for NaN, infinities, and values outside the i64 cent range.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a Money amount from a decimal number that is already a whole
    /// number of cents
    ///
    /// Unlike [`Money::from_decimal`] nothing is rounded away: sub-cent values
    /// and magnitudes above [`Money::MAX_CENTS`] are errors.
    pub fn from_decimal_exact(value: f64) -> Result<Self, DecimalAmountError> {
        if !value.is_finite() {
            return Err(DecimalAmountError::NotFinite);
        }
        let scaled = value * 100.0;
        let cents = scaled.round();
        if cents.abs() > Self::MAX_CENTS as f64 {
            return Err(DecimalAmountError::OutOfRange(value));
        }
        // f64 cannot hold 0.29 * 100 exactly, so allow a few ulps of slack
        let tolerance = (cents.abs() * f64::EPSILON * 4.0).max(1e-6);
        if (scaled - cents).abs() > tolerance {
            return Err(DecimalAmountError::SubCent(value));
        }
        Ok(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Get the amount as a decimal number of currency units
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse a money amount from raw user input
    ///
    /// Accepts "10.50", "-10.50", "+3", "10", ".5" and exponent forms such as
    /// "1e3" or "2.5E-1". The value must be a whole number of cents: "10.005"
    /// is rejected, while "10.500" is fine. Currency symbols, NaN, infinities
    /// and trailing garbage are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match rest.find(|c: char| c == 'e' || c == 'E') {
            Some(i) => {
                let exponent: i32 = rest[i + 1..].parse().map_err(|_| invalid())?;
                (&rest[..i], i64::from(exponent))
            }
            None => (rest, 0),
        };

        let (units_str, fraction_str) = match mantissa.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (mantissa, ""),
        };

        if units_str.is_empty() && fraction_str.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(units_str) || !all_digits(fraction_str) {
            return Err(invalid());
        }

        // value = 0.<digits> * 10^point
        let joined = format!("{}{}", units_str, fraction_str);
        let significant = joined.trim_start_matches('0');
        let point = units_str.len() as i64 + exponent - (joined.len() - significant.len()) as i64;
        let significant = significant.trim_end_matches('0');
        if significant.is_empty() {
            return Ok(Self::zero());
        }

        let padding = point + 2 - significant.len() as i64;
        if padding < 0 {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }
        if significant.len() as i64 + padding > 19 {
            return Err(invalid());
        }

        let cents: i64 = format!("{}{}", significant, "0".repeat(padding as usize))
            .parse()
            .map_err(|_| invalid())?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol prefix and exactly two fractional digits
    ///
    /// The symbol always leads, so negative amounts render as `$-60.00`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal_exact(value).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    TooPrecise(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "no amount given"),
            MoneyParseError::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "'{}' has more than two decimal places", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

/// Why a stored decimal amount was refused
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecimalAmountError {
    NotFinite,
    OutOfRange(f64),
    SubCent(f64),
}

impl fmt::Display for DecimalAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite => write!(f, "amount is not a finite number"),
            Self::OutOfRange(v) => write!(f, "amount out of range: {}", v),
            Self::SubCent(v) => write!(f, "amount {} has more than two decimal places", v),
        }
    }
}

impl std::error::Error for DecimalAmountError {}
