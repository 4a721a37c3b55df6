//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so monthly totals add up exactly.
//! User input is parsed as exact decimal text and may carry at most two
//! fractional digits. On disk an amount is a plain JSON number in currency
//! units (`12.5`), which keeps the data file readable and compatible with
//! hand edits.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::LedgerError;

/// Largest accepted magnitude in cents (10^15 currency units)
const MAX_CENTS: i64 = 100_000_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use pocket_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
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

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Amount in currency units as a float (for ratios and serialization)
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert a float amount in currency units, rounding to the nearest cent
    ///
    /// Only used for amounts read back from the data file.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Parse a money amount from user-entered text
    ///
    /// Accepts any finite decimal number: "10.50", "-10.5", "+3", "1e3", ".25".
    /// The value must be a whole number of cents, so "12.345" is rejected
    /// rather than rounded, while "1.50000" and "1.5e-1" are fine. The sign is
    /// preserved; callers decide whether a negative amount is acceptable.
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        let invalid = || LedgerError::InvalidAmount(s.to_string());
        let trimmed = s.trim();

        // Rejects anything that isn't a number, plus "inf" and "NaN"
        let value: f64 = trimmed.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        decimal_to_cents(trimmed).map(Self).ok_or_else(invalid)
    }

    /// Format with a currency symbol, e.g. `€1234.50` or `$-12.34`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            symbol,
            sign,
            self.units().abs(),
            self.cents_part()
        )
    }
}

/// Exact cents for decimal text already known to parse as a finite f64
///
/// Returns `None` for sub-cent precision or a magnitude above `MAX_CENTS`.
fn decimal_to_cents(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&unsigned[..pos], unsigned[pos + 1..].parse::<i32>().ok()?),
        None => (unsigned, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // cents = significant digits * 10^scale
    let digits = format!("{}{}", whole, fraction);
    let significant = digits.trim_end_matches('0');
    let trailing_zeros = i32::try_from(digits.len() - significant.len()).ok()?;
    let fraction_len = i32::try_from(fraction.len()).ok()?;
    let scale = exponent
        .checked_sub(fraction_len)?
        .checked_add(2)?
        .checked_add(trailing_zeros)?;

    let significant = significant.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0);
    }
    if scale < 0 {
        return None;
    }

    let mut cents: i64 = significant.parse().ok()?;
    for _ in 0..scale {
        cents = cents.checked_mul(10)?;
    }
    if cents > MAX_CENTS {
        return None;
    }

    Some(if negative { -cents } else { cents })
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", value)))
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
