//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are non-negative by construction and carry no currency code: the
//! storefront sells in Argentine pesos only, so formatting is fixed to the
//! es-AR convention (`.` for thousands, `,` for decimals) with a `$` prefix.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative amount in Argentine pesos.
///
/// ## Examples
///
/// ```
/// use magma_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::from(15000)).unwrap();
/// assert_eq!(price.to_string(), "$15.000");
///
/// assert!(Price::new(Decimal::from(-5)).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether the amount is strictly above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero()
    }
}

/// Insert `.` thousands separators into a plain digit run.
fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Price {
    /// Format as `$` plus the es-AR grouped amount, e.g. `$15.000`.
    ///
    /// This is a pure function of the numeric amount.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = self.0.to_string();
        match plain.split_once('.') {
            Some((integer, fraction)) => {
                write!(f, "${},{fraction}", group_thousands(integer))
            }
            None => write!(f, "${}", group_thousands(&plain)),
        }
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;

    // Sum of non-negatives stays non-negative.
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
