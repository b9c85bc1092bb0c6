//! Monetary amounts.

use core::fmt;
use core::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// A dollar amount, stored as a single-precision float.
///
/// Always finite. Negative amounts are representable; whether they are
/// acceptable is decided by the operation that receives them.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Dollars(f32);

impl Dollars {
    pub const ZERO: Dollars = Dollars(0.0);

    /// Build an amount from a float, rejecting `NaN` and infinities.
    pub fn new(amount: f32) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::invalid_argument(format!(
                "price must be a finite number, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    /// Whole-dollar amount. Handy for seeding and tests.
    pub const fn from_whole(dollars: i32) -> Self {
        Self(dollars as f32)
    }

    pub fn amount(self) -> f32 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl FromStr for Dollars {
    type Err = DomainError;

    /// Parses a bare number (`"12.5"`, `"-3"`, `"1e2"`). No currency sign, no
    /// surrounding whitespace. Values outside the `f32` range are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount: f32 = s
            .parse()
            .map_err(|e| DomainError::invalid_argument(format!("price {s:?}: {e}")))?;
        Self::new(amount)
    }
}

impl TryFrom<f32> for Dollars {
    type Error = DomainError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
