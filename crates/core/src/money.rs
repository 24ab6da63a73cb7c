//! Money value object.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Monetary amount in smallest currency unit (e.g. paise, cents).
///
/// Amounts are unsigned: the domain never deals in negative money. The
/// currency tag travels separately as `CurrencyCode`; arithmetic here never
/// mixes currencies because callers only combine amounts from one catalog
/// snapshot at a time.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(amount: u64) -> Self {
        Self(amount)
    }

    pub fn minor(&self) -> u64 {
        self.0
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Extend a unit price to a line total (`price × quantity`).
    ///
    /// Returns `None` for non-positive quantities; totalling code treats that
    /// as a zero contribution. Saturates on overflow.
    pub fn line_total(self, quantity: i64) -> Option<Money> {
        if quantity <= 0 {
            return None;
        }
        Some(Money(self.0.saturating_mul(quantity as u64)))
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    /// Major units with two decimals: `12345` minor -> `"123.45"`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
