//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers here wrap human-assigned strings coming from the remote API
//! ("O1003", "U003", "P1"), not generated UUIDs. They deliberately admit the
//! empty string: order-entry drafts hold not-yet-filled values, and emptiness
//! is only rejected at composition time.

use serde::{Deserialize, Serialize};

/// Stock-keeping unit of a sellable product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

/// Human-assigned order identifier (order-level, distinct from any storage id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

/// Identifier of the user who placed an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// ISO-4217-like currency tag ("INR", "USD").
///
/// Not validated against a registry; the API treats it as an opaque label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

impl_string_newtype!(Sku);
impl_string_newtype!(OrderId);
impl_string_newtype!(UserId);
impl_string_newtype!(CurrencyCode);
