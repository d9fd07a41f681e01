//! Order identifiers.
//!
//! Order IDs come straight from the input file (`MW001`, `MW002`, …) and are
//! echoed verbatim into the results file, so they stay strings rather than
//! being interned to integers.

use std::fmt;

/// The caller-assigned identifier of an order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OrderId(pub String);

impl OrderId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        OrderId(id.to_owned())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        OrderId(id)
    }
}
