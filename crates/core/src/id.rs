//! Strongly-typed identifiers used across the inventory model.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Product identifier (the inventory key, e.g. a SKU).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::borrow::Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_string() {
        let id = ProductId::new("SKU001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"SKU001\"");
        let back: ProductId = serde_json::from_str("\"SKU001\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn orders_lexicographically() {
        let mut ids = vec![ProductId::new("SKU003"), ProductId::new("SKU001"), ProductId::new("SKU002")];
        ids.sort();
        let ids: Vec<&str> = ids.iter().map(ProductId::as_str).collect();
        assert_eq!(ids, ["SKU001", "SKU002", "SKU003"]);
    }
}
