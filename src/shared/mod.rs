//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod fmt;

pub use fmt::format_market_cap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CompanyId ───────────────────────────────────────────────────────────────

/// Newtype for company identifiers (e.g. `"cmp_8f2k1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyId(String);

impl CompanyId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CompanyId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CompanyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CompanyId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CompanyId(s.to_string()))
    }
}

impl Serialize for CompanyId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CompanyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CompanyId(s))
    }
}

// ─── Period ──────────────────────────────────────────────────────────────────

/// Chart time window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "1m")]
    Month1,
    #[serde(rename = "3m")]
    Month3,
    #[serde(rename = "6m")]
    Month6,
    #[serde(rename = "1y")]
    Year1,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month1 => "1m",
            Self::Month3 => "3m",
            Self::Month6 => "6m",
            Self::Year1 => "1y",
        }
    }

    /// Window length in days.
    pub fn days(&self) -> u32 {
        match self {
            Self::Month1 => 30,
            Self::Month3 => 90,
            Self::Month6 => 180,
            Self::Year1 => 365,
        }
    }

    /// All windows in selector order.
    pub fn all() -> [Period; 4] {
        [Self::Month1, Self::Month3, Self::Month6, Self::Year1]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
