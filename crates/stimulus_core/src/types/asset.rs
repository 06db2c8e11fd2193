//! Asset class keys.
//!
//! Every scenario offers exactly one option per asset class, so the class set
//! is closed and modelled as an enum rather than free-form strings.
//!
//! # Examples
//!
//! ```
//! use stimulus_core::types::AssetClass;
//!
//! assert_eq!(AssetClass::Crypto.key(), "crypto");
//! assert_eq!(AssetClass::ALL.len(), 3);
//!
//! let bond: AssetClass = "Bond".parse().unwrap();
//! assert_eq!(bond, AssetClass::Bond);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// The three simulated asset classes offered in every frame.
///
/// Ordering of the variants is the canonical catalog order and determines the
/// population that column permutations are drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    /// Cryptocurrency
    Crypto,
    /// Equity (stocks)
    Equity,
    /// Government or corporate bond
    Bond,
}

impl AssetClass {
    /// All asset classes in canonical order.
    pub const ALL: [AssetClass; 3] = [AssetClass::Crypto, AssetClass::Equity, AssetClass::Bond];

    /// Lowercase key used in configuration files and exports.
    pub fn key(&self) -> &'static str {
        match self {
            AssetClass::Crypto => "crypto",
            AssetClass::Equity => "equity",
            AssetClass::Bond => "bond",
        }
    }

    /// Title-cased key used when annotating named labels.
    ///
    /// ```
    /// use stimulus_core::types::AssetClass;
    ///
    /// assert_eq!(AssetClass::Equity.title(), "Equity");
    /// ```
    pub fn title(&self) -> &'static str {
        match self {
            AssetClass::Crypto => "Crypto",
            AssetClass::Equity => "Equity",
            AssetClass::Bond => "Bond",
        }
    }

    /// Position of the class in [`AssetClass::ALL`].
    pub fn index(&self) -> usize {
        match self {
            AssetClass::Crypto => 0,
            AssetClass::Equity => 1,
            AssetClass::Bond => 2,
        }
    }
}

impl FromStr for AssetClass {
    type Err = CatalogError;

    /// Parses an asset class key (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CatalogError> {
        match s.trim().to_lowercase().as_str() {
            "crypto" => Ok(AssetClass::Crypto),
            "equity" => Ok(AssetClass::Equity),
            "bond" => Ok(AssetClass::Bond),
            _ => Err(CatalogError::UnknownAssetClass(s.to_string())),
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
