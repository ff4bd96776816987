//! Catalog ordering and entry-selection predicates
//!
//! Both are closed sets resolved by name: the sort order rearranges the
//! catalog (and with it the assembler's tie-break preference), while a
//! selection rule decides which entries an operation such as
//! [`Catalog::derive_filtered`](crate::catalog::Catalog::derive_filtered)
//! touches.

use std::str::FromStr;

use crate::catalog::entry::TileEntry;
use crate::io::error::{MosaicError, Result};

/// Names accepted by [`CatalogOrder::from_str`]
pub const KNOWN_ORDERS: &str = "label usage";

/// Names accepted by [`SelectionRule::from_str`]
pub const KNOWN_RULES: &str = "all underived";

/// Label suffix marking tiles produced by `derive_filtered`
pub const DERIVED_SUFFIX: &str = "+derived";

/// How to sort the catalog's entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrder {
    /// Lexicographic by canvas label
    ByLabel,
    /// Ascending by placement count
    ByUsage,
}

impl CatalogOrder {
    /// Sort `entries` in place according to this order
    ///
    /// The sort is stable, so entries that compare equal keep their
    /// relative catalog position.
    pub fn sort(self, entries: &mut [TileEntry]) {
        match self {
            Self::ByLabel => {
                entries.sort_by(|a, b| a.canvas().label().cmp(b.canvas().label()));
            }
            Self::ByUsage => entries.sort_by_key(TileEntry::used),
        }
    }
}

impl FromStr for CatalogOrder {
    type Err = MosaicError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "label" => Ok(Self::ByLabel),
            "usage" => Ok(Self::ByUsage),
            _ => Err(MosaicError::UnknownVariant {
                kind: "catalog order",
                name: name.to_string(),
                known: KNOWN_ORDERS,
            }),
        }
    }
}

/// Predicate deciding which catalog entries an operation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    /// Every entry passes
    All,
    /// Only entries that are not themselves derived copies
    Underived,
}

impl SelectionRule {
    /// Whether `entry` passes this rule
    pub fn accepts(self, entry: &TileEntry) -> bool {
        match self {
            Self::All => true,
            Self::Underived => !entry.canvas().label().contains(DERIVED_SUFFIX),
        }
    }
}

impl FromStr for SelectionRule {
    type Err = MosaicError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "all" => Ok(Self::All),
            "underived" => Ok(Self::Underived),
            _ => Err(MosaicError::UnknownVariant {
                kind: "selection rule",
                name: name.to_string(),
                known: KNOWN_RULES,
            }),
        }
    }
}
