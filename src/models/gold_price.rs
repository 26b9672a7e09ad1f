//! Gold price records and the validated three-tier price set.

use super::Karat;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Buy and sell price for one karat tier, in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldPrice {
    /// Tier this price applies to
    pub karat: Karat,
    /// Price the shop buys at
    pub buy: u64,
    /// Price the shop sells at
    pub sell: u64,
}

impl GoldPrice {
    /// Creates a price record
    #[must_use]
    pub const fn new(karat: Karat, buy: u64, sell: u64) -> Self {
        Self { karat, buy, sell }
    }
}

/// A complete price board: exactly one record for each of 18, 21 and 24 karat.
///
/// Prices are only ever replaced as a whole set, so this is the only shape the
/// facade accepts for writes. Stored boards deserialize through the same
/// check, so a partial or duplicated list never reads back as a `PriceSet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GoldPrice>", into = "Vec<GoldPrice>")]
pub struct PriceSet(Vec<GoldPrice>);

impl PriceSet {
    /// Validates and wraps a list of prices.
    ///
    /// # Errors
    /// Returns `Error::InvalidPrices` unless every karat tier appears exactly once.
    pub fn new(prices: Vec<GoldPrice>) -> Result<Self> {
        if prices.len() != Karat::ALL.len() {
            return Err(Error::InvalidPrices {
                message: format!("Expected {} tiers, got {}", Karat::ALL.len(), prices.len()),
            });
        }
        for karat in Karat::ALL {
            let count = prices.iter().filter(|p| p.karat == karat).count();
            if count != 1 {
                return Err(Error::InvalidPrices {
                    message: format!("Karat {karat} appears {count} times"),
                });
            }
        }
        Ok(Self(prices))
    }

    /// Price for a tier
    #[must_use]
    pub fn get(&self, karat: Karat) -> Option<&GoldPrice> {
        self.0.iter().find(|p| p.karat == karat)
    }

    /// Records in submission order
    #[must_use]
    pub fn as_slice(&self) -> &[GoldPrice] {
        &self.0
    }

    /// Unwraps into the underlying records
    #[must_use]
    pub fn into_vec(self) -> Vec<GoldPrice> {
        self.0
    }
}

impl TryFrom<Vec<GoldPrice>> for PriceSet {
    type Error = Error;

    fn try_from(prices: Vec<GoldPrice>) -> Result<Self> {
        Self::new(prices)
    }
}

impl From<PriceSet> for Vec<GoldPrice> {
    fn from(set: PriceSet) -> Self {
        set.0
    }
}
