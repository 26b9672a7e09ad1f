//! Karat tiers - the three gold purity classes prices and products are keyed by.

use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gold purity tier. Serialized as the bare number (`18`, `21`, `24`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub enum Karat {
    /// 18 karat (75% gold)
    K18,
    /// 21 karat (87.5% gold)
    #[default]
    K21,
    /// 24 karat (pure gold)
    K24,
}

impl Karat {
    /// Every tier, highest purity first.
    pub const ALL: [Self; 3] = [Self::K24, Self::K21, Self::K18];

    /// Numeric karat value
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::K18 => 18,
            Self::K21 => 21,
            Self::K24 => 24,
        }
    }
}

impl TryFrom<u16> for Karat {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            18 => Ok(Self::K18),
            21 => Ok(Self::K21),
            24 => Ok(Self::K24),
            other => Err(Error::InvalidKarat { value: other }),
        }
    }
}

impl From<Karat> for u16 {
    fn from(karat: Karat) -> Self {
        karat.value()
    }
}

impl fmt::Display for Karat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.value())
    }
}
