//! Display preferences and the built-in background pattern catalog.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Upper bound for the background opacity
pub const MAX_BACKGROUND_OPACITY: f64 = 0.3;

/// A selectable background texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Texture URL
    pub url: &'static str,
}

/// Built-in background textures. The first one is the default.
pub const PATTERNS: [Pattern; 6] = [
    Pattern {
        id: "arabesque",
        name: "Arabesque",
        url: "https://www.transparenttextures.com/patterns/arabesque.png",
    },
    Pattern {
        id: "scales",
        name: "Dragon Scales",
        url: "https://www.transparenttextures.com/patterns/black-scales.png",
    },
    Pattern {
        id: "diamond",
        name: "Tufted Diamond",
        url: "https://www.transparenttextures.com/patterns/black-thread.png",
    },
    Pattern {
        id: "leather",
        name: "Black Leather",
        url: "https://www.transparenttextures.com/patterns/black-leather.png",
    },
    Pattern {
        id: "carbon",
        name: "Carbon Fibre",
        url: "https://www.transparenttextures.com/patterns/carbon-fibre.png",
    },
    Pattern {
        id: "wood",
        name: "Burnt Wood",
        url: "https://www.transparenttextures.com/patterns/purty-wood.png",
    },
];

/// Singleton display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPreferences {
    /// Background texture URL
    pub background_pattern: String,
    /// Background opacity in `[0, 0.3]`
    pub background_opacity: f64,
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            background_pattern: PATTERNS[0].url.to_string(),
            background_opacity: 0.03,
        }
    }
}

impl AppPreferences {
    /// Checks the opacity range.
    ///
    /// # Errors
    /// Returns `Error::InvalidPreferences` when the opacity is outside `[0, 0.3]`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=MAX_BACKGROUND_OPACITY).contains(&self.background_opacity) {
            return Err(Error::InvalidPreferences {
                message: format!(
                    "Background opacity must be within 0..={MAX_BACKGROUND_OPACITY}, got {}",
                    self.background_opacity
                ),
            });
        }
        Ok(())
    }
}
