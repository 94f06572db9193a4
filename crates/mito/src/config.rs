//! World configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest accepted grid side.
pub const MAX_DIMENSION: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width of the world grid
    pub width: usize,
    /// Height of the world grid
    pub height: usize,
    /// Seed for the leaf synthesis rolls
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            seed: 0,
        }
    }
}

impl WorldConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] for malformed input, [`Error::InvalidConfig`] from `validate`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// [`Error::InvalidConfig`] for a zero or oversized dimension.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(Error::InvalidConfig(format!("{name} must be positive")));
            }
            if value > MAX_DIMENSION {
                return Err(Error::InvalidConfig(format!(
                    "{name} {value} exceeds {MAX_DIMENSION}"
                )));
            }
        }
        Ok(())
    }
}
