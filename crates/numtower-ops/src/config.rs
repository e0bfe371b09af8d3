//! Library configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default container nesting limit
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("max_depth must be at least 1")]
    ZeroDepth,
}

/// Settings shared by every operation of a [`Math`](crate::registry::Math) instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    /// Deepest container nesting the mapper will descend into
    pub max_depth: usize,
    /// Decimal places kept on Precise results; `None` keeps full precision
    pub precise_scale: Option<u32>,
}

impl Default for MathConfig {
    fn default() -> Self {
        MathConfig { max_depth: DEFAULT_MAX_DEPTH, precise_scale: None }
    }
}

impl MathConfig {
    pub fn new() -> Self { Self::default() }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MathConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 { return Err(ConfigError::ZeroDepth); }
        Ok(())
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_precise_scale(mut self, scale: u32) -> Self {
        self.precise_scale = Some(scale);
        self
    }
}
