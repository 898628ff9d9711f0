//! # Codec Configuration
//!
//! Limits applied by [`TokenCodec`](crate::token::TokenCodec) when decoding
//! tokens from untrusted sources. Deployments load this from the YAML
//! configuration of the door or service that accepts tokens.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default upper bound on the size of an encoded token.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 4096;

/// Durable token codec settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Inputs longer than this many bytes are rejected before parsing.
    pub max_token_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }
}

impl CodecConfig {
    /// Parse a `CodecConfig` from YAML text. Absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid YAML or unknown keys, and
    /// [`ConfigError::Invalid`] if `max_token_len` is zero.
    pub fn from_yaml_str(yaml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_token_len == 0 {
            return Err(ConfigError::Invalid(
                "max_token_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
