//! Descriptor-family configuration.
//!
//! Engines that persist vocabularies usually record which descriptor family
//! built them. `DescriptorConfig` is that record: a small JSON document
//! naming the family and, optionally, its expected dimension.
//!
//! ```json
//! { "family": "sift64", "dimension": 64 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::descriptor::DescriptorFamily;
use crate::sift::FSift;

/// Errors from loading or validating a [`DescriptorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed, but internally inconsistent.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Supported descriptor families.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyKind {
    /// 128-dimensional SIFT.
    #[default]
    Sift128,
    /// 64-dimensional SIFT.
    Sift64,
}

impl FamilyKind {
    /// Descriptor length of this family.
    pub fn dimension(self) -> usize {
        self.family().dimension()
    }

    fn family(self) -> FSift {
        match self {
            FamilyKind::Sift128 => FSift::sift128(),
            FamilyKind::Sift64 => FSift::sift64(),
        }
    }
}

/// Which descriptor family to use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescriptorConfig {
    /// Descriptor family.
    pub family: FamilyKind,
    /// Expected descriptor length. When set it must agree with `family`.
    pub dimension: Option<usize>,
}

impl DescriptorConfig {
    /// Parses a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            family = ?config.family,
            "loaded descriptor config"
        );
        Ok(config)
    }

    /// Checks that an explicit `dimension` matches the family.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let expected = self.family.dimension();
        match self.dimension {
            Some(dim) if dim != expected => Err(ConfigError::Invalid(format!(
                "dimension {dim} does not match family {:?} (L = {expected})",
                self.family
            ))),
            _ => Ok(()),
        }
    }

    /// Validates and instantiates the configured family.
    pub fn build(&self) -> Result<FSift, ConfigError> {
        self.validate()?;
        let family = self.family.family();
        tracing::debug!(
            family = %family.name(),
            dimension = family.dimension(),
            "built descriptor family"
        );
        Ok(family)
    }
}
