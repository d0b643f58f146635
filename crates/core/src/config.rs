// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration for the demonstration flows
//!
//! Every section and field is optional. Missing values fall back to the
//! built-in demo literals.
//!
//! ```toml
//! [register]
//! name = "Ambrosio"
//! password = "1234"
//! email = "ambrosio_1234@hotmail.com"
//!
//! [classify]
//! items = [1, 4, 7, 0, 12, 5, 43]
//!
//! [[classify.strategies]]
//! kind = "initial_index"
//! initial_index = 2
//! ```

use crate::strategy::StrategyDef;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarkConfig {
    pub register: RegisterConfig,
    pub classify: ClassifyConfig,
}

/// The user created by the registration flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegisterConfig {
    pub name: String,
    pub password: String,
    pub email: String,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            name: "Ambrosio".to_string(),
            password: "1234".to_string(),
            email: "ambrosio_1234@hotmail.com".to_string(),
        }
    }
}

/// The list and strategies used by the classification flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifyConfig {
    pub items: Vec<i64>,
    pub strategies: Vec<StrategyDef>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            items: vec![1, 4, 7, 0, 12, 5, 43],
            strategies: StrategyDef::default_lineup(),
        }
    }
}

impl HarkConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
