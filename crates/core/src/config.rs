// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry configuration

use crate::error::ConfigError;
use crate::events::DispatchMode;
use serde::{Deserialize, Serialize};

/// Behavior knobs for a `Registry`
///
/// Loadable from TOML; every field is optional:
///
/// ```toml
/// dispatch = "isolate"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// What `publish` does when a handler fails
    pub dispatch: DispatchMode,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dispatch(mut self, dispatch: DispatchMode) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
