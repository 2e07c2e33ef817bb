use crate::utils::error::{HelloError, Result};
use crate::utils::validation::{validate_single_line, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and field may be left out.
///
/// ```toml
/// [greeting]
/// name = "CI"
///
/// [addition]
/// lhs = 40
/// rhs = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub greeting: Option<GreetingConfig>,
    pub addition: Option<AdditionConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GreetingConfig {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdditionConfig {
    pub lhs: Option<i64>,
    pub rhs: Option<i64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| HelloError::ConfigError {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        let config = Self::from_str(&content)?;
        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn name(&self) -> Option<&str> {
        self.greeting.as_ref()?.name.as_deref()
    }

    pub fn lhs(&self) -> Option<i64> {
        self.addition.as_ref()?.lhs
    }

    pub fn rhs(&self) -> Option<i64> {
        self.addition.as_ref()?.rhs
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = self.name() {
            validate_single_line("greeting.name", name)?;
        }
        Ok(())
    }
}
