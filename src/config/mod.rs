pub mod toml_config;

use crate::core::demo::{DemoConfig, DEFAULT_DEMO_NAME, DEFAULT_LHS, DEFAULT_RHS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_single_line, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "hello-ci"))]
#[cfg_attr(feature = "cli", command(about = "Prints a greeting and a sum, for checking CI pipelines"))]
pub struct CliConfig {
    /// Name for the second greeting [default: GitHub Actions]
    #[cfg_attr(feature = "cli", arg(long))]
    pub name: Option<String>,

    /// Left operand of the addition [default: 2]
    #[cfg_attr(feature = "cli", arg(long, allow_negative_numbers = true))]
    pub lhs: Option<i64>,

    /// Right operand of the addition [default: 3]
    #[cfg_attr(feature = "cli", arg(long, allow_negative_numbers = true))]
    pub rhs: Option<i64>,

    /// Path to an optional TOML settings file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines on stderr"))]
    pub log_json: bool,
}

impl CliConfig {
    /// Merges flags over the settings file over built-in defaults.
    pub fn resolve(&self) -> Result<DemoConfig> {
        // 載入 TOML 配置 (若有指定)
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        Ok(self.merge(&file))
    }

    pub fn merge(&self, file: &TomlConfig) -> DemoConfig {
        // 命令列 > 設定檔 > 預設值
        DemoConfig {
            name: self
                .name
                .as_deref()
                .or(file.name())
                .unwrap_or(DEFAULT_DEMO_NAME)
                .to_string(),
            lhs: self.lhs.or(file.lhs()).unwrap_or(DEFAULT_LHS),
            rhs: self.rhs.or(file.rhs()).unwrap_or(DEFAULT_RHS),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // 檔案是否存在留給 resolve 檢查
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        // 名稱必須單行, 確保 stdout 維持三行
        if let Some(name) = &self.name {
            validate_single_line("name", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_demo() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.resolve().unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_str("[greeting]\nname = \"File\"\n[addition]\nlhs = 10\nrhs = 20\n")
            .unwrap();
        let cli = CliConfig {
            name: Some("Flag".to_string()),
            rhs: Some(-5),
            ..CliConfig::default()
        };
        let merged = cli.merge(&file);
        assert_eq!(merged.name, "Flag");
        assert_eq!(merged.lhs, 10);
        assert_eq!(merged.rhs, -5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let multiline = CliConfig {
            name: Some("a\nb".to_string()),
            ..CliConfig::default()
        };
        assert!(multiline.validate().is_err());

        let empty_path = CliConfig {
            config: Some(String::new()),
            ..CliConfig::default()
        };
        assert!(empty_path.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_negative_operands() {
        let config = CliConfig::try_parse_from(["hello-ci", "--lhs", "-1", "--rhs", "1"]).unwrap();
        assert_eq!(config.lhs, Some(-1));
        assert_eq!(config.rhs, Some(1));
    }
}
