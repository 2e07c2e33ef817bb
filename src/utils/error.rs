use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Integer overflow: {lhs} + {rhs} does not fit in i64")]
    Overflow { lhs: i64, rhs: i64 },

    #[error("Check '{check}' failed: expected {expected:?}, got {actual:?}")]
    AssertionFailed {
        check: String,
        expected: String,
        actual: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Processing,
    Io,
    Test,
}

impl HelloError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HelloError::TomlError(_)
            | HelloError::ConfigError { .. }
            | HelloError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            HelloError::Overflow { .. } => ErrorCategory::Processing,
            HelloError::IoError(_) => ErrorCategory::Io,
            HelloError::AssertionFailed { .. } => ErrorCategory::Test,
        }
    }

    /// Process exit status for this error. Configuration problems exit with 2
    /// so CI logs can tell a bad invocation from a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Processing | ErrorCategory::Io | ErrorCategory::Test => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HelloError::IoError(e) => format!("Could not write output: {}", e),
            HelloError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            HelloError::ConfigError { message } => format!("Could not load configuration: {}", message),
            HelloError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            HelloError::Overflow { lhs, rhs } => {
                format!("{} + {} is too large to compute", lhs, rhs)
            }
            HelloError::AssertionFailed { check, .. } => format!("{} test failed", check),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HelloError::IoError(_) => "Check that stdout is writable (e.g. not a closed pipe)",
            HelloError::TomlError(_) => "Fix the syntax of the TOML file passed with --config",
            HelloError::ConfigError { .. } => "Make sure the file passed with --config exists and is readable",
            HelloError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
            HelloError::Overflow { .. } => "Use operands whose sum fits in a signed 64-bit integer",
            HelloError::AssertionFailed { .. } => "A regression was introduced in greet() or add()",
        }
    }
}

pub type Result<T> = std::result::Result<T, HelloError>;
