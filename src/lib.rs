pub mod config;
pub mod core;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::arithmetic::{add, try_add};
pub use core::demo::{demo_lines, run_demo, DemoConfig};
pub use core::greeting::{greet, DEFAULT_NAME};
pub use core::selftest::{run_self_test, SelfTestReport};
pub use utils::error::{HelloError, Result};
