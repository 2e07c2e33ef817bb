use crate::core::arithmetic::try_add;
use crate::core::greeting::greet;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const DEFAULT_DEMO_NAME: &str = "GitHub Actions";
pub const DEFAULT_LHS: i64 = 2;
pub const DEFAULT_RHS: i64 = 3;

/// Inputs for the three demo lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub name: String,
    pub lhs: i64,
    pub rhs: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DEMO_NAME.to_string(),
            lhs: DEFAULT_LHS,
            rhs: DEFAULT_RHS,
        }
    }
}

/// Default greeting, named greeting, then the addition, in that order.
pub fn demo_lines(config: &DemoConfig) -> Result<Vec<String>> {
    let sum = try_add(config.lhs, config.rhs)?;
    Ok(vec![
        greet(None),
        greet(Some(&config.name)),
        format!("{} + {} = {}", config.lhs, config.rhs, sum),
    ])
}

pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    tracing::debug!("Running demo with {:?}", config);

    let lines = demo_lines(config)?;
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    tracing::debug!("Wrote {} lines", lines.len());
    Ok(())
}
