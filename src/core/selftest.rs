//! Built-in checks for `greet` and `add`, runnable from the `selftest` binary
//! so a CI job can verify the program without a test harness.

use crate::core::arithmetic::add;
use crate::core::greeting::greet;
use crate::utils::error::{HelloError, Result};
use std::io::Write;

const PROPERTY_SAMPLES: [i64; 7] = [0, 1, -1, 5, -17, 123_456, -987_654_321];
const HOLDS: &str = "holds";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub description: String,
    pub expected: String,
    pub actual: String,
}

impl Check {
    pub fn new(description: impl Into<String>, expected: impl ToString, actual: impl ToString) -> Self {
        Self {
            description: description.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfTestReport {
    pub passed: usize,
}

fn commutativity() -> String {
    for &a in &PROPERTY_SAMPLES {
        for &b in &PROPERTY_SAMPLES {
            if add(a, b) != add(b, a) {
                return format!("add({a}, {b}) = {} but add({b}, {a}) = {}", add(a, b), add(b, a));
            }
        }
    }
    HOLDS.to_string()
}

fn identity() -> String {
    PROPERTY_SAMPLES
        .iter()
        .find(|&&a| add(a, 0) != a)
        .map(|&a| format!("add({a}, 0) = {}", add(a, 0)))
        .unwrap_or_else(|| HOLDS.to_string())
}

pub fn default_checks() -> Vec<Check> {
    vec![
        Check::new("greet()", "Hello, World!", greet(None)),
        Check::new("greet(\"Test\")", "Hello, Test!", greet(Some("Test"))),
        Check::new("add(2, 3)", 5, add(2, 3)),
        Check::new("add(0, 0)", 0, add(0, 0)),
        Check::new("add(-1, 1)", 0, add(-1, 1)),
        Check::new("add commutativity", HOLDS, commutativity()),
        Check::new("add identity", HOLDS, identity()),
    ]
}

/// Prints a line per check and stops at the first failure.
pub fn run_checks<W: Write>(checks: &[Check], out: &mut W) -> Result<SelfTestReport> {
    writeln!(out, "Running tests...")?;

    let mut passed = 0;
    for check in checks {
        if check.passed() {
            writeln!(out, "✓ {} test passed", check.description)?;
            passed += 1;
        } else {
            writeln!(out, "✗ {} test failed", check.description)?;
            out.flush()?;
            tracing::error!(
                "Check '{}' failed: expected {:?}, got {:?}",
                check.description,
                check.expected,
                check.actual
            );
            return Err(HelloError::AssertionFailed {
                check: check.description.clone(),
                expected: check.expected.clone(),
                actual: check.actual.clone(),
            });
        }
    }

    writeln!(out, "All tests passed! 🎉")?;
    out.flush()?;
    tracing::info!("{} checks passed", passed);
    Ok(SelfTestReport { passed })
}

pub fn run_self_test<W: Write>(out: &mut W) -> Result<SelfTestReport> {
    run_checks(&default_checks(), out)
}
