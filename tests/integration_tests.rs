use hello_ci::utils::validation::Validate;
use hello_ci::{add, demo_lines, greet, run_self_test, CliConfig, DemoConfig, HelloError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_greeting_and_addition_scenarios() {
    assert_eq!(greet(None), "Hello, World!");
    assert_eq!(greet(Some("Test")), "Hello, Test!");
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(0, 0), 0);
    assert_eq!(add(-1, 1), 0);
}

#[test]
fn test_resolve_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("hello.toml");
    fs::write(&config_path, "[greeting]\nname = \"Pipeline\"\n").unwrap();

    let cli = CliConfig {
        config: Some(config_path.to_str().unwrap().to_string()),
        ..CliConfig::default()
    };
    assert!(cli.validate().is_ok());

    let demo = cli.resolve().unwrap();
    assert_eq!(
        demo,
        DemoConfig {
            name: "Pipeline".to_string(),
            ..DemoConfig::default()
        }
    );
    assert_eq!(
        demo_lines(&demo).unwrap(),
        vec!["Hello, World!", "Hello, Pipeline!", "2 + 3 = 5"]
    );
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("hello.toml");
    fs::write(&config_path, "[greeting\nname = ").unwrap();

    let cli = CliConfig {
        config: Some(config_path.to_str().unwrap().to_string()),
        ..CliConfig::default()
    };
    let err = cli.resolve().unwrap_err();
    assert!(matches!(err, HelloError::TomlError(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_self_test_report() {
    let mut out = Vec::new();
    let report = run_self_test(&mut out).unwrap();
    assert!(report.passed >= 5);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), report.passed + 2);
}
