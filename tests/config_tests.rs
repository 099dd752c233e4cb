use pathquill::config::Config;
use pathquill::output::OutputFormat;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.format, OutputFormat::Plain);
    assert!(!config.dedupe);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_custom_config() {
    let config = Config {
        format: OutputFormat::Yaml,
        dedupe: true,
        log_level: "debug".to_string(),
    };

    assert_eq!(config.format, OutputFormat::Yaml);
    assert!(config.dedupe);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_config_path_ends_with_pathquill() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/pathquill/config.toml"));
    }
}

#[test]
fn test_load_from_missing_file_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_partial_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "format = \"json\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.format, OutputFormat::Json);
    assert!(!config.dedupe);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_load_from_invalid_file_reports_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "dedupe = \"sometimes\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Invalid config file"));
    assert!(message.contains("config.toml"));
}

#[test]
fn test_load_from_unreadable_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::create_dir(&path).unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Could not read config file"));
}

#[test]
fn test_config_serializes_to_toml() {
    let config = Config {
        dedupe: true,
        ..Config::default()
    };
    let text = toml::to_string(&config).unwrap();
    let reparsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(reparsed, config);
}

#[test]
fn test_invalid_file_falls_back_with_the_problem() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "dedupe = \"sometimes\"\n").unwrap();

    let (config, problem) = Config::load_from_or_default(&path);
    assert_eq!(config, Config::default());
    let problem = problem.expect("invalid file should be reported");
    assert!(format!("{:#}", problem).contains("config.toml"));
}

#[test]
fn test_valid_file_loads_without_problem() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "dedupe = true\nlog_level = \"debug\"\n").unwrap();

    let (config, problem) = Config::load_from_or_default(&path);
    assert!(problem.is_none());
    assert!(config.dedupe);
    assert_eq!(config.log_level, "debug");
}
