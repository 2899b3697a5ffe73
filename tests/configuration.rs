//! Tests for configuration loading

use brokeeats::Config;
use brokeeats::config::LogFormat;
use temp_dir::TempDir;

#[test]
fn test_config_loads_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("missing.toml");

    let config = Config::load(Some(missing.to_string_lossy().into_owned()))?;

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.display.currency_symbol, "$");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("brokeeats.toml");
    std::fs::write(
        &path,
        r#"
[logging]
level = "debug"
format = "json"

[planner]
seed = 42

[display]
currency_symbol = "€"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.planner.seed, Some(42));
    assert_eq!(config.display.currency_symbol, "€");

    Ok(())
}

#[test]
fn test_partial_file_keeps_other_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("partial.toml");
    std::fs::write(&path, "[planner]\nseed = 7\n")?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.planner.seed, Some(7));
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.display.currency_symbol, "$");

    Ok(())
}

#[test]
fn test_unknown_log_format_fails_to_load() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("bad.toml");
    std::fs::write(&path, "[logging]\nformat = \"xml\"\n")?;

    assert!(Config::load(Some(path.to_string_lossy().into_owned())).is_err());

    Ok(())
}
