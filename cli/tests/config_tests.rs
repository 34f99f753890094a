//! Config file round-trips and layering

use minezero_cli::commands::config::{reset_at, set_at};
use minezero_cli::config::{Config, OutputFormat};
use minezero_core::environmental::{MineType, OffsetMode};
use std::fs;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.credit_price, 300.0);
    assert_eq!(config.offset_mode, OffsetMode::Combined);
    assert_eq!(config.output_format, OutputFormat::Table);
    assert_eq!(config.mine_type, None);
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cli").join("config.toml");

    let config = Config {
        output_format: OutputFormat::Json,
        credit_price: 425.5,
        offset_mode: OffsetMode::Solar,
        mine_type: Some(MineType::Underground),
        debug: true,
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "credit_price = 150.0\noffset_mode = \"trees\"\n").unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.credit_price, 150.0);
    assert_eq!(loaded.offset_mode, OffsetMode::Trees);
    assert_eq!(loaded.output_format, OutputFormat::Table);
}

#[test]
fn test_negative_price_in_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "credit_price = -1.0\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_reset_repairs_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "credit_price = -1.0\noffset_mode = \"solar\"\n").unwrap();
    assert!(Config::load_from(&path).is_err());

    let config = reset_at(&path).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_set_repairs_invalid_price() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "credit_price = -1.0\noffset_mode = \"solar\"\n").unwrap();

    let message = set_at(&path, "credit_price", "275").unwrap();
    assert_eq!(message, "Set credit price to: 275/t");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.credit_price, 275.0);
    assert_eq!(loaded.offset_mode, OffsetMode::Solar);
}

#[test]
fn test_set_rejects_bad_value_without_touching_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "credit_price = 150.0\n").unwrap();

    assert!(set_at(&path, "offset_mode", "wind").is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "credit_price = 150.0\n");
}
