// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use map_reduce_core::{ConfigError, PipelineConfig};
use std::fs;

fn temp_config(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "map-reduce-core-{}-{}.json",
        name,
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = PipelineConfig::default();
    assert_eq!(config.words_per_mapper, 20);
    assert_eq!(config.store_capacity, 65_536);
    assert_eq!(config.channel_capacity, 64);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let path = temp_config("partial", r#"{ "words_per_mapper": 5 }"#);
    let config = PipelineConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.words_per_mapper, 5);
    assert_eq!(config.store_capacity, 65_536);
}

#[test]
fn test_load_missing_file() {
    let err = PipelineConfig::load("/definitely/not/here/config.json").unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_load_malformed_file() {
    let path = temp_config("malformed", "{ not json");
    let err = PipelineConfig::load(&path).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_validate_rejects_zero_values() {
    for config in [
        PipelineConfig { words_per_mapper: 0, ..Default::default() },
        PipelineConfig { store_capacity: 0, ..Default::default() },
        PipelineConfig { channel_capacity: 0, ..Default::default() },
    ] {
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), "InvalidConfig");
    }
}
