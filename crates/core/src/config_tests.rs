// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::TempDir;

#[test]
fn empty_config_uses_demo_defaults() {
    let config = HarkConfig::from_toml_str("").unwrap();

    assert_eq!(config, HarkConfig::default());
    assert_eq!(config.register.name, "Ambrosio");
    assert_eq!(config.register.password, "1234");
    assert_eq!(config.register.email, "ambrosio_1234@hotmail.com");
    assert_eq!(config.classify.items, vec![1, 4, 7, 0, 12, 5, 43]);
    assert_eq!(config.classify.strategies, StrategyDef::default_lineup());
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config = HarkConfig::from_toml_str(
        r#"
[register]
name = "Beatriz"

[classify]
items = [3, 1, 2]
"#,
    )
    .unwrap();

    assert_eq!(config.register.name, "Beatriz");
    assert_eq!(config.register.email, "ambrosio_1234@hotmail.com");
    assert_eq!(config.classify.items, vec![3, 1, 2]);
    assert_eq!(config.classify.strategies, StrategyDef::default_lineup());
}

#[test]
fn strategies_parse_from_tagged_tables() {
    let config = HarkConfig::from_toml_str(
        r#"
[[classify.strategies]]
kind = "initial_index"
initial_index = 2

[[classify.strategies]]
kind = "remove_indices"
indices = [0, 1, 4]

[[classify.strategies]]
kind = "random"

[[classify.strategies]]
kind = "random"
seed = 25

[[classify.strategies]]
kind = "initial_index"

[[classify.strategies]]
kind = "black_hole"
"#,
    )
    .unwrap();

    assert_eq!(
        config.classify.strategies,
        vec![
            StrategyDef::InitialIndex { initial_index: 2 },
            StrategyDef::RemoveIndices {
                indices: vec![0, 1, 4]
            },
            StrategyDef::Random { seed: None },
            StrategyDef::Random { seed: Some(25) },
            StrategyDef::InitialIndex { initial_index: 5 },
            StrategyDef::BlackHole,
        ]
    );
}

#[test]
fn unknown_strategy_kind_is_a_parse_error() {
    let err = HarkConfig::from_toml_str(
        r#"
[[classify.strategies]]
kind = "bubble_sort"
"#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_field_is_a_parse_error() {
    let err = HarkConfig::from_toml_str(
        r#"
[register]
nickname = "amb"
"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("nickname"), "got: {}", err);
}

#[test]
fn load_reads_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("hark.toml");
    std::fs::write(&path, "[classify]\nitems = [9, 8]\n").unwrap();

    let config = HarkConfig::load(&path).unwrap();

    assert_eq!(config.classify.items, vec![9, 8]);
}

#[test]
fn load_missing_file_names_the_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.toml");

    let err = HarkConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
