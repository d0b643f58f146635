// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative classifier descriptions for config files and the CLI

use super::{
    BlackHoleClassifier, Classifier, InitialIndexClassifier, RandomClassifier,
    RemoveIndicesClassifier, ReversedClassifier, SortingClassifier,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors parsing a strategy from its command-line form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyParseError {
    #[error("unknown strategy '{0}'")]
    UnknownKind(String),
    #[error("invalid argument '{value}' for strategy '{kind}': expected {expected}")]
    InvalidArgument {
        kind: String,
        value: String,
        expected: &'static str,
    },
    #[error("strategy '{0}' takes no argument")]
    UnexpectedArgument(String),
}

/// A classifier described by kind and parameters
///
/// In TOML: `{ kind = "initial_index", initial_index = 2 }`. On the command
/// line: `kind[:argument]`, e.g. `random:7`, `remove_indices:0,1,4`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyDef {
    Reversed,
    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
    Sorting,
    RemoveIndices {
        #[serde(default)]
        indices: Vec<usize>,
    },
    InitialIndex {
        #[serde(default = "default_initial_index")]
        initial_index: usize,
    },
    BlackHole,
}

fn default_initial_index() -> usize {
    InitialIndexClassifier::DEFAULT_INDEX
}

impl StrategyDef {
    /// The lineup run by `hark classify` when nothing is configured
    pub fn default_lineup() -> Vec<StrategyDef> {
        vec![
            StrategyDef::Random { seed: Some(2) },
            StrategyDef::BlackHole,
            StrategyDef::Reversed,
            StrategyDef::Sorting,
            StrategyDef::RemoveIndices {
                indices: vec![0, 1, 4],
            },
            StrategyDef::InitialIndex { initial_index: 2 },
            StrategyDef::Random { seed: Some(25) },
        ]
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StrategyDef::Reversed => "reversed",
            StrategyDef::Random { .. } => "random",
            StrategyDef::Sorting => "sorting",
            StrategyDef::RemoveIndices { .. } => "remove_indices",
            StrategyDef::InitialIndex { .. } => "initial_index",
            StrategyDef::BlackHole => "black_hole",
        }
    }

    /// Instantiate the described classifier
    pub fn build<T: Ord + Clone + 'static>(&self) -> Box<dyn Classifier<T>> {
        match self {
            StrategyDef::Reversed => Box::new(ReversedClassifier),
            StrategyDef::Random { seed } => Box::new(RandomClassifier { seed: *seed }),
            StrategyDef::Sorting => Box::new(SortingClassifier),
            StrategyDef::RemoveIndices { indices } => {
                Box::new(RemoveIndicesClassifier::new(indices.clone()))
            }
            StrategyDef::InitialIndex { initial_index } => {
                Box::new(InitialIndexClassifier::new(*initial_index))
            }
            StrategyDef::BlackHole => Box::new(BlackHoleClassifier),
        }
    }
}

impl FromStr for StrategyDef {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = match s.split_once(':') {
            Some((kind, arg)) => (kind.trim(), Some(arg.trim())),
            None => (s.trim(), None),
        };

        let invalid = |expected: &'static str| StrategyParseError::InvalidArgument {
            kind: kind.to_string(),
            value: arg.unwrap_or_default().to_string(),
            expected,
        };
        let no_arg = |def: StrategyDef| match arg {
            Some(_) => Err(StrategyParseError::UnexpectedArgument(kind.to_string())),
            None => Ok(def),
        };

        match kind {
            "reversed" => no_arg(StrategyDef::Reversed),
            "sorting" => no_arg(StrategyDef::Sorting),
            "black_hole" => no_arg(StrategyDef::BlackHole),
            "random" => {
                let seed = arg
                    .map(|a| a.parse::<u64>().map_err(|_| invalid("an unsigned seed")))
                    .transpose()?;
                Ok(StrategyDef::Random { seed })
            }
            "remove_indices" => {
                let indices = match arg {
                    Some(a) if !a.is_empty() => a
                        .split(',')
                        .map(|i| i.trim().parse::<usize>())
                        .collect::<Result<Vec<_>, _>>()
                        .map_err(|_| invalid("comma-separated positions"))?,
                    _ => Vec::new(),
                };
                Ok(StrategyDef::RemoveIndices { indices })
            }
            "initial_index" => {
                let initial_index = match arg {
                    Some(a) => a.parse::<usize>().map_err(|_| invalid("a position"))?,
                    None => default_initial_index(),
                };
                Ok(StrategyDef::InitialIndex { initial_index })
            }
            other => Err(StrategyParseError::UnknownKind(other.to_string())),
        }
    }
}
