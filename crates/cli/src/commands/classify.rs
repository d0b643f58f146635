// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hark classify` - Run classifier strategies over a list

use clap::Args;
use hark_core::{Classification, ClassifyConfig, ListReader, StrategyDef};

#[derive(Args, Debug, Default)]
pub struct ClassifyArgs {
    /// Items to classify, comma-separated (overrides the config)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub items: Option<Vec<i64>>,

    /// Strategy as `kind[:argument]`, repeatable (overrides the config)
    ///
    /// Kinds: reversed, random[:seed], sorting, remove_indices[:i,j,..],
    /// initial_index[:n], black_hole
    #[arg(short, long = "strategy")]
    pub strategies: Vec<StrategyDef>,
}

pub fn classify(args: ClassifyArgs, config: &ClassifyConfig) -> Vec<Classification<i64>> {
    let items = args.items.unwrap_or_else(|| config.items.clone());
    let defs = if args.strategies.is_empty() {
        config.strategies.clone()
    } else {
        args.strategies
    };

    let mut defs = defs.into_iter();
    let Some(first) = defs.next() else {
        return Vec::new();
    };

    let reader = ListReader::from_boxed(items, first.build());
    let mut reports = vec![reader.classify_list()];
    for def in defs {
        reports.push(reader.classify_with(&*def.build::<i64>()));
    }
    reports
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
