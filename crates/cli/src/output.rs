// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a list of items; text items are separated by a blank line
pub fn render_list<T: Serialize + std::fmt::Display>(
    items: &[T],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => serde_json::to_string_pretty(items),
    }
}
