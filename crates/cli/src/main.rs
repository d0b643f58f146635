// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hark - user registration and list classification demo

mod app;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{classify, register};
use hark_adapters::{NoOpLogSink, TracedLogSink, TracingLogSink};
use hark_core::{HarkConfig, LogSink};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app::App;
use crate::error::CliError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "hark",
    version,
    about = "Hark - observer-driven user registration and list classification"
)]
struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format for reports
    #[arg(long, global = true, value_enum, default_value_t)]
    format: OutputFormat,

    /// Do not write a log line for each registered user
    #[arg(long, global = true)]
    no_user_log: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a user (the default)
    Register(register::RegisterArgs),
    /// Classify a list with every configured strategy
    Classify(classify::ClassifyArgs),
    /// Register the demo user, then run the classification lineup
    Demo,
}

fn main() -> ExitCode {
    setup_logging();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_err) => eprint!("{}", cli_err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => HarkConfig::load(path).map_err(|e| CliError::config(path, e))?,
        None => HarkConfig::default(),
    };
    tracing::debug!(path = ?cli.config, "configuration ready");

    let sink: Box<dyn LogSink> = if cli.no_user_log {
        Box::new(NoOpLogSink)
    } else {
        Box::new(TracedLogSink::new(TracingLogSink))
    };
    let app = App::wire(sink);

    match cli.command.unwrap_or(Commands::Register(Default::default())) {
        Commands::Register(args) => {
            register::register(&app, args, &config.register);
        }
        Commands::Classify(args) => {
            let reports = classify::classify(args, &config.classify);
            println!("{}", output::render_list(&reports, cli.format)?);
        }
        Commands::Demo => {
            register::register(&app, Default::default(), &config.register);
            let reports = classify::classify(Default::default(), &config.classify);
            println!("{}", output::render_list(&reports, cli.format)?);
        }
    }

    Ok(())
}

/// Install the stderr subscriber; `RUST_LOG` overrides the `info` default
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();
}
