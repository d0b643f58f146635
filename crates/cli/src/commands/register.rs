// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hark register` - Register one user and let the listeners react

use clap::Args;
use hark_core::{RegisterConfig, UserRecord};

use crate::app::App;

#[derive(Args, Debug, Default)]
pub struct RegisterArgs {
    /// User name (overrides the config)
    #[arg(long)]
    pub name: Option<String>,

    /// Password (overrides the config)
    #[arg(long)]
    pub password: Option<String>,

    /// Email address (overrides the config)
    #[arg(long)]
    pub email: Option<String>,
}

impl RegisterArgs {
    /// Merge flags over the configured values
    pub fn resolve(self, config: &RegisterConfig) -> RegisterConfig {
        RegisterConfig {
            name: self.name.unwrap_or_else(|| config.name.clone()),
            password: self.password.unwrap_or_else(|| config.password.clone()),
            email: self.email.unwrap_or_else(|| config.email.clone()),
        }
    }
}

pub fn register(app: &App, args: RegisterArgs, config: &RegisterConfig) -> UserRecord {
    let user = args.resolve(config);
    app.registration
        .register_new_user(&user.name, &user.password, &user.email)
}

#[cfg(test)]
#[path = "register_tests.rs"]
mod tests;
