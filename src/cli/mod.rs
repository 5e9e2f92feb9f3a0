// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! obs-translation-updater [global options] [command]
//! sync [--new-build]     (default)
//! authors
//! options
//! config-files
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Crowdin translation sync for OBS Studio.
#[derive(Debug, Parser)]
#[command(
    name = "obs-translation-updater",
    author,
    version,
    about = "Crowdin translation sync for OBS Studio",
    long_about = "obs-translation-updater Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Downloads the latest Crowdin translation build of OBS Studio,\n\
                  places it into the checkout, regenerates AUTHORS and the\n\
                  desktop entry, then commits and pushes the plugin submodules\n\
                  and the main repository. Running without a command performs\n\
                  `sync`.",
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from `obs-translation-updater.toml` in the\n\
                  current directory if it exists, then from every --config file,\n\
                  then from OBSTU_<SECTION>__<KEY> environment variables, and\n\
                  finally from command-line flags. The Crowdin token is taken from\n\
                  --token or CROWDIN_PERSONAL_TOKEN."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files that were loaded.
    #[command(name = "config-files")]
    ConfigFiles,

    /// Updates translations, credits and the desktop entry, then commits and pushes.
    Sync(SyncArgs),

    /// Regenerates only the AUTHORS file.
    Authors,
}

/// Arguments of the `sync` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Always start a new Crowdin build instead of reusing a finished one.
    #[arg(long = "new-build")]
    pub new_build: bool,
}

impl Cli {
    /// The command to run, `sync` when none was given.
    #[must_use]
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Sync(SyncArgs::default()))
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
