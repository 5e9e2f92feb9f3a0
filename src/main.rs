// obs-translation-updater: Crowdin translation sync for OBS Studio
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Sync (default) | Authors | Options | ConfigFiles | Version
//! ```

use std::process::ExitCode;

use obs_translation_updater::cli::global::GlobalOptions;
use obs_translation_updater::cli::{self, Command};
use obs_translation_updater::cmd::authors::run_authors_command;
use obs_translation_updater::cmd::config::{run_config_files_command, run_options_command};
use obs_translation_updater::cmd::sync::run_sync_command;
use obs_translation_updater::config::loader::ConfigLoader;
use obs_translation_updater::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use obs_translation_updater::error::Result;
use obs_translation_updater::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();
    let command = cli.command_or_default();

    if matches!(command, Command::Version) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    if matches!(command, Command::ConfigFiles) {
        run_config_files_command(&build_config_loader(&cli.global).format_loaded_files());
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match start_logging(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(&command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch_command(command: &Command, config: &Config) -> Result<()> {
    match command {
        Command::Sync(args) => run_sync_command(args, config).await,
        Command::Authors => run_authors_command(config).await,
        Command::Options => {
            run_options_command(config);
            Ok(())
        }
        Command::Version | Command::ConfigFiles => Ok(()),
    }
}

fn start_logging(config: &Config) -> Result<LogGuard> {
    let log_config = LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build();
    init_logging(&log_config)
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    global
        .to_config_overrides()
        .into_iter()
        .try_fold(build_config_loader(global), |loader, (key, value)| {
            loader.set(key, value)
        })?
        .build()
}
