//! assumptions CLI: scan code comments and update the Markdown log.
//!
//! Logging: set `RUST_LOG=assumptions_log=debug` (or use `--verbose`) to see
//! per-file details on stderr.

mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use assumptions_log::{Log, LogConfig, LogType};

use crate::cli::Cli;

/// Settings after merging flags, config file and defaults.
#[derive(Debug)]
struct Settings {
    log_type: LogType,
    outfile: PathBuf,
    path: PathBuf,
    extension: String,
    template: Option<PathBuf>,
    max_file_bytes: Option<u64>,
    dry_run: bool,
}

fn resolve_settings(cli: &Cli, config: &LogConfig) -> Result<Settings> {
    let log_type_name = cli
        .log_type
        .clone()
        .or_else(|| config.log_type.clone())
        .unwrap_or_else(|| LogType::AssumptionsCaveats.as_str().to_string());
    let log_type: LogType = log_type_name.parse()?;

    Ok(Settings {
        log_type,
        outfile: cli
            .outfile
            .clone()
            .or_else(|| config.outfile.clone())
            .unwrap_or_else(|| PathBuf::from(log_type.default_outfile())),
        path: cli
            .path
            .clone()
            .or_else(|| config.path.clone())
            .unwrap_or_else(|| PathBuf::from(".")),
        extension: cli
            .extension
            .clone()
            .or_else(|| config.extension.clone())
            .unwrap_or_default(),
        template: cli.template.clone().or_else(|| config.template.clone()),
        max_file_bytes: config.max_file_bytes,
        dry_run: cli.dry_run || cli.check,
    })
}

fn load_config(cli: &Cli) -> Result<LogConfig> {
    match &cli.config {
        Some(path) => Ok(LogConfig::load(path)?),
        None => {
            let cwd = std::env::current_dir().context("cannot read current directory")?;
            Ok(LogConfig::load_default(&cwd)?)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    // Reject a bad -l before touching any file.
    if let Some(name) = &cli.log_type {
        name.parse::<LogType>()?;
    }
    let config = load_config(cli)?;
    let settings = resolve_settings(cli, &config)?;
    tracing::debug!(?settings, "resolved settings");

    let mut log = Log::new(settings.log_type.as_str(), &settings.outfile)?;
    log.add_builtin_items()?;
    for custom in &config.custom_kinds {
        let kind = custom
            .build()
            .with_context(|| format!("invalid custom kind '{}'", custom.name))?;
        log.add_log_item(Box::new(kind))?;
    }
    if let Some(max) = settings.max_file_bytes {
        log.set_max_file_bytes(max);
    }

    log.find_items(&settings.path, &settings.extension)
        .with_context(|| format!("search failed under {}", settings.path.display()))?;
    let written = log.write_log(settings.template.as_deref(), settings.dry_run)?;

    Ok(report(cli, settings.log_type, &settings.outfile, written))
}

fn report(cli: &Cli, log_type: LogType, outfile: &Path, written: bool) -> ExitCode {
    if !written {
        println!("{}", log_type.nudge());
        return ExitCode::SUCCESS;
    }
    if cli.check {
        println!("{} is out of date.", outfile.display());
        return ExitCode::FAILURE;
    }
    if cli.dry_run {
        println!("Dry run: {} would be updated.", outfile.display());
    } else {
        println!("Log items documented in {}.", outfile.display());
    }
    ExitCode::SUCCESS
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "assumptions_io=debug,assumptions_log=debug,assumptions=debug"
        } else {
            "assumptions_io=info,assumptions_log=info,assumptions=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    run(&cli)
}
