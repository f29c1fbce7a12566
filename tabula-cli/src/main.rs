mod args;
mod error;
mod paths;
mod render;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use tabula_lib::TabularDataController;
use tabula_lib::config::TableConfig;
use tabula_lib::sample::sample_users;

use args::Args;
use error::CliError;

/// Install a file logger. Without a usable path, logging stays off.
fn init_logging(args: &Args) -> Result<(), CliError> {
    let Some(path) = args.log_file.clone().or_else(paths::log_file) else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| CliError::LogFile {
            path: path.clone(),
            source,
        })?;
    }
    let log_file = File::create(&path).map_err(|source| CliError::LogFile {
        path: path.clone(),
        source,
    })?;
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}

/// Explicit `--config`, else the platform config file if it exists, else defaults.
fn load_config(explicit: Option<&PathBuf>) -> Result<TableConfig, CliError> {
    if let Some(path) = explicit {
        return Ok(TableConfig::load(path)?);
    }
    match paths::table_config() {
        Some(path) if path.exists() => Ok(TableConfig::load(path)?),
        _ => {
            debug!("No table config found, using defaults");
            Ok(TableConfig::default())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    init_logging(&args)?;

    let config = load_config(args.config.as_ref())?;
    let users = sample_users(args.records);
    info!("Loaded {} sample users", users.len());

    let mut table = TabularDataController::from_config(&config)?.with_record_count(users.len());
    if let Some(page_size) = args.page_size {
        table.set_page_size_value(page_size)?;
    }
    for field in &args.sort {
        table.set_sort(field);
    }
    table.try_go_to_page(args.page)?;

    let view = table.view(&users);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::render_table(&view));
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
