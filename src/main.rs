mod cli;
mod commands;
mod error;

use crate::cli::{Args, Command};
use crate::error::{ErrorKind, Result};
use clap::Parser;
use exn::{OptionExt, ResultExt};
use phonecmp_catalog::Catalog;
use phonecmp_config::Config;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(err.exit_code())
        },
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    let result = match &args.command {
        Command::Slug { title } => commands::slug(&mut stdout, title),
        Command::Encode { titles } => commands::encode(&mut stdout, titles),
        Command::Decode { path } => commands::decode_path(&mut stdout, path),
        Command::List => {
            let (_, catalog) = load(&args)?;
            commands::list(&mut stdout, &catalog)
        },
        Command::Show { slug } => {
            let (config, catalog) = load(&args)?;
            commands::show(&mut stdout, &catalog, slug, &config.placeholder)
        },
        Command::Compare { path } => {
            let (config, catalog) = load(&args)?;
            commands::compare(&mut stdout, &catalog, path, &config.placeholder)
        },
    };
    result?;
    stdout.flush().or_raise(|| ErrorKind::Io)
}

/// Loads the config, then the catalog it (or `--catalog`) points at.
fn load(args: &Args) -> Result<(Config, Catalog)> {
    let config = Config::load(args.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    let path = args
        .catalog
        .as_ref()
        .or(config.catalog.as_ref())
        .ok_or_raise(|| ErrorKind::MissingCatalog)?;
    tracing::debug!(path = %path.display(), live_preview = config.live_preview, "Loading catalog");
    let catalog = Catalog::from_path(path, config.live_preview).or_raise(|| ErrorKind::Catalog)?;
    Ok((config, catalog))
}
