//! iso3166: command-line interface for iso3166-core
//!
//! Usage examples
//! --------------
//!
//! - Look up a country by any of its codes (case-insensitive)
//!   $ iso3166 lookup de
//!   $ iso3166 lookup 840 --json
//!
//! - List countries by region or subregion
//!   $ iso3166 region Oceania
//!   $ iso3166 subregion "Western Europe"
//!
//! - Search by name, code or calling code
//!   $ iso3166 search "cote d'ivoire"
//!   $ iso3166 dialing +44
//!
//! Data source
//! -----------
//!
//! By default the bundled dataset compiled into `iso3166-core` is used. Use
//! `--input <path>` to read a `.json`, `.json.gz`, `.bin` or `.bin.gz` file
//! instead, and `export` to write a binary snapshot for later `--input` use.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use iso3166_cli::render;
use iso3166_core::prelude::*;
use iso3166_core::CompressionMode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let policy = if args.strict {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::LastWins
    };

    // Load DB (bundled unless --input is given)
    let loaded;
    let db: &CountryDb = match &args.input {
        Some(path) => {
            loaded = CountryDb::load_from_path(path, policy)
                .with_context(|| format!("failed to load dataset {}", path.display()))?;
            &loaded
        }
        None if args.strict => {
            let bundled = CountryDb::load().context("failed to load bundled dataset")?;
            loaded = CountryDb::with_policy(bundled.countries().to_vec(), policy)
                .context("bundled dataset failed strict checks")?;
            &loaded
        }
        None => CountryDb::load().context("failed to load bundled dataset")?,
    };
    tracing::info!(countries = db.len(), "dataset ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let json = args.json;

    match args.command {
        Commands::Lookup { code } => {
            let country = db
                .lookup_by_code(code.trim())
                .with_context(|| format!("no country found for code {code:?}"))?;
            render::write_country(&mut out, country, json)?;
        }

        Commands::Region { name } => {
            render::write_countries(&mut out, &db.records_by_region(&name), json)?;
        }

        Commands::Subregion { name } => {
            render::write_countries(&mut out, &db.records_by_subregion(&name), json)?;
        }

        Commands::Regions => {
            render::write_regions(&mut out, &render::region_summaries(db), json)?;
        }

        Commands::Countries => {
            let all: Vec<&CountryInfo> = db.countries().iter().collect();
            render::write_countries(&mut out, &all, json)?;
        }

        Commands::Search { query } => {
            render::write_hits(&mut out, &db.smart_search(&query), json)?;
        }

        Commands::Dialing { code } => {
            render::write_countries(&mut out, &db.find_by_dialing_prefix(&code), json)?;
        }

        Commands::Currency { code } => {
            render::write_countries(&mut out, &db.find_by_currency(&code), json)?;
        }

        Commands::Stats => {
            render::write_stats(&mut out, &db.stats(), json)?;
        }

        Commands::Export {
            output,
            no_compress,
        } => {
            // The extension decides; --no-compress only confirms a plain .bin.
            let compression = if no_compress {
                CompressionMode::None
            } else {
                CompressionMode::for_path(&output)?
            };
            db.save_as(&output, compression)
                .with_context(|| format!("failed to write snapshot {}", output.display()))?;
            eprintln!("Wrote {} countries to {}", db.len(), output.display());
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}
