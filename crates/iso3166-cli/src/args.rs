use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for iso3166
#[derive(Debug, Parser)]
#[command(
    name = "iso3166",
    version,
    about = "Look up ISO 3166-1 countries by code, region, name or calling code"
)]
pub struct CliArgs {
    /// Dataset to use instead of the bundled one (.json, .json.gz, .bin, .bin.gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Fail on duplicate codes instead of keeping the later record
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log more on stderr (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show one country by numeric, alpha-2 or alpha-3 code
    Lookup {
        /// e.g. DE, DEU or 276 (case-insensitive)
        code: String,
    },

    /// List the countries of a region
    Region {
        /// Region name, e.g. Europe (case-insensitive, exact)
        name: String,
    },

    /// List the countries of a subregion
    Subregion {
        /// Subregion name, e.g. "Western Europe" (case-insensitive, exact)
        name: String,
    },

    /// List regions with their subregions and country counts
    Regions,

    /// List all countries
    Countries,

    /// Ranked search over codes, names and calling codes
    Search {
        query: String,
    },

    /// List countries whose calling code starts with a prefix
    Dialing {
        /// e.g. +1 or 44
        code: String,
    },

    /// List countries using an ISO 4217 currency
    Currency {
        /// e.g. EUR (case-insensitive)
        code: String,
    },

    /// Show a summary of the dataset
    Stats,

    /// Write the dataset as a binary snapshot
    Export {
        /// Target file: .bin.gz for gzip, .bin for plain bincode
        output: PathBuf,

        /// Require an uncompressed snapshot (a .gz name is then an error)
        #[arg(long)]
        no_compress: bool,
    },
}
