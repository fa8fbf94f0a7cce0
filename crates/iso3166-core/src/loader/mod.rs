// crates/iso3166-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! payload parsers (JSON source vs bincode snapshot). Every loaded record has
//! its code fields checked before the index is built.

use crate::db::CountryDb;
use crate::error::{IsoError, Result};
use crate::index::DuplicatePolicy;
use crate::model::CountryInfo;
use crate::traits::CountryLookup;
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod common_io;
#[cfg(feature = "embedded")]
mod embedded;
pub mod snapshot;

use common_io::SourceFormat;
pub use snapshot::CompressionMode;

#[cfg(feature = "embedded")]
static EMBEDDED_DB: once_cell::sync::OnceCell<CountryDb> = once_cell::sync::OnceCell::new();

impl CountryDb {
    /// Directory holding the bundled dataset inside this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }

    /// The bundled dataset, parsed and indexed once per process.
    ///
    /// Concurrent first callers block until the single initialization
    /// finishes; afterwards this is a pointer read.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iso3166_core::{CountryDb, CountryLookup};
    ///
    /// let db = CountryDb::load().unwrap();
    /// let de = db.lookup_by_code("DEU").unwrap();
    /// assert_eq!(de.common_name, "Germany");
    /// ```
    #[cfg(feature = "embedded")]
    pub fn load() -> Result<&'static CountryDb> {
        EMBEDDED_DB.get_or_try_init(|| {
            let db = Self::from_json_str(embedded::COUNTRIES_JSON, DuplicatePolicy::LastWins)?;
            tracing::debug!(countries = db.len(), "loaded embedded country dataset");
            Ok(db)
        })
    }

    /// Loads a dataset file, picking the parser from the extension:
    /// `.json`, `.json.gz`, `.bin` or `.bin.gz`.
    pub fn load_from_path(path: impl AsRef<Path>, policy: DuplicatePolicy) -> Result<Self> {
        let path = path.as_ref();
        let (format, gzip) = common_io::detect_format(path)?;
        // 1. DRY: shared transport logic
        let reader = common_io::open_stream(path, gzip)?;
        // 2. Delegate payload parsing
        let countries = match format {
            SourceFormat::Json => serde_json::from_reader(reader)?,
            SourceFormat::Binary => snapshot::read_snapshot(reader)?,
        };
        let db = Self::from_checked(countries, policy)?;
        tracing::debug!(
            path = %path.display(),
            ?format,
            gzip,
            countries = db.len(),
            "loaded country dataset"
        );
        Ok(db)
    }

    /// Parses a JSON array of records.
    pub fn from_json_str(json: &str, policy: DuplicatePolicy) -> Result<Self> {
        let countries: Vec<CountryInfo> = serde_json::from_str(json)?;
        Self::from_checked(countries, policy)
    }

    pub fn from_json_reader(reader: impl Read, policy: DuplicatePolicy) -> Result<Self> {
        let countries: Vec<CountryInfo> = serde_json::from_reader(reader)?;
        Self::from_checked(countries, policy)
    }

    /// Writes the records as a binary snapshot readable by
    /// [`load_from_path`](Self::load_from_path).
    ///
    /// The name must end in `.bin` or `.bin.gz`, and a `.gz` suffix must go
    /// with [`CompressionMode::Gzip`]; anything else is
    /// [`IsoError::InvalidData`] and nothing is written.
    pub fn save_as(&self, path: impl AsRef<Path>, compression: CompressionMode) -> Result<()> {
        let path = path.as_ref();
        let expected = CompressionMode::for_path(path)?;
        if expected != compression {
            return Err(IsoError::InvalidData(format!(
                "{} needs {expected:?} compression, got {compression:?}",
                path.display()
            )));
        }
        snapshot::write_snapshot(path, self.countries(), compression)
    }

    fn from_checked(countries: Vec<CountryInfo>, policy: DuplicatePolicy) -> Result<Self> {
        for (pos, country) in countries.iter().enumerate() {
            country.check_codes().map_err(|e| match e {
                IsoError::InvalidData(msg) => IsoError::InvalidData(format!("record #{pos}: {msg}")),
                other => other,
            })?;
        }
        Self::with_policy(countries, policy)
    }
}

impl CompressionMode {
    /// The compression a snapshot named `path` is read back with:
    /// `.bin.gz` is [`Gzip`](Self::Gzip), `.bin` is [`None`](Self::None).
    /// JSON and unknown extensions are rejected.
    pub fn for_path(path: &Path) -> Result<Self> {
        match common_io::detect_format(path)? {
            (SourceFormat::Binary, true) => Ok(CompressionMode::Gzip),
            (SourceFormat::Binary, false) => Ok(CompressionMode::None),
            (SourceFormat::Json, _) => Err(IsoError::InvalidData(format!(
                "{} is a JSON name; snapshots are written as .bin or .bin.gz",
                path.display()
            ))),
        }
    }
}
