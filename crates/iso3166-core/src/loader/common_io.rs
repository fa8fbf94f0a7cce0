// crates/iso3166-core/src/loader/common_io.rs
use crate::error::{IsoError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Payload encoding of a dataset file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Binary,
}

/// `(format, gzip)` for a dataset path: `.json`, `.json.gz`, `.bin`, `.bin.gz`
/// (ASCII case-insensitive).
pub fn detect_format(path: &Path) -> Result<(SourceFormat, bool)> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let (stem, gzip) = match name.strip_suffix(".gz") {
        Some(stem) => (stem, true),
        None => (name.as_str(), false),
    };

    if stem.ends_with(".json") {
        Ok((SourceFormat::Json, gzip))
    } else if stem.ends_with(".bin") {
        Ok((SourceFormat::Binary, gzip))
    } else {
        Err(IsoError::InvalidData(format!(
            "Unsupported dataset extension: {} (expected .json, .json.gz, .bin or .bin.gz)",
            path.display()
        )))
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when `gzip` is set.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        IsoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(IsoError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}
