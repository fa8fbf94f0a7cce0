// crates/iso3166-core/src/loader/snapshot.rs

//! Binary snapshots: the record list serialized with bincode, optionally
//! gzip-compressed. The code index is not stored; it is rebuilt on load.

use crate::error::{IsoError, Result};
use crate::model::CountryInfo;
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Upper bound on a decoded snapshot, guarding against corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl Default for CompressionMode {
    /// Gzip when the `compact` feature is enabled.
    fn default() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

// Writing and reading must agree on encoding, so both go through here.
fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

pub(crate) fn write_snapshot(
    path: &Path,
    countries: &[CountryInfo],
    compression: CompressionMode,
) -> Result<()> {
    #[cfg(not(feature = "compact"))]
    if compression == CompressionMode::Gzip {
        return Err(IsoError::InvalidData(
            "Gzip requested but 'compact' disabled".into(),
        ));
    }

    let file = File::create(path).map_err(IsoError::Io)?;
    let mut writer = BufWriter::new(file);

    match compression {
        #[cfg(feature = "compact")]
        CompressionMode::Gzip => {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            options()
                .serialize_into(&mut encoder, countries)
                .map_err(IsoError::Bincode)?;
            encoder.finish()?.flush()?;
        }
        _ => {
            options()
                .serialize_into(&mut writer, countries)
                .map_err(IsoError::Bincode)?;
            writer.flush()?;
        }
    }

    tracing::debug!(
        path = %path.display(),
        countries = countries.len(),
        ?compression,
        "wrote binary snapshot"
    );
    Ok(())
}

pub(crate) fn read_snapshot(reader: impl Read) -> Result<Vec<CountryInfo>> {
    options().deserialize_from(reader).map_err(IsoError::Bincode)
}
