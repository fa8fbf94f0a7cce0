// crates/iso3166-core/src/lib.rs

//! ISO 3166-1 country metadata.
//!
//! A [`CountryDb`] holds every country record plus three case-insensitive
//! indices (numeric, alpha-2, alpha-3), built once. Lookups go through the
//! [`CountryLookup`] trait; name and calling-code searches through
//! [`CountrySearch`] and [`DialingCodeSearch`].
//!
//! ```rust
//! use iso3166_core::prelude::*;
//!
//! let db = CountryDb::load()?;
//! let gb = db.lookup_by_code("gbr").unwrap();
//! assert_eq!(gb.two_letter_code, "GB");
//!
//! let nordic = db.records_by_subregion("Northern Europe");
//! assert!(nordic.iter().any(|c| c.alpha2() == "SE"));
//! # Ok::<(), iso3166_core::IsoError>(())
//! ```

pub mod db;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod phone;
pub mod search;
pub mod text;
pub mod traits;

#[cfg(test)]
mod test_support;

// Re-exports
pub use crate::db::{CountryDb, DbStats};
pub use crate::error::{IsoError, Result};
pub use crate::index::{CodeKind, DuplicatePolicy};
pub use crate::loader::CompressionMode;
pub use crate::model::{CountryInfo, Currency};
pub use crate::phone::DialingCodeSearch;
pub use crate::search::{CountrySearch, SearchHit};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::CountryLookup;

pub mod prelude {
    pub use crate::{
        CodeKind, CountryDb, CountryInfo, CountryLookup, CountrySearch, Currency,
        DialingCodeSearch, DuplicatePolicy, IsoError, SearchHit,
    };
}

// -----------------------------------------------------------------------------
// Convenience functions over the bundled dataset
// -----------------------------------------------------------------------------

#[cfg(feature = "embedded")]
fn embedded_db() -> Option<&'static CountryDb> {
    match CountryDb::load() {
        Ok(db) => Some(db),
        Err(error) => {
            tracing::error!(%error, "bundled country dataset failed to load");
            None
        }
    }
}

/// [`CountryLookup::lookup_by_code`] on the bundled dataset.
///
/// ```rust
/// let us = iso3166_core::lookup_by_code("840").unwrap();
/// assert_eq!(us.three_letter_code, "USA");
/// assert!(iso3166_core::lookup_by_code("ABCD").is_none());
/// ```
#[cfg(feature = "embedded")]
pub fn lookup_by_code(code: &str) -> Option<&'static CountryInfo> {
    embedded_db()?.lookup_by_code(code)
}

#[cfg(feature = "embedded")]
pub fn try_lookup_by_code(code: &str) -> (bool, Option<&'static CountryInfo>) {
    match embedded_db() {
        Some(db) => db.try_lookup_by_code(code),
        None => (false, None),
    }
}

#[cfg(feature = "embedded")]
pub fn records_by_region(region: &str) -> Vec<&'static CountryInfo> {
    embedded_db()
        .map(|db| db.records_by_region(region))
        .unwrap_or_default()
}

#[cfg(feature = "embedded")]
pub fn records_by_subregion(subregion: &str) -> Vec<&'static CountryInfo> {
    embedded_db()
        .map(|db| db.records_by_subregion(subregion))
        .unwrap_or_default()
}
