//! iso3166-cli
//! ===========
//!
//! Command-line interface for the `iso3166-core` country database.
//!
//! The binary is called `iso3166`. It reads the bundled ISO 3166-1 dataset
//! (or a file given with `--input`) and answers code lookups, region and
//! subregion listings, searches and calling-code queries.
//!
//! ```text
//! iso3166 lookup de
//! iso3166 lookup 840 --json
//! iso3166 region Oceania
//! iso3166 subregion "Northern Europe"
//! iso3166 search "cote d'ivoire"
//! iso3166 dialing +1
//! iso3166 export countries.bin.gz
//! ```
//!
//! The [`render`] module holds the text and JSON output used by the binary.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod render;
