// crates/iso3166-core/src/loader/embedded.rs

/// The bundled ISO 3166-1 snapshot, one record per line.
pub(crate) const COUNTRIES_JSON: &str = include_str!("../../data/countries.json");
