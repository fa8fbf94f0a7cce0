// crates/iso3166-core/src/test_support.rs
//! Fixture builders shared by the unit tests.

use crate::model::CountryInfo;
use crate::CountryDb;
use std::collections::BTreeMap;

/// A record with the given codes and classification; names are derived
/// from the alpha-3 code.
pub fn country(
    alpha2: &str,
    alpha3: &str,
    numeric: &str,
    region: &str,
    subregion: &str,
) -> CountryInfo {
    CountryInfo {
        common_name: format!("{alpha3} common"),
        common_native_name: format!("{alpha3} native"),
        official_name: format!("{alpha3} official"),
        official_native_name: format!("{alpha3} official native"),
        numeric_code: numeric.to_string(),
        two_letter_code: alpha2.to_string(),
        three_letter_code: alpha3.to_string(),
        region: region.to_string(),
        subregion: subregion.to_string(),
        capital: String::new(),
        languages: BTreeMap::new(),
        currencies: BTreeMap::new(),
        dialing_code: String::new(),
    }
}

/// Five records across three regions, one of them without a subregion.
pub fn sample_countries() -> Vec<CountryInfo> {
    let mut us = country("US", "USA", "840", "Americas", "North America");
    us.common_name = "United States".into();
    us.official_name = "United States of America".into();
    us.dialing_code = "+1".into();

    let mut de = country("DE", "DEU", "276", "Europe", "Western Europe");
    de.common_name = "Germany".into();
    de.common_native_name = "Deutschland".into();
    de.dialing_code = "+49".into();

    let mut fr = country("FR", "FRA", "250", "Europe", "Western Europe");
    fr.common_name = "France".into();
    fr.dialing_code = "+33".into();

    let mut pl = country("PL", "POL", "616", "Europe", "Central Europe");
    pl.common_name = "Poland".into();
    pl.dialing_code = "+48".into();

    let mut aq = country("AQ", "ATA", "010", "Antarctic", "");
    aq.common_name = "Antarctica".into();

    vec![us, de, fr, pl, aq]
}

pub fn sample_db() -> CountryDb {
    CountryDb::from_countries(sample_countries())
}
