// crates/iso3166-core/src/db.rs
use crate::error::Result;
use crate::index::{CodeIndex, CodeKind, DuplicatePolicy};
use crate::model::CountryInfo;
use crate::traits::CountryLookup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An immutable country dataset together with its code index.
///
/// Built once from a list of records and never mutated afterwards, so a
/// shared `&CountryDb` can be read from any number of threads.
#[derive(Debug, Clone)]
pub struct CountryDb {
    countries: Vec<CountryInfo>,
    index: CodeIndex,
}

/// Simple aggregate statistics for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub regions: usize,
    pub subregions: usize,
    /// Distinct ISO 4217 codes across all records.
    pub currencies: usize,
    /// Distinct language codes across all records.
    pub languages: usize,
}

impl CountryDb {
    /// Indexes `countries`, letting later duplicates win.
    pub fn from_countries(countries: Vec<CountryInfo>) -> Self {
        // LastWins never reports a clash.
        let index = CodeIndex::build(&countries, DuplicatePolicy::LastWins).unwrap_or_default();
        Self { countries, index }
    }

    /// Indexes `countries` under an explicit duplicate policy.
    pub fn with_policy(countries: Vec<CountryInfo>, policy: DuplicatePolicy) -> Result<Self> {
        let index = CodeIndex::build(&countries, policy)?;
        Ok(Self { countries, index })
    }

    pub fn into_countries(self) -> Vec<CountryInfo> {
        self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Distinct non-empty regions in first-seen order.
    pub fn regions(&self) -> Vec<&str> {
        distinct(self.countries.iter().map(|c| c.region.as_str()))
    }

    /// Distinct non-empty subregions in first-seen order.
    pub fn subregions(&self) -> Vec<&str> {
        distinct(self.countries.iter().map(|c| c.subregion.as_str()))
    }

    /// Distinct non-empty subregions of one region, in first-seen order.
    pub fn subregions_of(&self, region: &str) -> Vec<&str> {
        distinct(
            self.countries
                .iter()
                .filter(|c| c.is_in_region(region))
                .map(|c| c.subregion.as_str()),
        )
    }

    pub fn stats(&self) -> DbStats {
        let currencies: BTreeSet<&str> = self
            .countries
            .iter()
            .flat_map(|c| c.currencies.keys().map(String::as_str))
            .collect();
        let languages: BTreeSet<&str> = self
            .countries
            .iter()
            .flat_map(|c| c.languages.keys().map(String::as_str))
            .collect();

        DbStats {
            countries: self.countries.len(),
            regions: self.regions().len(),
            subregions: self.subregions().len(),
            currencies: currencies.len(),
            languages: languages.len(),
        }
    }
}

impl CountryLookup for CountryDb {
    fn countries(&self) -> &[CountryInfo] {
        &self.countries
    }

    fn find(&self, kind: CodeKind, code: &str) -> Option<&CountryInfo> {
        self.index.get(kind, code).map(|pos| &self.countries[pos])
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for v in values {
        if !v.is_empty() && !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IsoError;
    use crate::test_support::{country, sample_countries, sample_db};

    #[test]
    fn lookup_disambiguates_by_length() {
        let db = sample_db();
        let us = db.lookup_by_code("US").unwrap();
        assert_eq!(us.three_letter_code, "USA");
        assert_eq!(db.lookup_by_code("usa"), Some(us));
        assert_eq!(db.lookup_by_code("840"), Some(us));
        assert_eq!(db.lookup_by_code("uS"), Some(us));
    }

    #[test]
    fn lookup_misses() {
        let db = sample_db();
        for code in ["", "U", "ZZ", "ZZZ", "999", "ABCD", "8400", " US", "ÜS"] {
            assert_eq!(db.lookup_by_code(code), None, "{code:?}");
        }
    }

    #[test]
    fn three_byte_codes_prefer_alpha3_then_numeric() {
        // A (malformed) dataset where one record's alpha-3 equals another's
        // numeric string exercises the fallback order.
        let countries = vec![
            country("AA", "AAA", "123", "R", ""),
            country("BB", "123", "456", "R", ""),
        ];
        let db = CountryDb::from_countries(countries);
        assert_eq!(db.lookup_by_code("123").unwrap().two_letter_code, "BB");
        assert_eq!(db.lookup_by_code("456").unwrap().two_letter_code, "BB");
        assert_eq!(db.find_by_numeric("123").unwrap().two_letter_code, "AA");
    }

    #[test]
    fn two_byte_codes_never_reach_the_other_maps() {
        let db = sample_db();
        assert_eq!(db.find_by_alpha3("US"), None);
        assert_eq!(db.find_by_numeric("84"), None);
    }

    #[test]
    fn try_lookup_flags_presence() {
        let db = sample_db();
        let (found, de) = db.try_lookup_by_code("de");
        assert!(found);
        assert_eq!(de.unwrap().two_letter_code, "DE");
        assert_eq!(db.try_lookup_by_code("XX"), (false, None));
    }

    #[test]
    fn require_maps_absence_to_not_found() {
        let db = sample_db();
        assert!(db.require_by_code("FRA").is_ok());
        assert!(matches!(db.require_by_code("XYZ"), Err(IsoError::NotFound(_))));
    }

    #[test]
    fn region_filters_are_exact_and_ordered() {
        let db = sample_db();
        let europe: Vec<_> = db
            .records_by_region("europe")
            .iter()
            .map(|c| c.two_letter_code.as_str())
            .collect();
        assert_eq!(europe, ["DE", "FR", "PL"]);
        assert!(db.records_by_region("Euro").is_empty());
        assert!(db.records_by_region("Nonexistent").is_empty());

        let western = db.records_by_subregion("WESTERN EUROPE");
        assert_eq!(western.len(), 2);
        assert!(western.iter().all(|c| c.subregion == "Western Europe"));
    }

    #[test]
    fn repeated_calls_agree() {
        let db = sample_db();
        assert_eq!(db.lookup_by_code("DEU"), db.lookup_by_code("DEU"));
        assert_eq!(db.records_by_region("Europe"), db.records_by_region("Europe"));
    }

    #[test]
    fn distinct_regions_skip_empty_values() {
        let db = sample_db();
        assert_eq!(db.regions(), ["Americas", "Europe", "Antarctic"]);
        assert_eq!(
            db.subregions(),
            ["North America", "Western Europe", "Central Europe"]
        );
        assert_eq!(db.subregions_of("Europe"), ["Western Europe", "Central Europe"]);
        assert!(db.subregions_of("Antarctic").is_empty());
    }

    #[test]
    fn stats_count_distinct_values() {
        let mut countries = sample_countries();
        countries[1]
            .currencies
            .insert("EUR".into(), crate::model::Currency::new("Euro", "€"));
        countries[2]
            .currencies
            .insert("EUR".into(), crate::model::Currency::new("Euro", "€"));
        countries[2].languages.insert("fra".into(), "French".into());
        let stats = CountryDb::from_countries(countries).stats();
        assert_eq!(
            stats,
            DbStats {
                countries: 5,
                regions: 3,
                subregions: 3,
                currencies: 1,
                languages: 1,
            }
        );
    }

    #[test]
    fn strict_construction_rejects_duplicates() {
        let mut countries = sample_countries();
        countries.push(country("de", "XXX", "998", "Europe", ""));
        let err = CountryDb::with_policy(countries.clone(), DuplicatePolicy::Reject).unwrap_err();
        assert!(matches!(
            err,
            IsoError::DuplicateCode {
                kind: CodeKind::TwoLetter,
                first: 1,
                second: 5,
                ..
            }
        ));

        let db = CountryDb::from_countries(countries);
        assert_eq!(db.lookup_by_code("DE").unwrap().three_letter_code, "XXX");
        assert_eq!(db.lookup_by_code("DEU").unwrap().two_letter_code, "DE");
        assert_eq!(db.len(), 6);
    }

    #[test]
    fn db_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CountryDb>();
    }
}
