// crates/iso3166-core/src/search.rs

//! Name, currency and language search, plus a scored "smart" search that
//! combines codes, names and calling codes.

use crate::model::CountryInfo;
use crate::phone::normalize_dialing_code;
use crate::text::fold_key;
use crate::traits::{CountryLookup, NameMatch};
use serde::Serialize;

pub const SCORE_CODE: u8 = 100;
pub const SCORE_NAME_EXACT: u8 = 90;
pub const SCORE_NAME_PREFIX: u8 = 80;
pub const SCORE_NAME_CONTAINS: u8 = 70;
pub const SCORE_DIALING_CODE: u8 = 20;

/// One ranked result of [`CountrySearch::smart_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    pub score: u8,
    pub country: &'a CountryInfo,
}

pub trait CountrySearch: CountryLookup {
    /// Record with a name equal to `name` after folding (any of the four
    /// names, accent- and case-insensitive).
    fn find_by_name(&self, name: &str) -> Option<&CountryInfo> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.countries().iter().find(|c| c.is_named(name))
    }

    /// Records with any folded name containing the folded query.
    fn find_by_name_substring(&self, query: &str) -> Vec<&CountryInfo> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.countries()
            .iter()
            .filter(|c| c.name_contains(query))
            .collect()
    }

    /// Records using the ISO 4217 currency `code`.
    fn find_by_currency(&self, code: &str) -> Vec<&CountryInfo> {
        let code = code.trim();
        self.countries()
            .iter()
            .filter(|c| c.uses_currency(code))
            .collect()
    }

    /// Records listing a language by code (`"deu"`) or by name (`"German"`).
    fn find_by_language(&self, query: &str) -> Vec<&CountryInfo> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let folded = fold_key(query);
        self.countries()
            .iter()
            .filter(|c| c.speaks(query) || c.languages.values().any(|n| fold_key(n) == folded))
            .collect()
    }

    /// Unified search over codes, names and calling codes.
    ///
    /// Each record appears at most once with its best score. Results are
    /// sorted by score, highest first; equal scores keep dataset order.
    fn smart_search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let raw = query.trim();
        if raw.is_empty() {
            return Vec::new();
        }
        let q = fold_key(raw);
        let by_code = self.lookup_by_code(raw);
        let dialing = normalize_dialing_code(raw);

        let mut out: Vec<SearchHit<'_>> = self
            .countries()
            .iter()
            .filter_map(|c| {
                let score = if by_code.is_some_and(|hit| std::ptr::eq(hit, c)) {
                    SCORE_CODE
                } else {
                    let by_name = name_score(c, &q);
                    if by_name > 0 {
                        by_name
                    } else if !dialing.is_empty()
                        && normalize_dialing_code(&c.dialing_code) == dialing
                    {
                        SCORE_DIALING_CODE
                    } else {
                        return None;
                    }
                };
                Some(SearchHit { score, country: c })
            })
            .collect();

        out.sort_by(|a, b| b.score.cmp(&a.score));
        out
    }
}

impl<T: CountryLookup + ?Sized> CountrySearch for T {}

fn name_score(country: &CountryInfo, q: &str) -> u8 {
    let mut best = 0;
    for name in country.names() {
        let name = fold_key(name);
        let score = if name == q {
            SCORE_NAME_EXACT
        } else if name.starts_with(q) {
            SCORE_NAME_PREFIX
        } else if name.contains(q) {
            SCORE_NAME_CONTAINS
        } else {
            0
        };
        best = best.max(score);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Currency;
    use crate::test_support::sample_countries;
    use crate::CountryDb;

    fn db() -> CountryDb {
        let mut countries = sample_countries();
        countries[1].common_native_name = "Deutschland".into();
        countries[1].languages.insert("deu".into(), "German".into());
        countries[1]
            .currencies
            .insert("EUR".into(), Currency::new("Euro", "€"));
        countries[2].official_name = "République française".into();
        countries[2].languages.insert("fra".into(), "French".into());
        countries[2]
            .currencies
            .insert("EUR".into(), Currency::new("Euro", "€"));
        CountryDb::from_countries(countries)
    }

    #[test]
    fn name_lookup_folds_accents_and_case() {
        let db = db();
        assert_eq!(db.find_by_name("republique FRANCAISE").unwrap().alpha2(), "FR");
        assert_eq!(db.find_by_name("deutschland").unwrap().alpha2(), "DE");
        assert!(db.find_by_name("Deutsch").is_none());
        assert!(db.find_by_name("  ").is_none());
    }

    #[test]
    fn substring_search() {
        let db = db();
        let hits: Vec<_> = db
            .find_by_name_substring("land")
            .iter()
            .map(|c| c.alpha2())
            .collect();
        assert_eq!(hits, ["DE", "PL"]);
        assert!(db.find_by_name_substring("").is_empty());
    }

    #[test]
    fn currency_and_language_filters() {
        let db = db();
        let eur: Vec<_> = db.find_by_currency("eur").iter().map(|c| c.alpha2()).collect();
        assert_eq!(eur, ["DE", "FR"]);
        assert!(db.find_by_currency("USD").is_empty());

        assert_eq!(db.find_by_language("DEU").len(), 1);
        assert_eq!(db.find_by_language("french")[0].alpha2(), "FR");
        assert!(db.find_by_language("").is_empty());
    }

    #[test]
    fn smart_search_ranks_codes_over_names() {
        let db = db();
        let hits = db.smart_search("fra");
        assert_eq!(hits[0].score, SCORE_CODE);
        assert_eq!(hits[0].country.alpha2(), "FR");
        assert_eq!(hits.len(), 1);

        let hits = db.smart_search("united states");
        assert_eq!(hits[0].score, SCORE_NAME_EXACT);
        assert_eq!(hits[0].country.alpha2(), "US");
    }

    #[test]
    fn smart_search_scores_prefix_and_substring() {
        let db = db();
        let hits: Vec<_> = db
            .smart_search("an")
            .iter()
            .map(|h| (h.country.alpha2(), h.score))
            .collect();
        // "Antarctica" starts with "an"; Germany, France and Poland contain it.
        assert_eq!(
            hits,
            [
                ("AQ", SCORE_NAME_PREFIX),
                ("DE", SCORE_NAME_CONTAINS),
                ("FR", SCORE_NAME_CONTAINS),
                ("PL", SCORE_NAME_CONTAINS),
            ]
        );
    }

    #[test]
    fn smart_search_matches_calling_codes() {
        let db = db();
        let hits = db.smart_search("+48");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].country.alpha2(), "PL");
        assert_eq!(hits[0].score, SCORE_DIALING_CODE);
    }

    #[test]
    fn smart_search_lists_each_record_once() {
        let db = db();
        let hits = db.smart_search("DE");
        assert_eq!(hits.iter().filter(|h| h.country.alpha2() == "DE").count(), 1);
        assert_eq!(hits[0].score, SCORE_CODE);
        assert!(db.smart_search(" ").is_empty());
    }
}
