// crates/iso3166-core/src/traits.rs
use crate::error::{IsoError, Result};
use crate::index::CodeKind;
use crate::model::CountryInfo;
use crate::text::fold_key;

/// Code lookup and region filtering over a country dataset.
///
/// Implementors provide the record slice and a single-map lookup; every other
/// operation is derived from those two.
///
/// # Examples
/// ```rust
/// use iso3166_core::{CountryDb, CountryLookup};
///
/// let db = CountryDb::load().unwrap();
///
/// let us = db.lookup_by_code("us").unwrap();
/// assert_eq!(db.lookup_by_code("USA"), Some(us));
/// assert_eq!(db.lookup_by_code("840"), Some(us));
///
/// assert!(db.lookup_by_code("ZZ").is_none());
/// assert!(db.records_by_region("Nonexistent").is_empty());
/// ```
pub trait CountryLookup {
    /// All records in dataset order.
    fn countries(&self) -> &[CountryInfo];

    /// Looks in exactly one code map. ASCII case-insensitive.
    fn find(&self, kind: CodeKind, code: &str) -> Option<&CountryInfo>;

    fn find_by_alpha2(&self, code: &str) -> Option<&CountryInfo> {
        self.find(CodeKind::TwoLetter, code)
    }

    fn find_by_alpha3(&self, code: &str) -> Option<&CountryInfo> {
        self.find(CodeKind::ThreeLetter, code)
    }

    fn find_by_numeric(&self, code: &str) -> Option<&CountryInfo> {
        self.find(CodeKind::Numeric, code)
    }

    /// Resolves a numeric, alpha-2 or alpha-3 code.
    ///
    /// A two-byte code is looked up as alpha-2. A three-byte code is tried
    /// as alpha-3 first and then as numeric. Anything else is `None`.
    fn lookup_by_code(&self, code: &str) -> Option<&CountryInfo> {
        match code.len() {
            2 => self.find(CodeKind::TwoLetter, code),
            3 => self
                .find(CodeKind::ThreeLetter, code)
                .or_else(|| self.find(CodeKind::Numeric, code)),
            _ => None,
        }
    }

    /// Same as [`lookup_by_code`](Self::lookup_by_code) with an explicit
    /// found flag.
    fn try_lookup_by_code(&self, code: &str) -> (bool, Option<&CountryInfo>) {
        let found = self.lookup_by_code(code);
        (found.is_some(), found)
    }

    /// Like [`lookup_by_code`](Self::lookup_by_code), but absence is an
    /// [`IsoError::NotFound`].
    fn require_by_code(&self, code: &str) -> Result<&CountryInfo> {
        self.lookup_by_code(code)
            .ok_or_else(|| IsoError::NotFound(format!("no country with code {code:?}")))
    }

    /// Records whose region equals `region`, ignoring ASCII case.
    fn records_by_region(&self, region: &str) -> Vec<&CountryInfo> {
        self.countries()
            .iter()
            .filter(|c| c.is_in_region(region))
            .collect()
    }

    /// Records whose subregion equals `subregion`, ignoring ASCII case.
    fn records_by_subregion(&self, subregion: &str) -> Vec<&CountryInfo> {
        self.countries()
            .iter()
            .filter(|c| c.is_in_subregion(subregion))
            .collect()
    }
}

/// Name-based matching helpers for types that carry display names.
///
/// Comparisons are accent-insensitive and case-insensitive, based on
/// [`fold_key`]. Implementors list their names; the helpers match a query
/// against any of them.
///
/// ```rust
/// use iso3166_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn display_names(&self) -> impl Iterator<Item = &str> {
///         std::iter::once(self.0)
///     }
/// }
///
/// assert!(Place("Curaçao").is_named("curacao"));
/// assert!(Place("Côte d'Ivoire").name_contains("IVOIRE"));
/// ```
pub trait NameMatch {
    fn display_names(&self) -> impl Iterator<Item = &str>;

    /// True if any display name equals `q` after folding.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        let q = fold_key(q);
        self.display_names().any(|n| fold_key(n) == q)
    }

    /// True if any folded display name contains the folded `q`. A query
    /// that folds to nothing matches nothing.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        let q = fold_key(q);
        !q.is_empty() && self.display_names().any(|n| fold_key(n).contains(&q))
    }
}

impl NameMatch for CountryInfo {
    fn display_names(&self) -> impl Iterator<Item = &str> {
        self.names().into_iter()
    }
}
