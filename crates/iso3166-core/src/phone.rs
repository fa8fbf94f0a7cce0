// crates/iso3166-core/src/phone.rs
use crate::model::CountryInfo;
use crate::traits::CountryLookup;

/// Strips surrounding whitespace and one leading `+`.
pub fn normalize_dialing_code(code: &str) -> &str {
    let code = code.trim();
    code.strip_prefix('+').unwrap_or(code)
}

/// Lookup by international calling code.
///
/// Both the query and the stored codes are compared in normalized form, so
/// `"+49"`, `"49"` and `" +49 "` are the same query. An empty query matches
/// nothing.
pub trait DialingCodeSearch: CountryLookup {
    /// Countries whose calling code is exactly `code`.
    fn find_by_dialing_code(&self, code: &str) -> Vec<&CountryInfo> {
        let code = normalize_dialing_code(code);
        if code.is_empty() {
            return Vec::new();
        }
        self.countries()
            .iter()
            .filter(|c| normalize_dialing_code(&c.dialing_code) == code)
            .collect()
    }

    /// Countries whose calling code starts with `prefix`; `"+1"` returns
    /// every North American Numbering Plan member.
    fn find_by_dialing_prefix(&self, prefix: &str) -> Vec<&CountryInfo> {
        let prefix = normalize_dialing_code(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }
        self.countries()
            .iter()
            .filter(|c| normalize_dialing_code(&c.dialing_code).starts_with(prefix))
            .collect()
    }
}

impl<T: CountryLookup + ?Sized> DialingCodeSearch for T {}
