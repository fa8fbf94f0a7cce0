// crates/iso3166-core/src/model.rs
use crate::error::{IsoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A currency in use in a country, keyed by its ISO 4217 code in
/// [`CountryInfo::currencies`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

impl Currency {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// One ISO 3166-1 entry.
///
/// Records are plain immutable values; a [`CountryDb`] owns them and hands
/// out shared references. The three code fields identify a record and are
/// unique within a well-formed dataset.
///
/// [`CountryDb`]: crate::CountryDb
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub common_name: String,
    pub common_native_name: String,
    pub official_name: String,
    pub official_native_name: String,

    /// ISO 3166-1 numeric code, always three digits (`"004"`, `"840"`).
    pub numeric_code: String,
    /// ISO 3166-1 alpha-2 code (`"US"`).
    pub two_letter_code: String,
    /// ISO 3166-1 alpha-3 code (`"USA"`).
    pub three_letter_code: String,

    pub region: String,
    /// Empty for territories without a subregion (e.g. Antarctica).
    pub subregion: String,
    pub capital: String,

    /// Language code -> display name.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// ISO 4217 currency code -> currency.
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,

    /// International calling code as printed, e.g. `"+44"`.
    pub dialing_code: String,
}

impl CountryInfo {
    /// Common English name.
    pub fn name(&self) -> &str {
        &self.common_name
    }

    pub fn alpha2(&self) -> &str {
        &self.two_letter_code
    }

    pub fn alpha3(&self) -> &str {
        &self.three_letter_code
    }

    pub fn numeric(&self) -> &str {
        &self.numeric_code
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn subregion(&self) -> &str {
        &self.subregion
    }

    /// Capital city, if the dataset records one.
    pub fn capital(&self) -> Option<&str> {
        non_empty(&self.capital)
    }

    /// Calling code (e.g. `"+49"`), if the territory has one.
    pub fn dialing_code(&self) -> Option<&str> {
        non_empty(&self.dialing_code)
    }

    /// The four display names in order: common, common native, official,
    /// official native.
    pub fn names(&self) -> [&str; 4] {
        [
            &self.common_name,
            &self.common_native_name,
            &self.official_name,
            &self.official_native_name,
        ]
    }

    pub fn is_in_region(&self, region: &str) -> bool {
        self.region.eq_ignore_ascii_case(region)
    }

    pub fn is_in_subregion(&self, subregion: &str) -> bool {
        self.subregion.eq_ignore_ascii_case(subregion)
    }

    /// True if `code` is one of this country's language codes (ASCII
    /// case-insensitive).
    pub fn speaks(&self, code: &str) -> bool {
        self.languages.keys().any(|k| k.eq_ignore_ascii_case(code))
    }

    /// True if `code` is one of this country's ISO 4217 currency codes
    /// (ASCII case-insensitive).
    pub fn uses_currency(&self, code: &str) -> bool {
        self.currencies.keys().any(|k| k.eq_ignore_ascii_case(code))
    }

    /// Checks the shape of the three code fields.
    ///
    /// Run by the loader on every record before indexing. Uniqueness is the
    /// index builder's concern, not this one.
    pub fn check_codes(&self) -> Result<()> {
        check_code("numeric_code", &self.numeric_code, 3, u8::is_ascii_digit, "digits")?;
        check_code(
            "two_letter_code",
            &self.two_letter_code,
            2,
            u8::is_ascii_alphabetic,
            "letters",
        )?;
        check_code(
            "three_letter_code",
            &self.three_letter_code,
            3,
            u8::is_ascii_alphabetic,
            "letters",
        )
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn check_code(
    field: &str,
    value: &str,
    len: usize,
    allowed: fn(&u8) -> bool,
    what: &str,
) -> Result<()> {
    if value.len() == len && value.as_bytes().iter().all(allowed) {
        Ok(())
    } else {
        Err(IsoError::InvalidData(format!(
            "{field} {value:?} must be exactly {len} ASCII {what}"
        )))
    }
}

impl fmt::Display for CountryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Common Name: {}", self.common_name)?;
        writeln!(f, "Common Native Name: {}", self.common_native_name)?;
        writeln!(f, "Official Name: {}", self.official_name)?;
        writeln!(f, "Official Native Name: {}", self.official_native_name)?;

        writeln!(f, "Numeric Code: {}", self.numeric_code)?;
        writeln!(f, "Two Letter Code: {}", self.two_letter_code)?;
        writeln!(f, "Three Letter Code: {}", self.three_letter_code)?;

        writeln!(f, "Region: {}", self.region)?;
        writeln!(f, "Subregion: {}", self.subregion)?;
        writeln!(f, "Capital: {}", self.capital)?;

        for (code, name) in &self.languages {
            writeln!(f, "Language: {name} ({code})")?;
        }
        for (code, currency) in &self.currencies {
            writeln!(
                f,
                "Currency: {} ({code}, {})",
                currency.name, currency.symbol
            )?;
        }

        writeln!(f, "Dialing Code: {}", self.dialing_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::country;

    #[test]
    fn display_lists_every_field() {
        let mut de = country("DE", "DEU", "276", "Europe", "Western Europe");
        de.common_name = "Germany".into();
        de.capital = "Berlin".into();
        de.dialing_code = "+49".into();
        de.languages.insert("deu".into(), "German".into());
        de.currencies
            .insert("EUR".into(), Currency::new("Euro", "€"));

        let text = de.to_string();
        assert!(text.starts_with("Common Name: Germany\n"));
        assert!(text.contains("Two Letter Code: DE\n"));
        assert!(text.contains("Subregion: Western Europe\n"));
        assert!(text.contains("Language: German (deu)\n"));
        assert!(text.contains("Currency: Euro (EUR, €)\n"));
        assert!(text.ends_with("Dialing Code: +49\n"));
    }

    #[test]
    fn currency_display() {
        assert_eq!(Currency::new("Euro", "€").to_string(), "Euro (€)");
    }

    #[test]
    fn empty_optional_fields_read_as_none() {
        let aq = country("AQ", "ATA", "010", "Antarctic", "");
        assert_eq!(aq.capital(), None);
        assert_eq!(aq.dialing_code(), None);
    }

    #[test]
    fn language_and_currency_membership_ignores_case() {
        let mut ch = country("CH", "CHE", "756", "Europe", "Western Europe");
        ch.languages.insert("fra".into(), "French".into());
        ch.currencies
            .insert("CHF".into(), Currency::new("Swiss franc", "Fr."));
        assert!(ch.speaks("FRA"));
        assert!(!ch.speaks("deu"));
        assert!(ch.uses_currency("chf"));
        assert!(!ch.uses_currency("EUR"));
    }

    #[test]
    fn check_codes_accepts_well_formed_records() {
        assert!(country("US", "USA", "840", "Americas", "North America")
            .check_codes()
            .is_ok());
    }

    #[test]
    fn check_codes_rejects_bad_shapes() {
        let bad = [
            country("U", "USA", "840", "", ""),
            country("U1", "USA", "840", "", ""),
            country("US", "US", "840", "", ""),
            country("US", "US4", "840", "", ""),
            country("US", "USA", "84", "", ""),
            country("US", "USA", "8A0", "", ""),
            country("US", "USA", "", "", ""),
        ];
        for record in bad {
            let err = record.check_codes().unwrap_err();
            assert!(matches!(err, IsoError::InvalidData(_)), "{err}");
        }
    }
}
