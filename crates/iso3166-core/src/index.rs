// crates/iso3166-core/src/index.rs

//! # Code Index
//!
//! Three case-insensitive maps from code to record position, built once per
//! [`CountryDb`](crate::CountryDb). Keys are stored ASCII-uppercased and
//! compared ordinally.

use crate::error::{IsoError, Result};
use crate::model::CountryInfo;
use crate::text::{code_key, code_key_in, MAX_CODE_LEN};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Which of the three ISO 3166-1 code sets a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    Numeric,
    TwoLetter,
    ThreeLetter,
}

impl CodeKind {
    pub const ALL: [CodeKind; 3] = [
        CodeKind::Numeric,
        CodeKind::TwoLetter,
        CodeKind::ThreeLetter,
    ];

    /// Reports the shape of `code` without consulting any dataset.
    ///
    /// ```rust
    /// use iso3166_core::CodeKind;
    ///
    /// assert_eq!(CodeKind::classify("de"), Some(CodeKind::TwoLetter));
    /// assert_eq!(CodeKind::classify("DEU"), Some(CodeKind::ThreeLetter));
    /// assert_eq!(CodeKind::classify("276"), Some(CodeKind::Numeric));
    /// assert_eq!(CodeKind::classify("D3"), None);
    /// ```
    pub fn classify(code: &str) -> Option<CodeKind> {
        let bytes = code.as_bytes();
        match bytes.len() {
            2 if bytes.iter().all(u8::is_ascii_alphabetic) => Some(CodeKind::TwoLetter),
            3 if bytes.iter().all(u8::is_ascii_alphabetic) => Some(CodeKind::ThreeLetter),
            3 if bytes.iter().all(u8::is_ascii_digit) => Some(CodeKind::Numeric),
            _ => None,
        }
    }

    /// The record field holding this kind of code.
    pub fn code_of(self, country: &CountryInfo) -> &str {
        match self {
            CodeKind::Numeric => &country.numeric_code,
            CodeKind::TwoLetter => &country.two_letter_code,
            CodeKind::ThreeLetter => &country.three_letter_code,
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CodeKind::Numeric => "numeric",
            CodeKind::TwoLetter => "alpha-2",
            CodeKind::ThreeLetter => "alpha-3",
        })
    }
}

/// What to do when two records share a code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one in the index. Each
    /// replacement is logged at `warn`.
    #[default]
    LastWins,
    /// Fail with [`IsoError::DuplicateCode`] on the first clash.
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct CodeIndex {
    numeric: HashMap<String, usize>,
    two_letter: HashMap<String, usize>,
    three_letter: HashMap<String, usize>,
}

impl CodeIndex {
    /// Builds all three maps in one pass over `countries`.
    pub fn build(countries: &[CountryInfo], policy: DuplicatePolicy) -> Result<Self> {
        let mut index = CodeIndex {
            numeric: HashMap::with_capacity(countries.len()),
            two_letter: HashMap::with_capacity(countries.len()),
            three_letter: HashMap::with_capacity(countries.len()),
        };

        for (pos, country) in countries.iter().enumerate() {
            for kind in CodeKind::ALL {
                let key = code_key(kind.code_of(country));
                if let Some(prev) = index.map_mut(kind).insert(key, pos) {
                    let code = kind.code_of(country).to_string();
                    match policy {
                        DuplicatePolicy::Reject => {
                            return Err(IsoError::DuplicateCode {
                                kind,
                                code,
                                first: prev,
                                second: pos,
                            });
                        }
                        DuplicatePolicy::LastWins => {
                            tracing::warn!(
                                %kind,
                                code = %code,
                                replaced = prev,
                                by = pos,
                                "duplicate country code, keeping the later record"
                            );
                        }
                    }
                }
            }
        }

        tracing::debug!(
            records = countries.len(),
            numeric = index.numeric.len(),
            alpha2 = index.two_letter.len(),
            alpha3 = index.three_letter.len(),
            "built country code index"
        );
        Ok(index)
    }

    /// Position of the record whose `kind` code equals `code`, ignoring
    /// ASCII case. Does not allocate.
    pub fn get(&self, kind: CodeKind, code: &str) -> Option<usize> {
        let mut buf = [0u8; MAX_CODE_LEN];
        let key = code_key_in(code, &mut buf)?;
        self.map(kind).get(key).copied()
    }

    /// Number of keys held for `kind`.
    pub fn len(&self, kind: CodeKind) -> usize {
        self.map(kind).len()
    }

    fn map(&self, kind: CodeKind) -> &HashMap<String, usize> {
        match kind {
            CodeKind::Numeric => &self.numeric,
            CodeKind::TwoLetter => &self.two_letter,
            CodeKind::ThreeLetter => &self.three_letter,
        }
    }

    fn map_mut(&mut self, kind: CodeKind) -> &mut HashMap<String, usize> {
        match kind {
            CodeKind::Numeric => &mut self.numeric,
            CodeKind::TwoLetter => &mut self.two_letter,
            CodeKind::ThreeLetter => &mut self.three_letter,
        }
    }
}
