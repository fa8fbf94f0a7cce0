// crates/iso3166-core/src/text.rs

/// Longest code accepted by any index (numeric and alpha-3 are three bytes).
pub const MAX_CODE_LEN: usize = 3;

/// Normalizes a country code into the form stored in the indices.
///
/// Codes are compared ordinally and case-insensitively, so the stored key is
/// the ASCII uppercase form. Non-ASCII bytes are left untouched and can never
/// match a key from a well-formed dataset.
pub fn code_key(code: &str) -> String {
    code.to_ascii_uppercase()
}

/// Uppercases a short code into `buf` and returns it as `&str`.
///
/// Used on the lookup path so probing the indices never allocates. Returns
/// `None` when `code` is longer than [`MAX_CODE_LEN`] bytes.
pub fn code_key_in<'b>(code: &str, buf: &'b mut [u8; MAX_CODE_LEN]) -> Option<&'b str> {
    let bytes = code.as_bytes();
    if bytes.len() > MAX_CODE_LEN {
        return None;
    }
    let key = &mut buf[..bytes.len()];
    key.copy_from_slice(bytes);
    key.make_ascii_uppercase();
    // ASCII case mapping never touches multi-byte sequences, so this is
    // still the UTF-8 we were given.
    std::str::from_utf8(key).ok()
}

/// Convert a display name into a folded key for accent- and case-insensitive
/// comparison.
///
/// Transliterates Unicode to ASCII with `deunicode`, then lowercases:
/// `"Côte d'Ivoire"` -> `"cote d'ivoire"`, `"Åland"` -> `"aland"`.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two display names after [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
