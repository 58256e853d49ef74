//! Country-prefix removal for VAT numbers.

/// A VAT number after prefix removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedVat {
    /// The VAT number to send.
    pub value: String,
    /// The two letters that were removed, if any.
    pub stripped_prefix: Option<String>,
}

impl NormalizedVat {
    /// Whether a prefix was removed.
    pub fn was_stripped(&self) -> bool {
        self.stripped_prefix.is_some()
    }
}

/// Remove a leading two-letter prefix from a VAT number.
///
/// If the first two characters are both ASCII letters they are removed,
/// exactly once. Anything else is returned unchanged. The letters are not
/// checked against a list of country codes and the remainder is not
/// validated: "XX12" becomes "12" and "DEDE1" becomes "DE1".
pub fn normalize_vat_number(vat_number: &str) -> NormalizedVat {
    let bytes = vat_number.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_alphabetic() {
        // both leading bytes are ASCII, so index 2 is a char boundary
        let (prefix, rest) = vat_number.split_at(2);
        return NormalizedVat {
            value: rest.to_string(),
            stripped_prefix: Some(prefix.to_string()),
        };
    }
    NormalizedVat {
        value: vat_number.to_string(),
        stripped_prefix: None,
    }
}
