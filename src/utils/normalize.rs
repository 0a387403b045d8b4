/// Identity keys are stored trimmed and lowercased so that every spelling of
/// an address shares one record.
pub fn normalize_key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Codes are compared as strings; only surrounding whitespace is dropped.
pub fn normalize_code(code: &str) -> &str {
    code.trim()
}
