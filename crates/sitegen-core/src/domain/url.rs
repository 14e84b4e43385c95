/// Prefixes `https://` onto a URL without an http(s) scheme. Blank input
/// is returned as given.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return raw.to_string();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }
    format!("https://{trimmed}")
}

#[cfg(test)]
mod tests {
    use super::normalize_url;

    #[test]
    fn adds_scheme_when_missing() {
        assert_eq!(normalize_url("example.org/wiki"), "https://example.org/wiki");
        assert_eq!(normalize_url("  www.example.org "), "https://www.example.org");
    }

    #[test]
    fn keeps_existing_scheme() {
        assert_eq!(normalize_url("https://example.org"), "https://example.org");
        assert_eq!(normalize_url("http://example.org"), "http://example.org");
    }

    #[test]
    fn blank_passes_through() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("   "), "   ");
    }
}
