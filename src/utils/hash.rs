//! Content fingerprinting for cache-busting file names.

/// Short content fingerprint (8 hex chars).
///
/// Stable across runs for identical content, so unchanged files keep
/// their names and stale ones can be matched by prefix and removed.
pub fn fingerprint(content: &str) -> String {
    let hash = blake3::hash(content.as_bytes());
    hex::encode(&hash.as_bytes()[..4])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_length() {
        assert_eq!(fingerprint("abyss").len(), 8);
    }

    #[test]
    fn test_fingerprint_stable() {
        assert_eq!(fingerprint("abyss"), fingerprint("abyss"));
    }

    #[test]
    fn test_fingerprint_differs_on_content() {
        assert_ne!(fingerprint("abyss"), fingerprint("void"));
    }

    #[test]
    fn test_fingerprint_is_lowercase_hex() {
        let fp = fingerprint("abyss");
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
