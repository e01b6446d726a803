//! URL text canonicalization
//!
//! Pure string transforms shared by the heuristic rules and the text
//! vectorizer. Total over arbitrary input - no parsing, no failure modes.

/// Canonical form of a URL: lowercased, leading `http://`/`https://` and
/// `www.` stripped, one trailing `/` dropped.
///
/// One prefix of each kind is removed per call, so the output for any
/// already-canonical string is the string itself.
pub fn normalize(url: &str) -> String {
    let lower = url.to_lowercase();

    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    rest.to_string()
}

/// Registrable domain of a URL: the last two dot-separated labels of the
/// host part, or the whole host when it has fewer than two labels.
///
/// This is a deliberate approximation - `accounts.google.com` maps to
/// `google.com`, which is what the allow-list keys on. Multi-label public
/// suffixes (`.co.uk`) collapse to the suffix itself and simply never
/// match the list.
pub fn extract_domain(url: &str) -> String {
    let normalized = normalize(url);
    let host = normalized.split('/').next().unwrap_or_default();

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 2 {
        labels[labels.len() - 2..].join(".")
    } else {
        host.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_scheme_and_www() {
        assert_eq!(normalize("https://www.google.com/"), "google.com");
        assert_eq!(normalize("http://example.org/path"), "example.org/path");
        assert_eq!(normalize("HTTPS://WWW.GitHub.COM"), "github.com");
    }

    #[test]
    fn test_normalize_bare_input() {
        assert_eq!(normalize("google.com"), "google.com");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_idempotent_on_canonical_forms() {
        for url in ["google.com", "sub.example.org/a?b=c", "192.168.1.1", "bit.ly/xyz"] {
            let once = normalize(url);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_drops_single_trailing_slash() {
        assert_eq!(normalize("example.com/"), "example.com");
        // Only one slash comes off
        assert_eq!(normalize("example.com//"), "example.com/");
    }

    #[test]
    fn test_extract_domain_collapses_subdomains() {
        assert_eq!(extract_domain("https://accounts.google.com/signin"), "google.com");
        assert_eq!(extract_domain("http://www.mail.yahoo.co.jp"), "co.jp");
        assert_eq!(extract_domain("github.com"), "github.com");
    }

    #[test]
    fn test_extract_domain_degenerate_hosts() {
        assert_eq!(extract_domain("localhost"), "localhost");
        assert_eq!(extract_domain(""), "");
        assert_eq!(extract_domain("https://192.168.1.1/admin"), "1.1");
    }
}
