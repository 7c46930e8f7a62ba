/// Prefixes accepted as a "valid URL" by the platform link heuristic.
///
/// Matched case-insensitively. `file://` also covers asset and resource URLs.
const URL_PREFIXES: &[&str] = &[
    "file://",
    "about:",
    "http://",
    "https://",
    "javascript:",
    "content:",
];

/// Whether shared text looks like a link.
///
/// This is a prefix check, not a parser: it mirrors how the share sender's
/// platform classifies text, so `"http://"` alone is accepted and
/// `"www.example.com"` is not.
pub fn is_valid_url(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    URL_PREFIXES.iter().any(|prefix| {
        text.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_web_urls() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/a?b=c"));
        assert!(is_valid_url("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn test_accepts_platform_schemes() {
        assert!(is_valid_url("file:///sdcard/a.png"));
        assert!(is_valid_url("content://media/42"));
        assert!(is_valid_url("about:blank"));
        assert!(is_valid_url("javascript:void(0)"));
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("www.example.com"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url(" http://leading-space.com"));
    }

    #[test]
    fn test_short_and_multibyte_input_does_not_panic() {
        assert!(!is_valid_url("h"));
        assert!(!is_valid_url("日本語のテキスト"));
        assert!(!is_valid_url("htt日"));
    }
}
