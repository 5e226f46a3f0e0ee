// src/utils/text.rs

//! Text cleanup helpers for scraped card content.

/// Collapse every run of whitespace into a single space and trim both ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into its non-empty whitespace-delimited tokens.
pub fn whitespace_tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Cut `s` right after the first occurrence of `marker`, keeping the marker.
///
/// Returns `s` unchanged when the marker is absent or empty.
pub fn truncate_after<'a>(s: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return s;
    }
    match s.find(marker) {
        Some(idx) => &s[..idx + marker.len()],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \n\t b   c "), "a b c");
        assert_eq!(normalize_whitespace("\u{3000}전체\u{3000}보기"), "전체 보기");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = ["", "x", "  백엔드 \n 개발  ", "a\tb\nc  d", " 외 외 "];
        for input in inputs {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once);
        }
    }

    #[test]
    fn test_whitespace_tokens() {
        assert_eq!(
            whitespace_tokens("\n서울  강남구\n 경력무관\t학력무관 "),
            vec!["서울", "강남구", "경력무관", "학력무관"]
        );
        assert!(whitespace_tokens(" \n ").is_empty());
    }

    #[test]
    fn test_truncate_after_marker() {
        assert_eq!(truncate_after("웹개발, 서버 외 5개", " 외"), "웹개발, 서버 외");
        assert_eq!(truncate_after("a 외 b 외 c", " 외"), "a 외");
    }

    #[test]
    fn test_truncate_without_marker() {
        assert_eq!(truncate_after("웹개발, 서버", " 외"), "웹개발, 서버");
        assert_eq!(truncate_after("외부", " 외"), "외부");
        assert_eq!(truncate_after("anything", ""), "anything");
    }
}
