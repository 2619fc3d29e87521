//! Quote payload and display strings.

use serde::Deserialize;

/// Placeholder shown in the quote text target while a request is in flight.
pub const QUOTE_LOADING_TEXT: &str = "Memuat quote...";
/// Placeholder shown in the quote author target while a request is in flight.
pub const QUOTE_LOADING_AUTHOR: &str = "- Loading...";
/// Fallback quote body, never fetched.
pub const FALLBACK_QUOTE_CONTENT: &str =
    "Kesuksesan adalah hasil dari persiapan, kerja keras, dan belajar dari kegagalan.";
/// Fallback quote author, never fetched.
pub const FALLBACK_QUOTE_AUTHOR: &str = "Colin Powell";

/// Random quote returned by the remote service.
///
/// Unknown response fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

impl Quote {
    /// The hardcoded quote rendered whenever fetching fails.
    pub fn fallback() -> Self {
        Self {
            content: FALLBACK_QUOTE_CONTENT.to_string(),
            author: FALLBACK_QUOTE_AUTHOR.to_string(),
        }
    }

    /// Text target value, the content wrapped in double quotes.
    pub fn display_text(&self) -> String {
        format!("\"{}\"", self.content)
    }

    /// Author target value, prefixed with `- `.
    pub fn display_author(&self) -> String {
        format!("- {}", self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::Quote;

    #[test]
    fn display_wraps_content_and_prefixes_author() {
        let quote = Quote {
            content: "X".to_string(),
            author: "Y".to_string(),
        };
        assert_eq!(quote.display_text(), "\"X\"");
        assert_eq!(quote.display_author(), "- Y");
    }

    #[test]
    fn parses_payload_with_extra_fields() {
        let quote: Quote = serde_json::from_str(
            r#"{"_id":"abc","content":"Stay hungry.","author":"Steve Jobs","length":12}"#,
        )
        .unwrap();
        assert_eq!(quote.author, "Steve Jobs");
    }

    #[test]
    fn fallback_pair_is_fixed() {
        let fallback = Quote::fallback();
        assert_eq!(
            fallback.display_text(),
            "\"Kesuksesan adalah hasil dari persiapan, kerja keras, dan belajar dari kegagalan.\""
        );
        assert_eq!(fallback.display_author(), "- Colin Powell");
    }
}
