//! Sanitization of server-supplied markup
//!
//! Message summaries may carry simple formatting and links. Anything that can
//! execute script is stripped before the markup reaches the page.

use std::collections::HashSet;

/// Tags allowed in feedback messages
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "br", "code", "div", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "li",
    "ol", "p", "pre", "small", "span", "strong", "sub", "sup", "u", "ul",
];

/// Markup that went through [`sanitize_html`] and may be injected verbatim
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SanitizedHtml(String);

impl SanitizedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SanitizedHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip script vectors from untrusted markup
pub fn sanitize_html(input: &str) -> SanitizedHtml {
    let tags: HashSet<&str> = ALLOWED_TAGS.iter().copied().collect();

    let cleaned = ammonia::Builder::default()
        .tags(tags)
        .link_rel(Some("noopener noreferrer nofollow"))
        .clean(input)
        .to_string();

    SanitizedHtml(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_idempotent(input: &str) {
        let once = sanitize_html(input);
        let twice = sanitize_html(once.as_str());
        assert_eq!(once, twice, "sanitizing twice changed {input:?}");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let summary = "Invalid username or password.";
        assert_eq!(sanitize_html(summary).as_str(), summary);
    }

    #[test]
    fn test_script_tags_are_removed() {
        let cleaned = sanitize_html("<script>alert('x')</script>Hello");

        assert_eq!(cleaned.as_str(), "Hello");
    }

    #[test]
    fn test_event_handlers_are_removed() {
        let cleaned = sanitize_html(r#"<b onclick="steal()">Careful</b>"#);

        assert_eq!(cleaned.as_str(), "<b>Careful</b>");
    }

    #[test]
    fn test_disallowed_tags_are_dropped() {
        let cleaned = sanitize_html(r#"<img src="x" onerror="alert(1)"><iframe src="evil"></iframe>ok"#);

        assert!(!cleaned.as_str().contains("<img"));
        assert!(!cleaned.as_str().contains("onerror"));
        assert!(!cleaned.as_str().contains("<iframe"));
        assert!(cleaned.as_str().ends_with("ok"));
    }

    #[test]
    fn test_javascript_urls_are_removed() {
        let cleaned = sanitize_html(r#"<a href="javascript:alert(1)">click</a>"#);

        assert!(!cleaned.as_str().contains("javascript:"));
        assert!(cleaned.as_str().contains("click"));
    }

    #[test]
    fn test_safe_links_are_kept() {
        let cleaned = sanitize_html(r#"<a href="https://trustification.io/">docs</a>"#);

        assert!(cleaned.as_str().contains(r#"href="https://trustification.io/""#));
        assert!(cleaned.as_str().contains("noopener"));
    }

    #[test]
    fn test_text_is_entity_escaped() {
        assert_eq!(sanitize_html("a & b").as_str(), "a &amp; b");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for input in [
            "Invalid username or password.",
            "a & b < c",
            "<script>alert(1)</script><b>bold</b>",
            r#"<a href="https://example.com" rel="opener">x</a>"#,
            r#"<p style="color:red" onmouseover="x()">Styled <em>text</em></p>"#,
            "<ul><li>one<li>two</ul>",
        ] {
            assert_idempotent(input);
        }
    }
}
