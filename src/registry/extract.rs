//! Markup extraction rules shared by the source adapters
//!
//! Each rule locates one structural element by a fixed marker and reads the
//! text next to it. When a rule matches several elements the first one wins;
//! when it matches none the caller reports a malformed response.

use regex::Regex;
use std::sync::LazyLock;

/// Any markup tag
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Paragraph elements with their attributes and content
static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p\b([^>]*)>(.*?)</p\s*>").unwrap());

/// Class attribute value
static CLASS_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bclass\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Table rows
static ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr\s*>").unwrap());

/// Table cells
static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td\b[^>]*>(.*?)</td\s*>").unwrap());

/// Badge marking the latest release on a releases page
static LATEST_BADGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<span\b[^>]*>\s*Latest\s*</span\s*>").unwrap());

/// Anchors with their attributes and content
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a\s*>").unwrap());

/// href pointing at a release tag
static RELEASE_TAG_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bhref\s*=\s*(?:"[^"]*/releases/tag/[^"]*"|'[^']*/releases/tag/[^']*')"#)
        .unwrap()
});

/// Text content of a markup fragment: tags removed, entities decoded, trimmed
pub fn text_content(fragment: &str) -> String {
    let stripped = TAG_RE.replace_all(fragment, "");
    decode_entities(&stripped).trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

fn has_class(attrs: &str, class: &str) -> bool {
    CLASS_ATTR_RE.captures(attrs).is_some_and(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .is_some_and(|value| value.as_str().split_whitespace().any(|c| c == class))
    })
}

/// Text of the first `<p>` element carrying the given class
pub fn paragraph_with_class(html: &str, class: &str) -> Option<String> {
    PARAGRAPH_RE
        .captures_iter(html)
        .find(|caps| has_class(&caps[1], class))
        .map(|caps| text_content(&caps[2]))
}

/// Text of the table cell following the cell labelled `label`
///
/// The label must be the whole text of its cell (surrounding whitespace
/// ignored); the value is read from the next cell in the same row.
pub fn labeled_cell(html: &str, label: &str) -> Option<String> {
    ROW_RE.captures_iter(html).find_map(|row| {
        let cells: Vec<String> = CELL_RE
            .captures_iter(&row[1])
            .map(|cell| text_content(&cell[1]))
            .collect();
        cells
            .iter()
            .position(|cell| cell == label)
            .and_then(|idx| cells.get(idx + 1))
            .cloned()
    })
}

/// Tag name of the release marked `Latest` on a releases page
///
/// Picks the release tag link closest before the badge, or failing that the
/// first one after it.
pub fn latest_release_tag(html: &str) -> Option<String> {
    let badge = LATEST_BADGE_RE.find(html)?;

    let tag_links: Vec<(usize, usize, String)> = ANCHOR_RE
        .captures_iter(html)
        .filter(|caps| RELEASE_TAG_HREF_RE.is_match(&caps[1]))
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((whole.start(), whole.end(), text_content(&caps[2])))
        })
        .filter(|(_, _, text)| !text.is_empty())
        .collect();

    tag_links
        .iter()
        .rev()
        .find(|(_, end, _)| *end <= badge.start())
        .or_else(|| tag_links.iter().find(|(start, _, _)| *start >= badge.end()))
        .map(|(_, _, text)| text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_strips_tags_and_entities() {
        assert_eq!(
            text_content("  <b>1.0</b> &amp; <i>more</i>\n"),
            "1.0 & more"
        );
    }

    #[test]
    fn test_paragraph_with_class_first_match() {
        let html = r#"
            <p class="other">nope</p>
            <p class="release__version">
              2.32.5
            </p>
            <p class="release__version">2.32.4</p>
        "#;
        assert_eq!(
            paragraph_with_class(html, "release__version").as_deref(),
            Some("2.32.5")
        );
    }

    #[test]
    fn test_paragraph_with_class_among_several_classes() {
        let html = r#"<p class="wide release__version bold">1.0</p>"#;
        assert_eq!(
            paragraph_with_class(html, "release__version").as_deref(),
            Some("1.0")
        );
    }

    #[test]
    fn test_paragraph_with_class_requires_whole_class_name() {
        let html = r#"<p class="release__version-date">Jan 1, 2024</p>"#;
        assert!(paragraph_with_class(html, "release__version").is_none());
    }

    #[test]
    fn test_paragraph_with_nested_badge() {
        let html = r#"<p class="release__version">
              3.0.0b1
              <span class="badge badge--warning">pre-release</span>
            </p>"#;
        let text = paragraph_with_class(html, "release__version").unwrap();
        assert!(text.starts_with("3.0.0b1\n"));
        assert!(text.ends_with("pre-release"));
    }

    #[test]
    fn test_labeled_cell() {
        let html = r#"
            <table>
              <tr><td>Depends:</td><td>R (&ge; 3.5.0)</td></tr>
              <tr>
                <td>Version:</td>
                <td>3.5.1</td>
              </tr>
            </table>
        "#;
        assert_eq!(labeled_cell(html, "Version:").as_deref(), Some("3.5.1"));
    }

    #[test]
    fn test_labeled_cell_exact_label() {
        let html = r#"<table>
            <tr><td>Version:</td><td>1.0</td></tr>
            <tr><td>Version</td><td>2.0</td></tr>
        </table>"#;
        assert_eq!(labeled_cell(html, "Version").as_deref(), Some("2.0"));
        assert_eq!(labeled_cell(html, "Version:").as_deref(), Some("1.0"));
    }

    #[test]
    fn test_labeled_cell_missing_label() {
        let html = "<table><tr><td>Title:</td><td>x</td></tr></table>";
        assert!(labeled_cell(html, "Version:").is_none());
    }

    #[test]
    fn test_labeled_cell_without_value_cell() {
        let html = "<table><tr><td>Version:</td></tr></table>";
        assert!(labeled_cell(html, "Version:").is_none());
    }

    #[test]
    fn test_latest_release_tag_before_badge() {
        let html = r#"
            <section>
              <a href="/owner/repo/releases/tag/v1.4.0" class="Link--primary">v1.4.0</a>
              <span class="Label Label--success">Latest</span>
            </section>
            <section>
              <a href="/owner/repo/releases/tag/v1.3.0">v1.3.0</a>
            </section>
        "#;
        assert_eq!(latest_release_tag(html).as_deref(), Some("v1.4.0"));
    }

    #[test]
    fn test_latest_release_tag_skips_older_prerelease_above() {
        let html = r#"
            <a href="/o/r/releases/tag/v2.0.0-rc1">v2.0.0-rc1</a>
            <span class="Label">Pre-release</span>
            <a href="/o/r/releases/tag/v1.9.0">v1.9.0</a>
            <span class="Label Label--success">Latest</span>
        "#;
        assert_eq!(latest_release_tag(html).as_deref(), Some("v1.9.0"));
    }

    #[test]
    fn test_latest_release_tag_after_badge() {
        let html = r#"
            <span class="Label">Latest</span>
            <a href="/o/r/releases/tag/v0.3">v0.3</a>
        "#;
        assert_eq!(latest_release_tag(html).as_deref(), Some("v0.3"));
    }

    #[test]
    fn test_latest_release_tag_ignores_other_links() {
        let html = r#"
            <a href="/o/r/releases/tag/v0.2">v0.2</a>
            <a href="/o/r/compare/v0.2...main">compare</a>
            <span>Latest</span>
        "#;
        assert_eq!(latest_release_tag(html).as_deref(), Some("v0.2"));
    }

    #[test]
    fn test_latest_release_tag_without_badge() {
        let html = r#"<a href="/o/r/releases/tag/v0.2">v0.2</a>"#;
        assert!(latest_release_tag(html).is_none());
    }
}
