use scraper::{Html, Selector};
use std::sync::LazyLock;

// CSS selector strings
const SCRIPT_SELECTOR_STR: &str = "script[src]";

static SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SCRIPT_SELECTOR_STR).expect("Failed to parse script selector - this is a bug")
});

/// Extracts script source references from an HTML document.
///
/// Returns the `src` attribute of every `<script>` element that declares one,
/// in document order. Inline scripts (no `src`) and scripts with an empty
/// `src` are skipped.
pub fn extract_script_sources(document: &Html) -> Vec<String> {
    document
        .select(&SCRIPT_SELECTOR)
        .filter_map(|element| element.value().attr("src"))
        .filter(|src| !src.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_script_sources_basic() {
        let html = r#"<html><head><script src="app.js"></script></head><body></body></html>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_script_sources(&document), vec!["app.js"]);
    }

    #[test]
    fn test_extract_script_sources_document_order() {
        let html = r#"<html><head>
            <script src="first.js"></script>
        </head><body>
            <script src="second.js"></script>
            <script src="third.js"></script>
        </body></html>"#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_script_sources(&document),
            vec!["first.js", "second.js", "third.js"]
        );
    }

    #[test]
    fn test_extract_script_sources_ignores_inline() {
        let html = r#"<html><body>
            <script>console.log("inline");</script>
            <script src="external.js"></script>
        </body></html>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_script_sources(&document), vec!["external.js"]);
    }

    #[test]
    fn test_extract_script_sources_ignores_empty_src() {
        // src="" is present but names nothing fetchable
        let html = r#"<html><body><script src=""></script></body></html>"#;
        let document = Html::parse_document(html);
        assert!(extract_script_sources(&document).is_empty());
    }

    #[test]
    fn test_extract_script_sources_none() {
        let html = r#"<html><head><title>No scripts</title></head><body></body></html>"#;
        let document = Html::parse_document(html);
        assert!(extract_script_sources(&document).is_empty());
    }

    #[test]
    fn test_extract_script_sources_keeps_duplicates() {
        // The same bundle referenced twice is downloaded twice (second write
        // overwrites the first); extraction does not deduplicate.
        let html = r#"<html><body>
            <script src="bundle.js"></script>
            <script src="bundle.js"></script>
        </body></html>"#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_script_sources(&document),
            vec!["bundle.js", "bundle.js"]
        );
    }

    #[test]
    fn test_extract_script_sources_absolute_and_relative() {
        let html = r#"<html><body>
            <script src="https://cdn.example.com/lib.js"></script>
            <script src="/static/main.js"></script>
            <script src="chunk.js?v=42"></script>
        </body></html>"#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_script_sources(&document),
            vec![
                "https://cdn.example.com/lib.js",
                "/static/main.js",
                "chunk.js?v=42"
            ]
        );
    }
}
