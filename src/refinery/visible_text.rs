// * Visible-Text Extraction
// * Walks the parsed DOM and keeps only text a browser would render.

use scraper::{Html, Node};

// * Parents whose text children never reach the screen
const HIDDEN_PARENTS: &[&str] = &["style", "script", "head", "title", "meta"];

/// Extracts visible text from an HTML document.
///
/// Text nodes are collected in document order, trimmed, and joined with a
/// single space. Nodes whose parent is a hidden element or the document root
/// are skipped; comments are never text nodes and so never appear.
/// Malformed markup is parsed best-effort and never fails.
///
/// The HTML5 tree builder reparents stray top-level text into `<body>`, so
/// text outside any element (e.g. after a closing `</p>` at the top of a
/// fragment) is treated as visible body text rather than dropped.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) if is_visible(node.parent().map(|p| p.value())) => {
                Some(text.trim())
            }
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_visible(parent: Option<&Node>) -> bool {
    match parent {
        Some(Node::Element(element)) => !HIDDEN_PARENTS.contains(&element.name()),
        // * Document root, fragments and orphans
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_markup_is_joined() {
        let text = extract_visible_text("<p>Buy a <b>Sofa</b> now! Price: 199 USD</p>");
        assert_eq!(text, "Buy a Sofa now! Price: 199 USD");
    }

    #[test]
    fn test_hidden_elements_are_skipped() {
        let html = r#"
        <html>
            <head>
                <title>Shop Title</title>
                <meta charset="utf-8">
                <style>body { color: red; }</style>
                <script>var secret = "hidden";</script>
            </head>
            <body>
                <!-- a comment about chairs -->
                <h1>Chairs</h1>
                <script>console.log("also hidden");</script>
                <div>Oak <span>Table</span></div>
            </body>
        </html>
        "#;

        let text = extract_visible_text(html);
        assert_eq!(text, "Chairs Oak Table");
        assert!(!text.contains("Shop Title"));
        assert!(!text.contains("secret"));
        assert!(!text.contains("comment"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_whitespace_nodes_are_dropped() {
        let text = extract_visible_text("<ul>\n  <li> Bed </li>\n  <li>\tLamp\n</li>\n</ul>");
        assert_eq!(text, "Bed Lamp");
    }

    #[test]
    fn test_malformed_html_is_tolerated() {
        let text = extract_visible_text("<div><p>Unclosed <b>bold <i>sofa</div></p>");
        assert_eq!(text, "Unclosed bold sofa");
    }

    #[test]
    fn test_root_level_text_is_reparented_into_body() {
        assert_eq!(extract_visible_text("<p>Sofa</p> trailing chair"), "Sofa trailing chair");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_visible_text(""), "");
        assert_eq!(extract_visible_text("<html><body></body></html>"), "");
    }
}
