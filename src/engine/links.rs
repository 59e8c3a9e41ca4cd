// * Link Discovery
// * Finds same-site anchors on a seed page. Dedup happens in the orchestrator.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

use crate::engine::domain::RegistrableDomain;
use crate::network::fetcher::{FetchMode, PageFetcher};

static SELECTOR_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("Invalid anchor selector"));

/// Fetches `url` and returns the same-site links found on it.
pub async fn discover_links(fetcher: &dyn PageFetcher, url: &str) -> Vec<String> {
    let content = fetcher.fetch(url, FetchMode::Bytes).await;

    if content.is_empty() {
        return Vec::new();
    }

    let links = extract_same_site_links(&content.into_text(), url);
    debug!(url = %url, links = links.len(), "Discovered associated pages");
    links
}

/// Returns every non-empty `href` starting with `https://www.<domain>.<suffix>`
/// of the seed URL, in document order and with duplicates kept.
///
/// This is a literal prefix test: the bare domain and other subdomains do not match.
pub fn extract_same_site_links(html: &str, seed_url: &str) -> Vec<String> {
    let Some(domain) = RegistrableDomain::from_url(seed_url) else {
        return Vec::new();
    };
    let prefix = domain.www_prefix();

    let document = Html::parse_document(html);
    document
        .select(&SELECTOR_ANCHOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| !href.is_empty() && href.starts_with(&prefix))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_only_www_same_site() {
        let html = r#"
            <a href="https://www.example.com/a">A</a>
            <a href="https://other.com/b">B</a>
        "#;
        let links = extract_same_site_links(html, "https://www.example.com");
        assert_eq!(links, vec!["https://www.example.com/a".to_string()]);
    }

    #[test]
    fn test_other_forms_are_excluded() {
        let html = r#"
            <a href="https://example.com/bare">bare</a>
            <a href="https://shop.example.com/sub">sub</a>
            <a href="http://www.example.com/plain">http</a>
            <a href="/relative">relative</a>
            <a href="">empty</a>
            <a>no href</a>
        "#;
        assert!(extract_same_site_links(html, "https://www.example.com").is_empty());
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        let html = r#"
            <a href="https://www.example.com/b">B</a>
            <a href="https://www.example.com/a">A</a>
            <a href="https://www.example.com/b">B again</a>
        "#;
        let links = extract_same_site_links(html, "https://www.example.com/");
        assert_eq!(
            links,
            vec![
                "https://www.example.com/b".to_string(),
                "https://www.example.com/a".to_string(),
                "https://www.example.com/b".to_string(),
            ]
        );
    }

    #[test]
    fn test_seed_subdomain_uses_registrable_domain() {
        let html = r#"<a href="https://www.example.com/x">x</a>"#;
        let links = extract_same_site_links(html, "https://blog.example.com/post");
        assert_eq!(links, vec!["https://www.example.com/x".to_string()]);
    }

    #[test]
    fn test_hosted_store_seed_uses_platform_domain() {
        let html = r#"
            <a href="https://www.myshopify.com/x">platform</a>
            <a href="https://www.casa-mobila.myshopify.com/y">store</a>
        "#;
        let links = extract_same_site_links(html, "https://www.casa-mobila.myshopify.com/");
        assert_eq!(links, vec!["https://www.myshopify.com/x".to_string()]);
    }

    #[test]
    fn test_undeterminable_domain_keeps_nothing() {
        let html = r#"<a href="https://www.example.com/x">x</a>"#;
        assert!(extract_same_site_links(html, "http://10.0.0.1/").is_empty());
    }
}
