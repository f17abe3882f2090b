//! Streaming server parser for octanime.tv
//!
//! Parses a single episode page and extracts the hardsub server list.

use scraper::Html;

use super::{element_text, selector};
use crate::types::ServerEntry;

/// Parses episode page HTML and returns the hardsub servers
///
/// The playable URL comes from the `data-ep-url` attribute of the first
/// link in each list item; items without it are skipped.
pub fn parse_server_entries(html: &str) -> Vec<ServerEntry> {
    let document = Html::parse_document(html);
    collect_servers(&document).unwrap_or_default()
}

fn collect_servers(document: &Html) -> Option<Vec<ServerEntry>> {
    let content_selector = selector("div.hardsub-content")?;
    let item_selector = selector("li")?;
    let link_selector = selector("a")?;

    let content = document.select(&content_selector).next()?;
    let mut servers = Vec::new();

    for item in content.select(&item_selector) {
        let Some(link) = item.select(&link_selector).next() else {
            continue;
        };
        let Some(url) = link.value().attr("data-ep-url") else {
            continue;
        };

        servers.push(ServerEntry {
            name: element_text(&link),
            url: url.to_string(),
        });
    }

    Some(servers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_missing_content() {
        let html = r#"<ul><li><a data-ep-url="https://v.example/1">A</a></li></ul>"#;
        assert!(parse_server_entries(html).is_empty());
    }

    #[test]
    fn test_parse_server_list() {
        let html = r##"
        <div class="tab-content">
            <div class="hardsub-content">
                <ul>
                    <li><a href="#" data-ep-url="https://ok.example/embed/1"> ok.ru </a></li>
                    <li><a href="#" data-ep-url="https://mp4.example/e/2">mp4upload</a></li>
                </ul>
            </div>
        </div>
        "##;

        let servers = parse_server_entries(html);
        assert_eq!(
            servers,
            vec![
                ServerEntry {
                    name: "ok.ru".to_string(),
                    url: "https://ok.example/embed/1".to_string(),
                },
                ServerEntry {
                    name: "mp4upload".to_string(),
                    url: "https://mp4.example/e/2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_item_without_data_url_is_skipped() {
        let html = r#"
        <div class="hardsub-content">
            <ul>
                <li><a href="https://not-a-player.example">Broken</a></li>
                <li><a data-ep-url="https://player.example/e/1">Working</a></li>
            </ul>
        </div>
        "#;

        let servers = parse_server_entries(html);
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].name, "Working");
    }

    #[test]
    fn test_item_without_link_is_skipped() {
        let html = r#"
        <div class="hardsub-content">
            <ul>
                <li>Offline</li>
                <li><a data-ep-url="https://player.example/e/1">Working</a></li>
            </ul>
        </div>
        "#;

        assert_eq!(parse_server_entries(html).len(), 1);
    }

    #[test]
    fn test_softsub_list_is_ignored() {
        let html = r#"
        <div class="softsub-content">
            <ul><li><a data-ep-url="https://soft.example/1">Soft</a></li></ul>
        </div>
        <div class="hardsub-content">
            <ul><li><a data-ep-url="https://hard.example/1">Hard</a></li></ul>
        </div>
        "#;

        let servers = parse_server_entries(html);
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].url, "https://hard.example/1");
    }
}
