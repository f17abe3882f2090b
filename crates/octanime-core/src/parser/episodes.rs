//! Episode list parser for octanime.tv
//!
//! Parses an anime's episode-list page into episode references.

use scraper::Html;

use super::{element_text, selector};
use crate::types::EpisodeReference;

/// Parses episode-list HTML and returns one reference per linked episode
///
/// Only the first link of each episode container is considered; a container
/// whose first link has no `href` is skipped.
///
/// # Arguments
/// * `html` - Raw HTML string from an anime page
///
/// # Returns
/// Vector of `EpisodeReference`, empty if the episode list is missing
pub fn parse_episode_references(html: &str) -> Vec<EpisodeReference> {
    let document = Html::parse_document(html);
    collect_references(&document).unwrap_or_default()
}

fn collect_references(document: &Html) -> Option<Vec<EpisodeReference>> {
    let list_selector = selector("div#DivEpisodesList")?;
    let container_selector = selector("div.DivEpisodeContainer")?;
    let link_selector = selector("a")?;

    let list = document.select(&list_selector).next()?;
    let mut references = Vec::new();

    for container in list.select(&container_selector) {
        let Some(link) = container.select(&link_selector).next() else {
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };

        references.push(EpisodeReference {
            display_name: element_text(&link),
            url: href.to_string(),
        });
    }

    Some(references)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_missing_list() {
        let html = r#"<html><body><div class="DivEpisodeContainer"><a href="/e/1">1</a></div></body></html>"#;
        assert!(parse_episode_references(html).is_empty());
    }

    #[test]
    fn test_parse_episode_list() {
        let html = r#"
        <html><body>
        <div id="DivEpisodesList">
            <div class="DivEpisodeContainer">
                <a href="https://www.octanime.tv/episode/naruto-1/">  الحلقة 1  </a>
            </div>
            <div class="DivEpisodeContainer">
                <a href="https://www.octanime.tv/episode/naruto-2/">الحلقة 2</a>
            </div>
        </div>
        </body></html>
        "#;

        let refs = parse_episode_references(html);
        assert_eq!(
            refs,
            vec![
                EpisodeReference {
                    display_name: "الحلقة 1".to_string(),
                    url: "https://www.octanime.tv/episode/naruto-1/".to_string(),
                },
                EpisodeReference {
                    display_name: "الحلقة 2".to_string(),
                    url: "https://www.octanime.tv/episode/naruto-2/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_container_without_link_is_skipped() {
        let html = r#"
        <div id="DivEpisodesList">
            <div class="DivEpisodeContainer"><a href="/e/1">Episode 1</a></div>
            <div class="DivEpisodeContainer"><span>Coming soon</span></div>
            <div class="DivEpisodeContainer"><a href="/e/3">Episode 3</a></div>
        </div>
        "#;

        let refs = parse_episode_references(html);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].url, "/e/1");
        assert_eq!(refs[1].url, "/e/3");
    }

    #[test]
    fn test_only_first_link_is_considered() {
        let html = r#"
        <div id="DivEpisodesList">
            <div class="DivEpisodeContainer">
                <a name="anchor">No target</a>
                <a href="/e/1">Episode 1</a>
            </div>
            <div class="DivEpisodeContainer">
                <a href="/e/2">Episode 2</a>
                <a href="/e/2/alt">Alt</a>
            </div>
        </div>
        "#;

        let refs = parse_episode_references(html);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].display_name, "Episode 2");
        assert_eq!(refs[0].url, "/e/2");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = r#"
        <div id="DivEpisodesList">
            <div class="DivEpisodeContainer"><a href="/e/1">Episode 1</a></div>
            <div class="DivEpisodeContainer"><a href="/e/1">Episode 1</a></div>
        </div>
        "#;

        assert_eq!(parse_episode_references(html).len(), 2);
    }
}
