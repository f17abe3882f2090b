//! HTML parsers for octanime.tv
//!
//! Contains modules for parsing different page types. Every parser
//! degrades to an empty result on unexpected markup.

use scraper::{ElementRef, Selector};

pub mod anime_cards;
pub mod episodes;
pub mod servers;

pub use anime_cards::parse_anime_cards;
pub use episodes::parse_episode_references;
pub use servers::parse_server_entries;

/// Parses a CSS selector, logging and discarding invalid ones
fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::error!(selector = css, error = ?e, "Invalid selector");
            None
        }
    }
}

/// Collects and trims the text content of an element
fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
