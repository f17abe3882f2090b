//! Search results parser for octanime.tv
//!
//! Parses HTML from a search results page and extracts anime cards.

use scraper::{ElementRef, Html};

use super::{element_text, selector};
use crate::types::AnimeCard;

/// Parses search results HTML and returns the anime cards in document order
///
/// # Arguments
/// * `html` - Raw HTML string from a search results page
///
/// # Returns
/// Vector of `AnimeCard`, empty if the results container is missing
pub fn parse_anime_cards(html: &str) -> Vec<AnimeCard> {
    let document = Html::parse_document(html);
    collect_cards(&document).unwrap_or_default()
}

fn collect_cards(document: &Html) -> Option<Vec<AnimeCard>> {
    let list_selector = selector("div.anime-list-content")?;
    let card_selector = selector("div.anime-card-container")?;

    let list = document.select(&list_selector).next()?;

    Some(
        list.select(&card_selector)
            .filter_map(|card| parse_card(&card))
            .collect(),
    )
}

/// Parses a single card container
///
/// Returns `None` only when the poster or details region is missing;
/// anything missing inside those regions becomes a `None` field.
fn parse_card(card: &ElementRef) -> Option<AnimeCard> {
    let poster = card.select(&selector("div.anime-card-poster")?).next()?;
    let details = card.select(&selector("div.anime-card-details")?).next()?;

    let image_url = first_attr(&poster, "img.img-responsive", "src");
    let detail_url = first_attr(&poster, "a.overlay", "href");

    let kind = selector("div.anime-card-type")
        .and_then(|s| details.select(&s).next())
        .map(|el| element_text(&el));

    // Title lives in an h3 nested in the title block
    let title = selector("div.anime-card-title")
        .and_then(|s| details.select(&s).next())
        .and_then(|block| selector("h3").and_then(|s| block.select(&s).next()))
        .map(|h3| element_text(&h3));

    Some(AnimeCard {
        image_url,
        detail_url,
        kind,
        title,
    })
}

/// Reads `attr` from the first element matching `css`
fn first_attr(scope: &ElementRef, css: &str, attr: &str) -> Option<String> {
    let element = scope.select(&selector(css)?).next()?;
    element.value().attr(attr).map(str::to_string)
}
