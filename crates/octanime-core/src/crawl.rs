//! Time-budgeted crawl loops
//!
//! Both loops are strictly sequential and always run their first
//! iteration. The budget is soft: it is checked between iterations, so a
//! slow fetch can overrun it by up to the client timeout. Neither loop
//! reports partial failure; callers get whatever was accumulated.

use std::time::{Duration, Instant};

use crate::client::PageFetcher;
use crate::parser::{parse_anime_cards, parse_server_entries};
use crate::types::{AnimeCard, EpisodeReference, EpisodeResult};
use crate::url::build_page_url;

/// Fraction of the search budget after which a warning is logged
const SOFT_CHECKPOINT: f64 = 0.8;

/// Why a bounded loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Elapsed time reached the budget
    Budget,
    /// A result page contained no cards
    EmptyPage,
    /// A page could not be fetched
    FetchFailure,
    /// The input list was fully processed
    Exhausted,
}

/// Crawls successive search result pages until the budget runs out, a page
/// comes back empty, or a fetch fails
///
/// # Arguments
/// * `fetcher` - Page source
/// * `base_url` - URL of the first result page
/// * `budget` - Wall-clock budget for the whole crawl
///
/// # Returns
/// All cards collected, in page order
pub async fn crawl_pages<F: PageFetcher>(
    fetcher: &F,
    base_url: &str,
    budget: Duration,
) -> Vec<AnimeCard> {
    let start = Instant::now();
    let mut results = Vec::new();
    let mut page: u32 = 1;
    let mut warned = false;

    let reason = loop {
        let url = build_page_url(base_url, page);

        let Ok(html) = fetcher.fetch(&url).await else {
            break StopReason::FetchFailure;
        };

        let cards = parse_anime_cards(&html);
        if cards.is_empty() {
            break StopReason::EmptyPage;
        }

        tracing::debug!(page, cards = cards.len(), "Scraped result page");
        results.extend(cards);
        page += 1;

        let elapsed = start.elapsed();
        if !warned && elapsed.as_secs_f64() > budget.as_secs_f64() * SOFT_CHECKPOINT {
            tracing::warn!(pages = page - 1, ?elapsed, "Approaching search time limit");
            warned = true;
        }
        if elapsed >= budget {
            break StopReason::Budget;
        }
    };

    tracing::info!(
        pages = page - 1,
        cards = results.len(),
        elapsed_secs = start.elapsed().as_secs_f64(),
        ?reason,
        "Search crawl finished"
    );

    results
}

/// Fetches the server list of each episode in order until the budget runs
/// out
///
/// An episode whose page cannot be fetched or has no servers still yields
/// an [`EpisodeResult`] with an empty server list.
///
/// # Arguments
/// * `fetcher` - Page source
/// * `episodes` - References discovered on the episode-list page
/// * `budget` - Wall-clock budget for the whole batch
pub async fn process_episodes<F: PageFetcher>(
    fetcher: &F,
    episodes: &[EpisodeReference],
    budget: Duration,
) -> Vec<EpisodeResult> {
    let start = Instant::now();
    let mut results = Vec::with_capacity(episodes.len());
    let mut reason = StopReason::Exhausted;

    for episode in episodes {
        if !results.is_empty() && start.elapsed() > budget {
            tracing::info!(
                processed = results.len(),
                total = episodes.len(),
                "Reached extract time limit"
            );
            reason = StopReason::Budget;
            break;
        }

        let servers = match fetcher.fetch(&episode.url).await {
            Ok(html) => parse_server_entries(&html),
            Err(_) => Vec::new(),
        };

        tracing::debug!(
            episode = %episode.display_name,
            servers = servers.len(),
            "Processed episode"
        );

        results.push(EpisodeResult {
            episode_name: episode.display_name.clone(),
            servers,
        });
    }

    tracing::info!(
        processed = results.len(),
        total = episodes.len(),
        elapsed_secs = start.elapsed().as_secs_f64(),
        ?reason,
        "Episode batch finished"
    );

    results
}
