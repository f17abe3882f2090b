//! URL helper functions for octanime.tv
//!
//! Provides functions for building search and paginated result URLs.

/// Default site root
pub const BASE_URL: &str = "https://www.octanime.tv";

/// Encodes a query string value with spaces as `+`
///
/// # Example
/// ```
/// use octanime_core::url::encode_query;
/// assert_eq!(encode_query("one piece"), "one+piece");
/// assert_eq!(encode_query("a&b"), "a%26b");
/// ```
pub fn encode_query(query: &str) -> String {
    urlencoding::encode(query).replace("%20", "+")
}

/// Builds the search URL for a given query on the given site root
///
/// # Arguments
/// * `base_url` - Site root without trailing slash (e.g., [`BASE_URL`])
/// * `query` - Raw search query
///
/// # Example
/// ```
/// use octanime_core::url::{build_search_url, BASE_URL};
/// let url = build_search_url(BASE_URL, "one piece");
/// assert_eq!(url, "https://www.octanime.tv/search/?s=one+piece");
/// ```
pub fn build_search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/search/?s={}",
        base_url.trim_end_matches('/'),
        encode_query(query)
    )
}

/// Builds the URL of a given result page
///
/// Page 1 is the base URL unchanged; later pages append `page=n`.
///
/// # Example
/// ```
/// use octanime_core::url::build_page_url;
/// let base = "https://www.octanime.tv/search/?s=naruto";
/// assert_eq!(build_page_url(base, 1), base);
/// assert_eq!(build_page_url(base, 3), "https://www.octanime.tv/search/?s=naruto&page=3");
/// ```
pub fn build_page_url(base_url: &str, page: u32) -> String {
    if page <= 1 {
        return base_url.to_string();
    }

    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}page={}", base_url, separator, page)
}
