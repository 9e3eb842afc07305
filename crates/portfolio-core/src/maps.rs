//! Map links for the contact section.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Base of the external mapping service
pub const MAPS_BASE_URL: &str = "https://maps.example/";

/// Characters left as-is in the query value besides alphanumerics.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b',')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encode a location for the `q` parameter, spaces as `+`.
pub fn encode_location(location: &str) -> String {
    utf8_percent_encode(location, QUERY_VALUE)
        .to_string()
        .replace("%20", "+")
}

/// `https://maps.example/?q=<location>&z=<zoom>`
pub fn map_url(location: &str, zoom: u8) -> String {
    format!("{MAPS_BASE_URL}?q={}&z={zoom}", encode_location(location))
}

/// Embeddable map for the contact section iframe
pub fn embed_url(location: &str, zoom: u8) -> String {
    format!("{MAPS_BASE_URL}embed?q={}&z={zoom}", encode_location(location))
}

/// Map URL for the configured location
pub fn site_map_url(config: &SiteConfig) -> String {
    map_url(&config.map_location, config.map_zoom)
}

/// Set a cache-busting `v` stamp on an embed URL so the iframe reloads.
/// Other query parameters are kept; an earlier stamp is replaced.
pub fn refresh_embed_url(src: &str, stamp: u64) -> String {
    let (base, query) = src.split_once('?').unwrap_or((src, ""));
    let mut params: Vec<&str> = query
        .split('&')
        .filter(|p| !p.is_empty() && !p.starts_with("v="))
        .collect();
    let stamp = format!("v={stamp}");
    params.push(&stamp);
    format!("{base}?{}", params.join("&"))
}
