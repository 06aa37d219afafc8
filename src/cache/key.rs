//! Natural cache keys per resource kind

use crate::client::models::MediaType;

/// Key for a media record: the id in decimal.
pub fn media_key(id: i64) -> String {
    id.to_string()
}

/// Key for a user's lists.
///
/// AniList user names are case-insensitive, so the key is lowercased.
pub fn user_key(user_name: &str) -> String {
    user_name.to_lowercase()
}

/// Key for a search page: `"{query}:{TYPE}"`.
///
/// The query text is kept verbatim.
pub fn search_key(query: &str, media_type: MediaType) -> String {
    format!("{}:{}", query, media_type)
}
