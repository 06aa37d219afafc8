//! Test fixtures for upstream GraphQL payloads
//!
//! Each helper returns the JSON that sits under the kind's root field of an
//! upstream `data` object. Import via `use crate::client::fixtures` in test
//! modules.

use serde_json::{Value, json};

/// A fully populated `Media` object, shaped like the `MEDIA_QUERY` selection.
pub fn media_json(id: i64) -> Value {
    json!({
        "id": id,
        "idMal": id,
        "title": {
            "romaji": format!("Romaji Title {}", id),
            "english": format!("English Title {}", id),
            "native": "ワンピース"
        },
        "type": "ANIME",
        "format": "TV",
        "status": "RELEASING",
        "description": "Gold Roger was known as the Pirate King.",
        "startDate": { "year": 1999, "month": 10, "day": 20 },
        "endDate": { "year": null, "month": null, "day": null },
        "season": "FALL",
        "seasonYear": 1999,
        "episodes": null,
        "duration": 24,
        "chapters": null,
        "volumes": null,
        "countryOfOrigin": "JP",
        "isLicensed": true,
        "source": "MANGA",
        "trailer": { "id": "um-tFlVamOI", "site": "youtube", "thumbnail": "https://i.ytimg.com/vi/um-tFlVamOI/hqdefault.jpg" },
        "updatedAt": 1728000000,
        "coverImage": {
            "extraLarge": "https://img.anili.st/xl.jpg",
            "large": "https://img.anili.st/l.jpg",
            "medium": "https://img.anili.st/m.jpg",
            "color": "#e4a15d"
        },
        "bannerImage": "https://img.anili.st/banner.jpg",
        "genres": ["Action", "Adventure"],
        "synonyms": ["OP"],
        "averageScore": 88,
        "meanScore": 88,
        "popularity": 500000,
        "favourites": 80000,
        "tags": [{
            "id": 94,
            "name": "Pirates",
            "description": "Prominently features sea-faring adventurers.",
            "category": "Theme-Other",
            "rank": 96,
            "isGeneralSpoiler": false,
            "isMediaSpoiler": false,
            "isAdult": false,
            "userId": null
        }],
        "studios": {
            "nodes": [{ "id": 18, "name": "Toei Animation", "isAnimationStudio": true }],
            "pageInfo": { "total": 1, "perPage": 25, "currentPage": 1, "lastPage": 1, "hasNextPage": false }
        },
        "isAdult": false,
        "externalLinks": [{
            "id": 1,
            "url": "https://www.crunchyroll.com/one-piece",
            "site": "Crunchyroll",
            "siteId": 5,
            "type": "STREAMING",
            "language": null,
            "color": "#F88A36",
            "icon": null,
            "notes": null,
            "isDisabled": false
        }],
        "rankings": [{
            "id": 100,
            "rank": 3,
            "type": "POPULAR",
            "format": "TV",
            "year": null,
            "season": null,
            "allTime": true,
            "context": "most popular all time"
        }],
        "siteUrl": format!("https://anilist.co/anime/{}", id),
        "recommendations": {
            "nodes": [
                {
                    "id": 1,
                    "rating": 120,
                    "mediaRecommendation": summary_media_json(30013)
                },
                null
            ]
        }
    })
}

/// A recommended media node: the same fragment without `recommendations`.
fn summary_media_json(id: i64) -> Value {
    let mut value = media_json_without_recommendations(id);
    value["type"] = json!("MANGA");
    value["format"] = json!("MANGA");
    value
}

fn media_json_without_recommendations(id: i64) -> Value {
    json!({
        "id": id,
        "idMal": null,
        "title": { "romaji": "One Piece", "english": null, "native": null },
        "type": "ANIME",
        "format": "TV",
        "status": "FINISHED",
        "description": null,
        "startDate": { "year": 1997, "month": 7, "day": 22 },
        "endDate": null,
        "season": null,
        "seasonYear": null,
        "episodes": null,
        "duration": null,
        "chapters": null,
        "volumes": null,
        "countryOfOrigin": "JP",
        "isLicensed": true,
        "source": "ORIGINAL",
        "trailer": null,
        "updatedAt": null,
        "coverImage": null,
        "bannerImage": null,
        "genres": [],
        "synonyms": [],
        "averageScore": null,
        "meanScore": null,
        "popularity": 10,
        "favourites": 1,
        "tags": [],
        "studios": { "nodes": [], "pageInfo": null },
        "isAdult": false,
        "externalLinks": [],
        "rankings": [],
        "siteUrl": null
    })
}

/// A `MediaListCollection` with a single group of the given status.
pub fn user_lists_json(status: &str, media_ids: &[i64]) -> Value {
    let entries: Vec<Value> = media_ids
        .iter()
        .map(|id| json!({ "mediaId": id }))
        .collect();
    json!({
        "lists": [{ "entries": entries, "status": status }]
    })
}

/// A search `Page` with two results.
pub fn search_page_json() -> Value {
    json!({
        "pageInfo": {
            "total": 2,
            "currentPage": 1,
            "lastPage": 1,
            "hasNextPage": false,
            "perPage": 20
        },
        "media": [
            {
                "id": 1535,
                "title": { "romaji": "Death Note", "english": "Death Note", "native": "デスノート" },
                "coverImage": { "medium": "https://img.anili.st/dn-m.jpg", "large": "https://img.anili.st/dn-l.jpg" },
                "type": "ANIME",
                "format": "TV",
                "status": "FINISHED",
                "averageScore": 84,
                "startDate": { "year": 2006, "month": 10, "day": 4 }
            },
            {
                "id": 21,
                "title": { "romaji": "ONE PIECE", "english": "ONE PIECE", "native": null },
                "coverImage": null,
                "type": "ANIME",
                "format": "TV",
                "status": "RELEASING",
                "averageScore": 88,
                "startDate": { "year": 1999, "month": 10, "day": 20 }
            }
        ]
    })
}

/// Wrap a payload in an upstream `data` object under the given root field.
pub fn data(root_field: &str, payload: Value) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(root_field.to_string(), payload);
    Value::Object(map)
}
