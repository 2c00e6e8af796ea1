// fixtures/mod.rs - Canned Pixabay responses
//
// Tests that exercise the controller, the client or the server function need
// realistic response bodies. They are built here once so every suite agrees
// on the same URLs and counters.

use crate::web_app::model::{ImageHit, SearchResponse};

/// Hit number `n` (0-based) with deterministic URLs and counters
pub fn hit(n: usize) -> ImageHit {
    let n64 = n as u64;
    ImageHit {
        id: 1000 + n64,
        preview_url: format!("https://cdn.pixabay.com/photo/preview-{n}_640.jpg"),
        full_url: format!("https://pixabay.com/get/full-{n}_1280.jpg"),
        tags: format!("cat, kitten, pet {n}"),
        likes: n64,
        views: 100 + n64,
        comments: 2 * n64,
        downloads: 50 + n64,
    }
}

/// Hits `start..start + count`
pub fn hits(start: usize, count: usize) -> Vec<ImageHit> {
    (start..start + count).map(hit).collect()
}

/// Response reporting `total_hits` and carrying `count` hits
pub fn response(total_hits: u64, count: usize) -> SearchResponse {
    SearchResponse {
        total_hits,
        hits: hits(0, count),
    }
}

/// Response for a given 1-based page of 40, carrying hits numbered after earlier pages
pub fn page_response(total_hits: u64, page: u32, count: usize) -> SearchResponse {
    let start = (page.saturating_sub(1) as usize) * 40;
    SearchResponse {
        total_hits,
        hits: hits(start, count),
    }
}

/// Raw JSON body shaped like the live API, extra fields included
pub fn response_json(total_hits: u64, count: usize) -> String {
    let hits: Vec<serde_json::Value> = hits(0, count)
        .into_iter()
        .map(|h| {
            serde_json::json!({
                "id": h.id,
                "pageURL": format!("https://pixabay.com/photos/{}/", h.id),
                "type": "photo",
                "tags": h.tags,
                "previewURL": "https://cdn.pixabay.com/photo/tiny_150.jpg",
                "webformatURL": h.preview_url,
                "largeImageURL": h.full_url,
                "views": h.views,
                "downloads": h.downloads,
                "likes": h.likes,
                "comments": h.comments,
                "user": "fixture",
            })
        })
        .collect();

    serde_json::json!({
        "total": total_hits * 2,
        "totalHits": total_hits,
        "hits": hits,
    })
    .to_string()
}
