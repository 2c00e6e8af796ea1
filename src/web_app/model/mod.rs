// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between the browser, the server and the Pixabay API.

use serde::{Deserialize, Serialize};

/// Number of hits requested per page
pub const PER_PAGE: u32 = 40;

/// Fixed Pixabay filters sent with every request
pub const IMAGE_TYPE: &str = "photo";
pub const ORIENTATION: &str = "horizontal";
pub const SAFE_SEARCH: bool = true;

/// One image record returned by the Pixabay API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageHit {
    #[serde(default)]
    pub id: u64,
    /// Medium-sized preview, used as the gallery thumbnail
    #[serde(rename = "webformatURL")]
    pub preview_url: String,
    /// Full-size image, opened by the lightbox
    #[serde(rename = "largeImageURL")]
    pub full_url: String,
    pub tags: String,
    pub likes: u64,
    pub views: u64,
    pub comments: u64,
    pub downloads: u64,
}

/// Pixabay search response (only the fields the gallery reads)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "totalHits")]
    pub total_hits: u64,
    #[serde(default)]
    pub hits: Vec<ImageHit>,
}

/// Number of pages needed to show `total_hits` at `per_page` hits each
pub fn total_pages(total_hits: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = total_hits.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// A labeled metadata line under a card's thumbnail
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoItem {
    pub label: &'static str,
    pub value: u64,
}

/// Between a metadata label and its value
pub const INFO_SEPARATOR: &str = ": ";

impl std::fmt::Display for InfoItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.label, INFO_SEPARATOR, self.value)
    }
}

/// The rendered unit for one hit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Link target: the full-size image
    pub href: String,
    /// Thumbnail source: the preview image
    pub thumbnail_src: String,
    /// Accessible description (the hit's tags)
    pub alt: String,
    pub lazy: bool,
    /// Likes, Views, Comments, Downloads, in that order
    pub info: [InfoItem; 4],
}

impl Card {
    pub fn from_hit(hit: &ImageHit) -> Self {
        Self {
            href: hit.full_url.clone(),
            thumbnail_src: hit.preview_url.clone(),
            alt: hit.tags.clone(),
            lazy: true,
            info: [
                InfoItem { label: "Likes", value: hit.likes },
                InfoItem { label: "Views", value: hit.views },
                InfoItem { label: "Comments", value: hit.comments },
                InfoItem { label: "Downloads", value: hit.downloads },
            ],
        }
    }
}

/// Notification category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyKind {
    Warning,
    Failure,
    Info,
}

impl std::fmt::Display for NotifyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyKind::Warning => write!(f, "Warning"),
            NotifyKind::Failure => write!(f, "Failure"),
            NotifyKind::Info => write!(f, "Info"),
        }
    }
}

/// One-shot user-visible message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotifyKind,
    pub message: String,
}

pub const MSG_EMPTY_QUERY: &str = "Please enter a search query.";
pub const MSG_NO_RESULTS: &str =
    "Sorry, there are no images matching your search query. Please try again.";
pub const MSG_FETCH_FAILED: &str = "An error occurred while fetching images. Please try again.";
pub const MSG_END_OF_RESULTS: &str = "We're sorry, but you've reached the end of search results.";
