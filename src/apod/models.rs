use serde::{Deserialize, Serialize};

/// Kind of media a feed entry publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Anything else the provider publishes (interactive pages, audio, ...).
    #[serde(other)]
    Other,
}

/// One day's entry in the astronomy picture feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    pub media_type: MediaType,
    /// Image source or video embed location. Absent for `Other` entries.
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "hdurl")]
    pub hd_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

impl FeedItem {
    /// Source to show in the detail view: the HD image when there is one.
    #[must_use]
    pub fn display_src(&self) -> &str {
        match (self.media_type, self.hd_url.as_deref()) {
            (MediaType::Image, Some(hd)) if !hd.is_empty() => hd,
            _ => &self.url,
        }
    }
}

/// Response body shape: a bare object for single-day ranges, a list otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum FeedResponse {
    Many(Vec<FeedItem>),
    One(Box<FeedItem>),
}

impl FeedResponse {
    pub(crate) fn into_items(self) -> Vec<FeedItem> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![*item],
        }
    }
}
