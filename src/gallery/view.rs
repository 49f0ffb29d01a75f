//! View models built from feed entries.
//!
//! Nothing here knows about HTML; `components` turns these into markup.

use crate::apod::{FeedItem, MediaType};

/// How a card or the modal presents its media.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Image,
    Video,
    /// Text only; the entry has no displayable media.
    Other,
}

impl From<MediaType> for CardKind {
    fn from(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Image => Self::Image,
            MediaType::Video => Self::Video,
            MediaType::Other => Self::Other,
        }
    }
}

/// Everything a gallery card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub date: String,
    pub title: String,
    pub kind: CardKind,
    /// Image shown on the card: the image itself, or a video thumbnail.
    pub thumb_src: Option<String>,
    /// Modal content for this entry, shipped with the card so opening it
    /// needs no further request.
    pub detail: ModalView,
}

impl CardView {
    /// Build the card for `item`. Videos without a provider thumbnail use
    /// `video_placeholder`.
    #[must_use]
    pub fn from_item(item: &FeedItem, video_placeholder: &str) -> Self {
        let kind = CardKind::from(item.media_type);
        let thumb_src = match kind {
            CardKind::Image => Some(item.url.clone()),
            CardKind::Video => Some(
                item.thumbnail_url
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| video_placeholder.to_string()),
            ),
            CardKind::Other => None,
        };

        Self {
            date: item.date.clone(),
            title: item.title.clone(),
            kind,
            thumb_src,
            detail: ModalView::from_item(item),
        }
    }

    /// Whether the card carries the play overlay.
    #[must_use]
    pub fn shows_play_overlay(&self) -> bool {
        self.kind == CardKind::Video
    }
}

/// Media region of the detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMedia {
    Image { src: String, alt: String },
    /// Embedded player plus an external link to the same location.
    Video { embed_src: String },
    None,
}

/// Everything the detail modal shows for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub date: String,
    pub title: String,
    pub explanation: String,
    pub copyright: Option<String>,
    pub media: ModalMedia,
}

impl ModalView {
    #[must_use]
    pub fn from_item(item: &FeedItem) -> Self {
        let media = match item.media_type {
            MediaType::Image => ModalMedia::Image {
                src: item.display_src().to_string(),
                alt: item.title.clone(),
            },
            MediaType::Video => ModalMedia::Video {
                embed_src: item.url.clone(),
            },
            MediaType::Other if !item.url.is_empty() => ModalMedia::Video {
                embed_src: item.url.clone(),
            },
            MediaType::Other => ModalMedia::None,
        };

        Self {
            date: item.date.clone(),
            title: item.title.clone(),
            explanation: item.explanation.clone(),
            copyright: item
                .copyright
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from),
            media,
        }
    }
}
