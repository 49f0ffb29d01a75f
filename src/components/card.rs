//! Card components for the gallery.
//!
//! This module provides maud components for rendering gallery cards and grids.

use maud::{html, Markup, Render};

use super::media::ImageViewer;
use super::modal::ModalBody;
use crate::gallery::{CardKind, CardView, DateRange, SpaceFact};

/// A single gallery card.
///
/// The card links to the same gallery with this entry's detail modal open,
/// so clicking works without the enhancement script. The modal content
/// follows in a `<template>` the script opens in place.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::GalleryCard;
///
/// let card = GalleryCard::new(&view, &range, fact);
/// ```
#[derive(Debug, Clone)]
pub struct GalleryCard<'a> {
    pub card: &'a CardView,
    pub range: &'a DateRange,
    pub fact: SpaceFact,
}

impl<'a> GalleryCard<'a> {
    #[must_use]
    pub const fn new(card: &'a CardView, range: &'a DateRange, fact: SpaceFact) -> Self {
        Self { card, range, fact }
    }
}

impl Render for GalleryCard<'_> {
    fn render(&self) -> Markup {
        let card = self.card;
        let href = self.range.page_href(self.fact, Some(&card.date));
        let kind_class = match card.kind {
            CardKind::Image => "gallery-item media-image",
            CardKind::Video => "gallery-item media-video",
            CardKind::Other => "gallery-item media-other",
        };

        html! {
            a class=(kind_class) href=(href) data-date=(card.date) {
                @match (card.kind, card.thumb_src.as_deref()) {
                    (CardKind::Video, Some(thumb)) => {
                        div class="video-thumbnail" {
                            (ImageViewer::new(thumb).with_alt(&card.title).lazy(true))
                            div class="video-overlay" { "▶️" }
                        }
                    }
                    (_, Some(src)) => {
                        (ImageViewer::new(src).with_alt(&card.title).lazy(true))
                    }
                    (_, None) => {}
                }
                p { strong { (card.title) } }
                p class="gallery-date" { (card.date) }
            }
            template class="modal-template" data-date=(card.date) {
                (ModalBody::new(&card.detail))
            }
        }
    }
}

/// The gallery container with one card per entry.
#[derive(Debug, Clone)]
pub struct GalleryGrid<'a> {
    pub cards: &'a [CardView],
    pub range: &'a DateRange,
    pub fact: SpaceFact,
}

impl<'a> GalleryGrid<'a> {
    #[must_use]
    pub const fn new(cards: &'a [CardView], range: &'a DateRange, fact: SpaceFact) -> Self {
        Self { cards, range, fact }
    }
}

impl Render for GalleryGrid<'_> {
    fn render(&self) -> Markup {
        html! {
            @if self.cards.is_empty() {
                (EmptyState::no_results())
            }
            @for card in self.cards {
                (GalleryCard::new(card, self.range, self.fact))
            }
        }
    }
}

/// An empty state component for when a range has no entries.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl EmptyState<'_> {
    #[must_use]
    pub const fn no_results() -> Self {
        Self {
            message: "No space images were published in this date range.",
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="placeholder" {
                p { (self.message) }
            }
        }
    }
}
