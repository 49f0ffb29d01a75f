//! Detail modal overlay component.
//!
//! Every card ships its [`ModalBody`] in a `<template>`, and the enhancement
//! script fills one shared overlay from it. The server-rendered overlay is
//! the fallback for pages opened with `view`: its backdrop and close control
//! are links that report which trigger closed it.

use maud::{html, Markup, Render};

use super::media::render_modal_media;
use crate::gallery::{CloseTrigger, ModalPresenter, ModalView};

/// Media and text of one entry's detail view.
#[derive(Debug, Clone)]
pub struct ModalBody<'a> {
    pub view: &'a ModalView,
}

impl<'a> ModalBody<'a> {
    #[must_use]
    pub const fn new(view: &'a ModalView) -> Self {
        Self { view }
    }
}

impl Render for ModalBody<'_> {
    fn render(&self) -> Markup {
        let view = self.view;
        html! {
            div class="modal-body" {
                div class="modal-media" {
                    (render_modal_media(&view.media))
                }
                div class="modal-info" {
                    h2 class="modal-title" { (view.title) }
                    p class="modal-date" { (view.date) }
                    @if let Some(copyright) = &view.copyright {
                        p class="modal-copyright" { "© " (copyright) }
                    }
                    p class="modal-explanation" { (view.explanation) }
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct ModalOverlayView<'a> {
    pub presenter: &'a ModalPresenter,
    /// Page showing the overlay; closing links append the trigger to it.
    pub page_href: &'a str,
}

impl<'a> ModalOverlayView<'a> {
    #[must_use]
    pub const fn new(presenter: &'a ModalPresenter, page_href: &'a str) -> Self {
        Self {
            presenter,
            page_href,
        }
    }

    fn close_href(&self, trigger: CloseTrigger) -> String {
        format!("{}&close={}", self.page_href, trigger.as_param())
    }
}

impl Render for ModalOverlayView<'_> {
    fn render(&self) -> Markup {
        // Never opened: the overlay doesn't exist yet.
        let Some(overlay) = self.presenter.overlay() else {
            return html! {};
        };
        let style = if overlay.is_visible() {
            "display: block"
        } else {
            "display: none"
        };

        html! {
            div class="modal" id="modal" style=(style) {
                a class="modal-backdrop" href=(self.close_href(CloseTrigger::Background)) aria-label="Close" {}
                div class="modal-content" role="dialog" aria-modal="true" {
                    a class="close" href=(self.close_href(CloseTrigger::CloseButton)) aria-label="Close" { "×" }
                    (ModalBody::new(overlay.view()))
                }
            }
        }
    }
}
