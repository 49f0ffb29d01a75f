//! Media display components for the detail modal.

use maud::{html, Markup, Render};

use crate::gallery::ModalMedia;

/// Image viewer component.
#[derive(Debug, Clone)]
pub struct ImageViewer<'a> {
    /// Source URL for the image
    pub src: &'a str,
    /// Optional alt text for accessibility
    pub alt: Option<&'a str>,
    /// Whether to use lazy loading
    pub lazy: bool,
}

impl<'a> ImageViewer<'a> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            alt: None,
            lazy: false,
        }
    }

    #[must_use]
    pub fn with_alt(mut self, alt: &'a str) -> Self {
        self.alt = Some(alt);
        self
    }

    #[must_use]
    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }
}

impl Render for ImageViewer<'_> {
    fn render(&self) -> Markup {
        let alt_text = self.alt.unwrap_or("Astronomy picture");
        let loading = self.lazy.then_some("lazy");

        html! {
            img src=(self.src) alt=(alt_text) loading=[loading];
        }
    }
}

/// Embedded video frame with an external link to the same location.
#[derive(Debug, Clone)]
pub struct VideoEmbed<'a> {
    pub src: &'a str,
}

impl<'a> VideoEmbed<'a> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self { src }
    }
}

impl Render for VideoEmbed<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="video-container" {
                iframe src=(self.src) frameborder="0" allowfullscreen {}
                p {
                    a href=(self.src) target="_blank" rel="noopener noreferrer" { "Watch on YouTube" }
                }
            }
        }
    }
}

/// Render the media region of the modal.
#[must_use]
pub fn render_modal_media(media: &ModalMedia) -> Markup {
    match media {
        ModalMedia::Image { src, alt } => ImageViewer::new(src).with_alt(alt).render(),
        ModalMedia::Video { embed_src } => VideoEmbed::new(embed_src).render(),
        ModalMedia::None => html! {},
    }
}
