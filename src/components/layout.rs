//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, header, and footer.

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Critical styles for the scroll lock, inlined so an open modal never
/// flashes a scrollable page before the stylesheet loads.
const SCROLL_LOCK_STYLE: &str = "body.modal-open { overflow: hidden; }";

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page").scroll_locked(true).render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    scroll_locked: bool,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            scroll_locked: false,
        }
    }

    /// Suppress page scrolling, used while the detail modal is open.
    #[must_use]
    pub fn scroll_locked(mut self, locked: bool) -> Self {
        self.scroll_locked = locked;
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        let body_class = self.scroll_locked.then_some("modal-open");

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) " - NASA Space Explorer" }
                    link rel="stylesheet" href="/static/css/style.css";
                    link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔭</text></svg>";
                    style { (PreEscaped(SCROLL_LOCK_STYLE)) }
                }
                body class=[body_class] {
                    (Self::render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                    script src="/static/js/gallery.js" {}
                }
            }
        }
    }

    fn render_header() -> Markup {
        html! {
            header class="site-header" {
                a href="/" class="site-logo" {
                    h1 { "NASA Space Explorer" }
                }
            }
        }
    }

    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small {
                    "Images and text from "
                    a href="https://apod.nasa.gov/apod/" target="_blank" rel="noopener noreferrer" {
                        "Astronomy Picture of the Day"
                    }
                }
            }
        }
    }
}
