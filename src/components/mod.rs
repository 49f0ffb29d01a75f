//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout
//! - `alert`: Blocking notices and gallery placeholders
//! - `banner`: "Did You Know?" fact banner
//! - `card`: Gallery cards and grid
//! - `form`: Search form and its inputs
//! - `media`: Image and embedded video display
//! - `modal`: Detail overlay
//!
//! # Example
//!
//! ```ignore
//! use maud::html;
//! use crate::components::{Alert, BaseLayout};
//!
//! fn my_page() -> Markup {
//!     let content = html! {
//!         (Alert::error("Start date must be before end date."))
//!     };
//!     BaseLayout::new("My Page").render(content)
//! }
//! ```

pub mod alert;
pub mod banner;
pub mod card;
pub mod form;
pub mod layout;
pub mod media;
pub mod modal;

pub use alert::{Alert, AlertVariant, Placeholder};
pub use banner::FactBanner;
pub use card::{EmptyState, GalleryCard, GalleryGrid};
pub use form::{Form, FormGroup, Input, SearchForm};
pub use layout::BaseLayout;
pub use media::{render_modal_media, ImageViewer, VideoEmbed};
pub use modal::{ModalBody, ModalOverlayView};
