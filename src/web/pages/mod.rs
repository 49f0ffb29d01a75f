//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod home;

pub use home::{render_home_page, render_results, GalleryOutcome, HomePageParams};
