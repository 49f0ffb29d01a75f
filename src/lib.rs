//! APOD gallery.
//!
//! A small web service that fetches NASA's Astronomy Picture of the Day feed
//! for a chosen date range and renders it as a browsable gallery with a
//! detail view per entry.

pub mod apod;
pub mod components;
pub mod config;
pub mod constants;
pub mod gallery;
pub mod web;
