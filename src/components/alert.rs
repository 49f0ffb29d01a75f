//! Alert and placeholder components.
//!
//! Alerts carry blocking notices above the search form; placeholders fill the
//! gallery while it is loading or after a fetch failed.

use maud::{html, Markup, Render};

/// Alert variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Error,
}

impl AlertVariant {
    /// Get the CSS class for the alert element.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Error => "alert error",
        }
    }
}

/// An alert message component.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Alert;
///
/// let alert = Alert::error("Start date must be before end date.");
/// ```
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    #[must_use]
    pub const fn new(variant: AlertVariant, message: &'a str) -> Self {
        Self { variant, message }
    }

    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(AlertVariant::Error, message)
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        html! {
            div class=(self.variant.class()) role="alert" {
                (self.message)
            }
        }
    }
}

/// Gallery placeholder: icon, message and an optional detail line.
#[derive(Debug, Clone)]
pub struct Placeholder<'a> {
    pub icon: &'a str,
    pub message: &'a str,
    pub detail: Option<&'a str>,
}

impl<'a> Placeholder<'a> {
    /// Shown before the first search.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            icon: "🔭",
            message: "Select a date range and click \"Get Space Images\" to explore the cosmos!",
            detail: None,
        }
    }

    /// Shown while a fetch is pending.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            icon: "🔄",
            message: "Loading space photos...",
            detail: None,
        }
    }

    /// Shown in place of the gallery when a fetch failed.
    #[must_use]
    pub const fn error(detail: &'a str) -> Self {
        Self {
            icon: "❌",
            message: "Error loading space images. Please try again.",
            detail: Some(detail),
        }
    }
}

impl Render for Placeholder<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="placeholder" {
                div class="placeholder-icon" { (self.icon) }
                p { (self.message) }
                @if let Some(detail) = self.detail {
                    p class="placeholder-detail" { (detail) }
                }
            }
        }
    }
}
