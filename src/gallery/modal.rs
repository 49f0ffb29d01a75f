//! Detail overlay state.
//!
//! The overlay is built on the first `open` and reused for every later one.
//! A presenter is owned by the page being rendered; there is no global modal.

use crate::apod::FeedItem;
use crate::gallery::view::ModalView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// What dismissed the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    /// Click on the backdrop, outside the content region.
    Background,
    Escape,
}

impl CloseTrigger {
    /// Value of the `close` query parameter naming this trigger.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::CloseButton => "button",
            Self::Background => "background",
            Self::Escape => "escape",
        }
    }

    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "button" => Some(Self::CloseButton),
            "background" => Some(Self::Background),
            "escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// The overlay once constructed: its current content and visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalOverlay {
    view: ModalView,
    visible: bool,
}

impl ModalOverlay {
    #[must_use]
    pub fn view(&self) -> &ModalView {
        &self.view
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Default)]
pub struct ModalPresenter {
    overlay: Option<ModalOverlay>,
}

impl ModalPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `item`, constructing the overlay if this is the first open.
    /// Opening while already open replaces the content.
    pub fn open(&mut self, item: &FeedItem) {
        let view = ModalView::from_item(item);
        match self.overlay.as_mut() {
            Some(overlay) => {
                overlay.view = view;
                overlay.visible = true;
            }
            None => {
                self.overlay = Some(ModalOverlay {
                    view,
                    visible: true,
                });
            }
        }
    }

    /// Hide the overlay. Returns `true` if it was open.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        match self.overlay.as_mut() {
            Some(overlay) if overlay.visible => {
                tracing::trace!(?trigger, "Closing modal");
                overlay.visible = false;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        if self.overlay.as_ref().is_some_and(|o| o.visible) {
            ModalState::Open
        } else {
            ModalState::Closed
        }
    }

    /// Background scrolling is suppressed while the overlay is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.state() == ModalState::Open
    }

    /// The overlay, if it has been constructed.
    #[must_use]
    pub fn overlay(&self) -> Option<&ModalOverlay> {
        self.overlay.as_ref()
    }
}
