//! Gallery page rendering using maud templates.
//!
//! The page is the search form, the fact banner, the gallery (or a
//! placeholder) and, when an entry was selected, the detail modal.

use maud::{html, Markup, Render};

use crate::apod::FetchError;
use crate::components::{
    Alert, BaseLayout, FactBanner, GalleryGrid, ModalOverlayView, Placeholder, SearchForm,
};
use crate::constants::FIRST_FEED_DATE;
use crate::gallery::{CardView, DateRange, ModalPresenter, SpaceFact, ValidationError};

/// Result of handling the submitted search.
#[derive(Debug)]
pub enum GalleryOutcome {
    /// Nothing submitted yet.
    Initial,
    /// The submitted range was refused; no request was made.
    Invalid(ValidationError),
    Loaded {
        range: DateRange,
        cards: Vec<CardView>,
    },
    Failed {
        range: DateRange,
        error: FetchError,
    },
}

/// Parameters for rendering the gallery page.
#[derive(Debug)]
pub struct HomePageParams<'a> {
    /// Values to show in the date inputs.
    pub form_start: Option<&'a str>,
    pub form_end: Option<&'a str>,
    /// Latest selectable date.
    pub today: &'a str,
    pub gallery_id: &'a str,
    pub fact: SpaceFact,
    pub outcome: &'a GalleryOutcome,
    pub modal: &'a ModalPresenter,
}

/// Render the full gallery page.
#[must_use]
pub fn render_home_page(params: &HomePageParams<'_>) -> Markup {
    let modal_href = match (params.outcome, params.modal.overlay()) {
        (GalleryOutcome::Loaded { range, .. }, Some(overlay)) => {
            range.page_href(params.fact, Some(&overlay.view().date))
        }
        _ => "/?".to_string(),
    };

    let content = html! {
        @if let GalleryOutcome::Invalid(error) = params.outcome {
            (Alert::error(&error.to_string()))
        }
        (SearchForm {
            start: params.form_start,
            end: params.form_end,
            min: FIRST_FEED_DATE,
            max: params.today,
            gallery_id: params.gallery_id,
            fact: params.fact,
        })
        (render_results(params.fact, params.outcome))
        template id="loading-template" {
            (Placeholder::loading())
        }
        template id="error-template" {
            (Placeholder::error(""))
        }
        (ModalOverlayView::new(params.modal, &modal_href))
    };

    BaseLayout::new("Gallery")
        .scroll_locked(params.modal.scroll_locked())
        .render(content)
}

/// The fact banner plus the gallery contents. This is also the body of the
/// fragment the enhancement script swaps in.
#[must_use]
pub fn render_results(fact: SpaceFact, outcome: &GalleryOutcome) -> Markup {
    html! {
        div id="results" data-fact=(fact.index()) {
            (FactBanner::new(fact.text()))
            div id="gallery" class="gallery" {
                (render_gallery(fact, outcome))
            }
        }
    }
}

fn render_gallery(fact: SpaceFact, outcome: &GalleryOutcome) -> Markup {
    match outcome {
        GalleryOutcome::Initial | GalleryOutcome::Invalid(_) => Placeholder::initial().render(),
        GalleryOutcome::Loaded { range, cards } => GalleryGrid::new(cards, range, fact).render(),
        GalleryOutcome::Failed { error, .. } => {
            let detail = error.to_string();
            Placeholder::error(&detail).render()
        }
    }
}
