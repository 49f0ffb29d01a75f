use axum::extract::{Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use super::pages::{self, GalleryOutcome, HomePageParams};
use super::AppState;
use crate::apod::FeedItem;
use crate::gallery::{CardView, CloseTrigger, DateRange, ModalPresenter, SpaceFact};

/// Response header carrying the ticket a gallery fragment was rendered for.
pub const QUERY_SEQ_HEADER: HeaderName = HeaderName::from_static("x-query-seq");

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/gallery", get(gallery_fragment))
        .route("/healthz", get(health))
        .route("/favicon.ico", get(favicon))
}

#[derive(Debug, Default, Deserialize)]
pub struct GalleryParams {
    start_date: Option<String>,
    end_date: Option<String>,
    /// Date of the entry whose detail modal is open.
    view: Option<String>,
    /// How the modal was dismissed, for pages rendered without the script.
    close: Option<String>,
    /// Index of the fact banner the page was showing.
    fact: Option<String>,
    /// Page identity for query sequencing.
    gallery: Option<String>,
}

impl GalleryParams {
    fn submitted(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }

    fn close_trigger(&self) -> Option<CloseTrigger> {
        self.close.as_deref().and_then(CloseTrigger::from_param)
    }

    fn carried_fact(&self) -> Option<SpaceFact> {
        self.fact
            .as_deref()
            .and_then(|f| f.parse().ok())
            .and_then(SpaceFact::from_index)
    }

    fn range(&self, state: &AppState) -> Result<DateRange, crate::gallery::ValidationError> {
        DateRange::parse(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            state.config.max_range_days,
        )
    }
}

// ========== HTML Routes ==========

async fn home(State(state): State<AppState>, Query(params): Query<GalleryParams>) -> Response {
    let today = Utc::now().date_naive();
    let gallery_id = params
        .gallery
        .clone()
        .filter(|g| !g.is_empty())
        .unwrap_or_else(new_gallery_id);

    let mut modal = ModalPresenter::new();
    // Only a fresh search rolls a new fact; opening or closing an entry and
    // refused searches keep the one on screen.
    let mut new_search = false;
    let outcome = if params.submitted() {
        match params.range(&state) {
            Ok(range) => {
                let result = state.apod.fetch(&range).await;
                if let (Ok(items), Some(view)) = (&result, params.view.as_deref()) {
                    open_selected(&mut modal, items, view);
                    if let Some(trigger) = params.close_trigger() {
                        modal.close(trigger);
                    }
                }
                new_search = params.view.is_none();
                outcome_for(&state, range, result)
            }
            Err(e) => {
                debug!(error = %e, "Rejected search");
                GalleryOutcome::Invalid(e)
            }
        }
    } else {
        GalleryOutcome::Initial
    };

    let default_range = DateRange::default_for(today);
    let (form_start, form_end) = if params.submitted() {
        (params.start_date.as_deref(), params.end_date.as_deref())
    } else {
        (Some(default_range.start()), Some(default_range.end()))
    };
    let today = today.format("%Y-%m-%d").to_string();
    let fact = match params.carried_fact() {
        Some(fact) if !new_search => fact,
        _ => SpaceFact::random(&mut rand::thread_rng()),
    };

    let html = pages::render_home_page(&HomePageParams {
        form_start,
        form_end,
        today: &today,
        gallery_id: &gallery_id,
        fact,
        outcome: &outcome,
        modal: &modal,
    });
    Html(html.into_string()).into_response()
}

/// Gallery fragment for in-page searches.
///
/// Overlapping searches from the same page are ordered by the query sequencer:
/// a result that was overtaken by a newer search is answered with `204`.
async fn gallery_fragment(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> Response {
    let range = match params.range(&state) {
        Ok(range) => range,
        Err(e) => {
            debug!(error = %e, "Rejected search");
            return (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response();
        }
    };

    let gallery = params.gallery.unwrap_or_default();
    let ticket = state.sequencer.issue(&gallery);
    let result = state.apod.fetch(&range).await;

    if !state.sequencer.is_latest(&gallery, ticket) {
        debug!(gallery = %gallery, ticket = ticket.value(), "Discarding stale gallery result");
        return StatusCode::NO_CONTENT.into_response();
    }

    let outcome = outcome_for(&state, range, result);
    let fact = SpaceFact::random(&mut rand::thread_rng());
    let html = pages::render_results(fact, &outcome);

    (
        [(QUERY_SEQ_HEADER, ticket.value().to_string())],
        Html(html.into_string()),
    )
        .into_response()
}

async fn health() -> &'static str {
    "OK"
}

async fn favicon() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        r"<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔭</text></svg>",
    )
}

fn outcome_for(
    state: &AppState,
    range: DateRange,
    result: Result<Vec<FeedItem>, crate::apod::FetchError>,
) -> GalleryOutcome {
    match result {
        Ok(items) => {
            let cards = items
                .iter()
                .map(|item| CardView::from_item(item, &state.config.video_placeholder_url))
                .collect();
            GalleryOutcome::Loaded { range, cards }
        }
        Err(error) => {
            tracing::error!("Failed to fetch APOD entries: {error}");
            GalleryOutcome::Failed { range, error }
        }
    }
}

fn open_selected(modal: &mut ModalPresenter, items: &[FeedItem], view: &str) {
    match items.iter().find(|item| item.date == view) {
        Some(item) => modal.open(item),
        None => debug!(view = %view, "Selected entry not in result"),
    }
}

fn new_gallery_id() -> String {
    format!("{:016x}", rand::random::<u64>())
}
