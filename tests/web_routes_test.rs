//! Integration tests for web routes, with the feed provider mocked.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use apod_gallery::config::Config;
use apod_gallery::web::{create_app, AppState, QUERY_SEQ_HEADER};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SINGLE_IMAGE: &str = r#"{
    "date": "2023-01-01",
    "title": "T",
    "explanation": "Stars & <dust>.",
    "media_type": "image",
    "url": "https://apod.example/t.jpg"
}"#;

const MIXED: &str = r#"[
    {"date": "2023-01-01", "title": "Image One", "explanation": "", "media_type": "image", "url": "https://apod.example/1.jpg", "hdurl": "https://apod.example/1_hd.jpg"},
    {"date": "2023-01-02", "title": "Video Two", "explanation": "", "media_type": "video", "url": "https://www.youtube.com/embed/two"},
    {"date": "2023-01-03", "title": "Image Three", "explanation": "", "media_type": "image", "url": "https://apod.example/3.jpg"}
]"#;

fn create_test_app(server: &MockServer) -> Router {
    let config = Config {
        base_url: format!("{}/planetary/apod", server.uri()),
        ..Config::for_testing()
    };
    create_app(AppState::new(config).expect("Failed to create state"))
}

async fn mount_body(server: &MockServer, body: &'static str) {
    Mock::given(method("GET"))
        .and(path("/planetary/apod"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

fn card_count(html: &str) -> usize {
    html.matches("class=\"gallery-item").count()
}

/// Index of the fact banner the page shows.
fn shown_fact(html: &str) -> usize {
    let marker = r#"<div id="results" data-fact=""#;
    let start = html.find(marker).expect("results container") + marker.len();
    let end = start + html[start..].find('"').unwrap();
    html[start..end].parse().unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start().await;
    let (status, _, body) = get(create_test_app(&server), "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_home_without_dates_does_not_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, _, body) = get(create_test_app(&server), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("search-form"));
    assert!(body.contains("Did You Know?"));
    assert!(body.contains("to explore the cosmos!"));
    // Form is prefilled with a default range.
    assert!(body.contains(r#"name="start_date" value=""#));
    assert!(body.contains(r#"name="end_date" value=""#));
    assert_eq!(card_count(&body), 0);
}

#[tokio::test]
async fn test_missing_or_inverted_range_shows_notice_without_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for (uri, message) in [
        (
            "/?start_date=&end_date=2023-01-01",
            "Please select both start and end dates.",
        ),
        ("/?start_date=2023-01-01", "Please select both start and end dates."),
        (
            "/?start_date=2023-01-05&end_date=2023-01-01",
            "Start date must be before end date.",
        ),
    ] {
        let (status, _, body) = get(create_test_app(&server), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains(r#"role="alert""#), "{uri}");
        assert!(body.contains(message), "{uri}");
        assert_eq!(card_count(&body), 0, "{uri}");
    }
}

#[tokio::test]
async fn test_single_day_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/planetary/apod"))
        .and(query_param("start_date", "2023-01-01"))
        .and(query_param("end_date", "2023-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SINGLE_IMAGE, "application/json"))
        .mount(&server)
        .await;

    let (status, _, body) = get(
        create_test_app(&server),
        "/?start_date=2023-01-01&end_date=2023-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("<strong>T</strong>"));
    assert!(body.contains(r#"<p class="gallery-date">2023-01-01</p>"#));
    assert!(!body.contains(r#"class="modal""#));

    // Clicking the card follows its link, which opens the modal.
    let (status, _, body) = get(
        create_test_app(&server),
        "/?start_date=2023-01-01&end_date=2023-01-01&view=2023-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<body class="modal-open">"#));
    assert!(body.contains(r#"<h2 class="modal-title">T</h2>"#));
    assert!(body.contains(r#"<p class="modal-date">2023-01-01</p>"#));
    assert!(body.contains(r#"<img src="https://apod.example/t.jpg" alt="T">"#));
    assert!(body.contains("Stars &amp; &lt;dust&gt;."));
}

#[tokio::test]
async fn test_list_renders_one_card_per_item() {
    let server = MockServer::start().await;
    mount_body(&server, MIXED).await;

    let (_, _, body) = get(
        create_test_app(&server),
        "/?start_date=2023-01-01&end_date=2023-01-03",
    )
    .await;

    assert_eq!(card_count(&body), 3);
    assert_eq!(body.matches("media-image").count(), 2);
    assert_eq!(body.matches("media-video").count(), 1);
    assert!(body.contains("video-overlay"));
    // No provider thumbnail: placeholder image.
    assert!(body.contains("via.placeholder.com"));
}

#[tokio::test]
async fn test_modal_prefers_hd_image() {
    let server = MockServer::start().await;
    mount_body(&server, MIXED).await;

    let (_, _, body) = get(
        create_test_app(&server),
        "/?start_date=2023-01-01&end_date=2023-01-03&view=2023-01-01",
    )
    .await;

    assert!(body.contains(r#"<img src="https://apod.example/1_hd.jpg" alt="Image One">"#));
}

#[tokio::test]
async fn test_modal_video_embed_and_link() {
    let server = MockServer::start().await;
    mount_body(&server, MIXED).await;

    let (_, _, body) = get(
        create_test_app(&server),
        "/?start_date=2023-01-01&end_date=2023-01-03&view=2023-01-02",
    )
    .await;

    assert!(body.contains(r#"<iframe src="https://www.youtube.com/embed/two""#));
    assert!(body.contains(r#"<a href="https://www.youtube.com/embed/two" target="_blank""#));
}

#[tokio::test]
async fn test_closing_modal_restores_scroll() {
    let server = MockServer::start().await;
    mount_body(&server, MIXED).await;

    let (_, _, open) = get(
        create_test_app(&server),
        "/?start_date=2023-01-01&end_date=2023-01-03&fact=2&view=2023-01-01",
    )
    .await;
    let page = "/?start_date=2023-01-01&amp;end_date=2023-01-03&amp;fact=2&amp;view=2023-01-01";
    assert!(open.contains(&format!(
        r#"class="modal-backdrop" href="{page}&amp;close=background""#
    )));
    assert!(open.contains(&format!(r#"class="close" href="{page}&amp;close=button""#)));

    for trigger in ["background", "button"] {
        let (_, _, closed) = get(
            create_test_app(&server),
            &format!(
                "/?start_date=2023-01-01&end_date=2023-01-03&fact=2&view=2023-01-01&close={trigger}"
            ),
        )
        .await;
        assert!(closed.contains("<body>"), "{trigger}");
        assert!(closed.contains(r#"style="display: none""#), "{trigger}");
        assert_eq!(shown_fact(&closed), 2, "{trigger}");
    }
}

#[tokio::test]
async fn test_page_ships_modal_content_for_every_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/planetary/apod"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(MIXED, "application/json"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let (_, _, body) = get(
        create_test_app(&server),
        "/?start_date=2023-01-01&end_date=2023-01-03",
    )
    .await;

    assert_eq!(card_count(&body), 3);
    assert_eq!(body.matches(r#"<template class="modal-template""#).count(), 3);
    for (date, title) in [
        ("2023-01-01", "Image One"),
        ("2023-01-02", "Video Two"),
        ("2023-01-03", "Image Three"),
    ] {
        assert!(body.contains(&format!(
            r#"<template class="modal-template" data-date="{date}"><div class="modal-body">"#
        )));
        assert!(body.contains(&format!(r#"<h2 class="modal-title">{title}</h2>"#)));
    }
    assert!(body.contains(r#"<img src="https://apod.example/1_hd.jpg" alt="Image One">"#));
    assert!(body.contains(r#"<iframe src="https://www.youtube.com/embed/two""#));
    // Opening any of them is client-side: the provider saw a single request.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_fact_survives_modal_and_refused_search() {
    let server = MockServer::start().await;
    mount_body(&server, MIXED).await;

    let (_, _, viewed) = get(
        create_test_app(&server),
        "/?start_date=2023-01-01&end_date=2023-01-03&fact=5&view=2023-01-02",
    )
    .await;
    assert_eq!(shown_fact(&viewed), 5);
    assert!(viewed.contains(apod_gallery::gallery::SPACE_FACTS[5]));
    // Cards keep carrying it.
    assert!(viewed.contains("fact=5&amp;view=2023-01-01"));

    let (_, _, refused) = get(
        create_test_app(&server),
        "/?start_date=2023-01-05&end_date=2023-01-01&fact=5",
    )
    .await;
    assert_eq!(shown_fact(&refused), 5);
    assert!(refused.contains(r#"<input type="hidden" name="fact" value="5">"#));

    let (_, _, searched) = get(
        create_test_app(&server),
        "/?start_date=2023-01-01&end_date=2023-01-03&fact=5",
    )
    .await;
    let fact = shown_fact(&searched);
    assert!(searched.contains(&format!("fact={fact}&amp;view=2023-01-01")));
}

#[tokio::test]
async fn test_provider_429_shows_error_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let (status, _, body) = get(
        create_test_app(&server),
        "/?start_date=2023-01-01&end_date=2023-01-02",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error loading space images. Please try again."));
    assert!(body.contains("HTTP error! status: 429"));
    assert_eq!(card_count(&body), 0);
}

#[tokio::test]
async fn test_fragment_validation_error_is_422_without_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, _, body) = get(
        create_test_app(&server),
        "/gallery?start_date=2023-01-05&end_date=2023-01-01&gallery=g",
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, "Start date must be before end date.");
}

#[tokio::test]
async fn test_fragment_carries_sequence_and_fresh_fact() {
    let server = MockServer::start().await;
    mount_body(&server, MIXED).await;

    let (status, headers, body) = get(
        create_test_app(&server),
        "/gallery?start_date=2023-01-01&end_date=2023-01-03&gallery=g",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers.contains_key(QUERY_SEQ_HEADER));
    assert!(body.starts_with(r#"<div id="results">"#));
    assert!(body.contains("Did You Know?"));
    assert_eq!(card_count(&body), 3);
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_fragment_discards_overtaken_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("end_date", "2023-01-03"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(MIXED, "application/json")
                .set_delay(std::time::Duration::from_millis(500)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("end_date", "2023-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SINGLE_IMAGE, "application/json"))
        .mount(&server)
        .await;

    let app = create_test_app(&server);
    let slow = tokio::spawn(get(
        app.clone(),
        "/gallery?start_date=2023-01-01&end_date=2023-01-03&gallery=g",
    ));
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    let (fast_status, _, fast_body) = get(
        app,
        "/gallery?start_date=2023-01-01&end_date=2023-01-01&gallery=g",
    )
    .await;
    let (slow_status, _, slow_body) = slow.await.unwrap();

    assert_eq!(fast_status, StatusCode::OK);
    assert_eq!(card_count(&fast_body), 1);
    assert_eq!(slow_status, StatusCode::NO_CONTENT);
    assert!(slow_body.is_empty());
}
