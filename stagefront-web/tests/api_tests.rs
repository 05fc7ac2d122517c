//! Integration tests for the stagefront-web HTTP surface
//!
//! Each test drives the real router over an in-memory SQLite database:
//! grouped listing, search semantics, detail pages with the
//! upcoming/past split, mutation outcomes, and the error pages.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{Duration, Local};
use tower::util::ServiceExt; // for `oneshot`

use stagefront_web::{build_router, AppState};

async fn setup_app() -> axum::Router {
    let pool = stagefront_common::db::init_in_memory()
        .await
        .expect("in-memory database should initialize");
    build_router(AppState::new(pool))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("should read body");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

const FILLMORE: &str = "name=The+Fillmore&city=San+Francisco&state=CA&address=1805+Geary+Blvd\
&phone=415-555-0100&genres=Rock,Jazz&seeking_talent=y&seeking_description=Always+booking";

const GBV: &str = "name=Guided+By+Voices&city=Dayton&state=OH&genres=Rock&seeking_venue=y";

/// Format a start time the way the datetime-local form widget submits it
fn form_time(offset_days: i64) -> String {
    (Local::now().naive_local() + Duration::days(offset_days))
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

#[tokio::test]
async fn test_home_page_renders() {
    let app = setup_app().await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("Stagefront"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "stagefront-web");
}

#[tokio::test]
async fn test_create_venue_and_view_detail() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Venue The Fillmore was successfully listed!"));

    let response = app.oneshot(get("/venues/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("The Fillmore"));
    assert!(body.contains("Rock"));
    assert!(body.contains("Jazz"));
    assert!(body.contains("Seeking talent"));
    assert!(body.contains("0 upcoming shows"));
    assert!(body.contains("0 past shows"));
}

#[tokio::test]
async fn test_venue_detail_not_found() {
    let app = setup_app().await;

    let response = app.oneshot(get("/venues/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("404"));
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let app = setup_app().await;

    let response = app.oneshot(get("/no-such-page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_grouped_listing_one_group_per_location() {
    let app = setup_app().await;

    app.clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_form(
            "/venues/create",
            "name=Bottom+of+the+Hill&city=San+Francisco&state=CA&genres=Punk",
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_form(
            "/venues/create",
            "name=First+Avenue&city=Minneapolis&state=MN&genres=Rock",
        ))
        .await
        .unwrap();

    let response = app.oneshot(get("/venues")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;

    // Both SF venues under exactly one "San Francisco, CA" heading
    assert_eq!(body.matches("San Francisco, CA").count(), 1);
    assert_eq!(body.matches("Minneapolis, MN").count(), 1);
    assert!(body.contains("The Fillmore"));
    assert!(body.contains("Bottom of the Hill"));
    assert!(body.contains("First Avenue"));
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let app = setup_app().await;

    app.clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_form(
            "/venues/create",
            "name=Bottom+of+the+Hill&city=San+Francisco&state=CA&genres=Punk",
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(post_form("/venues/search", "search_term=fill"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Number of search results for \"fill\": 1"));
    assert!(body.contains("The Fillmore"));
    assert!(!body.contains("Bottom of the Hill"));
}

#[tokio::test]
async fn test_search_empty_term_matches_all() {
    let app = setup_app().await;

    app.clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_form(
            "/venues/create",
            "name=Bottom+of+the+Hill&city=San+Francisco&state=CA&genres=Punk",
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(post_form("/venues/search", "search_term="))
        .await
        .unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains(": 2"));
    assert!(body.contains("The Fillmore"));
    assert!(body.contains("Bottom of the Hill"));
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let app = setup_app().await;

    app.clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();

    // '%' would match everything if passed through unescaped
    let response = app
        .oneshot(post_form("/venues/search", "search_term=%25"))
        .await
        .unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains(": 0"));
}

#[tokio::test]
async fn test_artist_search() {
    let app = setup_app().await;

    app.clone().oneshot(post_form("/artists/create", GBV)).await.unwrap();

    let response = app
        .oneshot(post_form("/artists/search", "search_term=VOICES"))
        .await
        .unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains(": 1"));
    assert!(body.contains("Guided By Voices"));
}

#[tokio::test]
async fn test_future_show_is_upcoming_for_both_participants() {
    let app = setup_app().await;

    app.clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();
    app.clone().oneshot(post_form("/artists/create", GBV)).await.unwrap();

    let body = format!(
        "artist_id=1&venue_id=1&start_time={}",
        form_time(30)
    );
    let response = app
        .clone()
        .oneshot(post_form("/shows/create", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Show was successfully listed!"));

    // Artist page: the show is upcoming and embeds the venue
    let body = body_string(
        app.clone()
            .oneshot(get("/artists/1"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert!(body.contains("1 upcoming shows"));
    assert!(body.contains("0 past shows"));
    assert!(body.contains("The Fillmore"));

    // Venue page mirrors it with the artist embedded
    let body = body_string(app.oneshot(get("/venues/1")).await.unwrap().into_body()).await;
    assert!(body.contains("1 upcoming shows"));
    assert!(body.contains("0 past shows"));
    assert!(body.contains("Guided By Voices"));
}

#[tokio::test]
async fn test_past_show_is_not_upcoming() {
    let app = setup_app().await;

    app.clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();
    app.clone().oneshot(post_form("/artists/create", GBV)).await.unwrap();

    let body = format!("artist_id=1&venue_id=1&start_time={}", form_time(-30));
    app.clone().oneshot(post_form("/shows/create", &body)).await.unwrap();

    let body = body_string(app.oneshot(get("/venues/1")).await.unwrap().into_body()).await;
    assert!(body.contains("0 upcoming shows"));
    assert!(body.contains("1 past shows"));
}

#[tokio::test]
async fn test_show_listing_embeds_participants() {
    let app = setup_app().await;

    app.clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();
    app.clone().oneshot(post_form("/artists/create", GBV)).await.unwrap();
    let body = format!("artist_id=1&venue_id=1&start_time={}", form_time(7));
    app.clone().oneshot(post_form("/shows/create", &body)).await.unwrap();

    let body = body_string(app.oneshot(get("/shows")).await.unwrap().into_body()).await;
    assert!(body.contains("Guided By Voices"));
    assert!(body.contains("The Fillmore"));
    assert!(body.contains("playing at"));
}

#[tokio::test]
async fn test_create_show_with_dangling_refs_fails() {
    let app = setup_app().await;

    let body = format!("artist_id=42&venue_id=99&start_time={}", form_time(7));
    let response = app
        .clone()
        .oneshot(post_form("/shows/create", &body))
        .await
        .unwrap();

    // Mutation failures still complete with HTTP 200 and a failure flash
    assert_eq!(response.status(), StatusCode::OK);
    let flash = body_string(response.into_body()).await;
    assert!(flash.contains("Error: Show could not be added!"));

    // Nothing was created
    let body = body_string(app.oneshot(get("/shows")).await.unwrap().into_body()).await;
    assert!(!body.contains("playing at"));
}

#[tokio::test]
async fn test_delete_venue_cascades_to_shows() {
    let app = setup_app().await;

    app.clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();
    app.clone().oneshot(post_form("/artists/create", GBV)).await.unwrap();
    let body = format!("artist_id=1&venue_id=1&start_time={}", form_time(7));
    app.clone().oneshot(post_form("/shows/create", &body)).await.unwrap();

    let response = app
        .clone()
        .oneshot(post_form("/venues/1/delete", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/venues/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(app.oneshot(get("/shows")).await.unwrap().into_body()).await;
    assert!(!body.contains("playing at"));
}

#[tokio::test]
async fn test_delete_nonexistent_venue_is_idempotent() {
    let app = setup_app().await;

    let response = app
        .oneshot(post_form("/venues/999/delete", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_edit_venue_moves_between_groups() {
    let app = setup_app().await;

    app.clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();

    let edited = "name=The+Fillmore&city=Oakland&state=CA&address=1805+Geary+Blvd\
&genres=Rock,Jazz&seeking_talent=y";
    let response = app
        .clone()
        .oneshot(post_form("/venues/1/edit", edited))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/venues/1?flash=updated"
    );

    let body = body_string(app.clone().oneshot(get("/venues")).await.unwrap().into_body()).await;
    assert!(body.contains("Oakland, CA"));
    assert!(!body.contains("San Francisco, CA"));

    // The redirect target renders the success flash
    let body = body_string(
        app.oneshot(get("/venues/1?flash=updated"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert!(body.contains("The Fillmore was successfully updated!"));
}

#[tokio::test]
async fn test_edit_overwrites_every_field() {
    let app = setup_app().await;

    app.clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();

    // Phone omitted from the edit: the overwrite blanks it
    let edited = "name=The+Fillmore&city=San+Francisco&state=CA&genres=Rock";
    app.clone().oneshot(post_form("/venues/1/edit", edited)).await.unwrap();

    let body = body_string(app.oneshot(get("/venues/1")).await.unwrap().into_body()).await;
    assert!(!body.contains("415-555-0100"));
    assert!(!body.contains("Jazz"));
}

#[tokio::test]
async fn test_validation_failure_rerenders_form() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/venues/create",
            "name=&city=San+Francisco&state=CA&genres=Rock",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Name is required"));

    // No venue was created
    let response = app.oneshot(get("/venues/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_state_code_rejected() {
    let app = setup_app().await;

    let response = app
        .oneshot(post_form(
            "/venues/create",
            "name=Somewhere&city=Nowhere&state=ZZ&genres=Rock",
        ))
        .await
        .unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("State must be a valid region code"));
}

#[tokio::test]
async fn test_edit_form_is_prefilled() {
    let app = setup_app().await;

    app.clone()
        .oneshot(post_form("/venues/create", FILLMORE))
        .await
        .unwrap();

    let body = body_string(
        app.oneshot(get("/venues/1/edit")).await.unwrap().into_body(),
    )
    .await;
    assert!(body.contains("value=\"The Fillmore\""));
    assert!(body.contains("value=\"Rock,Jazz\""));
    assert!(body.contains("checked"));
}

#[tokio::test]
async fn test_artist_index_lists_names() {
    let app = setup_app().await;

    app.clone().oneshot(post_form("/artists/create", GBV)).await.unwrap();

    let body = body_string(app.oneshot(get("/artists")).await.unwrap().into_body()).await;
    assert!(body.contains("Guided By Voices"));
    assert!(body.contains("/artists/1"));
}
