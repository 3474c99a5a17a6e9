mod common;

use axum::http::StatusCode;
use common::{body_text, cookie_pair, TestApp};
use serde_json::Value;

#[tokio::test]
async fn test_health_and_home() {
    let app = TestApp::new().await;

    let res = app.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(res).await).unwrap();
    assert_eq!(json["status"], "ok");

    app.seed_venue("The Musical Hop", "San Francisco", "CA").await;
    let res = app.get("/").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("1 venues and 0 artists listed."));
}

#[tokio::test]
async fn test_unreadable_flash_cookie_is_cleared() {
    let app = TestApp::new().await;

    let res = app.get_with_cookie("/", "flash=garbage!").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(cookie_pair(&res, "flash").as_deref(), Some("flash="));
    assert!(!body_text(res).await.contains("class=\"alert"));

    // A page without a flash cookie sets none.
    let res = app.get("/venues").await;
    assert_eq!(cookie_pair(&res, "flash"), None);
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let app = TestApp::new().await;

    let res = app.get("/stages").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(body_text(res).await.contains("Not Found"));
}

#[tokio::test]
async fn test_empty_directory_lists_nothing() {
    let app = TestApp::new().await;

    let body = body_text(app.get("/venues").await).await;
    assert!(body.contains("No venues listed yet."));
    let body = body_text(app.get("/artists").await).await;
    assert!(body.contains("No artists listed yet."));
    let body = body_text(app.get("/shows").await).await;
    assert!(body.contains("No shows listed yet."));
}

#[tokio::test]
async fn test_venues_grouped_by_area() {
    let app = TestApp::new().await;
    let hop = app.seed_venue("The Musical Hop", "San Francisco", "CA").await;
    app.seed_venue("The Dueling Pianos Bar", "New York", "NY").await;
    let park = app.seed_venue("Park Square Live Music", "San Francisco", "CA").await;

    let body = body_text(app.get("/venues").await).await;
    assert_eq!(body.matches("<section class=\"area\">").count(), 2);

    let new_york = body.find("New York, NY").unwrap();
    let san_francisco = body.find("San Francisco, CA").unwrap();
    assert!(new_york < san_francisco);

    // Entries inside an area follow insertion order.
    let first = body.find(&format!("href=\"/venues/{}\"", hop)).unwrap();
    let second = body.find(&format!("href=\"/venues/{}\"", park)).unwrap();
    assert!(san_francisco < first && first < second);
    assert_eq!(body.matches("0 upcoming shows").count(), 3);
}

#[tokio::test]
async fn test_artists_grouped_by_area() {
    let app = TestApp::new().await;
    app.seed_artist("Guns N Petals", "San Francisco", "CA").await;
    app.seed_artist("Matt Quevedo", "New York", "NY").await;
    app.seed_artist("The Wild Sax Band", "San Francisco", "CA").await;

    let body = body_text(app.get("/artists").await).await;
    assert_eq!(body.matches("<section class=\"area\">").count(), 2);
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("The Wild Sax Band"));
}
