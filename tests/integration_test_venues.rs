mod common;

use axum::http::{header, StatusCode};
use chrono::{TimeZone, Utc};
use common::{body_text, cookie_pair, TestApp};

fn musical_hop<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", "The Musical Hop"),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("address", "1015 Folsom Street"),
        ("phone", "123-123-1234"),
        ("genres", "Jazz"),
        ("genres", "Reggae"),
        ("genres", "Swing"),
        ("website_link", "https://www.themusicalhop.com"),
        ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
        ("seeking_talent", "y"),
        ("seeking_description", "We are on the lookout for a local artist to play every two weeks."),
    ]
}

fn without_swing<'a>() -> Vec<(&'a str, &'a str)> {
    musical_hop().into_iter().filter(|(_, v)| *v != "Swing").collect()
}

#[tokio::test]
async fn test_create_venue_then_fetch_detail() {
    let app = TestApp::new().await;

    let res = app.post_form("/venues/create", &without_swing()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("Venue The Musical Hop was successfully listed!"));
    assert_eq!(app.venue_count().await, 1);

    let venue_id: i64 = sqlx::query_scalar("SELECT id FROM venues WHERE name = 'The Musical Hop'")
        .fetch_one(&app.pool).await.unwrap();

    let res = app.get(&format!("/venues/{}", venue_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("<h1>The Musical Hop</h1>"));
    assert!(body.contains("Jazz"));
    assert!(body.contains("Reggae"));
    assert!(body.contains("123-123-1234"));
    assert!(body.contains("Currently seeking talent"));
    assert!(body.contains("0 Upcoming Shows"));
    assert!(body.contains("0 Past Shows"));
}

#[tokio::test]
async fn test_invalid_venue_is_not_persisted() {
    let app = TestApp::new().await;

    let res = app.post_form("/venues/create", &musical_hop()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("An error occurred. Venue The Musical Hop could not be listed."));
    assert!(body.contains("alert-error"));
    assert_eq!(app.venue_count().await, 0);

    let mut missing_name = without_swing();
    missing_name.retain(|(k, _)| *k != "name");
    let res = app.post_form("/venues/create", &missing_name).await;
    let body = body_text(res).await;
    assert!(body.contains("name: This field is required."));
    assert_eq!(app.venue_count().await, 0);
}

#[tokio::test]
async fn test_unknown_venue_is_not_found() {
    let app = TestApp::new().await;

    assert_eq!(app.get("/venues/999").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/venues/not-a-number").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/venues/999/edit").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_venues_is_case_insensitive_substring() {
    let app = TestApp::new().await;
    app.seed_venue("The Musical Hop", "San Francisco", "CA").await;
    app.seed_venue("Park Square Live Music", "San Francisco", "CA").await;
    app.seed_venue("The Dueling Pianos Bar", "New York", "NY").await;

    for term in ["Hop", "hop", "HOP"] {
        let body = body_text(app.post_form("/venues/search", &[("search_term", term)]).await).await;
        assert!(body.contains(&format!("Number of search results for \"{}\": 1", term)));
        assert!(body.contains("The Musical Hop"));
        assert!(!body.contains("Park Square Live Music"));
    }

    let body = body_text(app.post_form("/venues/search", &[("search_term", "Music")]).await).await;
    assert!(body.contains(": 2</h3>"));

    let body = body_text(app.post_form("/venues/search", &[("search_term", "")]).await).await;
    assert!(body.contains(": 3</h3>"));

    let body = body_text(app.post_form("/venues/search", &[("search_term", "%")]).await).await;
    assert!(body.contains(": 0</h3>"));
}

#[tokio::test]
async fn test_search_venues_folds_non_ascii_case() {
    let app = TestApp::new().await;
    app.seed_venue("Café Élysée", "New Orleans", "LA").await;
    app.seed_venue("100% Jazz_Club", "New Orleans", "LA").await;

    for term in ["Élysée", "élysée", "ÉLYSÉE", "café"] {
        let body = body_text(app.post_form("/venues/search", &[("search_term", term)]).await).await;
        assert!(body.contains(": 1</h3>"), "no match for {}", term);
        assert!(body.contains("Café Élysée"));
    }

    let body = body_text(app.post_form("/venues/search", &[("search_term", "0% jazz_")]).await).await;
    assert!(body.contains(": 1</h3>"));
    let body = body_text(app.post_form("/venues/search", &[("search_term", "_")]).await).await;
    assert!(body.contains(": 1</h3>"));
}

#[tokio::test]
async fn test_edit_form_is_prepopulated() {
    let app = TestApp::new().await;
    let id = app.seed_venue("The Musical Hop", "San Francisco", "CA").await;

    let res = app.get(&format!("/venues/{}/edit", id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("value=\"The Musical Hop\""));
    assert!(body.contains("value=\"1015 Folsom Street\""));
    assert!(body.contains("<option value=\"CA\" selected>"));
    assert!(body.contains("<option value=\"Jazz\" selected>"));
}

#[tokio::test]
async fn test_edit_venue_redirects_with_flash() {
    let app = TestApp::new().await;
    let id = app.seed_venue("The Musical Hop", "San Francisco", "CA").await;

    let mut fields = without_swing();
    fields[0] = ("name", "The Musical Hop Annex");
    let res = app.post_form(&format!("/venues/{}/edit", id), &fields).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[header::LOCATION], format!("/venues/{}", id).as_str());
    let flash = cookie_pair(&res, "flash").expect("edit must leave a flash cookie");

    let res = app.get_with_cookie(&format!("/venues/{}", id), &flash).await;
    assert_eq!(cookie_pair(&res, "flash").as_deref(), Some("flash="));
    let body = body_text(res).await;
    assert!(body.contains("Venue The Musical Hop Annex was successfully updated!"));
    assert!(body.contains("<h1>The Musical Hop Annex</h1>"));
    assert!(body.contains("Currently seeking talent"));

    let address: String = sqlx::query_scalar("SELECT address FROM venues WHERE id = ?")
        .bind(id).fetch_one(&app.pool).await.unwrap();
    assert_eq!(address, "1015 Folsom Street");
}

#[tokio::test]
async fn test_invalid_edit_leaves_venue_untouched() {
    let app = TestApp::new().await;
    let id = app.seed_venue("The Musical Hop", "San Francisco", "CA").await;

    let mut fields = without_swing();
    fields[2] = ("state", "ZZ");
    let res = app.post_form(&format!("/venues/{}/edit", id), &fields).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[header::LOCATION], format!("/venues/{}/edit", id).as_str());

    let flash = cookie_pair(&res, "flash").unwrap();
    let body = body_text(app.get_with_cookie(&format!("/venues/{}/edit", id), &flash).await).await;
    assert!(body.contains("An error occurred. Venue could not be edited."));
    assert!(body.contains("state: Not a valid choice."));

    let state: String = sqlx::query_scalar("SELECT state FROM venues WHERE id = ?")
        .bind(id).fetch_one(&app.pool).await.unwrap();
    assert_eq!(state, "CA");
}

#[tokio::test]
async fn test_edit_unknown_venue_leaves_others_untouched() {
    let app = TestApp::new().await;
    let id = app.seed_venue("The Dueling Pianos Bar", "New York", "NY").await;

    let res = app.post_form("/venues/999/edit", &without_swing()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.venue_count().await, 1);

    let venue = app.state.venue_repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(venue.name, "The Dueling Pianos Bar");
    assert_eq!(venue.city, "New York");
    assert_eq!(venue.state, "NY");
    assert_eq!(venue.genres.0, vec!["Jazz"]);
    assert_eq!(venue.website, None);
    assert!(!venue.seeking_talent);
}

#[tokio::test]
async fn test_delete_venue_twice() {
    let app = TestApp::new().await;
    let id = app.seed_venue("The Dueling Pianos Bar", "New York", "NY").await;

    let res = app.get(&format!("/delete/{}", id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("Venue The Dueling Pianos Bar was successfully deleted!"));
    assert_eq!(app.venue_count().await, 0);

    assert_eq!(app.get(&format!("/delete/{}", id)).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get(&format!("/venues/{}", id)).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_method_is_accepted() {
    let app = TestApp::new().await;
    let id = app.seed_venue("Park Square Live Music", "San Francisco", "CA").await;

    assert_eq!(app.delete(&format!("/delete/{}", id)).await.status(), StatusCode::OK);
    assert_eq!(app.venue_count().await, 0);
}

#[tokio::test]
async fn test_venue_with_shows_cannot_be_deleted() {
    let app = TestApp::new().await;
    let venue_id = app.seed_venue("The Musical Hop", "San Francisco", "CA").await;
    let artist_id = app.seed_artist("Guns N Petals", "San Francisco", "CA").await;
    app.seed_show(venue_id, artist_id, Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap()).await;

    let res = app.get(&format!("/delete/{}", venue_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("An error occurred. Venue The Musical Hop could not be deleted."));
    assert!(body.contains("<h1>The Musical Hop</h1>"));
    assert!(body.contains("1 Past Shows"));

    assert_eq!(app.venue_count().await, 1);
    assert_eq!(app.show_count().await, 1);

    // Still refused on retry.
    let body = body_text(app.get(&format!("/delete/{}", venue_id)).await).await;
    assert!(body.contains("could not be deleted"));
}
