use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::error::AppError;
use crate::api::handlers::{artist, health, home, show, venue};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/", get(home::index))

        // Venues
        .route("/venues", get(venue::list_venues))
        .route("/venues/search", post(venue::search_venues))
        .route("/venues/create", get(venue::create_venue_form).post(venue::create_venue_submission))
        .route("/venues/{id}", get(venue::show_venue))
        .route("/venues/{id}/edit", get(venue::edit_venue_form).post(venue::edit_venue_submission))
        .route("/delete/{id}", get(venue::delete_venue).delete(venue::delete_venue))

        // Artists
        .route("/artists", get(artist::list_artists))
        .route("/artists/search", post(artist::search_artists))
        .route("/artists/create", get(artist::create_artist_form).post(artist::create_artist_submission))
        .route("/artists/{id}", get(artist::show_artist))
        .route("/artists/{id}/edit", get(artist::edit_artist_form).post(artist::edit_artist_submission))

        // Shows
        .route("/shows", get(show::list_shows))
        .route("/shows/create", get(show::create_show_form).post(show::create_show_submission))

        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

async fn not_found(request: Request) -> AppError {
    AppError::NotFound(format!("No route for {}", request.uri().path()))
}
