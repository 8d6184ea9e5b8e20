use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use marquee_config::config;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};

use crate::AppState;

pub mod booking_create;
pub mod event_create;
pub mod event_fetch;
pub mod event_list;
pub mod event_similar;
pub mod root;

/// Build the API router
pub async fn router() -> Router<AppState> {
    let config = config().await;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_origin(Any);

    Router::new()
        .route("/", get(root::root))
        .route(
            "/events",
            get(event_list::event_list)
                .post(event_create::event_create)
                // leave headroom for the text fields next to the image
                .layer(DefaultBodyLimit::max(
                    config.files.limit.image_size + 1024 * 1024,
                )),
        )
        .route("/events/:slug", get(event_fetch::event_fetch))
        .route("/events/:slug/similar", get(event_similar::event_similar))
        .route(
            "/events/:event_id/bookings",
            post(booking_create::booking_create),
        )
        .layer(cors)
}
