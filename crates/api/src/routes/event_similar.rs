use axum::{
    extract::{Path, State},
    Json,
};
use marquee_database::{util::normalize::sanitize_slug, Event, LazyDatabase};
use marquee_result::{create_error, Result};
use serde::Serialize;

/// Successful similarity response
#[derive(Serialize, Debug)]
pub struct SimilarEventsResponse {
    message: &'static str,
    events: Vec<Event>,
}

/// Fetch events sharing at least one tag with the event at this slug
///
/// Deliberately fail-soft past slug validation: an unknown slug or a store
/// failure both produce an empty list rather than an error.
#[utoipa::path(
    get,
    path = "/events/{slug}/similar",
    tag = "Events",
    params(
        ("slug" = String, Path, description = "URL-safe event identifier")
    ),
    responses(
        (status = 200, description = "Similar events retrieved successfully"),
        (status = 400, description = "Malformed slug", body = marquee_result::Error)
    )
)]
pub async fn event_similar(
    State(db): State<LazyDatabase>,
    Path(slug): Path<String>,
) -> Result<Json<SimilarEventsResponse>> {
    let slug = sanitize_slug(&slug).ok_or_else(|| create_error!(InvalidSlug))?;

    let events = match db.get().await {
        Ok(db) => Event::find_similar(&db, &slug).await,
        Err(_) => vec![],
    };

    Ok(Json(SimilarEventsResponse {
        message: "Similar events retrieved successfully",
        events,
    }))
}
