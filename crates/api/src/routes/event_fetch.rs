use axum::{
    extract::{Path, State},
    Json,
};
use marquee_database::{util::normalize::sanitize_slug, Event, LazyDatabase};
use marquee_result::{create_error, Result};
use serde::Serialize;

/// Successful fetch response
#[derive(Serialize, Debug)]
pub struct EventResponse {
    message: &'static str,
    event: Event,
}

/// Fetch an event by its slug
#[utoipa::path(
    get,
    path = "/events/{slug}",
    tag = "Events",
    params(
        ("slug" = String, Path, description = "URL-safe event identifier")
    ),
    responses(
        (status = 200, description = "Event retrieved successfully"),
        (status = 400, description = "Malformed slug", body = marquee_result::Error),
        (status = 404, description = "No event at this slug", body = marquee_result::Error)
    )
)]
pub async fn event_fetch(
    State(db): State<LazyDatabase>,
    Path(slug): Path<String>,
) -> Result<Json<EventResponse>> {
    let slug = sanitize_slug(&slug).ok_or_else(|| create_error!(InvalidSlug))?;

    let db = db.get().await?;
    let event = db.fetch_event_by_slug(&slug).await?;

    Ok(Json(EventResponse {
        message: "Event retrieved successfully",
        event,
    }))
}
