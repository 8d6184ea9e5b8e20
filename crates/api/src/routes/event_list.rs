use axum::{extract::State, Json};
use marquee_database::{Event, LazyDatabase};
use marquee_result::Result;
use serde::Serialize;

/// Successful listing response
#[derive(Serialize, Debug)]
pub struct EventListResponse {
    message: &'static str,
    events: Vec<Event>,
}

/// List all events, newest first
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    responses(
        (status = 200, description = "Events retrieved successfully"),
        (status = 500, description = "Database unavailable", body = marquee_result::Error)
    )
)]
pub async fn event_list(State(db): State<LazyDatabase>) -> Result<Json<EventListResponse>> {
    let db = db.get().await?;
    let events = db.fetch_events().await?;

    Ok(Json(EventListResponse {
        message: "Events retrieved successfully",
        events,
    }))
}
