use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use marquee_database::{Booking, LazyDatabase};
use marquee_result::Result;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for booking creation
#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateBookingPayload {
    /// Email address to register
    pub email: String,
}

/// Successful booking response
#[derive(Serialize, Debug)]
pub struct BookingCreatedResponse {
    message: &'static str,
    booking: Booking,
}

/// Book a spot at an event
///
/// The event is addressed by its id, not its slug.
#[utoipa::path(
    post,
    path = "/events/{event_id}/bookings",
    tag = "Bookings",
    params(
        ("event_id" = String, Path, description = "Event identifier")
    ),
    request_body = CreateBookingPayload,
    responses(
        (status = 201, description = "Booking created successfully"),
        (status = 400, description = "Malformed email address", body = marquee_result::Error),
        (status = 404, description = "No event with this id", body = marquee_result::Error)
    )
)]
pub async fn booking_create(
    State(db): State<LazyDatabase>,
    Path(event_id): Path<String>,
    Json(data): Json<CreateBookingPayload>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>)> {
    let db = db.get().await?;
    let booking = Booking::create(&db, &event_id, &data.email).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            message: "Booking created successfully",
            booking,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::CreateBookingPayload;

    #[test]
    fn payload_decodes_from_json_body() {
        let payload: CreateBookingPayload =
            serde_json::from_str(r#"{"email": "visitor@example.com"}"#).unwrap();
        assert_eq!(payload.email, "visitor@example.com");

        assert!(serde_json::from_str::<CreateBookingPayload>("{}").is_err());
    }
}
