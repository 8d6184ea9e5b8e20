use std::io::Read;

use axum::{extract::State, http::StatusCode, Json};
use axum_typed_multipart::{FieldData, TryFromMultipart, TypedMultipart};
use marquee_config::{config, report_internal_error};
use marquee_database::{DataCreateEvent, Event, LazyDatabase, ListInput};
use marquee_files::upload_to_s3;
use marquee_result::{create_error, Result};
use serde::Serialize;
use tempfile::NamedTempFile;
use utoipa::ToSchema;

use crate::mime_type::determine_image_type;

/// Request body for event creation
#[derive(ToSchema, TryFromMultipart)]
pub struct CreateEventPayload {
    title: Option<String>,
    description: Option<String>,
    overview: Option<String>,
    venue: Option<String>,
    location: Option<String>,
    date: Option<String>,
    time: Option<String>,
    mode: Option<String>,
    audience: Option<String>,
    organizer: Option<String>,
    /// Repeated field, a JSON-encoded array, or a comma-separated string
    agenda: Vec<String>,
    /// Repeated field, a JSON-encoded array, or a comma-separated string
    tags: Vec<String>,
    #[schema(value_type = String, format = Binary)]
    #[form_data(limit = "unlimited")] // handled by axum
    image: Option<FieldData<NamedTempFile>>,
}

/// Successful creation response
#[derive(Serialize, Debug)]
pub struct EventCreatedResponse {
    message: &'static str,
    event: Event,
}

/// Decode a list field into its canonical form
///
/// A single element may itself encode the whole list.
fn decode_list(mut values: Vec<String>) -> Vec<String> {
    if values.len() == 1 {
        ListInput::One(values.remove(0)).into_vec()
    } else {
        ListInput::Many(values).into_vec()
    }
}

/// Create a new event
///
/// All field violations are collected and reported in one response. The
/// image is uploaded to the asset host only once the submission has passed
/// validation, so a rejected submission leaves nothing behind.
#[utoipa::path(
    post,
    path = "/events",
    tag = "Events",
    request_body(content_type = "multipart/form-data", content = CreateEventPayload),
    responses(
        (status = 201, description = "Event created successfully"),
        (status = 400, description = "Validation failed or image unusable", body = marquee_result::Error),
        (status = 409, description = "An event with this slug already exists", body = marquee_result::Error)
    )
)]
pub async fn event_create(
    State(db): State<LazyDatabase>,
    TypedMultipart(payload): TypedMultipart<CreateEventPayload>,
) -> Result<(StatusCode, Json<EventCreatedResponse>)> {
    // Fetch configuration
    let config = config().await;

    let data = DataCreateEvent {
        title: payload.title.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        overview: payload.overview.unwrap_or_default(),
        venue: payload.venue.unwrap_or_default(),
        location: payload.location.unwrap_or_default(),
        date: payload.date.unwrap_or_default(),
        time: payload.time.unwrap_or_default(),
        mode: payload.mode.unwrap_or_default(),
        audience: payload.audience.unwrap_or_default(),
        organizer: payload.organizer.unwrap_or_default(),
        agenda: decode_list(payload.agenda),
        tags: decode_list(payload.tags),
    };

    // Reject bad submissions before any upload round-trip
    data.check()?;

    let mut file = payload.image.ok_or_else(|| create_error!(MissingImage))?;

    // Load file to memory
    let mut buf = Vec::<u8>::new();
    report_internal_error!(file.contents.read_to_end(&mut buf))?;

    if buf.len() > config.files.limit.image_size {
        return Err(create_error!(FileTooLarge {
            max: config.files.limit.image_size
        }));
    }

    // Use magic signatures to determine the image type
    let extension = determine_image_type(&buf).ok_or_else(|| create_error!(FileTypeNotAllowed))?;

    let path = format!("events/{}.{}", ulid::Ulid::new(), extension);
    let image_url = upload_to_s3(&path, &buf).await?;

    let db = db.get().await?;
    let event = Event::create(&db, data, image_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(EventCreatedResponse {
            message: "Event created successfully",
            event,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::decode_list;

    #[test]
    fn decode_list_handles_each_arrival_shape() {
        assert_eq!(
            decode_list(vec!["react".to_string(), "frontend".to_string()]),
            vec!["react", "frontend"]
        );
        assert_eq!(
            decode_list(vec!["[\"react\",\"frontend\"]".to_string()]),
            vec!["react", "frontend"]
        );
        assert_eq!(
            decode_list(vec!["react, frontend".to_string()]),
            vec!["react", "frontend"]
        );
        assert!(decode_list(vec![]).is_empty());
    }
}
