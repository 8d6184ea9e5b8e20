use std::str::FromStr;

use iso8601_timestamp::Timestamp;
use marquee_result::Result;
use ulid::Ulid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::util::normalize::{normalize_date, normalize_time, slugify};
use crate::Database;

auto_derived!(
    /// Mode of attendance for an event
    #[serde(rename_all = "lowercase")]
    pub enum EventMode {
        Online,
        Offline,
        Hybrid,
    }

    /// Event
    pub struct Event {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// URL-safe identifier derived from the title at creation time
        pub slug: String,

        /// Event title
        pub title: String,
        /// Long-form description
        pub description: String,
        /// Short overview shown in listings
        pub overview: String,
        /// URL of the externally hosted event image
        pub image: String,
        /// Venue the event is held at
        pub venue: String,
        /// City / region
        pub location: String,
        /// Calendar date in `YYYY-MM-DD` form
        pub date: String,
        /// Start time in zero-padded 24-hour `HH:MM` form
        pub time: String,
        /// Mode of attendance
        pub mode: EventMode,
        /// Intended audience
        pub audience: String,
        /// Ordered agenda items
        pub agenda: Vec<String>,
        /// Organizer name
        pub organizer: String,
        /// Free-text labels used for similarity matching
        pub tags: Vec<String>,

        /// When this event was created
        pub created_at: Timestamp,
        /// When this event was last modified
        pub updated_at: Timestamp,
    }

    /// List field that may arrive as a sequence or as a single encoded string
    #[serde(untagged)]
    pub enum ListInput {
        Many(Vec<String>),
        One(String),
    }

    /// Data for creating an event
    ///
    /// `image` is handled separately by the upload pipeline and is not part
    /// of this payload.
    #[derive(Validate, Default)]
    pub struct DataCreateEvent {
        #[validate(length(min = 1, message = "Title is required"))]
        pub title: String,
        #[validate(length(min = 1, message = "Description is required"))]
        pub description: String,
        #[validate(length(min = 1, message = "Overview is required"))]
        pub overview: String,
        #[validate(length(min = 1, message = "Venue is required"))]
        pub venue: String,
        #[validate(length(min = 1, message = "Location is required"))]
        pub location: String,
        #[validate(length(min = 1, message = "Date is required"))]
        pub date: String,
        #[validate(length(min = 1, message = "Time is required"))]
        pub time: String,
        #[validate(custom(function = validate_mode))]
        pub mode: String,
        #[validate(length(min = 1, message = "Audience is required"))]
        pub audience: String,
        #[validate(length(min = 1, message = "Organizer is required"))]
        pub organizer: String,
        #[validate(length(min = 1, message = "Agenda must contain at least one item"))]
        pub agenda: Vec<String>,
        #[validate(length(min = 1, message = "Tags must contain at least one item"))]
        pub tags: Vec<String>,
    }
);

impl FromStr for EventMode {
    type Err = ();

    fn from_str(s: &str) -> Result<EventMode, ()> {
        match s {
            "online" => Ok(EventMode::Online),
            "offline" => Ok(EventMode::Offline),
            "hybrid" => Ok(EventMode::Hybrid),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for EventMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventMode::Online => write!(f, "online"),
            EventMode::Offline => write!(f, "offline"),
            EventMode::Hybrid => write!(f, "hybrid"),
        }
    }
}

fn validate_mode(mode: &str) -> Result<(), ValidationError> {
    EventMode::from_str(mode).map(|_| ()).map_err(|_| {
        ValidationError::new("mode").with_message("Mode must be online, offline, or hybrid".into())
    })
}

/// Flatten validation errors into a sorted list of field-level messages
pub fn flatten_validation_errors(errors: ValidationErrors) -> Vec<String> {
    let mut violations: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: {}", error.code),
            })
        })
        .collect();

    violations.sort();
    violations
}

impl ListInput {
    /// Decode into the canonical list form, discarding empty elements
    ///
    /// A single string is interpreted first as a JSON-encoded array, falling
    /// back to comma splitting.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ListInput::Many(values) => values
                .into_iter()
                .filter(|value| !value.trim().is_empty())
                .collect(),
            ListInput::One(value) => {
                if let Ok(values) = serde_json::from_str::<Vec<String>>(&value) {
                    values
                        .into_iter()
                        .filter(|value| !value.trim().is_empty())
                        .collect()
                } else {
                    value
                        .split(',')
                        .map(|value| value.trim().to_string())
                        .filter(|value| !value.is_empty())
                        .collect()
                }
            }
        }
    }
}

impl DataCreateEvent {
    /// Accumulate the full set of field-level violations
    ///
    /// Runs every check rather than stopping at the first failure, so the
    /// caller can report all problems with a submission at once.
    pub fn check(&self) -> Result<()> {
        let mut violations = match self.validate() {
            Ok(_) => vec![],
            Err(errors) => flatten_validation_errors(errors),
        };

        if !self.date.is_empty() && normalize_date(&self.date).is_none() {
            violations.push("date: Invalid date format. Please provide a valid date.".to_string());
        }

        if !self.time.is_empty() && normalize_time(&self.time).is_none() {
            violations
                .push("time: Invalid time format. Please use HH:MM format (e.g., 14:30).".to_string());
        }

        violations.sort();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(create_error!(FailedValidation { errors: violations }))
        }
    }
}

impl Event {
    /// Create a new event from the given data and uploaded image URL
    ///
    /// Accumulates the full set of field-level violations before touching the
    /// store, then normalizes the schedule fields and derives the slug.
    pub async fn create(db: &Database, data: DataCreateEvent, image: String) -> Result<Event> {
        data.check()?;

        let date = normalize_date(&data.date).ok_or_else(|| create_error!(InvalidOperation))?;
        let time = normalize_time(&data.time).ok_or_else(|| create_error!(InvalidOperation))?;
        let mode = EventMode::from_str(&data.mode).map_err(|_| create_error!(InvalidOperation))?;

        let now = Timestamp::now_utc();
        let event = Event {
            id: Ulid::new().to_string(),
            slug: slugify(&data.title),
            title: data.title,
            description: data.description,
            overview: data.overview,
            image,
            venue: data.venue,
            location: data.location,
            date,
            time,
            mode,
            audience: data.audience,
            agenda: data.agenda,
            organizer: data.organizer,
            tags: data.tags,
            created_at: now,
            updated_at: now,
        };

        db.insert_event(&event).await?;
        Ok(event)
    }

    /// Fetch all other events sharing at least one tag with the event at
    /// this slug
    ///
    /// Fail-soft by contract: a missing event and any store failure both
    /// collapse into an empty list, so callers cannot distinguish "no
    /// similar events" from a failed lookup.
    pub async fn find_similar(db: &Database, slug: &str) -> Vec<Event> {
        match db.fetch_event_by_slug(slug).await {
            Ok(event) => db
                .fetch_events_sharing_tags(&event.id, &event.tags)
                .await
                .unwrap_or_default(),
            Err(_) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseInfo;

    fn data(title: &str, tags: &[&str]) -> DataCreateEvent {
        DataCreateEvent {
            title: title.to_string(),
            description: "A community conference".to_string(),
            overview: "Two days of talks".to_string(),
            venue: "Main Hall".to_string(),
            location: "Berlin".to_string(),
            date: "2025-04-10".to_string(),
            time: "09:30".to_string(),
            mode: "offline".to_string(),
            audience: "Developers".to_string(),
            organizer: "Acme Events".to_string(),
            agenda: vec!["Doors open".to_string(), "Keynote".to_string()],
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn create_derives_slug_and_normalizes_schedule() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();

        let mut payload = data("React Conf 2025", &["react"]);
        payload.date = "2025-4-10".to_string();
        payload.time = "9:30".to_string();

        let event = Event::create(&db, payload, "https://cdn.example/image.png".to_string())
            .await
            .unwrap();

        assert_eq!(event.slug, "react-conf-2025");
        assert_eq!(event.date, "2025-04-10");
        assert_eq!(event.time, "09:30");
        assert_eq!(event.created_at, event.updated_at);

        let fetched = db.fetch_event_by_slug("react-conf-2025").await.unwrap();
        assert_eq!(fetched, event);
    }

    #[tokio::test]
    async fn create_normalizes_equivalent_dates_to_same_value() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();

        let mut first = data("First", &["react"]);
        first.date = "2025-4-10".to_string();
        let mut second = data("Second", &["react"]);
        second.date = "2025-04-10T00:00:00Z".to_string();

        let first = Event::create(&db, first, "https://cdn.example/a.png".to_string())
            .await
            .unwrap();
        let second = Event::create(&db, second, "https://cdn.example/b.png".to_string())
            .await
            .unwrap();

        assert_eq!(first.date, second.date);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_slug() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();

        Event::create(&db, data("Rust Meetup", &["rust"]), String::new())
            .await
            .unwrap();

        let error = Event::create(&db, data("Rust Meetup", &["rust"]), String::new())
            .await
            .unwrap_err();
        assert!(matches!(
            error.error_type,
            marquee_result::ErrorType::SlugAlreadyExists
        ));
    }

    #[tokio::test]
    async fn create_accumulates_field_violations() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();

        let mut payload = DataCreateEvent {
            mode: "virtual".to_string(),
            ..Default::default()
        };
        payload.tags = vec!["react".to_string()];

        let error = Event::create(&db, payload, String::new()).await.unwrap_err();
        match error.error_type {
            marquee_result::ErrorType::FailedValidation { errors } => {
                assert!(errors.iter().any(|error| error.starts_with("mode:")));
                assert!(errors.iter().any(|error| error.starts_with("title:")));
                assert!(errors.iter().any(|error| error.starts_with("agenda:")));
                assert!(errors.len() > 3);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }

        // Nothing was persisted
        assert!(db.fetch_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_similar_matches_on_shared_tags() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();

        let a = Event::create(&db, data("Event A", &["react", "frontend"]), String::new())
            .await
            .unwrap();
        let b = Event::create(&db, data("Event B", &["react"]), String::new())
            .await
            .unwrap();
        let c = Event::create(&db, data("Event C", &["cloud"]), String::new())
            .await
            .unwrap();

        let similar = Event::find_similar(&db, &a.slug).await;
        assert!(similar.iter().any(|event| event.id == b.id));
        assert!(similar.iter().all(|event| event.id != a.id));
        assert!(similar.iter().all(|event| event.id != c.id));
    }

    #[tokio::test]
    async fn fetch_event_by_absent_slug_is_unknown_event() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();

        Event::create(&db, data("Rust Meetup", &["rust"]), String::new())
            .await
            .unwrap();

        let error = db.fetch_event_by_slug("absent-slug").await.unwrap_err();
        assert!(matches!(
            error.error_type,
            marquee_result::ErrorType::UnknownEvent
        ));
    }

    #[tokio::test]
    async fn find_similar_unknown_slug_is_empty() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();
        assert!(Event::find_similar(&db, "absent-slug").await.is_empty());
    }

    #[tokio::test]
    async fn fetch_events_returns_newest_first() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();

        let first = Event::create(&db, data("Older", &["a"]), String::new())
            .await
            .unwrap();

        // ULIDs only order across distinct milliseconds
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;

        let second = Event::create(&db, data("Newer", &["b"]), String::new())
            .await
            .unwrap();

        let events = db.fetch_events().await.unwrap();
        assert_eq!(
            events.iter().map(|event| &event.id).collect::<Vec<_>>(),
            vec![&second.id, &first.id]
        );
    }

    #[test]
    fn list_input_decodes_all_arrival_shapes() {
        assert_eq!(
            ListInput::One("[\"react\",\"frontend\"]".to_string()).into_vec(),
            vec!["react", "frontend"]
        );
        assert_eq!(
            ListInput::One("react, frontend, ,".to_string()).into_vec(),
            vec!["react", "frontend"]
        );
        assert_eq!(
            ListInput::Many(vec!["react".to_string(), " ".to_string()]).into_vec(),
            vec!["react"]
        );
    }
}
