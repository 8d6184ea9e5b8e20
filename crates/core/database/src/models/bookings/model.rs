use iso8601_timestamp::Timestamp;
use marquee_result::Result;
use ulid::Ulid;

use crate::util::normalize::normalize_email;
use crate::Database;

auto_derived!(
    /// Booking
    ///
    /// A record of one email's interest in one event. The referenced event is
    /// checked for existence at write time only; there is no cascade rule, so
    /// a later event deletion leaves bookings dangling.
    pub struct Booking {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the event this booking is for
        pub event_id: String,
        /// Normalized email address of the visitor
        pub email: String,

        /// When this booking was created
        pub created_at: Timestamp,
        /// When this booking was last modified
        pub updated_at: Timestamp,
    }
);

impl Booking {
    /// Create a booking for an event after confirming the event exists
    ///
    /// No uniqueness constraint is applied: submitting the same email twice
    /// for the same event creates two records.
    pub async fn create(db: &Database, event_id: &str, email: &str) -> Result<Booking> {
        let email = normalize_email(email).ok_or_else(|| create_error!(InvalidEmail))?;

        // Referential integrity: reject rather than create a dangling reference
        db.fetch_event(event_id).await?;

        let now = Timestamp::now_utc();
        let booking = Booking {
            id: Ulid::new().to_string(),
            event_id: event_id.to_string(),
            email,
            created_at: now,
            updated_at: now,
        };

        db.insert_booking(&booking).await?;
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataCreateEvent, DatabaseInfo, Event};

    async fn seed_event(db: &Database) -> Event {
        Event::create(
            db,
            DataCreateEvent {
                title: "Rust Meetup".to_string(),
                description: "Monthly meetup".to_string(),
                overview: "Talks and pizza".to_string(),
                venue: "Main Hall".to_string(),
                location: "Berlin".to_string(),
                date: "2025-04-10".to_string(),
                time: "18:00".to_string(),
                mode: "offline".to_string(),
                audience: "Developers".to_string(),
                organizer: "Acme Events".to_string(),
                agenda: vec!["Doors open".to_string()],
                tags: vec!["rust".to_string()],
            },
            "https://cdn.example/image.png".to_string(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn create_normalizes_email() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();
        let event = seed_event(&db).await;

        let booking = Booking::create(&db, &event.id, "  Visitor@Example.COM ")
            .await
            .unwrap();
        assert_eq!(booking.email, "visitor@example.com");
        assert_eq!(booking.event_id, event.id);
    }

    #[tokio::test]
    async fn create_rejects_malformed_email() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();
        let event = seed_event(&db).await;

        let error = Booking::create(&db, &event.id, "not-an-email")
            .await
            .unwrap_err();
        assert!(matches!(
            error.error_type,
            marquee_result::ErrorType::InvalidEmail
        ));
    }

    #[tokio::test]
    async fn create_rejects_missing_event_and_persists_nothing() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();

        let error = Booking::create(&db, "01J0000000000000000000BAD0", "a@b.com")
            .await
            .unwrap_err();
        assert!(matches!(
            error.error_type,
            marquee_result::ErrorType::UnknownEvent
        ));

        assert!(db
            .fetch_bookings_for_event("01J0000000000000000000BAD0")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn duplicate_bookings_create_two_records() {
        let db = DatabaseInfo::Reference.connect().await.unwrap();
        let event = seed_event(&db).await;

        let first = Booking::create(&db, &event.id, "a@b.com").await.unwrap();
        let second = Booking::create(&db, &event.id, "a@b.com").await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(
            db.fetch_bookings_for_event(&event.id).await.unwrap().len(),
            2
        );
    }
}
