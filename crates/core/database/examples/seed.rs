//! Seed the database with a handful of sample events.
//!
//! ```sh
//! cargo run --example seed
//! ```

use marquee_database::{DataCreateEvent, DatabaseInfo, Event};

fn sample(
    title: &str,
    venue: &str,
    location: &str,
    date: &str,
    time: &str,
    mode: &str,
    organizer: &str,
    tags: &[&str],
) -> DataCreateEvent {
    DataCreateEvent {
        title: title.to_string(),
        description: format!("{title} is a curated event for the community."),
        overview: format!("Talks, workshops and networking at {title}."),
        venue: venue.to_string(),
        location: location.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        mode: mode.to_string(),
        audience: "Engineers and tech leads".to_string(),
        organizer: organizer.to_string(),
        agenda: vec![
            "Doors open".to_string(),
            "Keynote".to_string(),
            "Breakout sessions".to_string(),
            "Networking".to_string(),
        ],
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

#[tokio::main]
async fn main() {
    let db = DatabaseInfo::Auto.connect().await.unwrap();
    db.migrate_database().await.unwrap();

    let events = [
        sample(
            "React Conf 2025",
            "Moscone West",
            "San Francisco, CA",
            "2025-04-10",
            "08:30",
            "hybrid",
            "React Core Team",
            &["react", "frontend", "javascript", "rsc"],
        ),
        sample(
            "Frontend Masters Summit",
            "Austin Convention Center",
            "Austin, TX",
            "2025-05-12",
            "09:00",
            "offline",
            "Frontend Masters",
            &["react", "frontend", "javascript"],
        ),
        sample(
            "CloudNative Days",
            "Online",
            "Remote",
            "2025-06-03",
            "14:00",
            "online",
            "CNCF Community",
            &["cloud", "kubernetes", "devops"],
        ),
    ];

    for data in events {
        match Event::create(&db, data, "https://placehold.co/600x400".to_string()).await {
            Ok(event) => println!("Seeded {} ({})", event.title, event.slug),
            Err(error) => println!("Skipped event: {:?}", error.error_type),
        }
    }
}
