use marquee_result::Result;

use crate::Event;
use crate::ReferenceDb;

use super::AbstractEvents;

#[async_trait]
impl AbstractEvents for ReferenceDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.values().any(|existing| existing.slug == event.slug) {
            return Err(create_error!(SlugAlreadyExists));
        }

        if events.insert(event.id.to_string(), event.clone()).is_some() {
            Err(create_database_error!("insert", "event"))
        } else {
            Ok(())
        }
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        let events = self.events.lock().await;
        events
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch an event by its slug
    async fn fetch_event_by_slug(&self, slug: &str) -> Result<Event> {
        let events = self.events.lock().await;
        events
            .values()
            .find(|event| event.slug == slug)
            .cloned()
            .ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch all events, newest first
    ///
    /// Ids are ULIDs so descending id order is descending creation order.
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        let mut events: Vec<Event> = events.values().cloned().collect();
        events.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(events)
    }

    /// Fetch all other events sharing at least one tag
    async fn fetch_events_sharing_tags(
        &self,
        exclude_id: &str,
        tags: &[String],
    ) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        let mut events: Vec<Event> = events
            .values()
            .filter(|event| {
                event.id != exclude_id && event.tags.iter().any(|tag| tags.contains(tag))
            })
            .cloned()
            .collect();
        events.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(events)
    }
}
