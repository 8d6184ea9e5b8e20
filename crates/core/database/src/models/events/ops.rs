use marquee_result::Result;

use crate::Event;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Insert a new event into the database
    ///
    /// Fails with `SlugAlreadyExists` if an event with the same slug exists.
    async fn insert_event(&self, event: &Event) -> Result<()>;

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event>;

    /// Fetch an event by its slug, case-sensitive exact match
    async fn fetch_event_by_slug(&self, slug: &str) -> Result<Event>;

    /// Fetch all events, newest first by creation time
    async fn fetch_events(&self) -> Result<Vec<Event>>;

    /// Fetch all events other than `exclude_id` whose tags intersect `tags`,
    /// in insertion order
    async fn fetch_events_sharing_tags(
        &self,
        exclude_id: &str,
        tags: &[String],
    ) -> Result<Vec<Event>>;
}
