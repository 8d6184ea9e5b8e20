use ::mongodb::options::FindOptions;
use marquee_result::Result;

use crate::Event;
use crate::MongoDb;

use super::AbstractEvents;

static COL: &str = "events";

#[async_trait]
impl AbstractEvents for MongoDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        let existing: Option<Event> = query!(self, find_one, COL, doc! { "slug": &event.slug })?;
        if existing.is_some() {
            return Err(create_error!(SlugAlreadyExists));
        }

        query!(self, insert_one, COL, event).map(|_| ())
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch an event by its slug
    async fn fetch_event_by_slug(&self, slug: &str) -> Result<Event> {
        query!(self, find_one, COL, doc! { "slug": slug })?
            .ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch all events, newest first
    ///
    /// Ids are ULIDs so descending id order is descending creation order.
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {},
            FindOptions::builder().sort(doc! { "_id": -1 }).build()
        )
    }

    /// Fetch all other events sharing at least one tag
    async fn fetch_events_sharing_tags(
        &self,
        exclude_id: &str,
        tags: &[String],
    ) -> Result<Vec<Event>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "_id": {
                    "$ne": exclude_id
                },
                "tags": {
                    "$in": tags
                }
            },
            FindOptions::builder().sort(doc! { "_id": 1 }).build()
        )
    }
}
