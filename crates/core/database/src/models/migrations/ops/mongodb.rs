use ::mongodb::options::IndexOptions;
use ::mongodb::IndexModel;
use marquee_result::Result;

use crate::Event;
use crate::MongoDb;

use super::AbstractMigrations;

#[async_trait]
impl AbstractMigrations for MongoDb {
    /// Prepare the database for use
    ///
    /// Slug uniqueness is enforced by the store through this index; the
    /// insert path also pre-checks to report a descriptive error.
    async fn migrate_database(&self) -> Result<()> {
        info!("Migrating the database.");

        self.col::<Event>("events")
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "slug": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
            )
            .await
            .map_err(|_| create_database_error!("create_index", "events"))?;

        self.col::<crate::Booking>("bookings")
            .create_index(IndexModel::builder().keys(doc! { "event_id": 1 }).build())
            .await
            .map_err(|_| create_database_error!("create_index", "bookings"))
            .map(|_| ())
    }
}
