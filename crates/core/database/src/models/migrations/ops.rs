use marquee_result::Result;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractMigrations: Sync + Send {
    /// Prepare the database for use, creating any missing indexes
    async fn migrate_database(&self) -> Result<()>;
}
