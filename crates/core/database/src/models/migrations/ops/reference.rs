use marquee_result::Result;

use crate::ReferenceDb;

use super::AbstractMigrations;

#[async_trait]
impl AbstractMigrations for ReferenceDb {
    /// Nothing to prepare for the in-memory database
    async fn migrate_database(&self) -> Result<()> {
        Ok(())
    }
}
