mod bookings;
mod events;
mod migrations;

pub use bookings::*;
pub use events::*;
pub use migrations::*;

use crate::Database;
#[cfg(feature = "mongodb")]
use crate::MongoDb;
use crate::ReferenceDb;

pub trait AbstractDatabase:
    Sync
    + Send
    + bookings::AbstractBookings
    + events::AbstractEvents
    + migrations::AbstractMigrations
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
        }
    }
}
