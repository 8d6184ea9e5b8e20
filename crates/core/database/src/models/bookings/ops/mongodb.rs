use ::mongodb::options::FindOptions;
use marquee_result::Result;

use crate::Booking;
use crate::MongoDb;

use super::AbstractBookings;

static COL: &str = "bookings";

#[async_trait]
impl AbstractBookings for MongoDb {
    /// Insert a new booking into the database
    async fn insert_booking(&self, booking: &Booking) -> Result<()> {
        query!(self, insert_one, COL, booking).map(|_| ())
    }

    /// Fetch a booking by its id
    async fn fetch_booking(&self, id: &str) -> Result<Booking> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all bookings for an event
    async fn fetch_bookings_for_event(&self, event_id: &str) -> Result<Vec<Booking>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "event_id": event_id
            },
            FindOptions::builder().sort(doc! { "_id": 1 }).build()
        )
    }
}
