use marquee_result::Result;

use crate::Booking;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractBookings: Sync + Send {
    /// Insert a new booking into the database
    async fn insert_booking(&self, booking: &Booking) -> Result<()>;

    /// Fetch a booking by its id
    async fn fetch_booking(&self, id: &str) -> Result<Booking>;

    /// Fetch all bookings for an event, in insertion order
    async fn fetch_bookings_for_event(&self, event_id: &str) -> Result<Vec<Booking>>;
}
