use crate::models::{DateTime, Enrollment, Hotel, HotelId, Room, TicketType, UserId};
use std::future::Future;

/// Repository interface for reference data maintained outside the request flow.
///
/// Ticket types, hotels, rooms and enrollments are produced by upstream
/// processes; this trait is how those processes (and seeding) write them.
pub trait CatalogRepository: super::Repository {
    /// Define a new ticket type.
    fn create_ticket_type(
        &self,
        name: &str,
        price: i64,
        is_remote: bool,
        includes_hotel: bool,
        as_of: DateTime,
    ) -> impl Future<Output = Result<TicketType, Self::Error>> + Send;

    /// Define a new hotel with no rooms.
    fn create_hotel(
        &self,
        name: &str,
        image: &str,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Hotel, Self::Error>> + Send;

    /// Add a room to a hotel.
    ///
    /// # Returns
    ///
    /// - Ok(Some(room)) if successful
    /// - Ok(None) if the hotel does not exist
    /// - Err otherwise (including a non-positive capacity)
    fn create_room(
        &self,
        hotel_id: HotelId,
        name: &str,
        capacity: i64,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Option<Room>, Self::Error>> + Send;

    /// Register a user.
    fn create_enrollment(
        &self,
        user_id: UserId,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Enrollment, Self::Error>> + Send;
}
