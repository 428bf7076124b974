use crate::models::{Booking, BookingId, BookingWithRoom, DateTime, RoomId, UserId};
use std::future::Future;

/// Repository interface for room bookings.
///
/// The write operations re-check the destination room's capacity as part of
/// the write itself, so a room never ends up with more bookings than its
/// capacity even if it filled up after the caller last looked.
pub trait BookingRepository: super::Repository {
    /// Find the first booking (lowest id) held by `user_id`, along with its room.
    fn get_booking_by_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<BookingWithRoom>, Self::Error>> + Send;

    /// Retrieve a booking by id.
    fn get_booking(
        &self,
        booking_id: BookingId,
    ) -> impl Future<Output = Result<Option<Booking>, Self::Error>> + Send;

    /// Book `room_id` for `user_id`.
    ///
    /// # Returns
    ///
    /// - Ok(Some(booking)) if successful
    /// - Ok(None) if the room does not exist or is full
    /// - Err otherwise
    fn create_booking(
        &self,
        user_id: UserId,
        room_id: RoomId,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Option<Booking>, Self::Error>> + Send;

    /// Point an existing booking at `room_id`.
    ///
    /// # Returns
    ///
    /// - Ok(Some(booking)) if successful
    /// - Ok(None) if the booking or room does not exist, or the room is full
    /// - Err otherwise
    fn move_booking(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Option<Booking>, Self::Error>> + Send;
}
