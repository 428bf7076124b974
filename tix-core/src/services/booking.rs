use super::Outcome;
use crate::{
    eligibility::{Failure, can_book, can_rebook},
    models::{BookingId, BookingWithRoom, DateTime, RoomId, UserId},
    ports::{BookingRepository, HotelRepository, TicketRepository},
};

/// Reserving and moving hotel rooms.
pub struct BookingService<'a, R> {
    repo: &'a R,
}

impl<'a, R> BookingService<'a, R>
where
    R: TicketRepository + HotelRepository + BookingRepository,
{
    /// Wrap a repository.
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// The user's booking, with its room.
    pub async fn get_active_booking(&self, user_id: UserId) -> Outcome<BookingWithRoom, R::Error> {
        Ok(self
            .repo
            .get_booking_by_user(user_id)
            .await?
            .ok_or(Failure::NotFound))
    }

    /// Book `room_id` for the user, returning the new booking's id.
    ///
    /// If the room fills up between the check and the write, the write is
    /// refused by the repository and the result is `Forbidden`.
    pub async fn create_booking(
        &self,
        user_id: UserId,
        room_id: RoomId,
        as_of: DateTime,
    ) -> Outcome<BookingId, R::Error> {
        let ticket = self.repo.get_ticket_by_user(user_id).await?;
        let room = self.repo.get_room(room_id).await?;
        if let Err(failure) = can_book(ticket.as_ref(), room.as_ref()) {
            return Ok(Err(failure));
        }

        Ok(self
            .repo
            .create_booking(user_id, room_id, as_of)
            .await?
            .map(|booking| booking.id)
            .ok_or(Failure::Forbidden))
    }

    /// Move one of the user's bookings to `room_id`, returning the booking's id.
    pub async fn change_booking(
        &self,
        user_id: UserId,
        booking_id: BookingId,
        room_id: RoomId,
        as_of: DateTime,
    ) -> Outcome<BookingId, R::Error> {
        let booking = self.repo.get_booking(booking_id).await?;
        let room = self.repo.get_room(room_id).await?;
        if let Err(failure) = can_rebook(booking.as_ref(), user_id, room.as_ref()) {
            return Ok(Err(failure));
        }

        Ok(self
            .repo
            .move_booking(booking_id, room_id, as_of)
            .await?
            .map(|booking| booking.id)
            .ok_or(Failure::Forbidden))
    }
}
