use super::Outcome;
use crate::{
    eligibility::{Failure, can_access_hotel_features},
    models::{Hotel, HotelId, HotelWithRooms, UserId},
    ports::{HotelRepository, TicketRepository},
};

/// Browsing the hotel catalog, gated on a lodging-entitled ticket.
pub struct HotelService<'a, R> {
    repo: &'a R,
}

impl<'a, R> HotelService<'a, R>
where
    R: TicketRepository + HotelRepository,
{
    /// Wrap a repository.
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// List every hotel. An empty catalog is reported as `NotFound`.
    pub async fn list_hotels(&self, user_id: UserId) -> Outcome<Vec<Hotel>, R::Error> {
        if let Err(failure) = self.gate(user_id).await? {
            return Ok(Err(failure));
        }

        let hotels = self.repo.list_hotels().await?;
        if hotels.is_empty() {
            Ok(Err(Failure::NotFound))
        } else {
            Ok(Ok(hotels))
        }
    }

    /// Get a hotel and its rooms. A hotel without rooms is reported as `NotFound`.
    pub async fn list_rooms(
        &self,
        user_id: UserId,
        hotel_id: HotelId,
    ) -> Outcome<HotelWithRooms, R::Error> {
        if let Err(failure) = self.gate(user_id).await? {
            return Ok(Err(failure));
        }

        match self.repo.get_hotel_with_rooms(hotel_id).await? {
            Some(hotel) if !hotel.rooms.is_empty() => Ok(Ok(hotel)),
            _ => Ok(Err(Failure::NotFound)),
        }
    }

    async fn gate(&self, user_id: UserId) -> Outcome<(), R::Error> {
        let ticket = self.repo.get_ticket_by_user(user_id).await?;
        Ok(can_access_hotel_features(ticket.as_ref()))
    }
}
