use crate::models::{Hotel, HotelId, HotelWithRooms, RoomId, RoomOccupancy};
use std::future::Future;

/// Repository interface for the hotel catalog.
pub trait HotelRepository: super::Repository {
    /// List every hotel, ordered by id.
    fn list_hotels(&self) -> impl Future<Output = Result<Vec<Hotel>, Self::Error>> + Send;

    /// Retrieve a hotel with all of its rooms, returning `None` if it does not exist.
    fn get_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> impl Future<Output = Result<Option<HotelWithRooms>, Self::Error>> + Send;

    /// Retrieve a room together with the number of bookings referencing it.
    fn get_room(
        &self,
        room_id: RoomId,
    ) -> impl Future<Output = Result<Option<RoomOccupancy>, Self::Error>> + Send;
}
