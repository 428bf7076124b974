use super::{DateTime, HotelId, RoomId};

/// A hotel in the lodging catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Hotel {
    /// Unique identifier for the hotel
    pub id: HotelId,
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
    /// When the hotel was created
    pub created_at: DateTime,
    /// When the hotel was last modified
    pub updated_at: DateTime,
}

/// A room belonging to a hotel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Room {
    /// Unique identifier for the room
    pub id: RoomId,
    /// Display name
    pub name: String,
    /// Maximum number of bookings the room accepts
    pub capacity: i64,
    /// The hotel the room belongs to
    pub hotel_id: HotelId,
    /// When the room was created
    pub created_at: DateTime,
    /// When the room was last modified
    pub updated_at: DateTime,
}

/// A hotel together with all of its rooms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HotelWithRooms {
    /// The hotel itself
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub hotel: Hotel,
    /// The hotel's rooms, ordered by id
    #[cfg_attr(feature = "serde", serde(rename = "Rooms"))]
    pub rooms: Vec<Room>,
}

/// A room and the number of bookings currently referencing it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomOccupancy {
    /// The room
    pub room: Room,
    /// Count of bookings pointing at the room
    pub booking_count: i64,
}

impl RoomOccupancy {
    /// Whether the room can accept one more booking.
    pub fn has_vacancy(&self) -> bool {
        self.booking_count < self.room.capacity
    }
}
