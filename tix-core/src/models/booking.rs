use super::{BookingId, DateTime, Room, RoomId, UserId};

/// A user's reservation of a room.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: BookingId,
    /// The user holding the booking
    pub user_id: UserId,
    /// The room currently booked
    pub room_id: RoomId,
    /// When the booking was created
    pub created_at: DateTime,
    /// When the booking was last modified (e.g. moved to another room)
    pub updated_at: DateTime,
}

/// The shape returned when a user asks for their active booking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookingWithRoom {
    /// Unique identifier for the booking
    pub id: BookingId,
    /// The booked room
    #[cfg_attr(feature = "serde", serde(rename = "Room"))]
    pub room: Room,
}
