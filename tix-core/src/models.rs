mod booking;
mod datetime;
mod hotel;
mod payment;
mod ticket;

pub use booking::{Booking, BookingWithRoom};
pub use datetime::DateTime;
pub use hotel::{Hotel, HotelWithRooms, Room, RoomOccupancy};
pub use payment::{CardData, NewPayment, Payment};
pub use ticket::{Enrollment, TicketRecord, TicketStatus, TicketType, TicketWithType};

macro_rules! new_id {
    ($struct:ident, $doc:literal) => {
        #[doc = $doc]
        #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $struct(pub i64);

        impl From<i64> for $struct {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$struct> for i64 {
            fn from(value: $struct) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $struct {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

new_id!(
    UserId,
    "Identifier of a user, as issued by the external identity provider"
);
new_id!(EnrollmentId, "Identifier of a user's registration record");
new_id!(TicketTypeId, "Identifier of a priced ticket category");
new_id!(TicketId, "Identifier of a ticket bought through an enrollment");
new_id!(HotelId, "Identifier of a hotel");
new_id!(RoomId, "Identifier of a hotel room");
new_id!(BookingId, "Identifier of a room booking");
new_id!(PaymentId, "Identifier of a ticket payment");
