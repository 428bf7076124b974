//! Row types for mapping query results onto `tix-core` models.
//!
//! Columns are decoded into plain SQL types and converted into the core
//! newtypes here, so the queries themselves never deal with them.

use time::OffsetDateTime;
use tix_core::models::{
    Booking, BookingWithRoom, Enrollment, Hotel, Payment, Room, RoomOccupancy, TicketRecord,
    TicketStatus, TicketType, TicketWithType,
};

/// Ticket status as stored in the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum StatusColumn {
    Reserved,
    Paid,
}

impl From<StatusColumn> for TicketStatus {
    fn from(value: StatusColumn) -> Self {
        match value {
            StatusColumn::Reserved => TicketStatus::Reserved,
            StatusColumn::Paid => TicketStatus::Paid,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct EnrollmentRow {
    pub id: i64,
    pub user_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Self {
            id: row.id.into(),
            user_id: row.user_id.into(),
            created_at: row.created_at.into(),
            updated_at: row.updated_at.into(),
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct TicketTypeRow {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<TicketTypeRow> for TicketType {
    fn from(row: TicketTypeRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            price: row.price,
            is_remote: row.is_remote,
            includes_hotel: row.includes_hotel,
            created_at: row.created_at.into(),
            updated_at: row.updated_at.into(),
        }
    }
}

/// A ticket joined with its type and the owner of its enrollment.
///
/// Columns of the joined type are prefixed with `type_`.
#[derive(sqlx::FromRow)]
pub(crate) struct TicketRow {
    pub id: i64,
    pub status: StatusColumn,
    pub enrollment_id: i64,
    pub ticket_type_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub user_id: i64,
    pub type_name: String,
    pub type_price: i64,
    pub type_is_remote: bool,
    pub type_includes_hotel: bool,
    pub type_created_at: OffsetDateTime,
    pub type_updated_at: OffsetDateTime,
}

impl From<TicketRow> for TicketRecord {
    fn from(row: TicketRow) -> Self {
        Self {
            ticket: TicketWithType {
                id: row.id.into(),
                status: row.status.into(),
                enrollment_id: row.enrollment_id.into(),
                ticket_type_id: row.ticket_type_id.into(),
                created_at: row.created_at.into(),
                updated_at: row.updated_at.into(),
                ticket_type: TicketType {
                    id: row.ticket_type_id.into(),
                    name: row.type_name,
                    price: row.type_price,
                    is_remote: row.type_is_remote,
                    includes_hotel: row.type_includes_hotel,
                    created_at: row.type_created_at.into(),
                    updated_at: row.type_updated_at.into(),
                },
            },
            user_id: row.user_id.into(),
        }
    }
}

impl From<TicketRow> for TicketWithType {
    fn from(row: TicketRow) -> Self {
        TicketRecord::from(row).ticket
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct HotelRow {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            image: row.image,
            created_at: row.created_at.into(),
            updated_at: row.updated_at.into(),
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct RoomRow {
    pub id: i64,
    pub name: String,
    pub capacity: i64,
    pub hotel_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            capacity: row.capacity,
            hotel_id: row.hotel_id.into(),
            created_at: row.created_at.into(),
            updated_at: row.updated_at.into(),
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct OccupancyRow {
    #[sqlx(flatten)]
    pub room: RoomRow,
    pub booking_count: i64,
}

impl From<OccupancyRow> for RoomOccupancy {
    fn from(row: OccupancyRow) -> Self {
        Self {
            room: row.room.into(),
            booking_count: row.booking_count,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct BookingRow {
    pub id: i64,
    pub user_id: i64,
    pub room_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id.into(),
            user_id: row.user_id.into(),
            room_id: row.room_id.into(),
            created_at: row.created_at.into(),
            updated_at: row.updated_at.into(),
        }
    }
}

/// A booking id alongside its full room.
#[derive(sqlx::FromRow)]
pub(crate) struct BookedRoomRow {
    pub booking_id: i64,
    #[sqlx(flatten)]
    pub room: RoomRow,
}

impl From<BookedRoomRow> for BookingWithRoom {
    fn from(row: BookedRoomRow) -> Self {
        Self {
            id: row.booking_id.into(),
            room: row.room.into(),
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct PaymentRow {
    pub id: i64,
    pub ticket_id: i64,
    pub value: i64,
    pub card_issuer: String,
    pub card_last_digits: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        Self {
            id: row.id.into(),
            ticket_id: row.ticket_id.into(),
            value: row.value,
            card_issuer: row.card_issuer,
            card_last_digits: row.card_last_digits,
            created_at: row.created_at.into(),
            updated_at: row.updated_at.into(),
        }
    }
}
