#![allow(dead_code)]

use tix_core::{
    models::{DateTime, HotelId, RoomId, TicketId, TicketTypeId, UserId},
    ports::{CatalogRepository, TicketRepository},
};
use tix_sqlite::{Db, config::SqliteConfig};

pub async fn open() -> anyhow::Result<Db> {
    Ok(Db::open(&SqliteConfig::default()).await?)
}

pub fn now() -> DateTime {
    time::OffsetDateTime::now_utc().into()
}

pub async fn hotel_with_room(db: &Db, capacity: i64) -> anyhow::Result<(HotelId, RoomId)> {
    let hotel = db.create_hotel("Grand", "https://example.com/grand.png", now()).await?;
    let room = db
        .create_room(hotel.id, "101", capacity, now())
        .await?
        .ok_or_else(|| anyhow::anyhow!("hotel vanished"))?;
    Ok((hotel.id, room.id))
}

/// Enroll `user_id` and reserve a ticket of a fresh type.
pub async fn reserved_ticket(
    db: &Db,
    user_id: UserId,
    price: i64,
) -> anyhow::Result<(TicketTypeId, TicketId)> {
    let kind = db
        .create_ticket_type("In person + hotel", price, false, true, now())
        .await?;
    let enrollment = db.create_enrollment(user_id, now()).await?;
    let ticket = db
        .create_ticket(&enrollment, kind.id, now())
        .await?
        .ok_or_else(|| anyhow::anyhow!("ticket type vanished"))?;
    Ok((kind.id, ticket.id))
}
