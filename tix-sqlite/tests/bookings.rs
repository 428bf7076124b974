mod common;

use common::{hotel_with_room, now, open};
use tix_core::{
    models::{BookingId, RoomId, UserId},
    ports::{BookingRepository, CatalogRepository, HotelRepository},
};

#[tokio::test]
async fn create_and_find_booking() -> anyhow::Result<()> {
    let db = open().await?;
    let (_, room) = hotel_with_room(&db, 2).await?;

    assert!(db.get_booking_by_user(UserId(1)).await?.is_none());

    let booking = db.create_booking(UserId(1), room, now()).await?.unwrap();
    assert_eq!(booking.user_id, UserId(1));
    assert_eq!(booking.room_id, room);

    let active = db.get_booking_by_user(UserId(1)).await?.unwrap();
    assert_eq!(active.id, booking.id);
    assert_eq!(active.room.id, room);
    assert_eq!(active.room.capacity, 2);

    let fetched = db.get_booking(booking.id).await?.unwrap();
    assert_eq!(fetched, booking);

    let occupancy = db.get_room(room).await?.unwrap();
    assert_eq!(occupancy.booking_count, 1);
    assert!(occupancy.has_vacancy());

    Ok(())
}

#[tokio::test]
async fn create_booking_respects_capacity() -> anyhow::Result<()> {
    let db = open().await?;
    let (_, room) = hotel_with_room(&db, 2).await?;

    assert!(db.create_booking(UserId(1), room, now()).await?.is_some());
    assert!(db.create_booking(UserId(2), room, now()).await?.is_some());
    assert!(db.create_booking(UserId(3), room, now()).await?.is_none());
    assert!(db.create_booking(UserId(3), RoomId(999), now()).await?.is_none());

    assert_eq!(db.get_room(room).await?.unwrap().booking_count, 2);

    Ok(())
}

#[tokio::test]
async fn concurrent_bookings_never_overfill() -> anyhow::Result<()> {
    let db = open().await?;
    let (_, room) = hotel_with_room(&db, 3).await?;

    let attempts = (1..=10).map(|user| {
        let db = db.clone();
        tokio::spawn(async move { db.create_booking(UserId(user), room, now()).await })
    });

    let mut created = 0;
    for attempt in attempts.collect::<Vec<_>>() {
        if attempt.await??.is_some() {
            created += 1;
        }
    }

    assert_eq!(created, 3);
    assert_eq!(db.get_room(room).await?.unwrap().booking_count, 3);

    Ok(())
}

#[tokio::test]
async fn move_booking_respects_capacity() -> anyhow::Result<()> {
    let db = open().await?;
    let (hotel, first) = hotel_with_room(&db, 1).await?;
    let second = db.create_room(hotel, "102", 1, now()).await?.unwrap().id;

    let mine = db.create_booking(UserId(1), first, now()).await?.unwrap();
    let moved = db.move_booking(mine.id, second, now()).await?.unwrap();
    assert_eq!(moved.id, mine.id);
    assert_eq!(moved.room_id, second);

    assert_eq!(db.get_room(first).await?.unwrap().booking_count, 0);
    assert_eq!(db.get_room(second).await?.unwrap().booking_count, 1);

    // the second room is full, and a missing room or booking changes nothing
    let theirs = db.create_booking(UserId(2), first, now()).await?.unwrap();
    assert!(db.move_booking(theirs.id, second, now()).await?.is_none());
    assert!(db.move_booking(theirs.id, RoomId(999), now()).await?.is_none());
    assert!(db.move_booking(BookingId(999), first, now()).await?.is_none());

    assert_eq!(db.get_booking(theirs.id).await?.unwrap().room_id, first);

    Ok(())
}

#[tokio::test]
async fn trigger_blocks_direct_insert() -> anyhow::Result<()> {
    let db = open().await?;
    let (_, room) = hotel_with_room(&db, 1).await?;
    db.create_booking(UserId(1), room, now()).await?.unwrap();

    let result = sqlx::query(
        "insert into booking (user_id, room_id, created_at, updated_at) values (2, $1, 'x', 'x')",
    )
    .bind(room.0)
    .execute(&db.writer)
    .await;

    let err = result.expect_err("insert beyond capacity must fail");
    assert!(err.to_string().contains("room at capacity"));
    assert_eq!(db.get_room(room).await?.unwrap().booking_count, 1);

    Ok(())
}

#[tokio::test]
async fn trigger_blocks_direct_update() -> anyhow::Result<()> {
    let db = open().await?;
    let (hotel, first) = hotel_with_room(&db, 1).await?;
    let second = db.create_room(hotel, "102", 1, now()).await?.unwrap().id;

    db.create_booking(UserId(1), first, now()).await?.unwrap();
    let other = db.create_booking(UserId(2), second, now()).await?.unwrap();

    let result = sqlx::query("update booking set room_id = $1 where id = $2")
        .bind(first.0)
        .bind(other.id.0)
        .execute(&db.writer)
        .await;

    assert!(result.is_err());
    assert_eq!(db.get_booking(other.id).await?.unwrap().room_id, second);

    // touching other columns is unaffected
    sqlx::query("update booking set updated_at = 'later' where id = $1")
        .bind(other.id.0)
        .execute(&db.writer)
        .await?;

    Ok(())
}
