use super::is_capacity_abort;
use crate::{
    Db,
    types::{BookedRoomRow, BookingRow},
};
use time::OffsetDateTime;
use tix_core::{
    models::{Booking, BookingId, BookingWithRoom, DateTime, RoomId, UserId},
    ports::BookingRepository,
};

impl BookingRepository for Db {
    async fn get_booking_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<BookingWithRoom>, Self::Error> {
        let row = sqlx::query_as::<_, BookedRoomRow>(
            r#"
            select
                booking.id as booking_id,
                room.id,
                room.name,
                room.capacity,
                room.hotel_id,
                room.created_at,
                room.updated_at
            from
                booking
            join
                room on room.id = booking.room_id
            where
                booking.user_id = $1
            order by
                booking.id
            limit 1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn get_booking(&self, booking_id: BookingId) -> Result<Option<Booking>, Self::Error> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            select
                id, user_id, room_id, created_at, updated_at
            from
                booking
            where
                id = $1
            "#,
        )
        .bind(booking_id.0)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create_booking(
        &self,
        user_id: UserId,
        room_id: RoomId,
        as_of: DateTime,
    ) -> Result<Option<Booking>, Self::Error> {
        // The capacity predicate lives in the statement, so the check and the
        // write happen together on the single writer connection.
        let result = sqlx::query_as::<_, BookingRow>(
            r#"
            insert into
                booking (user_id, room_id, created_at, updated_at)
            select
                $1, room.id, $3, $3
            from
                room
            where
                room.id = $2
            and
                room.capacity > (select count(*) from booking where booking.room_id = room.id)
            returning
                id, user_id, room_id, created_at, updated_at
            "#,
        )
        .bind(user_id.0)
        .bind(room_id.0)
        .bind(OffsetDateTime::from(as_of))
        .fetch_optional(&self.writer)
        .await;

        match result {
            Ok(row) => Ok(row.map(Into::into)),
            Err(err) if is_capacity_abort(&err) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn move_booking(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
        as_of: DateTime,
    ) -> Result<Option<Booking>, Self::Error> {
        // A missing room yields a null capacity, which fails the comparison.
        let result = sqlx::query_as::<_, BookingRow>(
            r#"
            update
                booking
            set
                room_id = $2,
                updated_at = $3
            where
                id = $1
            and
                (select capacity from room where room.id = $2)
                    > (select count(*) from booking where booking.room_id = $2)
            returning
                id, user_id, room_id, created_at, updated_at
            "#,
        )
        .bind(booking_id.0)
        .bind(room_id.0)
        .bind(OffsetDateTime::from(as_of))
        .fetch_optional(&self.writer)
        .await;

        match result {
            Ok(row) => Ok(row.map(Into::into)),
            Err(err) if is_capacity_abort(&err) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
