use crate::{
    Db,
    types::{HotelRow, OccupancyRow, RoomRow},
};
use tix_core::{
    models::{Hotel, HotelId, HotelWithRooms, RoomId, RoomOccupancy},
    ports::HotelRepository,
};

impl HotelRepository for Db {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, Self::Error> {
        let rows = sqlx::query_as::<_, HotelRow>(
            r#"
            select
                id, name, image, created_at, updated_at
            from
                hotel
            order by
                id
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Option<HotelWithRooms>, Self::Error> {
        let Some(hotel) = sqlx::query_as::<_, HotelRow>(
            r#"
            select
                id, name, image, created_at, updated_at
            from
                hotel
            where
                id = $1
            "#,
        )
        .bind(hotel_id.0)
        .fetch_optional(&self.reader)
        .await?
        else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, RoomRow>(
            r#"
            select
                id, name, capacity, hotel_id, created_at, updated_at
            from
                room
            where
                hotel_id = $1
            order by
                id
            "#,
        )
        .bind(hotel_id.0)
        .fetch_all(&self.reader)
        .await?;

        Ok(Some(HotelWithRooms {
            hotel: hotel.into(),
            rooms: rooms.into_iter().map(Into::into).collect(),
        }))
    }

    async fn get_room(&self, room_id: RoomId) -> Result<Option<RoomOccupancy>, Self::Error> {
        let row = sqlx::query_as::<_, OccupancyRow>(
            r#"
            select
                room.id,
                room.name,
                room.capacity,
                room.hotel_id,
                room.created_at,
                room.updated_at,
                (select count(*) from booking where booking.room_id = room.id) as booking_count
            from
                room
            where
                room.id = $1
            "#,
        )
        .bind(room_id.0)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into))
    }
}
