use crate::{
    Db,
    types::{EnrollmentRow, HotelRow, RoomRow, TicketTypeRow},
};
use time::OffsetDateTime;
use tix_core::{
    models::{DateTime, Enrollment, Hotel, HotelId, Room, TicketType, UserId},
    ports::CatalogRepository,
};

impl CatalogRepository for Db {
    async fn create_ticket_type(
        &self,
        name: &str,
        price: i64,
        is_remote: bool,
        includes_hotel: bool,
        as_of: DateTime,
    ) -> Result<TicketType, Self::Error> {
        let row = sqlx::query_as::<_, TicketTypeRow>(
            r#"
            insert into
                ticket_type (name, price, is_remote, includes_hotel, created_at, updated_at)
            values
                ($1, $2, $3, $4, $5, $5)
            returning
                id, name, price, is_remote, includes_hotel, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(price)
        .bind(is_remote)
        .bind(includes_hotel)
        .bind(OffsetDateTime::from(as_of))
        .fetch_one(&self.writer)
        .await?;

        Ok(row.into())
    }

    async fn create_hotel(
        &self,
        name: &str,
        image: &str,
        as_of: DateTime,
    ) -> Result<Hotel, Self::Error> {
        let row = sqlx::query_as::<_, HotelRow>(
            r#"
            insert into
                hotel (name, image, created_at, updated_at)
            values
                ($1, $2, $3, $3)
            returning
                id, name, image, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(image)
        .bind(OffsetDateTime::from(as_of))
        .fetch_one(&self.writer)
        .await?;

        Ok(row.into())
    }

    async fn create_room(
        &self,
        hotel_id: HotelId,
        name: &str,
        capacity: i64,
        as_of: DateTime,
    ) -> Result<Option<Room>, Self::Error> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
            insert into
                room (name, capacity, hotel_id, created_at, updated_at)
            select
                $2, $3, id, $4, $4
            from
                hotel
            where
                id = $1
            returning
                id, name, capacity, hotel_id, created_at, updated_at
            "#,
        )
        .bind(hotel_id.0)
        .bind(name)
        .bind(capacity)
        .bind(OffsetDateTime::from(as_of))
        .fetch_optional(&self.writer)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create_enrollment(
        &self,
        user_id: UserId,
        as_of: DateTime,
    ) -> Result<Enrollment, Self::Error> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            insert into
                enrollment (user_id, created_at, updated_at)
            values
                ($1, $2, $2)
            returning
                id, user_id, created_at, updated_at
            "#,
        )
        .bind(user_id.0)
        .bind(OffsetDateTime::from(as_of))
        .fetch_one(&self.writer)
        .await?;

        Ok(row.into())
    }
}
