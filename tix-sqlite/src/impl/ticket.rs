use crate::{
    Db,
    types::{EnrollmentRow, TicketRow, TicketTypeRow},
};
use time::OffsetDateTime;
use tix_core::{
    models::{
        DateTime, Enrollment, TicketId, TicketRecord, TicketType, TicketTypeId, TicketWithType,
        UserId,
    },
    ports::TicketRepository,
};

/// Hydrates a ticket with its type and owner; callers append the filter.
const SELECT_TICKET: &str = r#"
    select
        ticket.id,
        ticket.status,
        ticket.enrollment_id,
        ticket.ticket_type_id,
        ticket.created_at,
        ticket.updated_at,
        enrollment.user_id,
        ticket_type.name as type_name,
        ticket_type.price as type_price,
        ticket_type.is_remote as type_is_remote,
        ticket_type.includes_hotel as type_includes_hotel,
        ticket_type.created_at as type_created_at,
        ticket_type.updated_at as type_updated_at
    from
        ticket
    join
        enrollment on enrollment.id = ticket.enrollment_id
    join
        ticket_type on ticket_type.id = ticket.ticket_type_id
"#;

impl TicketRepository for Db {
    async fn list_ticket_types(&self) -> Result<Vec<TicketType>, Self::Error> {
        let rows = sqlx::query_as::<_, TicketTypeRow>(
            r#"
            select
                id, name, price, is_remote, includes_hotel, created_at, updated_at
            from
                ticket_type
            order by
                id
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_ticket_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<TicketWithType>, Self::Error> {
        let row = sqlx::query_as::<_, TicketRow>(&format!(
            "{SELECT_TICKET} where enrollment.user_id = $1 order by ticket.id limit 1"
        ))
        .bind(user_id.0)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn get_ticket(&self, ticket_id: TicketId) -> Result<Option<TicketRecord>, Self::Error> {
        let row = sqlx::query_as::<_, TicketRow>(&format!("{SELECT_TICKET} where ticket.id = $1"))
            .bind(ticket_id.0)
            .fetch_optional(&self.reader)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn get_enrollment(&self, user_id: UserId) -> Result<Option<Enrollment>, Self::Error> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            select
                id, user_id, created_at, updated_at
            from
                enrollment
            where
                user_id = $1
            order by
                id
            limit 1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create_ticket(
        &self,
        enrollment: &Enrollment,
        ticket_type_id: TicketTypeId,
        as_of: DateTime,
    ) -> Result<Option<TicketWithType>, Self::Error> {
        let as_of = OffsetDateTime::from(as_of);

        // selecting from ticket_type makes an unknown type insert nothing
        let ticket_id = sqlx::query_scalar::<_, i64>(
            r#"
            insert into
                ticket (status, enrollment_id, ticket_type_id, created_at, updated_at)
            select
                'RESERVED', $1, id, $3, $3
            from
                ticket_type
            where
                id = $2
            returning
                id
            "#,
        )
        .bind(enrollment.id.0)
        .bind(ticket_type_id.0)
        .bind(as_of)
        .fetch_optional(&self.writer)
        .await?;

        let Some(ticket_id) = ticket_id else {
            return Ok(None);
        };

        // read back on the writer so the row is visible regardless of pool state
        let row = sqlx::query_as::<_, TicketRow>(&format!("{SELECT_TICKET} where ticket.id = $1"))
            .bind(ticket_id)
            .fetch_optional(&self.writer)
            .await?;

        Ok(row.map(Into::into))
    }
}
