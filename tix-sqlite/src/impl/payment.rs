use super::is_unique_violation;
use crate::{Db, types::PaymentRow};
use time::OffsetDateTime;
use tix_core::{
    models::{DateTime, NewPayment, Payment, TicketId},
    ports::PaymentRepository,
};

impl PaymentRepository for Db {
    async fn get_payment_by_ticket(
        &self,
        ticket_id: TicketId,
    ) -> Result<Option<Payment>, Self::Error> {
        let row = sqlx::query_as::<_, PaymentRow>(
            r#"
            select
                id, ticket_id, value, card_issuer, card_last_digits, created_at, updated_at
            from
                payment
            where
                ticket_id = $1
            order by
                id
            limit 1
            "#,
        )
        .bind(ticket_id.0)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create_payment(
        &self,
        payment: NewPayment,
        as_of: DateTime,
    ) -> Result<Option<Payment>, Self::Error> {
        let as_of = OffsetDateTime::from(as_of);
        let mut tx = self.writer.begin().await?;

        // The unique index on ticket_id refuses a second payment; dropping the
        // transaction rolls it back.
        let inserted = sqlx::query_as::<_, PaymentRow>(
            r#"
            insert into
                payment (ticket_id, value, card_issuer, card_last_digits, created_at, updated_at)
            values
                ($1, $2, $3, $4, $5, $5)
            returning
                id, ticket_id, value, card_issuer, card_last_digits, created_at, updated_at
            "#,
        )
        .bind(payment.ticket_id.0)
        .bind(payment.value)
        .bind(&payment.card_issuer)
        .bind(&payment.card_last_digits)
        .bind(as_of)
        .fetch_one(&mut *tx)
        .await;

        let row = match inserted {
            Ok(row) => row,
            Err(err) if is_unique_violation(&err) => return Ok(None),
            Err(err) => return Err(err),
        };

        sqlx::query(
            r#"
            update
                ticket
            set
                status = 'PAID',
                updated_at = $2
            where
                id = $1
            "#,
        )
        .bind(payment.ticket_id.0)
        .bind(as_of)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(row.into()))
    }
}
