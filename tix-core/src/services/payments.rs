use super::Outcome;
use crate::{
    eligibility::{Failure, can_pay, can_view_payment},
    models::{CardData, DateTime, NewPayment, Payment, TicketId, UserId},
    ports::{PaymentRepository, TicketRepository},
};

/// Paying for tickets and reading payments back.
pub struct PaymentService<'a, R> {
    repo: &'a R,
}

impl<'a, R> PaymentService<'a, R>
where
    R: TicketRepository + PaymentRepository,
{
    /// Wrap a repository.
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// The payment recorded for one of the user's tickets.
    pub async fn get_payment_for_ticket(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
    ) -> Outcome<Payment, R::Error> {
        let ticket = self.repo.get_ticket(ticket_id).await?;
        let payment = self.repo.get_payment_by_ticket(ticket_id).await?;
        Ok(can_view_payment(ticket.as_ref(), payment.as_ref(), user_id).cloned())
    }

    /// Pay for one of the user's tickets at its list price.
    ///
    /// Only the issuer and the last four digits of the card are stored. On
    /// success the ticket is `PAID`. A payment recorded between the check and
    /// the write is refused as `Forbidden`, the same as paying a paid ticket.
    pub async fn submit_payment(
        &self,
        ticket_id: TicketId,
        card: &CardData,
        user_id: UserId,
        as_of: DateTime,
    ) -> Outcome<Payment, R::Error> {
        let record = self.repo.get_ticket(ticket_id).await?;
        let price = match can_pay(record.as_ref(), user_id) {
            Ok(record) => record.ticket.ticket_type.price,
            Err(failure) => return Ok(Err(failure)),
        };

        let payment = NewPayment::from_card(ticket_id, price, card);
        Ok(self
            .repo
            .create_payment(payment, as_of)
            .await?
            .ok_or(Failure::Forbidden))
    }
}
