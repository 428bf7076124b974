use crate::models::{DateTime, NewPayment, Payment, TicketId};
use std::future::Future;

/// Repository interface for ticket payments.
pub trait PaymentRepository: super::Repository {
    /// Find the first payment recorded for a ticket.
    fn get_payment_by_ticket(
        &self,
        ticket_id: TicketId,
    ) -> impl Future<Output = Result<Option<Payment>, Self::Error>> + Send;

    /// Record a payment and mark its ticket `PAID`.
    ///
    /// Both writes happen atomically: either the payment exists and the ticket
    /// is paid, or neither change is visible.
    ///
    /// # Returns
    ///
    /// - Ok(Some(payment)) if successful
    /// - Ok(None) if the ticket already has a payment
    /// - Err otherwise
    fn create_payment(
        &self,
        payment: NewPayment,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Option<Payment>, Self::Error>> + Send;
}
