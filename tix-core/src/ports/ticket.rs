use crate::models::{
    DateTime, Enrollment, TicketId, TicketRecord, TicketType, TicketTypeId, TicketWithType, UserId,
};
use std::future::Future;

/// Repository interface for enrollments, ticket types and tickets.
pub trait TicketRepository: super::Repository {
    /// List every ticket type, ordered by id.
    fn list_ticket_types(&self) -> impl Future<Output = Result<Vec<TicketType>, Self::Error>> + Send;

    /// Find the first ticket (lowest id) bought through any enrollment of `user_id`.
    fn get_ticket_by_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<TicketWithType>, Self::Error>> + Send;

    /// Retrieve a ticket along with its type and owning user.
    fn get_ticket(
        &self,
        ticket_id: TicketId,
    ) -> impl Future<Output = Result<Option<TicketRecord>, Self::Error>> + Send;

    /// Find the first enrollment of `user_id`.
    fn get_enrollment(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<Enrollment>, Self::Error>> + Send;

    /// Create a `RESERVED` ticket for the enrollment.
    ///
    /// # Returns
    ///
    /// - Ok(Some(ticket)) if successful
    /// - Ok(None) if the ticket type does not exist
    /// - Err otherwise
    fn create_ticket(
        &self,
        enrollment: &Enrollment,
        ticket_type_id: TicketTypeId,
        as_of: DateTime,
    ) -> impl Future<Output = Result<Option<TicketWithType>, Self::Error>> + Send;
}
