use super::Outcome;
use crate::{
    eligibility::Failure,
    models::{DateTime, TicketType, TicketTypeId, TicketWithType, UserId},
    ports::TicketRepository,
};

/// Ticket types and ticket purchase.
pub struct TicketService<'a, R> {
    repo: &'a R,
}

impl<'a, R: TicketRepository> TicketService<'a, R> {
    /// Wrap a repository.
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Every ticket type on offer.
    pub async fn list_ticket_types(&self) -> Result<Vec<TicketType>, R::Error> {
        self.repo.list_ticket_types().await
    }

    /// The user's ticket, with its type.
    pub async fn get_ticket_for_user(&self, user_id: UserId) -> Outcome<TicketWithType, R::Error> {
        Ok(self
            .repo
            .get_ticket_by_user(user_id)
            .await?
            .ok_or(Failure::NotFound))
    }

    /// Reserve a ticket of the given type through the user's enrollment.
    ///
    /// The ticket is always created `RESERVED`. A user without an enrollment,
    /// or an unknown ticket type, is `NotFound`.
    pub async fn purchase_ticket(
        &self,
        ticket_type_id: TicketTypeId,
        user_id: UserId,
        as_of: DateTime,
    ) -> Outcome<TicketWithType, R::Error> {
        let Some(enrollment) = self.repo.get_enrollment(user_id).await? else {
            return Ok(Err(Failure::NotFound));
        };

        Ok(self
            .repo
            .create_ticket(&enrollment, ticket_type_id, as_of)
            .await?
            .ok_or(Failure::NotFound))
    }
}
