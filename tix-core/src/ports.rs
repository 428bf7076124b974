mod booking;
mod catalog;
mod hotel;
mod payment;
mod ticket;

pub use booking::BookingRepository;
pub use catalog::CatalogRepository;
pub use hotel::HotelRepository;
pub use payment::PaymentRepository;
pub use ticket::TicketRepository;

use crate::models::{DateTime, UserId};
use std::future::Future;

/// Base trait shared by every repository slice.
///
/// An adapter implements this once, declaring the error type its queries can
/// fail with, and then implements each of the slices it supports.
pub trait Repository {
    /// The error type for underlying operations
    type Error: std::error::Error + Send + Sync + 'static;
}

/// The full persistence gateway: every slice the feature services depend on.
pub trait Gateway:
    Repository + TicketRepository + HotelRepository + BookingRepository + PaymentRepository
{
}

impl<T> Gateway for T where
    T: Repository + TicketRepository + HotelRepository + BookingRepository + PaymentRepository
{
}

/// Binds a persistence gateway to an identity provider.
///
/// Verifying bearer credentials is delegated to the implementation: it receives
/// whatever request context the transport extracts and answers with the
/// authenticated user, if any.
pub trait Application {
    /// Request context used to identify the caller (e.g. an authorization header)
    type Context: Send + Sync;

    /// The gateway implementation
    type Repository: Gateway;

    /// Get a reference to the gateway
    fn database(&self) -> &Self::Repository;

    /// The timestamp stamped onto writes
    fn now(&self) -> DateTime;

    /// Resolve the caller's identity, returning `None` if the context does not
    /// carry a valid credential.
    fn authenticate(
        &self,
        context: &Self::Context,
    ) -> impl Future<Output = Option<UserId>> + Send;
}
