mod booking;
mod hotels;
mod payments;
mod tickets;

pub use booking::BookingService;
pub use hotels::HotelService;
pub use payments::PaymentService;
pub use tickets::TicketService;

use crate::eligibility::Failure;

/// The outcome of a service call.
///
/// The outer `Result` carries infrastructure errors from the repository; the
/// inner one carries the domain decision.
pub type Outcome<T, E> = Result<Result<T, Failure>, E>;
