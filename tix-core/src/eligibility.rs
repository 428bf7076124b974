//! The rules deciding who may view hotels, book rooms and pay for tickets.
//!
//! Every function here is pure: it takes entities the caller has already
//! fetched and either approves the action or names the [`Failure`] the caller
//! should report. No function here touches a repository.

use crate::models::{Booking, Payment, RoomOccupancy, TicketRecord, TicketWithType, UserId};
use thiserror::Error;

/// The kinds of domain failure an operation can end in.
///
/// The HTTP adapter translates these into status codes per endpoint, so the
/// same kind may produce different codes on different routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Failure {
    /// The requested entity does not exist
    #[error("not found")]
    NotFound,
    /// The caller is identified but not allowed to perform the action
    #[error("forbidden")]
    Forbidden,
    /// The caller's ticket does not (yet) entitle them to lodging
    #[error("payment required")]
    PaymentRequired,
    /// The caller does not own the entity they are acting on
    #[error("unauthorized")]
    Unauthorized,
    /// The request itself is malformed
    #[error("bad request")]
    BadRequest,
}

/// Whether a ticket entitles its holder to hotel lodging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entitlement {
    /// Paid, in-person and hotel-inclusive
    Granted,
    /// The ticket has not been paid
    Unpaid,
    /// The ticket type does not include a hotel
    NoHotel,
    /// The ticket type is for remote attendance
    Remote,
}

impl Entitlement {
    /// Whether the holder may use hotel features.
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

/// The single lodging rule shared by hotel browsing and booking.
pub fn lodging(ticket: &TicketWithType) -> Entitlement {
    if !ticket.is_paid() {
        Entitlement::Unpaid
    } else if !ticket.ticket_type.includes_hotel {
        Entitlement::NoHotel
    } else if ticket.ticket_type.is_remote {
        Entitlement::Remote
    } else {
        Entitlement::Granted
    }
}

/// Gate for listing hotels and their rooms.
///
/// A missing ticket is `NotFound`; any unmet lodging condition collapses into
/// `PaymentRequired`.
pub fn can_access_hotel_features(ticket: Option<&TicketWithType>) -> Result<(), Failure> {
    let ticket = ticket.ok_or(Failure::NotFound)?;
    if lodging(ticket).is_granted() {
        Ok(())
    } else {
        Err(Failure::PaymentRequired)
    }
}

/// Gate for creating a booking.
///
/// Unlike [`can_access_hotel_features`], an unmet lodging condition (including
/// having no ticket at all) is reported as `Forbidden`.
pub fn can_book(
    ticket: Option<&TicketWithType>,
    room: Option<&RoomOccupancy>,
) -> Result<(), Failure> {
    match ticket {
        Some(ticket) if lodging(ticket).is_granted() => {}
        _ => return Err(Failure::Forbidden),
    }
    has_vacancy(room)
}

/// Gate for moving an existing booking to another room.
///
/// A missing booking is `Forbidden`, not `NotFound`, so callers cannot probe
/// for other users' booking ids.
pub fn can_rebook(
    booking: Option<&Booking>,
    actor: UserId,
    destination: Option<&RoomOccupancy>,
) -> Result<(), Failure> {
    match booking {
        Some(booking) if booking.user_id == actor => {}
        _ => return Err(Failure::Forbidden),
    }
    has_vacancy(destination)
}

/// Gate for paying for a ticket.
///
/// A ticket that is already paid cannot be paid again.
pub fn can_pay(ticket: Option<&TicketRecord>, actor: UserId) -> Result<&TicketRecord, Failure> {
    let record = owned(ticket, actor)?;
    if record.ticket.is_paid() {
        Err(Failure::Forbidden)
    } else {
        Ok(record)
    }
}

/// Gate for reading the payment of a ticket.
///
/// A missing payment is `Unauthorized`, not `NotFound`.
pub fn can_view_payment<'a>(
    ticket: Option<&TicketRecord>,
    payment: Option<&'a Payment>,
    actor: UserId,
) -> Result<&'a Payment, Failure> {
    owned(ticket, actor)?;
    payment.ok_or(Failure::Unauthorized)
}

fn owned(ticket: Option<&TicketRecord>, actor: UserId) -> Result<&TicketRecord, Failure> {
    let record = ticket.ok_or(Failure::NotFound)?;
    if record.user_id == actor {
        Ok(record)
    } else {
        Err(Failure::Unauthorized)
    }
}

fn has_vacancy(room: Option<&RoomOccupancy>) -> Result<(), Failure> {
    let room = room.ok_or(Failure::NotFound)?;
    if room.has_vacancy() {
        Ok(())
    } else {
        Err(Failure::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BookingId, DateTime, EnrollmentId, HotelId, PaymentId, Room, RoomId, TicketId,
        TicketStatus, TicketType, TicketTypeId,
    };
    use rstest::*;

    fn epoch() -> DateTime {
        DateTime::from(time::OffsetDateTime::UNIX_EPOCH)
    }

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> TicketWithType {
        TicketWithType {
            id: TicketId(1),
            status,
            enrollment_id: EnrollmentId(1),
            ticket_type_id: TicketTypeId(1),
            created_at: epoch(),
            updated_at: epoch(),
            ticket_type: TicketType {
                id: TicketTypeId(1),
                name: "General".to_owned(),
                price: 250,
                is_remote,
                includes_hotel,
                created_at: epoch(),
                updated_at: epoch(),
            },
        }
    }

    fn room(capacity: i64, booking_count: i64) -> RoomOccupancy {
        RoomOccupancy {
            room: Room {
                id: RoomId(1),
                name: "101".to_owned(),
                capacity,
                hotel_id: HotelId(1),
                created_at: epoch(),
                updated_at: epoch(),
            },
            booking_count,
        }
    }

    fn booking(user_id: i64) -> Booking {
        Booking {
            id: BookingId(1),
            user_id: UserId(user_id),
            room_id: RoomId(2),
            created_at: epoch(),
            updated_at: epoch(),
        }
    }

    fn record(user_id: i64, status: TicketStatus) -> TicketRecord {
        TicketRecord {
            ticket: ticket(status, false, true),
            user_id: UserId(user_id),
        }
    }

    fn payment() -> Payment {
        Payment {
            id: PaymentId(1),
            ticket_id: TicketId(1),
            value: 250,
            card_issuer: "VISA".to_owned(),
            card_last_digits: "4242".to_owned(),
            created_at: epoch(),
            updated_at: epoch(),
        }
    }

    #[rstest]
    #[case(TicketStatus::Paid, false, true, Entitlement::Granted)]
    #[case(TicketStatus::Reserved, false, true, Entitlement::Unpaid)]
    #[case(TicketStatus::Paid, false, false, Entitlement::NoHotel)]
    #[case(TicketStatus::Paid, true, true, Entitlement::Remote)]
    #[case(TicketStatus::Reserved, true, false, Entitlement::Unpaid)]
    fn lodging_rule(
        #[case] status: TicketStatus,
        #[case] is_remote: bool,
        #[case] includes_hotel: bool,
        #[case] expected: Entitlement,
    ) {
        assert_eq!(lodging(&ticket(status, is_remote, includes_hotel)), expected);
    }

    #[rstest]
    #[case(None, Err(Failure::NotFound))]
    #[case(Some(ticket(TicketStatus::Paid, false, true)), Ok(()))]
    #[case(Some(ticket(TicketStatus::Reserved, false, true)), Err(Failure::PaymentRequired))]
    #[case(Some(ticket(TicketStatus::Paid, false, false)), Err(Failure::PaymentRequired))]
    #[case(Some(ticket(TicketStatus::Paid, true, true)), Err(Failure::PaymentRequired))]
    fn hotel_access(#[case] ticket: Option<TicketWithType>, #[case] expected: Result<(), Failure>) {
        assert_eq!(can_access_hotel_features(ticket.as_ref()), expected);
    }

    #[rstest]
    #[case(None, Some(room(2, 0)), Err(Failure::Forbidden))]
    #[case(Some(ticket(TicketStatus::Reserved, false, true)), Some(room(2, 0)), Err(Failure::Forbidden))]
    #[case(Some(ticket(TicketStatus::Paid, true, true)), Some(room(2, 0)), Err(Failure::Forbidden))]
    #[case(Some(ticket(TicketStatus::Paid, false, true)), None, Err(Failure::NotFound))]
    #[case(Some(ticket(TicketStatus::Paid, false, true)), Some(room(2, 2)), Err(Failure::Forbidden))]
    #[case(Some(ticket(TicketStatus::Paid, false, true)), Some(room(2, 1)), Ok(()))]
    fn booking_gate(
        #[case] ticket: Option<TicketWithType>,
        #[case] room: Option<RoomOccupancy>,
        #[case] expected: Result<(), Failure>,
    ) {
        assert_eq!(can_book(ticket.as_ref(), room.as_ref()), expected);
    }

    #[test]
    fn unpaid_ticket_cannot_book_even_without_a_room() {
        // the lodging check comes before the room lookup
        let ticket = ticket(TicketStatus::Reserved, false, true);
        assert_eq!(can_book(Some(&ticket), None), Err(Failure::Forbidden));
    }

    #[rstest]
    #[case(None, Some(room(1, 0)), Err(Failure::Forbidden))]
    #[case(Some(booking(2)), Some(room(1, 0)), Err(Failure::Forbidden))]
    #[case(Some(booking(1)), None, Err(Failure::NotFound))]
    #[case(Some(booking(1)), Some(room(1, 1)), Err(Failure::Forbidden))]
    #[case(Some(booking(1)), Some(room(3, 2)), Ok(()))]
    fn rebooking_gate(
        #[case] booking: Option<Booking>,
        #[case] destination: Option<RoomOccupancy>,
        #[case] expected: Result<(), Failure>,
    ) {
        assert_eq!(
            can_rebook(booking.as_ref(), UserId(1), destination.as_ref()),
            expected
        );
    }

    #[rstest]
    #[case(None, Err(Failure::NotFound))]
    #[case(Some(record(2, TicketStatus::Reserved)), Err(Failure::Unauthorized))]
    #[case(Some(record(1, TicketStatus::Paid)), Err(Failure::Forbidden))]
    #[case(Some(record(1, TicketStatus::Reserved)), Ok(()))]
    fn payment_gate(#[case] ticket: Option<TicketRecord>, #[case] expected: Result<(), Failure>) {
        assert_eq!(can_pay(ticket.as_ref(), UserId(1)).map(|_| ()), expected);
    }

    #[test]
    fn other_users_paid_ticket_is_unauthorized() {
        let ticket = record(2, TicketStatus::Paid);
        assert_eq!(
            can_pay(Some(&ticket), UserId(1)).map(|_| ()),
            Err(Failure::Unauthorized)
        );
    }

    #[test]
    fn viewing_a_payment() {
        let mine = record(1, TicketStatus::Paid);
        let theirs = record(2, TicketStatus::Paid);
        let payment = payment();

        assert_eq!(
            can_view_payment(None, Some(&payment), UserId(1)),
            Err(Failure::NotFound)
        );
        assert_eq!(
            can_view_payment(Some(&theirs), Some(&payment), UserId(1)),
            Err(Failure::Unauthorized)
        );
        assert_eq!(
            can_view_payment(Some(&mine), None, UserId(1)),
            Err(Failure::Unauthorized)
        );
        assert_eq!(
            can_view_payment(Some(&mine), Some(&payment), UserId(1)),
            Ok(&payment)
        );
    }
}
