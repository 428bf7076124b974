use super::{DateTime, EnrollmentId, TicketId, TicketTypeId, UserId};

/// The lifecycle state of a ticket.
///
/// Tickets are created `Reserved` and only become `Paid` as a side effect of
/// a successful payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum TicketStatus {
    /// Bought but not yet paid
    Reserved,
    /// Paid in full
    Paid,
}

/// A user's registration record, the prerequisite for buying a ticket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Enrollment {
    /// Unique identifier for the enrollment
    pub id: EnrollmentId,
    /// The user the enrollment belongs to
    pub user_id: UserId,
    /// When the enrollment was created
    pub created_at: DateTime,
    /// When the enrollment was last modified
    pub updated_at: DateTime,
}

/// A priced ticket category.
///
/// The two flags control the lodging entitlement: only an in-person ticket
/// (`is_remote == false`) that includes a hotel grants access to rooms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TicketType {
    /// Unique identifier for the ticket type
    pub id: TicketTypeId,
    /// Display name
    pub name: String,
    /// List price, charged as-is on payment
    pub price: i64,
    /// Whether the ticket is for remote attendance
    pub is_remote: bool,
    /// Whether the ticket includes hotel lodging
    pub includes_hotel: bool,
    /// When the ticket type was created
    pub created_at: DateTime,
    /// When the ticket type was last modified
    pub updated_at: DateTime,
}

/// A ticket together with its type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TicketWithType {
    /// Unique identifier for the ticket
    pub id: TicketId,
    /// Current lifecycle state
    pub status: TicketStatus,
    /// The enrollment the ticket was bought through
    pub enrollment_id: EnrollmentId,
    /// The purchased category
    pub ticket_type_id: TicketTypeId,
    /// When the ticket was created
    pub created_at: DateTime,
    /// When the ticket was last modified
    pub updated_at: DateTime,
    /// The purchased category, fully hydrated
    #[cfg_attr(feature = "serde", serde(rename = "TicketType"))]
    pub ticket_type: TicketType,
}

/// A ticket, its type and the user who owns it (through the enrollment).
///
/// This is the record ownership checks are made against.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRecord {
    /// The ticket and its type
    pub ticket: TicketWithType,
    /// The owner of the enrollment the ticket belongs to
    pub user_id: UserId,
}

impl TicketWithType {
    /// Whether the ticket has been paid.
    pub fn is_paid(&self) -> bool {
        self.status == TicketStatus::Paid
    }
}
