#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the tix-core crate.
//! [tix_core]: https://docs.rs/tix_core/latest/tix_core/index.html
#![doc = include_str!("../README.md")]

/// Core domain models for the ticketing system.
///
/// This module contains the entities (ticket types, tickets, hotels, rooms,
/// bookings, payments) as well as the hydrated records the persistence
/// layer returns. The models are plain data structures with minimal logic.
pub mod models;

/// Interface traits for the ticketing system.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
/// Each repository trait is a slice of the persistence gateway, and the
/// `Application` trait ties a concrete repository to an identity provider.
pub mod ports;

/// The rules deciding whether a user may view hotels, book a room or pay
/// for a ticket.
pub mod eligibility;

/// Feature services that combine the ports with the eligibility rules.
pub mod services;
