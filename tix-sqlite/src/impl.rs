//! Repository trait implementations for the SQLite database.
//!
//! This module contains the implementations of all repository traits defined in
//! `tix-core` for the SQLite database backend.

use crate::Db;
use tix_core::ports::Repository;

mod booking;
mod catalog;
mod hotel;
mod payment;
mod ticket;

impl Repository for Db {
    type Error = sqlx::Error;
}

/// Whether the error is a unique index refusing a duplicate row.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

/// Whether the error is the capacity trigger refusing a booking write.
fn is_capacity_abort(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.message().contains("room at capacity"),
        _ => false,
    }
}
