//! REST API endpoints for room bookings.
//!
//! Malformed identifiers are refused with `403`, the same code as a refused
//! booking, and only an unknown room is reported as `404`.

use crate::{
    ApiApplication, Rejection, User,
    input::{Body, positive_id, positive_json_id},
    internal_error, reject,
};
use aide::axum::{
    ApiRouter,
    routing::{get, put},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tix_core::{
    eligibility::Failure,
    models::{BookingId, BookingWithRoom, RoomId},
    services::BookingService,
};

/// Path parameter for booking-specific endpoints.
#[derive(Deserialize, JsonSchema)]
struct Id {
    /// The unique identifier of the booking
    booking_id: String,
}

/// Request body naming the room to book.
#[derive(Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct RoomRequest {
    /// The room, as a positive integer (a numeric string is also accepted)
    #[schemars(with = "Option<i64>")]
    room_id: Option<serde_json::Value>,
}

/// Response body identifying the affected booking.
#[derive(Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct BookingResponse {
    booking_id: BookingId,
}

/// Creates a router with booking-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with(
            "/",
            get(get_booking::<T>).post(create_booking::<T>),
            |route| route.security_requirement("jwt").tag("booking"),
        )
        .api_route_with("/{booking_id}", put(change_booking::<T>), |route| {
            route.security_requirement("jwt").tag("booking")
        })
}

fn status(failure: Failure) -> StatusCode {
    match failure {
        Failure::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::FORBIDDEN,
    }
}

fn forbidden(what: &str) -> Rejection {
    (StatusCode::FORBIDDEN, format!("invalid {what}"))
}

/// Retrieve the caller's booking.
///
/// # Returns
///
/// - `200 OK`: The booking id and its `Room`
/// - `401 Unauthorized`: Missing or invalid credentials
/// - `404 Not Found`: The caller has no booking
async fn get_booking<T: ApiApplication>(
    State(app): State<T>,
    User(user_id): User,
) -> Result<Json<BookingWithRoom>, Rejection> {
    BookingService::new(app.database())
        .get_active_booking(user_id)
        .await
        .map_err(internal_error)?
        .map(Json)
        .map_err(|failure| reject(failure, StatusCode::NOT_FOUND))
}

/// Book a room.
///
/// Requires a paid, in-person ticket that includes lodging, and a room with a
/// free slot.
///
/// # Returns
///
/// - `200 OK`: The new booking's id
/// - `401 Unauthorized`: Missing or invalid credentials
/// - `403 Forbidden`: Invalid room id, no lodging ticket, or the room is full
/// - `404 Not Found`: No such room
async fn create_booking<T: ApiApplication>(
    State(app): State<T>,
    User(user_id): User,
    Body(body): Body<RoomRequest>,
) -> Result<Json<BookingResponse>, Rejection> {
    let room_id = positive_json_id(body.room_id.as_ref())
        .map(RoomId)
        .ok_or_else(|| forbidden("room id"))?;

    BookingService::new(app.database())
        .create_booking(user_id, room_id, app.now())
        .await
        .map_err(internal_error)?
        .map(|booking_id| Json(BookingResponse { booking_id }))
        .map_err(|failure| reject(failure, status(failure)))
}

/// Move one of the caller's bookings to another room.
///
/// # Returns
///
/// - `200 OK`: The booking's id
/// - `401 Unauthorized`: Missing or invalid credentials
/// - `403 Forbidden`: Invalid ids, not the caller's booking, or the room is full
/// - `404 Not Found`: No such room
async fn change_booking<T: ApiApplication>(
    State(app): State<T>,
    User(user_id): User,
    Path(Id { booking_id }): Path<Id>,
    Body(body): Body<RoomRequest>,
) -> Result<Json<BookingResponse>, Rejection> {
    let room_id = positive_json_id(body.room_id.as_ref())
        .map(RoomId)
        .ok_or_else(|| forbidden("room id"))?;
    let booking_id = positive_id(&booking_id)
        .map(BookingId)
        .ok_or_else(|| forbidden("booking id"))?;

    BookingService::new(app.database())
        .change_booking(user_id, booking_id, room_id, app.now())
        .await
        .map_err(internal_error)?
        .map(|booking_id| Json(BookingResponse { booking_id }))
        .map_err(|failure| reject(failure, status(failure)))
}
