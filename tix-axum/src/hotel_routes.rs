//! REST API endpoints for browsing hotels.
//!
//! Both endpoints are gated on the caller holding a paid, in-person ticket
//! that includes lodging.

use crate::{ApiApplication, Rejection, User, input::parse_id, internal_error, reject};
use aide::axum::{ApiRouter, routing::get};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tix_core::{
    eligibility::Failure,
    models::{Hotel, HotelId, HotelWithRooms},
    services::HotelService,
};

/// Path parameter for hotel-specific endpoints.
#[derive(serde::Deserialize, schemars::JsonSchema)]
struct Id {
    /// The unique identifier of the hotel
    hotel_id: String,
}

/// Creates a router with hotel-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with("/", get(list_hotels::<T>), |route| {
            route.security_requirement("jwt").tag("hotels")
        })
        .api_route_with("/{hotel_id}", get(get_hotel::<T>), |route| {
            route.security_requirement("jwt").tag("hotels")
        })
}

fn status(failure: Failure) -> StatusCode {
    match failure {
        Failure::NotFound => StatusCode::NOT_FOUND,
        Failure::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// List every hotel.
///
/// # Returns
///
/// - `200 OK`: The hotels
/// - `401 Unauthorized`: Missing or invalid credentials
/// - `402 Payment Required`: The caller's ticket does not include lodging
/// - `404 Not Found`: The caller has no ticket, or there are no hotels
async fn list_hotels<T: ApiApplication>(
    State(app): State<T>,
    User(user_id): User,
) -> Result<Json<Vec<Hotel>>, Rejection> {
    HotelService::new(app.database())
        .list_hotels(user_id)
        .await
        .map_err(internal_error)?
        .map(Json)
        .map_err(|failure| reject(failure, status(failure)))
}

/// Retrieve a hotel and its rooms.
///
/// # Returns
///
/// - `200 OK`: The hotel with its `Rooms`
/// - `400 Bad Request`: The hotel id is not a number
/// - `401 Unauthorized`: Missing or invalid credentials
/// - `402 Payment Required`: The caller's ticket does not include lodging
/// - `404 Not Found`: No ticket, no such hotel, or the hotel has no rooms
async fn get_hotel<T: ApiApplication>(
    State(app): State<T>,
    User(user_id): User,
    Path(Id { hotel_id }): Path<Id>,
) -> Result<Json<HotelWithRooms>, Rejection> {
    let hotel_id = parse_id(&hotel_id)
        .map(HotelId)
        .ok_or((StatusCode::BAD_REQUEST, "invalid hotel id".to_string()))?;

    HotelService::new(app.database())
        .list_rooms(user_id, hotel_id)
        .await
        .map_err(internal_error)?
        .map(Json)
        .map_err(|failure| reject(failure, status(failure)))
}
