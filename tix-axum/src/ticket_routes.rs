//! REST API endpoints for ticket types and tickets.

use crate::{
    ApiApplication, Rejection, User,
    input::{Body, positive_json_id},
    internal_error, reject,
};
use aide::axum::{ApiRouter, routing::get};
use axum::{Json, extract::State, http::StatusCode};
use schemars::JsonSchema;
use serde::Deserialize;
use tix_core::{
    models::{TicketType, TicketTypeId, TicketWithType},
    services::TicketService,
};

/// Request body naming the ticket type to buy.
#[derive(Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct TicketRequest {
    /// The ticket type, as a positive integer
    #[schemars(with = "Option<i64>")]
    ticket_type_id: Option<serde_json::Value>,
}

/// Creates a router with ticket-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with("/types", get(list_ticket_types::<T>), |route| {
            route.tag("tickets")
        })
        .api_route_with(
            "/",
            get(get_ticket::<T>).post(purchase_ticket::<T>),
            |route| route.security_requirement("jwt").tag("tickets"),
        )
}

/// List every ticket type. No credentials are needed.
///
/// # Returns
///
/// - `200 OK`: The ticket types
async fn list_ticket_types<T: ApiApplication>(
    State(app): State<T>,
) -> Result<Json<Vec<TicketType>>, Rejection> {
    TicketService::new(app.database())
        .list_ticket_types()
        .await
        .map(Json)
        .map_err(internal_error)
}

/// Retrieve the caller's ticket.
///
/// # Returns
///
/// - `200 OK`: The ticket with its `TicketType`
/// - `401 Unauthorized`: Missing or invalid credentials
/// - `404 Not Found`: The caller has no ticket
async fn get_ticket<T: ApiApplication>(
    State(app): State<T>,
    User(user_id): User,
) -> Result<Json<TicketWithType>, Rejection> {
    TicketService::new(app.database())
        .get_ticket_for_user(user_id)
        .await
        .map_err(internal_error)?
        .map(Json)
        .map_err(|failure| reject(failure, StatusCode::NOT_FOUND))
}

/// Reserve a ticket through the caller's enrollment.
///
/// # Returns
///
/// - `201 Created`: The new `RESERVED` ticket with its `TicketType`
/// - `400 Bad Request`: Missing or invalid ticket type id
/// - `401 Unauthorized`: Missing or invalid credentials
/// - `404 Not Found`: The caller is not enrolled, or no such ticket type
async fn purchase_ticket<T: ApiApplication>(
    State(app): State<T>,
    User(user_id): User,
    Body(body): Body<TicketRequest>,
) -> Result<(StatusCode, Json<TicketWithType>), Rejection> {
    let ticket_type_id = positive_json_id(body.ticket_type_id.as_ref())
        .map(TicketTypeId)
        .ok_or((StatusCode::BAD_REQUEST, "invalid ticket type id".to_string()))?;

    TicketService::new(app.database())
        .purchase_ticket(ticket_type_id, user_id, app.now())
        .await
        .map_err(internal_error)?
        .map(|ticket| (StatusCode::CREATED, Json(ticket)))
        .map_err(|failure| reject(failure, StatusCode::NOT_FOUND))
}
