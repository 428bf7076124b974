//! REST API endpoints for ticket payments.
//!
//! Ownership failures answer `401`; paying twice answers `403`; anything
//! else the services refuse answers `404`.

use crate::{
    ApiApplication, Rejection, User,
    input::{Body, parse_id, positive_json_id},
    internal_error, reject,
};
use aide::axum::{
    ApiRouter,
    routing::{get, post},
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tix_core::{
    eligibility::Failure,
    models::{CardData, Payment, TicketId},
    services::PaymentService,
};

/// Query parameters for looking up a payment.
#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct PaymentQuery {
    /// The ticket whose payment to retrieve
    ticket_id: Option<String>,
}

/// Request body for paying a ticket.
#[derive(Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct PaymentRequest {
    /// The ticket to pay for
    #[schemars(with = "Option<i64>")]
    ticket_id: Option<serde_json::Value>,
    /// The card to charge
    #[schemars(with = "Option<CardData>")]
    card_data: Option<serde_json::Value>,
}

/// Creates a router with payment-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with("/", get(get_payment::<T>), |route| {
            route.security_requirement("jwt").tag("payments")
        })
        .api_route_with("/process", post(process_payment::<T>), |route| {
            route.security_requirement("jwt").tag("payments")
        })
}

fn status(failure: Failure) -> StatusCode {
    match failure {
        Failure::Unauthorized => StatusCode::UNAUTHORIZED,
        Failure::Forbidden => StatusCode::FORBIDDEN,
        _ => StatusCode::NOT_FOUND,
    }
}

fn bad_request(what: &str) -> Rejection {
    (StatusCode::BAD_REQUEST, format!("missing or invalid {what}"))
}

/// Retrieve the payment recorded for one of the caller's tickets.
///
/// # Returns
///
/// - `200 OK`: The payment
/// - `400 Bad Request`: Missing or non-numeric `ticketId`
/// - `401 Unauthorized`: Missing credentials, not the caller's ticket, or no payment yet
/// - `404 Not Found`: No such ticket
async fn get_payment<T: ApiApplication>(
    State(app): State<T>,
    User(user_id): User,
    Query(query): Query<PaymentQuery>,
) -> Result<Json<Payment>, Rejection> {
    let ticket_id = query
        .ticket_id
        .as_deref()
        .and_then(parse_id)
        .filter(|id| *id != 0)
        .map(TicketId)
        .ok_or_else(|| bad_request("ticketId"))?;

    PaymentService::new(app.database())
        .get_payment_for_ticket(ticket_id, user_id)
        .await
        .map_err(internal_error)?
        .map(Json)
        .map_err(|failure| reject(failure, status(failure)))
}

/// Pay for one of the caller's tickets at its list price.
///
/// Only the card issuer and the last four digits of its number are stored.
///
/// # Returns
///
/// - `200 OK`: The recorded payment
/// - `400 Bad Request`: Missing or invalid `ticketId` or `cardData`
/// - `401 Unauthorized`: Missing credentials, or not the caller's ticket
/// - `403 Forbidden`: The ticket is already paid
/// - `404 Not Found`: No such ticket
async fn process_payment<T: ApiApplication>(
    State(app): State<T>,
    User(user_id): User,
    Body(body): Body<PaymentRequest>,
) -> Result<Json<Payment>, Rejection> {
    let ticket_id = positive_json_id(body.ticket_id.as_ref())
        .map(TicketId)
        .ok_or_else(|| bad_request("ticketId"))?;
    let card: CardData = body
        .card_data
        .and_then(|value| serde_json::from_value(value).ok())
        .ok_or_else(|| bad_request("cardData"))?;

    PaymentService::new(app.database())
        .submit_payment(ticket_id, &card, user_id, app.now())
        .await
        .map_err(internal_error)?
        .map(Json)
        .map_err(|failure| reject(failure, status(failure)))
}
