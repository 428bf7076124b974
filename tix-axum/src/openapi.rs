//! The OpenAPI document and a RapiDoc page to browse it.

use std::sync::Arc;

use aide::{
    axum::{ApiRouter, IntoApiResponse, routing::get},
    openapi::{OpenApi, SecurityScheme, Tag},
    transform::TransformOpenApi,
};
use axum::{
    Extension, Json,
    response::{Html, IntoResponse},
};

const RAPIDOC_PAGE: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Tix API</title>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/rapidoc/9.3.8/rapidoc-min.js" integrity="sha512-0ES6eX4K9J1PrIEjIizv79dTlN5HwI2GW9Ku6ymb8dijMHF5CIplkS8N0iFJ/wl3GybCSqBJu8HDhiFkZRAf0g==" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  </head>
  <body>
    <rapi-doc spec-url="/docs/api.json"
        render-style="read"
        allow-authentication="true"
        show-method-in-nav-bar="as-colored-text"
        use-path-in-nav-bar="true"
    ></rapi-doc>
  </body>
</html>"#;

/// The RapiDoc viewer, pointed at `/docs/api.json`.
async fn serve_rapidoc() -> impl IntoApiResponse {
    Html(RAPIDOC_PAGE).into_response()
}

/// The generated OpenAPI document, as JSON.
async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}

/// Routes for `/docs` (viewer) and `/docs/api.json` (document).
pub(crate) fn docs_routes() -> ApiRouter {
    ApiRouter::new()
        .route("/", get(serve_rapidoc))
        .route("/api.json", get(serve_docs))
}

/// Configure the OpenAPI documentation metadata.
pub(crate) fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Tix API")
        .summary("A REST API for buying event tickets and booking the hotel rooms they include.")
        .description("Tickets are bought through an enrollment and paid by card. A paid, in-person ticket that includes lodging unlocks the hotel catalog and room booking.")
        .version("0.1")
        .security_scheme("jwt", SecurityScheme::Http { scheme: "bearer".into(), bearer_format: Some("JWT".into()), description: None, extensions: Default::default() })
        .tag(Tag {
            name: "hotels".into(),
            description: Some("Browse hotels and their rooms (requires a lodging ticket)".into()),
            ..Default::default()
        })
        .tag(Tag {
            name: "booking".into(),
            description: Some("Reserve a room or move an existing reservation".into()),
            ..Default::default()
        })
        .tag(Tag {
            name: "tickets".into(),
            description: Some("Ticket types and ticket purchase".into()),
            ..Default::default()
        })
        .tag(Tag {
            name: "payments".into(),
            description: Some("Pay for a ticket and read the payment back".into()),
            ..Default::default()
        })
}
