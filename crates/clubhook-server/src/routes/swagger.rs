//! OpenAPI Documentation

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(super::webhook::receive_webhook),
    tags(
        (name = "Webhook", description = "Relays Clubhouse webhook events to Discord")
    )
)]
pub struct ApiDoc;
