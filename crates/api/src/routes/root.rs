use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Capture crate version from Cargo
static CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Successful root response
#[derive(Serialize, Debug, ToSchema)]
pub struct RootResponse {
    marquee: &'static str,
    version: &'static str,
}

/// Root response from service
#[utoipa::path(
    get,
    path = "/",
    tag = "Misc",
    responses(
        (status = 200, description = "Root response", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        marquee: "Hello, I am an event listing!",
        version: CRATE_VERSION,
    })
}
