use std::net::{Ipv4Addr, SocketAddr};

use axum::{extract::FromRef, Router};

use marquee_database::{DatabaseInfo, LazyDatabase};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

mod mime_type;
mod routes;

#[derive(Clone)]
struct AppState {
    pub database: LazyDatabase,
}

impl FromRef<AppState> for LazyDatabase {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Configure logging and environment
    marquee_config::configure!(api);

    // Configure API schema
    #[derive(OpenApi)]
    #[openapi(
        paths(
            routes::root::root,
            routes::event_list::event_list,
            routes::event_create::event_create,
            routes::event_fetch::event_fetch,
            routes::event_similar::event_similar,
            routes::booking_create::booking_create,
        ),
        tags(
            (name = "Misc", description = "Misc routes for the service."),
            (name = "Events", description = "Create and browse event listings."),
            (name = "Bookings", description = "Book a spot at an event.")
        ),
        components(
            schemas(
                marquee_result::Error,
                marquee_result::ErrorType,
                routes::root::RootResponse,
                routes::event_create::CreateEventPayload,
                routes::booking_create::CreateBookingPayload,
            )
        ),
    )]
    struct ApiDoc;

    // The database handle is lazy; the first request to touch the store
    // establishes the connection and runs migrations.
    let state = AppState {
        database: LazyDatabase::new(DatabaseInfo::Auto),
    };

    // Configure Axum and router
    let app = Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/", routes::router().await)
        .with_state(state);

    // Configure TCP listener and bind
    tracing::info!("Listening on 0.0.0.0:14710");
    tracing::info!("Play around with the API: http://localhost:14710/scalar");
    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 14710));
    let listener = TcpListener::bind(&address).await?;
    axum::serve(listener, app.into_make_service()).await
}
