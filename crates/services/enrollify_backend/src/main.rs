// File: services/enrollify_backend/src/main.rs
use axum::{routing::get, Router};
use enrollify_auth::{routes as auth_routes, JwtGuard};
use enrollify_classes::routes as classes_routes;
use enrollify_config::load_config;
use enrollify_enrollment::routes as enrollment_routes;
use enrollify_store::Store;
use enrollify_stripe::routes as stripe_routes;
use enrollify_users::routes as users_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[tokio::main]
async fn main() {
    enrollify_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));
    let guard = Arc::new(
        JwtGuard::from_env(&config.auth).expect("ACCESS_TOKEN_SECRET must be set"),
    );
    let store = Arc::new(
        Store::connect(&config.database)
            .await
            .expect("Failed to connect to MongoDB"),
    );

    let app = Router::new()
        .route("/", get(|| async { "Enrollify API" }))
        .merge(auth_routes(guard.clone()))
        .merge(classes_routes(store.clone(), guard.clone()))
        .merge(users_routes(store.clone(), guard.clone()))
        .merge(enrollment_routes(store.clone(), guard.clone()))
        .merge(stripe_routes(config.clone(), guard))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind address");
    tracing::info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
