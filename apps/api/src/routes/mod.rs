pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::personality::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/personality/items",
            get(handlers::handle_list_items),
        )
        .route("/api/v1/personality/score", post(handlers::handle_score))
        .route(
            "/api/v1/personality/score/ipip",
            post(handlers::handle_score_ipip),
        )
        .route(
            "/api/v1/personality/clusters",
            get(handlers::handle_list_clusters),
        )
        .route(
            "/api/v1/personality/clusters/:id",
            get(handlers::handle_get_cluster),
        )
}
