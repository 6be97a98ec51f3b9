pub mod game;
pub mod health;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/catalog", get(game::get_catalog))
        .route("/bag", post(game::create_bag))
        .route("/draw", post(game::draw_tiles))
        .route("/deal", post(game::deal_hand))
        .route("/repair", post(game::repair_hand))
        .route("/score", post(game::score_word))
        .route("/can-form", post(game::can_form))
}
