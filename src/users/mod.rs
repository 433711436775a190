mod me;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(me::directory))
        .route("/api/users/me", get(me::me))
}
