mod list;
mod msg;
mod new;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/conversations", get(list::list).post(new::new_conversation))
        .route(
            "/api/conversations/{id}/messages",
            get(msg::messages).post(msg::send_msg),
        )
}
