pub mod appresult;
pub mod auth;
pub mod clock;
pub mod config;
pub mod conversations;
pub mod db;
pub mod res;
pub mod users;

use axum::{extract::FromRef, routing::get, Router};
use serde_json::Value;
use tower_http::trace::TraceLayer;

pub use appresult::{AppError, AppResult};
use config::Cors;
use db::DbHandle;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DbHandle,
}

impl AppState {
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

pub trait GetField {
    /// The field as a string, `None` if it's absent or not a string.
    fn str_field(&self, field: &str) -> Option<&str>;
}

impl GetField for Value {
    fn str_field(&self, field: &str) -> Option<&str> {
        self.get(field)?.as_str()
    }
}

/// Bodies are parsed by hand so identity is checked before the body is.
pub(crate) fn parse_body(body: &[u8]) -> AppResult<Value> {
    serde_json::from_slice(body).map_err(|_| AppError::bad_request("Invalid JSON body"))
}

pub fn router(state: AppState, cors: &Cors) -> Router {
    let router = Router::new()
        .route("/", get(res::index))
        .merge(users::router())
        .merge(conversations::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match cors.layer() {
        Some(cors) => router.layer(cors),
        None => router,
    }
}
