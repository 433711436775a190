use axum::{debug_handler, extract::State, Json};

use crate::{auth::CurrentUser, db::{DbHandle, User}, AppError, AppResult};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn me(
    State(db): State<DbHandle>,
    user: Option<CurrentUser>,
) -> AppResult<Json<User>> {
    let user = user.ok_or_else(|| AppError::unauthorized("Unauthorized: Missing userId"))?;

    let db = db.read().await;
    let user = db
        .user(user.id())
        .cloned()
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(user))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn directory(State(db): State<DbHandle>) -> Json<Vec<User>> {
    Json(db.read().await.users().to_vec())
}
