use axum::{debug_handler, extract::State, Json};

use crate::{auth::CurrentUser, db::{ConversationView, DbHandle}};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn list(
    State(db): State<DbHandle>,
    user: CurrentUser,
) -> Json<Vec<ConversationView>> {
    Json(db.read().await.conversations_for(user.id()))
}
