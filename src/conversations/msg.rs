use axum::{
    body::Bytes,
    debug_handler,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::CurrentUser,
    clock,
    db::{Conversation, Db, DbHandle, Message},
    parse_body, AppError, AppResult, GetField,
};

/// Looks up a conversation the caller takes part in.
fn member_conversation<'a>(db: &'a Db, id: &str, user: &CurrentUser) -> AppResult<&'a Conversation> {
    let conversation = db
        .conversation(id)
        .ok_or_else(|| AppError::not_found("Conversation not found"))?;

    if !conversation.has_participant(user.id()) {
        return Err(AppError::forbidden("Forbidden"));
    }

    Ok(conversation)
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn messages(
    State(db): State<DbHandle>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Message>>> {
    let db = db.read().await;
    member_conversation(&db, &id, &user)?;

    Ok(Json(db.messages_in(&id)))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn send_msg(
    State(db): State<DbHandle>,
    user: CurrentUser,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Message>)> {
    let body = parse_body(&body)?;
    let content = body
        .str_field("content")
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("Message content required"))?;

    let mut db = db.write().await;
    member_conversation(&db, &id, &user)?;

    let message = db
        .append_message(&id, user.id(), content, clock::now_millis())
        .ok_or_else(|| AppError::not_found("Conversation not found"))?;

    Ok((StatusCode::CREATED, Json(message)))
}
