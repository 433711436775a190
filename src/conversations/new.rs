use axum::{
    body::Bytes,
    debug_handler,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    auth::CurrentUser,
    db::{Created, DbHandle},
    parse_body, AppError, AppResult, GetField,
};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn new_conversation(
    State(db): State<DbHandle>,
    user: CurrentUser,
    body: Bytes,
) -> AppResult<Response> {
    let body = parse_body(&body)?;
    let invalid = || AppError::bad_request("Invalid participant");

    let participant_id = body.str_field("participantId").ok_or_else(invalid)?;
    if participant_id.is_empty() || participant_id == user.id() {
        return Err(invalid());
    }

    let (conversation, created) = db
        .write()
        .await
        .find_or_create_conversation(user.id(), participant_id);
    let status = match created {
        Created::Yes => StatusCode::CREATED,
        Created::No => StatusCode::OK,
    };

    Ok((status, Json(conversation)).into_response())
}
