use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts, Query},
    http::{request::Parts, Uri},
};

use crate::AppError;

/// Query parameter carrying the acting user's id.
pub const USER_ID: &str = "userId";

/// The user a request acts as, taken from `?userId=`. Presence is all that's
/// checked, the id may not belong to any known user.
///
/// Extracting it directly rejects with a plain `Unauthorized`. Handlers that
/// want their own message take `Option<CurrentUser>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

impl CurrentUser {
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// First `userId` in the query. An empty first value counts as missing.
pub(crate) fn user_id_from_uri(uri: &Uri) -> Option<String> {
    let Ok(Query(pairs)) = Query::<Vec<(String, String)>>::try_from_uri(uri) else {
        return None;
    };
    pairs
        .into_iter()
        .find(|(key, _)| key == USER_ID)
        .map(|(_, id)| id)
        .filter(|id| !id.is_empty())
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_id_from_uri(&parts.uri)
            .map(Self)
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))
    }
}

impl<S> OptionalFromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Option<Self>, Self::Rejection> {
        Ok(user_id_from_uri(&parts.uri).map(Self))
    }
}
