//! Defines the endpoints for listing users and getting a single user.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    user::{PublicUser, UserID},
};

/// A route handler for listing every user along with the number of users.
pub async fn get_users_endpoint(State(state): State<AppState>) -> Response {
    let users = match state.user_store.find_all() {
        Ok(users) => users,
        Err(error) => return error.into_response(),
    };

    let users: Vec<PublicUser> = users.into_iter().map(PublicUser::from).collect();

    Json(json!({ "total": users.len(), "users": users })).into_response()
}

/// A route handler for getting a user by their ID.
///
/// Responds with 404 if there is no user with the ID.
pub async fn get_user_endpoint(
    State(state): State<AppState>,
    Path(user_id): Path<UserID>,
) -> Response {
    match state.user_store.find_one(&user_id) {
        Ok(Some(user)) => Json(json!({ "user": PublicUser::from(user) })).into_response(),
        Ok(None) => Error::UserNotFound(user_id.to_string()).into_response(),
        Err(error) => error.into_response(),
    }
}
