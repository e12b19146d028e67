//! Defines the endpoint for deleting a user.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, Error, user::UserID};

/// A route handler for deleting a user, responds with a confirmation message.
///
/// Responds with 404 if there is no user with the ID.
pub async fn delete_user_endpoint(
    State(state): State<AppState>,
    Path(user_id): Path<UserID>,
) -> Response {
    match state.user_store.remove(&user_id) {
        Ok(Some(user)) => {
            tracing::info!("Deleted user {}", user.id);
            Json(json!({ "msg": "User successfully deleted" })).into_response()
        }
        Ok(None) => Error::UserNotFound(user_id.to_string()).into_response(),
        Err(error) => error.into_response(),
    }
}
