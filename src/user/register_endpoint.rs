//! Defines the endpoint for registering a new user.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    stores::UserStore,
    user::{NewUser, PublicUser, UserForm, required},
};

/// A route handler for registering a new user, responds with the created user.
///
/// Responds with 400 if the body is not a JSON object, a field is missing or
/// the email is already registered.
pub async fn register_user_endpoint(
    State(state): State<AppState>,
    form: Result<Json<UserForm>, JsonRejection>,
) -> Response {
    let form = match form {
        Ok(Json(form)) => form,
        Err(rejection) => return Error::from(rejection).into_response(),
    };

    match register_user(&form, state.user_store.as_ref()) {
        Ok(user) => (StatusCode::CREATED, Json(json!({ "user": user }))).into_response(),
        Err(error) => error.into_response(),
    }
}

fn register_user(form: &UserForm, store: &dyn UserStore) -> Result<PublicUser, Error> {
    let (Some(username), Some(email), Some(password)) = (
        required(&form.username),
        required(&form.email),
        required(&form.password),
    ) else {
        return Err(Error::MissingParameters);
    };

    let user = store.create(NewUser {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })?;

    tracing::info!("Registered user {}", user.id);

    Ok(user.into())
}
