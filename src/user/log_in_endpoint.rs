//! Defines the endpoint for checking a user's email and password.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    stores::UserStore,
    user::{PublicUser, UserForm, required},
};

/// A route handler for logging in, responds with the user when the email and
/// password match.
///
/// Responds with 400 if a field is missing or the password is wrong, and with
/// 404 if no user has the email.
pub async fn log_in_endpoint(
    State(state): State<AppState>,
    form: Result<Json<UserForm>, JsonRejection>,
) -> Response {
    let form = match form {
        Ok(Json(form)) => form,
        Err(rejection) => return Error::from(rejection).into_response(),
    };

    match log_in(&form, state.user_store.as_ref()) {
        Ok(user) => Json(json!({ "user": user })).into_response(),
        Err(error) => error.into_response(),
    }
}

fn log_in(form: &UserForm, store: &dyn UserStore) -> Result<PublicUser, Error> {
    let (Some(email), Some(password)) = (required(&form.email), required(&form.password)) else {
        return Err(Error::MissingParameters);
    };

    if store.find_by_email(email)?.is_none() {
        return Err(Error::EmailNotFound);
    }

    match store.compare_password(email, password)? {
        Some(user) => Ok(user.into()),
        None => Err(Error::InvalidCredentials),
    }
}
