//! Defines the endpoint for updating a user.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    stores::UserStore,
    user::{PublicUser, UserForm, UserID, UserPatch, required},
};

/// A route handler for updating a user, responds with the updated user.
///
/// Responds with 400 if the body is not a JSON object or a field is missing, and with 404 if there is no user with the ID.
pub async fn edit_user_endpoint(
    State(state): State<AppState>,
    Path(user_id): Path<UserID>,
    form: Result<Json<UserForm>, JsonRejection>,
) -> Response {
    let form = match form {
        Ok(Json(form)) => form,
        Err(rejection) => return Error::from(rejection).into_response(),
    };

    match edit_user(&user_id, &form, state.user_store.as_ref()) {
        Ok(user) => (StatusCode::CREATED, Json(json!({ "user": user }))).into_response(),
        Err(error) => error.into_response(),
    }
}

fn edit_user(id: &UserID, form: &UserForm, store: &dyn UserStore) -> Result<PublicUser, Error> {
    let (Some(username), Some(email), Some(password)) = (
        required(&form.username),
        required(&form.email),
        required(&form.password),
    ) else {
        return Err(Error::MissingParameters);
    };

    let patch = UserPatch {
        username: Some(username.to_owned()),
        email: Some(email.to_owned()),
        password: Some(password.to_owned()),
    };

    match store.update(id, patch)? {
        Some(user) => Ok(user.into()),
        None => Err(Error::UserNotFound(id.to_string())),
    }
}

#[cfg(test)]
mod edit_user_tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{
        Error,
        endpoints::{USER, format_endpoint},
        stores::UserStore,
        test_utils::{get_test_server, get_test_store},
        user::{NewUser, UserForm, UserID, edit_endpoint::edit_user},
    };

    fn full_form() -> UserForm {
        UserForm {
            username: Some("b".to_owned()),
            email: Some("b@x.com".to_owned()),
            password: Some("pw2".to_owned()),
        }
    }

    #[test]
    fn edit_unknown_user_creates_nothing() {
        let (store, _dir) = get_test_store();

        let result = edit_user(&UserID::new("nope"), &full_form(), &store);

        assert_eq!(result, Err(Error::UserNotFound("nope".to_owned())));
        assert_eq!(store.find_all().unwrap().len(), 0);
    }

    #[test]
    fn edit_replaces_fields_and_rehashes_password() {
        let (store, _dir) = get_test_store();
        let user = store
            .create(NewUser {
                username: "a".to_owned(),
                email: "a@x.com".to_owned(),
                password: "pw".to_owned(),
            })
            .unwrap();

        let edited = edit_user(&user.id, &full_form(), &store).unwrap();
        let stored = store.find_one(&user.id).unwrap().unwrap();

        assert_eq!(edited.username, "b");
        assert_eq!(stored.email, "b@x.com");
        assert!(stored.password.verify("pw2").unwrap());
    }

    #[tokio::test]
    async fn put_updates_user() {
        let (server, _dir) = get_test_server();
        let registered = server
            .post("/users/register")
            .json(&json!({"username": "a", "email": "a@x.com", "password": "pw"}))
            .await
            .json::<Value>();
        let id = registered["user"]["id"].as_str().unwrap();

        let response = server
            .put(&format_endpoint(USER, id))
            .json(&json!({"username": "b", "email": "b@x.com", "password": "pw2"}))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({"user": {"id": id, "username": "b", "email": "b@x.com"}}));

        server
            .post("/users/login")
            .json(&json!({"email": "b@x.com", "password": "pw2"}))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn put_unknown_user_is_not_found() {
        let (server, _dir) = get_test_server();

        let response = server
            .put(&format_endpoint(USER, "nope"))
            .json(&json!({"username": "b", "email": "b@x.com", "password": "pw2"}))
            .await;

        response.assert_status_not_found();
        server.get("/users").await.assert_json(&json!({"total": 0, "users": []}));
    }

    #[tokio::test]
    async fn put_with_wrong_field_type_is_json_bad_request() {
        let (server, _dir) = get_test_server();

        let response = server
            .put(&format_endpoint(USER, "nope"))
            .json(&json!({"username": ["b"], "email": "b@x.com", "password": "pw2"}))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn put_with_missing_field_is_bad_request() {
        let (server, _dir) = get_test_server();

        let response = server
            .put(&format_endpoint(USER, "nope"))
            .json(&json!({"username": "b"}))
            .await;

        response.assert_status_bad_request();
    }
}
