//! Defines a user record, its supporting types, and the endpoints for managing users.

mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod log_in_endpoint;
mod register_endpoint;

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::PasswordHash;

pub use delete_endpoint::delete_user_endpoint;
pub use edit_endpoint::edit_user_endpoint;
pub use get_endpoint::{get_user_endpoint, get_users_endpoint};
pub use log_in_endpoint::log_in_endpoint;
pub use register_endpoint::register_user_endpoint;

/// A newtype wrapper for string user IDs.
///
/// New IDs are random v4 UUIDs, so collisions with existing IDs are
/// negligible and no generate-and-check loop is needed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserID(String);

impl UserID {
    /// Generate a fresh random user ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing ID, e.g. one taken from a request path.
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A user of the application as it is kept in the user store.
///
/// This type includes the password hash and must not be serialized in API
/// responses. Convert it to a [PublicUser] first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The user's unique ID.
    pub id: UserID,
    /// The display name of the user.
    pub username: String,
    /// The email address the user logs in with.
    pub email: String,
    /// The user's salted and hashed password.
    pub password: PasswordHash,
}

/// The data needed to create a user. The password is still in plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    /// The display name of the user.
    pub username: String,
    /// The email address the user logs in with.
    pub email: String,
    /// The plain text password, hashed by the store before it is saved.
    pub password: String,
}

/// A partial update to a user. Fields that are `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    /// The new display name.
    pub username: Option<String>,
    /// The new email address.
    pub email: Option<String>,
    /// The new plain text password, hashed by the store before it is saved.
    pub password: Option<String>,
}

/// The fields of a [User] that are safe to send to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    /// The user's unique ID.
    pub id: UserID,
    /// The display name of the user.
    pub username: String,
    /// The email address the user logs in with.
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// The JSON body sent by clients to register, log in or update a user.
///
/// Every field is optional so that missing fields produce a
/// [MissingParameters](crate::Error::MissingParameters) error rather than a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserForm {
    /// The display name of the user.
    pub username: Option<String>,
    /// The email address the user logs in with.
    pub email: Option<String>,
    /// The plain text password.
    pub password: Option<String>,
}

/// Return the field's value if it was given and is not empty.
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod user_tests {
    use crate::{
        PasswordHash,
        user::{PublicUser, User, UserForm, UserID, required},
    };

    #[test]
    fn generated_ids_are_unique() {
        let first = UserID::generate();
        let second = UserID::generate();

        assert_ne!(first, second);
    }

    #[test]
    fn public_user_omits_password() {
        let user = User {
            id: UserID::new("42"),
            username: "foo".to_owned(),
            email: "foo@bar.baz".to_owned(),
            password: PasswordHash::new_unchecked("hunter2"),
        };

        let json = serde_json::to_value(PublicUser::from(user)).unwrap();

        assert_eq!(json["id"], "42");
        assert_eq!(json["username"], "foo");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn user_serializes_with_stored_field_names() {
        let user = User {
            id: UserID::new("42"),
            username: "foo".to_owned(),
            email: "foo@bar.baz".to_owned(),
            password: PasswordHash::new_unchecked("hunter2"),
        };

        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "42",
                "username": "foo",
                "email": "foo@bar.baz",
                "password": "hunter2",
            })
        );
    }

    #[test]
    fn empty_fields_are_missing() {
        let form: UserForm = serde_json::from_str(r#"{"email": "", "password": "pw"}"#).unwrap();

        assert_eq!(required(&form.username), None);
        assert_eq!(required(&form.email), None);
        assert_eq!(required(&form.password), Some("pw"));
    }
}
