//! Defines the user store trait.

use std::fmt::Debug;

use crate::{
    Error,
    user::{NewUser, User, UserID, UserPatch},
};

/// Handles the creation, retrieval, modification and deletion of [User] records.
///
/// Implementations own all user records. Callers receive copies and should
/// not hold on to them across calls.
pub trait UserStore: Debug + Send + Sync {
    /// Get every user in the store, in no particular order.
    fn find_all(&self) -> Result<Vec<User>, Error>;

    /// Get the user with the ID `id`, or `None` if no such user exists.
    fn find_one(&self, id: &UserID) -> Result<Option<User>, Error>;

    /// Get the first user whose email is exactly `email`, or `None` if no such user exists.
    fn find_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    /// Create a new user with a fresh ID and a hashed copy of the supplied password.
    ///
    /// Returns [Error::DuplicateEmail] without changing the store if another
    /// user already has the email. The check and the insert happen atomically.
    fn create(&self, new_user: NewUser) -> Result<User, Error>;

    /// Check `raw_password` against the password of the user with `email`.
    ///
    /// Returns the user if the password matches, or `None` if there is no user
    /// with that email or the password is wrong.
    fn compare_password(&self, email: &str, raw_password: &str) -> Result<Option<User>, Error>;

    /// Apply `patch` to the user with the ID `id`, hashing a new password if one is given.
    ///
    /// Returns the updated user, or `None` without changing the store if no such user exists.
    fn update(&self, id: &UserID, patch: UserPatch) -> Result<Option<User>, Error>;

    /// Delete the user with the ID `id`.
    ///
    /// Returns the deleted user, or `None` if no such user exists.
    fn remove(&self, id: &UserID) -> Result<Option<User>, Error>;
}
