//! Implements a user store that keeps every user in memory and mirrors them to a JSON file.
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Error, PasswordHash,
    stores::UserStore,
    user::{NewUser, User, UserID, UserPatch},
};

type UserMap = HashMap<UserID, User>;

/// A [UserStore] backed by a single JSON file.
///
/// The file holds one JSON object keyed by user ID. It is read once by
/// [JsonFileUserStore::load] and rewritten in full after every change.
/// Clones share the same in-memory users.
#[derive(Debug, Clone)]
pub struct JsonFileUserStore {
    path: PathBuf,
    hash_cost: u32,
    users: Arc<Mutex<UserMap>>,
}

impl JsonFileUserStore {
    /// Load the users saved at `path`.
    ///
    /// If the file cannot be read or parsed, a warning is logged and the store
    /// starts out empty. The file is not touched until the first change.
    ///
    /// `hash_cost` is the bcrypt cost used when hashing new passwords.
    pub fn load(path: impl AsRef<Path>, hash_cost: u32) -> Self {
        let path = path.as_ref().to_path_buf();

        let users = match read_users(&path) {
            Ok(users) => {
                tracing::info!("Loaded {} users from {}", users.len(), path.display());
                users
            }
            Err(error) => {
                tracing::warn!(
                    "Could not load users from {}, starting with an empty store: {error}",
                    path.display()
                );
                UserMap::new()
            }
        };

        Self {
            path,
            hash_cost,
            users: Arc::new(Mutex::new(users)),
        }
    }

    /// The path of the file the users are saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, UserMap>, Error> {
        self.users.lock().map_err(|error| {
            tracing::error!("could not acquire the user store lock: {error}");
            Error::StoreLockError
        })
    }

    /// Write all users to the store file, overwriting its previous contents.
    ///
    /// Failures are logged and otherwise ignored, the in-memory users stay
    /// authoritative until the next successful save.
    fn save(&self, users: &UserMap) {
        match write_users(&self.path, users) {
            Ok(()) => tracing::debug!("Saved {} users to {}", users.len(), self.path.display()),
            Err(error) => tracing::error!(
                "Could not save users to {}: {error}",
                self.path.display()
            ),
        }
    }
}

fn read_users(path: &Path) -> Result<UserMap, Error> {
    let text = fs::read_to_string(path)?;

    serde_json::from_str(&text).map_err(Error::from)
}

fn write_users(path: &Path, users: &UserMap) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let text = serde_json::to_string(users)?;
    fs::write(path, text)?;

    Ok(())
}

impl UserStore for JsonFileUserStore {
    fn find_all(&self) -> Result<Vec<User>, Error> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn find_one(&self, id: &UserID) -> Result<Option<User>, Error> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        Ok(self
            .lock()?
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    fn create(&self, new_user: NewUser) -> Result<User, Error> {
        let password = PasswordHash::new(&new_user.password, self.hash_cost)?;
        let user = User {
            id: UserID::generate(),
            username: new_user.username,
            email: new_user.email,
            password,
        };

        let mut users = self.lock()?;

        if users.values().any(|existing| existing.email == user.email) {
            return Err(Error::DuplicateEmail);
        }

        users.insert(user.id.clone(), user.clone());
        self.save(&users);

        Ok(user)
    }

    fn compare_password(&self, email: &str, raw_password: &str) -> Result<Option<User>, Error> {
        let Some(user) = self.find_by_email(email)? else {
            return Ok(None);
        };

        if user.password.verify(raw_password)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    fn update(&self, id: &UserID, patch: UserPatch) -> Result<Option<User>, Error> {
        // Hash before taking the lock.
        let new_password = patch
            .password
            .map(|raw_password| PasswordHash::new(&raw_password, self.hash_cost))
            .transpose()?;

        let mut users = self.lock()?;

        let Some(existing) = users.get(id) else {
            return Ok(None);
        };

        let password = new_password.unwrap_or_else(|| existing.password.clone());

        let updated = User {
            id: existing.id.clone(),
            username: patch.username.unwrap_or_else(|| existing.username.clone()),
            email: patch.email.unwrap_or_else(|| existing.email.clone()),
            password,
        };

        users.insert(id.clone(), updated.clone());
        self.save(&users);

        Ok(Some(updated))
    }

    fn remove(&self, id: &UserID) -> Result<Option<User>, Error> {
        let mut users = self.lock()?;

        let removed = users.remove(id);

        if removed.is_some() {
            self.save(&users);
        }

        Ok(removed)
    }
}
