#![allow(missing_docs)]

use axum_test::TestServer;
use tempfile::TempDir;

use crate::{AppState, build_router, stores::JsonFileUserStore};

/// The lowest cost bcrypt accepts, so that tests do not spend their time hashing.
pub(crate) const TEST_HASH_COST: u32 = 4;

/// Create an empty user store saved in a temporary directory.
///
/// The directory is deleted when the returned [TempDir] is dropped, so keep it alive for the whole test.
#[track_caller]
pub(crate) fn get_test_store() -> (JsonFileUserStore, TempDir) {
    let dir = TempDir::new().expect("Could not create temporary directory");
    let store = JsonFileUserStore::load(dir.path().join("users.json"), TEST_HASH_COST);

    (store, dir)
}

/// Create a test server for the full app router backed by an empty user store.
#[track_caller]
pub(crate) fn get_test_server() -> (TestServer, TempDir) {
    let (store, dir) = get_test_store();
    let server = TestServer::new(build_router(AppState::new(store)));

    (server, dir)
}
