//! Contains the user store trait and its implementations.

mod json_file;
mod user;

pub use json_file::JsonFileUserStore;
pub use user::UserStore;
