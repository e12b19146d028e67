//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/users/{user_id}', use [format_endpoint].

/// The route for checking that the server is up.
pub const HEALTH_CHECK: &str = "/health-check";
/// The route for listing all users.
pub const USERS: &str = "/users";
/// The route for getting, updating or deleting a single user.
pub const USER: &str = "/users/{user_id}";
/// The route for registering a new user.
pub const REGISTER: &str = "/users/register";
/// The route for logging in a user.
pub const LOG_IN: &str = "/users/login";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// # Examples
///
/// ```
/// use userbase_rs::endpoints::format_endpoint;
///
/// assert_eq!(format_endpoint("/users/{user_id}", "abc"), "/users/abc");
/// ```
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{}{}", &endpoint_path[..start], id, &endpoint_path[end + 1..])
        }
        _ => endpoint_path.to_owned(),
    }
}
