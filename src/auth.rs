use crate::error::Error;
use crate::models::User;
use crate::state::AppState;
use crate::{db, hash, PooledConnection};
use actix_identity::Identity;

/// Hash the password and insert the new user. Duplicate usernames are
/// detected from the storage constraint violation, not a prior read, so
/// concurrent registrations cannot slip past the check.
pub fn register(
    state: &AppState,
    conn: &PooledConnection,
    username: &str,
    password: &str,
) -> Result<User, Error> {
    let password_hash = hash::hash_password(&state.rng, password);
    match db::insert_user(conn, username, &password_hash) {
        Err(Error::ConstraintViolation(_)) => Err(Error::DuplicateUsername),
        other => other,
    }
}

/// Verify credentials. An unknown username and a failed hash check are
/// indistinguishable to the caller.
pub fn login(conn: &PooledConnection, username: &str, password: &str) -> Result<User, Error> {
    let user = db::find_user_by_username(conn, username)?.ok_or(Error::InvalidCredentials)?;
    if hash::verify_password(&user.password, password) {
        Ok(user)
    } else {
        Err(Error::InvalidCredentials)
    }
}

/// Resolve the remembered session token to its principal. Tokens that do
/// not parse as a user id, or that name a user that no longer exists,
/// resolve to no principal rather than an error.
pub fn principal(conn: &PooledConnection, id: &Identity) -> Result<Option<User>, Error> {
    let token = match id.identity() {
        Some(token) => token,
        None => return Ok(None),
    };
    let user_id: i32 = match token.parse() {
        Ok(user_id) => user_id,
        Err(_) => return Ok(None),
    };
    db::find_user_by_id(conn, user_id)
}

/// Guard for routes that require a logged-in user.
pub fn require_auth(conn: &PooledConnection, id: &Identity) -> Result<User, Error> {
    principal(conn, id)?.ok_or(Error::Unauthenticated)
}
