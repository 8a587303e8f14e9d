//! Authenticated-user session data.
//!
//! This module provides the type-safe wrapper for storing and retrieving the
//! authenticated user's database ID in the session. The ID is written on a
//! successful login and discarded when the session is destroyed on logout; a
//! session carries a user ID only when that user has authenticated through
//! the login flow.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

/// Session key for storing the authenticated user's ID.
///
/// Namespaced under "heimdall:" to avoid collisions with other session data.
pub const SESSION_USER_ID_KEY: &str = "heimdall:user:id";

/// Session wrapper for the authenticated user's ID.
///
/// The ID is stored as a string for serialization to the session store and
/// parsed back on retrieval.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session user id: {}", e))
                })
            })
            .transpose()
    }
}
