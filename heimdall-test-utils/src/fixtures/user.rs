//! User fixture insertion helpers.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Insert a user row with a bcrypt hash of `password`.
///
/// Hashes at `bcrypt::MIN_COST` to keep fixture setup fast; verification does
/// not care which cost produced the hash.
pub async fn insert_user(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<entity::heimdall_user::Model, TestError> {
    let password_hash = bcrypt::hash(password, bcrypt::MIN_COST)?;

    let user = entity::heimdall_user::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        password_hash: ActiveValue::Set(password_hash),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}
