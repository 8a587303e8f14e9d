use sea_orm::ConnectionTrait;

use crate::{
    data::user::UserRepository,
    error::{register::RegisterError, Error},
    service::auth::password::hash_password,
};

/// Creates a new account from a validated registration form.
///
/// The email is checked for existence before anything is written; on conflict
/// nothing is persisted and [`RegisterError::EmailTaken`] is returned. The
/// password reaches the repository only as a bcrypt hash.
pub async fn register_service<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
) -> Result<entity::heimdall_user::Model, Error> {
    let repository = UserRepository::new(db);

    if repository.exists_by_email(email).await? {
        return Err(RegisterError::EmailTaken.into());
    }

    let password_hash = hash_password(password)?;

    let user = repository.create(email, &password_hash).await?;

    Ok(user)
}
