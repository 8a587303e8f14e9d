use sea_orm::ConnectionTrait;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    service::auth::password::verify_password,
};

/// Checks submitted credentials against the user store.
///
/// Returns the matching user on success. An unknown email and a wrong
/// password both collapse into [`AuthError::InvalidCredentials`] so callers
/// cannot distinguish the two cases.
pub async fn login_service<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
) -> Result<entity::heimdall_user::Model, Error> {
    let Some(user) = UserRepository::new(db).get_by_email(email).await? else {
        return Err(AuthError::InvalidCredentials.into());
    };

    if !verify_password(password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials.into());
    }

    Ok(user)
}
