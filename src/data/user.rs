use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user from an email and a password hash
    ///
    /// The caller is responsible for hashing; this method never sees a
    /// plaintext password.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<entity::heimdall_user::Model, DbErr> {
        let user = entity::heimdall_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by exact email match
    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::heimdall_user::Model>, DbErr> {
        entity::prelude::HeimdallUser::find()
            .filter(entity::heimdall_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether a user with the given email exists
    ///
    /// Issues a count query rather than fetching the row.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::HeimdallUser::find()
            .filter(entity::heimdall_user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
