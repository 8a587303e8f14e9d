//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test
//! environments before execution. The builder pattern allows chaining
//! configuration methods together, with all operations queued and executed
//! during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, fixtures, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database
/// tables and user fixtures. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,

    // User fixtures to insert: (email, plaintext password)
    users: Vec<(String, String)>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            users: Vec::new(),
        }
    }

    /// Add the user table to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be
    /// executed during `build()`. Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user fixture during `build()`.
    ///
    /// The password is stored as a bcrypt hash, so logging in with the
    /// plaintext through the real verification path works. Implies
    /// `with_user_tables()`.
    pub fn with_user(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.include_user_tables = true;
        self.users.push((email.into(), password.into()));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::BcryptError)` - Fixture password hashing failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::HeimdallUser));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (email, password) in self.users {
            fixtures::user::insert_user(&setup.db, &email, &password).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
