//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations for the
//! rest of the application; nothing outside this module builds queries.

pub mod user;
