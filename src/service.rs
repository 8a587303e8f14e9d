//! Service layer for business logic.
//!
//! Services coordinate between validation, repositories, and credential
//! hashing. Controllers call into this layer and translate its results into
//! HTTP responses.

pub mod auth;
