//! Authentication service layer.
//!
//! This module contains the business logic for credential handling: bcrypt
//! hashing and verification, the login check (lookup + verify), and account
//! registration (existence check + hash + persist).

pub mod login;
pub mod password;
pub mod register;
