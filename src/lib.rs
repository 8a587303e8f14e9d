//! Heimdall server application core modules.
//!
//! This crate contains all server-side functionality for the Heimdall
//! authentication service: HTTP routing, form validation, credential hashing
//! and verification, session management, and database operations. It provides
//! the complete backend for registering accounts, logging in and out, and
//! keeping the authenticated user's identity in the session.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod validate;
pub mod view;
