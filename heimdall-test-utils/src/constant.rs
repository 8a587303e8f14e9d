//! Shared constants for test fixtures.

/// Email used for the default user fixture.
pub static TEST_EMAIL: &str = "user@example.com";

/// Plaintext password used for the default user fixture. Not a real credential.
pub static TEST_PASSWORD: &str = "correct-battery";
