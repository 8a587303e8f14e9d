use crate::error::Error;

/// bcrypt work factor for newly stored passwords.
pub const HASH_COST: u32 = 10;

/// Hashes a plaintext password for storage.
///
/// bcrypt generates a random salt per call, so hashing the same password
/// twice yields different strings; comparison must go through
/// [`verify_password`], never string equality.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let hash = bcrypt::hash(password, HASH_COST)?;

    Ok(hash)
}

/// Verifies a plaintext password against a stored hash.
///
/// Returns `Ok(false)` on a mismatch; `Err` is reserved for malformed stored
/// hashes, which indicate corrupt data rather than a bad credential.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let matches = bcrypt::verify(password, password_hash)?;

    Ok(matches)
}
