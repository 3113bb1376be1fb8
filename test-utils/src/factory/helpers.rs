//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique names,
/// documents and emails so records never collide within a test database.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds an 8-digit DNI that is unique per counter value.
pub fn unique_dni(id: u64) -> String {
    format!("{}", 30_000_000 + id % 60_000_000)
}

/// Placeholder stored in the password column of factory-created people.
///
/// Factories insert rows directly, so nothing is hashed; tests exercising password
/// hashing go through the repositories instead.
pub const PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$factory$factory";
