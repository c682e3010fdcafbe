// lib/src/config/config_constants.rs

/// Directory for on-disk engines when the config does not name one.
pub const DEFAULT_DATA_DIRECTORY: &str = "./dental_data";

/// Prefix added to every logical store key.
pub const DEFAULT_KEY_PREFIX: &str = "dental_";

pub const DEFAULT_SLED_CACHE_CAPACITY: u64 = 64 * 1024 * 1024;

/// bcrypt accepts costs in this range.
pub const MIN_PASSWORD_HASH_COST: u32 = 4;
pub const MAX_PASSWORD_HASH_COST: u32 = 31;

// Logical keys of the persisted layout.
pub const USERS_KEY: &str = "users";
pub const PATIENTS_KEY: &str = "patients";
pub const INCIDENTS_KEY: &str = "incidents";
pub const INITIALIZED_KEY: &str = "initialized";

/// Suffix of the key a corrupted collection is moved to before it reads as empty.
pub const CORRUPT_KEY_SUFFIX: &str = ".corrupt";

/// Value stored under the initialized flag once seeding has run.
pub const INITIALIZED_MARKER: &[u8] = b"true";
