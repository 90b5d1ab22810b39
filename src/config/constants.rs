//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Accepted range for `JWT_EXPIRATION_HOURS` (one hour to one year)
pub const JWT_EXPIRATION_HOURS_RANGE: std::ops::RangeInclusive<i64> = 1..=8760;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Placeholder signing secret used when `JWT_SECRET` is unset.
/// Not suitable for production.
pub const DEFAULT_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Argon2 memory cost in KiB
pub const ARGON2_MEMORY_KIB: u32 = 19_456;

/// Argon2 iteration count
pub const ARGON2_ITERATIONS: u32 = 2;

/// Argon2 degree of parallelism
pub const ARGON2_PARALLELISM: u32 = 1;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "postgres";
pub const DEFAULT_DB_NAME: &str = "postgres";
pub const DEFAULT_DB_SSLMODE: &str = "disable";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 6;
