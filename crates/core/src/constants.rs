//! Shared constants for sample-crud.
//!
//! Centralizes pagination defaults and pool sizing used across crates.

/// Page number used when `page` is missing, unparseable, or below 1.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when `limit` is missing, unparseable, or below 1.
pub const DEFAULT_PAGE_LIMIT: u64 = 12;

/// Largest page size a caller may request (DoS protection).
pub const MAX_PAGE_LIMIT: u64 = 100;

/// MySQL connection pool: maximum connections.
pub const MYSQL_POOL_MAX_CONNECTIONS: u32 = 10;

/// MySQL connection pool: acquire timeout in seconds.
pub const MYSQL_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// MySQL connection pool: idle timeout in seconds.
pub const MYSQL_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// HTTP port used when `PORT` is not set.
pub const DEFAULT_HTTP_PORT: u16 = 8080;
