//! Provider-level constants

/// Default connection URL for the Redis lookup store
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";
