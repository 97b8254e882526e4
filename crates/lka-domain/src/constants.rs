//! Domain layer constants
//!
//! Constants that are part of the lookup domain itself and are read by the
//! application layer. Infrastructure-specific constants (config filenames,
//! environment prefixes) live in `lka-infrastructure`.

// ============================================================================
// KEY DOMAIN CONSTANTS
// ============================================================================

/// Suffix stripped from an id field name when deriving its bucket
pub const ID_FIELD_SUFFIX: &str = "_id";

/// Separator between the bucket and the id in a rendered lookup key
pub const KEY_SEPARATOR: char = '/';

// ============================================================================
// CACHE DOMAIN CONSTANTS
// ============================================================================

/// Default number of entries the shared lookup cache may hold
pub const CACHE_DEFAULT_CAPACITY: usize = 5_000;
