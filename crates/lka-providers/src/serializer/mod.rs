//! Serialization Drivers
//!
//! Integrations that merge resolved attributes into emitted documents.
//!
//! | Driver | Description |
//! |--------|-------------|
//! | [`JsonDriver`] | Merges non-null resolved attributes into a JSON document |
//! | [`NoopDriver`] | Leaves documents untouched (integration disabled) |

pub mod json;

pub use json::{JsonDriver, NoopDriver};
