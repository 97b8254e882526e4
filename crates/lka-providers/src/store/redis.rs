//! Redis lookup store provider
//!
//! Remote lookup store backed by Redis, addressing entities as
//! `bucket/id` string keys. Uses a multiplexed connection for efficient
//! connection reuse; single lookups map to GET and batched lookups to a
//! single MGET.

use async_trait::async_trait;
use lka_domain::error::{Error, Result};
use lka_domain::ports::LookupStore;
use lka_domain::value_objects::LookupKey;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};

/// Redis-backed lookup store
#[derive(Clone)]
pub struct RedisLookupStore {
    client: Client,
}

impl RedisLookupStore {
    /// Create a store from a connection URL (e.g. "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::store_with_source("failed to create Redis client", e)
        })?;
        Ok(Self { client })
    }

    /// Create a store from a host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}"))
    }

    async fn get_connection(&self) -> Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::store_with_source("failed to get Redis connection", e))
    }
}

#[async_trait]
impl LookupStore for RedisLookupStore {
    async fn fetch_one(&self, key: &LookupKey) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;

        conn.get::<_, Option<String>>(key.render())
            .await
            .map_err(|e| Error::store_with_source(format!("Redis GET failed for '{key}'"), e))
    }

    async fn fetch_many(&self, keys: &[LookupKey]) -> Result<Vec<Option<String>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.get_connection().await?;

        let rendered: Vec<String> = keys.iter().map(LookupKey::render).collect();
        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(&rendered)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                Error::store_with_source(
                    format!("Redis MGET failed for {} keys", rendered.len()),
                    e,
                )
            })?;
        Ok(values)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisLookupStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisLookupStore").finish_non_exhaustive()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use crate::constants::REDIS_DEFAULT_URL;
use lka_application::ports::registry::{LOOKUP_STORES, StoreProviderConfig, StoreProviderEntry};
use std::sync::Arc;

/// Factory function for creating Redis lookup store instances.
fn redis_store_factory(
    config: &StoreProviderConfig,
) -> std::result::Result<Arc<dyn LookupStore>, String> {
    let url = config
        .url
        .clone()
        .unwrap_or_else(|| REDIS_DEFAULT_URL.to_string());

    let store = RedisLookupStore::new(&url)
        .map_err(|e| format!("Failed to create Redis store: {e}"))?;

    Ok(Arc::new(store))
}

#[linkme::distributed_slice(LOOKUP_STORES)]
static REDIS_STORE: StoreProviderEntry = StoreProviderEntry {
    name: "redis",
    description: "Redis-backed lookup store",
    factory: redis_store_factory,
};
