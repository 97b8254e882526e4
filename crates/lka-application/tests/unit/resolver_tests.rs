//! Tests for the lazy resolver

use lka_application::registry::LookupSpec;
use lka_application::services::LazyResolver;
use lka_domain::error::{Error, Result};
use lka_domain::ports::LookupStore;
use lka_domain::value_objects::LookupKey;
use lka_providers::cache::{LruLookupCache, NullLookupCache};
use lka_providers::store::MemoryLookupStore;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

fn resolver_over(
    store: Arc<MemoryLookupStore>,
    cached: bool,
) -> LazyResolver {
    if cached {
        LazyResolver::new(store, Arc::new(LruLookupCache::with_capacity(16)))
    } else {
        LazyResolver::new(store, Arc::new(NullLookupCache::new()))
    }
}

#[tokio::test]
async fn absent_id_resolves_null_with_zero_store_calls() {
    let store = Arc::new(MemoryLookupStore::new());
    let resolver = resolver_over(Arc::clone(&store), true);
    let spec = LookupSpec::single("name", "id").with_bucket("employees");

    let record = json!({});
    let resolved = resolver.resolve(&record, &spec).await.unwrap();
    assert_eq!(resolved.get("name"), Some(&Value::Null));
    assert_eq!(store.fetch_count(), 0);

    // An explicit null id is just as tolerant
    let record = json!({"id": null});
    let resolved = resolver.resolve(&record, &spec).await.unwrap();
    assert_eq!(resolved.get("name"), Some(&Value::Null));
    assert_eq!(store.fetch_count(), 0);
}

#[tokio::test]
async fn single_field_lookup_resolves_scalar_payload() {
    let store = Arc::new(MemoryLookupStore::with_entries([(
        "employees/1",
        "Employee Name",
    )]));
    let resolver = resolver_over(Arc::clone(&store), true);
    let spec = LookupSpec::single("name", "employee_id");

    let record = json!({"employee_id": 1});
    let resolved = resolver.resolve(&record, &spec).await.unwrap();

    assert_eq!(resolved.get("name"), Some(&json!("Employee Name")));
    assert_eq!(store.fetch_count(), 1);
}

#[tokio::test]
async fn enabled_cache_deduplicates_across_instances() {
    let store = Arc::new(MemoryLookupStore::with_entries([("ids/1", "Employee Name")]));
    let resolver = resolver_over(Arc::clone(&store), true);
    let spec = LookupSpec::single("name", "id");

    let first = json!({"id": 1});
    let second = json!({"id": 1});
    resolver.resolve(&first, &spec).await.unwrap();
    resolver.resolve(&second, &spec).await.unwrap();

    assert_eq!(store.fetch_count(), 1);
}

#[tokio::test]
async fn disabled_cache_fetches_on_every_access() {
    let store = Arc::new(MemoryLookupStore::with_entries([("ids/1", "Employee Name")]));
    let resolver = resolver_over(Arc::clone(&store), false);
    let spec = LookupSpec::single("name", "id");

    let record = json!({"id": 1});
    resolver.resolve(&record, &spec).await.unwrap();
    resolver.resolve(&record, &spec).await.unwrap();

    assert_eq!(store.fetch_count(), 2);
}

#[tokio::test]
async fn empty_store_response_is_cached_and_not_refetched() {
    let store = Arc::new(MemoryLookupStore::new());
    let resolver = resolver_over(Arc::clone(&store), true);
    let spec = LookupSpec::single("unavailable", "employee_id");

    let record = json!({"employee_id": 1});
    let resolved = resolver.resolve(&record, &spec).await.unwrap();
    assert_eq!(resolved.get("unavailable"), Some(&Value::Null));
    assert_eq!(store.fetch_count(), 1);

    let resolved = resolver.resolve(&record, &spec).await.unwrap();
    assert_eq!(resolved.get("unavailable"), Some(&Value::Null));
    assert_eq!(store.fetch_count(), 1);
}

#[tokio::test]
async fn multi_field_lookup_plucks_declared_fields_only() {
    let store = Arc::new(MemoryLookupStore::with_entries([(
        "ids/1",
        r#"{"name": "Rajini", "age": 16, "salary": 100}"#,
    )]));
    let resolver = resolver_over(Arc::clone(&store), true);
    let spec = LookupSpec::new(["name", "age"], "id").with_alias("name", "nome");

    let record = json!({"id": 1});
    let resolved = resolver.resolve(&record, &spec).await.unwrap();

    assert_eq!(resolved.get("nome"), Some(&json!("Rajini")));
    assert_eq!(resolved.get("age"), Some(&json!(16)));
    // The unaliased name never leaks out, and undeclared fields are ignored
    assert_eq!(resolved.get("name"), None);
    assert_eq!(resolved.get("salary"), None);
}

#[tokio::test]
async fn multi_field_lookup_fills_missing_declared_fields_with_null() {
    let store = Arc::new(MemoryLookupStore::with_entries([(
        "ids/1",
        r#"{"name": "Employee Name"}"#,
    )]));
    let resolver = resolver_over(Arc::clone(&store), true);
    let spec = LookupSpec::new(["name", "location"], "id");

    let record = json!({"id": 1});
    let resolved = resolver.resolve(&record, &spec).await.unwrap();

    assert_eq!(resolved.get("name"), Some(&json!("Employee Name")));
    assert_eq!(resolved.get("location"), Some(&Value::Null));
}

#[tokio::test]
async fn single_field_lookup_rejects_structured_payloads() {
    let store = Arc::new(MemoryLookupStore::with_entries([(
        "ids/1",
        r#"{"name": "Rajini", "age": 16}"#,
    )]));
    let resolver = resolver_over(Arc::clone(&store), true);
    let spec = LookupSpec::single("name", "id");

    let record = json!({"id": 1});
    let err = resolver.resolve(&record, &spec).await.unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[tokio::test]
async fn multi_field_lookup_rejects_scalar_payloads() {
    let store = Arc::new(MemoryLookupStore::with_entries([("ids/1", "Employee Name")]));
    let resolver = resolver_over(Arc::clone(&store), true);
    let spec = LookupSpec::new(["name", "location"], "id");

    let record = json!({"id": 1});
    let err = resolver.resolve(&record, &spec).await.unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

/// Store that fails while its fuse is armed, then delegates to an inner
/// memory store.
struct FlakyStore {
    inner: MemoryLookupStore,
    failing: AtomicBool,
}

#[async_trait::async_trait]
impl LookupStore for FlakyStore {
    async fn fetch_one(&self, key: &LookupKey) -> Result<Option<String>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::store("lookup store unavailable"));
        }
        self.inner.fetch_one(key).await
    }

    async fn fetch_many(&self, keys: &[LookupKey]) -> Result<Vec<Option<String>>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::store("lookup store unavailable"));
        }
        self.inner.fetch_many(keys).await
    }

    fn provider_name(&self) -> &str {
        "flaky"
    }
}

#[tokio::test]
async fn store_failures_propagate_and_do_not_poison_the_cache() {
    let store = Arc::new(FlakyStore {
        inner: MemoryLookupStore::with_entries([("employees/1", "Employee Name")]),
        failing: AtomicBool::new(true),
    });
    let resolver = LazyResolver::new(
        Arc::clone(&store) as Arc<dyn LookupStore>,
        Arc::new(LruLookupCache::with_capacity(16)),
    );
    let spec = LookupSpec::single("name", "employee_id");
    let record = json!({"employee_id": 1});

    let err = resolver.resolve(&record, &spec).await.unwrap_err();
    assert!(matches!(err, Error::Store { .. }));

    // The failure must not have been cached as an empty result
    store.failing.store(false, Ordering::SeqCst);
    let resolved = resolver.resolve(&record, &spec).await.unwrap();
    assert_eq!(resolved.get("name"), Some(&json!("Employee Name")));
}
