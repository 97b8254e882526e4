//! Tests for the deep injection engine

use lka_application::registry::InjectionSpec;
use lka_application::services::InjectionEngine;
use lka_domain::error::{Error, Result};
use lka_domain::ports::LookupStore;
use lka_domain::value_objects::LookupKey;
use lka_providers::store::MemoryLookupStore;
use serde_json::{Value, json};
use std::sync::Arc;

fn engine_over(store: Arc<MemoryLookupStore>) -> InjectionEngine {
    InjectionEngine::new(store)
}

async fn apply(
    engine: &InjectionEngine,
    mut document: Value,
    specs: &[InjectionSpec],
) -> Result<Value> {
    let specs: Vec<_> = specs.iter().cloned().map(Arc::new).collect();
    engine.apply(&mut document, &specs).await?;
    Ok(document)
}

#[tokio::test]
async fn injects_into_a_list_of_records() {
    let store = Arc::new(MemoryLookupStore::with_entries([
        ("items/1", "Idly"),
        ("items/2", "Pongal"),
    ]));
    let engine = engine_over(Arc::clone(&store));

    let document = json!({"table": {"menu": [{"item_id": 1}, {"item_id": 2}]}});
    let spec = InjectionSpec::new("metrics", "$.table.menu", "item_id", "item_name");

    let result = apply(&engine, document, &[spec]).await.unwrap();
    assert_eq!(
        result,
        json!({"table": {"menu": [
            {"item_id": 1, "item_name": "Idly"},
            {"item_id": 2, "item_name": "Pongal"},
        ]}})
    );
    // One batched fetch, not one per record
    assert_eq!(store.fetch_count(), 1);
}

#[tokio::test]
async fn injects_a_parallel_column_into_a_columnar_mapping() {
    let store = Arc::new(MemoryLookupStore::with_entries([
        ("employees/10", "emp 1"),
        ("employees/20", "emp 2"),
    ]));
    let engine = engine_over(Arc::clone(&store));

    let document = json!({"table": {"inner_table": {"employee_id": [10, 20]}}});
    let spec = InjectionSpec::new("metrics", "$.table.inner_table", "employee_id", "employee_name");

    let result = apply(&engine, document, &[spec]).await.unwrap();
    assert_eq!(
        result,
        json!({"table": {"inner_table": {
            "employee_id": [10, 20],
            "employee_name": ["emp 1", "emp 2"],
        }}})
    );
    assert_eq!(store.fetch_count(), 1);
}

#[tokio::test]
async fn direct_key_paths_address_root_children() {
    let store = Arc::new(MemoryLookupStore::with_entries([
        ("employees/1", "emp 1"),
        ("employees/2", "emp 2"),
    ]));
    let engine = engine_over(store);

    let document = json!({"table": {"employee_id": [1, 2]}});
    let spec = InjectionSpec::new("metrics", "table", "employee_id", "employee_name");

    let result = apply(&engine, document, &[spec]).await.unwrap();
    assert_eq!(
        result,
        json!({"table": {
            "employee_id": [1, 2],
            "employee_name": ["emp 1", "emp 2"],
        }})
    );
}

#[tokio::test]
async fn multiple_specs_run_in_order_against_the_same_node() {
    let store = Arc::new(MemoryLookupStore::with_entries([
        ("employees/15", "emp 15"),
        ("employees/16", "emp 16"),
        ("employers/13", "empr 13"),
        ("employers/14", "empr 14"),
    ]));
    let engine = engine_over(Arc::clone(&store));

    let document = json!({"table": {"database": {
        "employee_id": [15, 16],
        "employer_id": [13, 14],
    }}});
    let specs = [
        InjectionSpec::new("metrics", "$.table.database", "employee_id", "employee_name"),
        InjectionSpec::new("metrics", "$.table.database", "employer_id", "employer_name"),
    ];

    let result = apply(&engine, document, &specs).await.unwrap();
    assert_eq!(
        result,
        json!({"table": {"database": {
            "employee_id": [15, 16],
            "employer_id": [13, 14],
            "employee_name": ["emp 15", "emp 16"],
            "employer_name": ["empr 13", "empr 14"],
        }}})
    );
    // One batched fetch per spec
    assert_eq!(store.fetch_count(), 2);
}

#[tokio::test]
async fn empty_containers_are_identity_transforms() {
    let store = Arc::new(MemoryLookupStore::new());
    let engine = engine_over(Arc::clone(&store));

    let document = json!({"table": {"menu": []}});
    let spec = InjectionSpec::new("metrics", "$.table.menu", "item_id", "item_name");
    let result = apply(&engine, document, &[spec]).await.unwrap();
    assert_eq!(result, json!({"table": {"menu": []}}));

    let document = json!({
        "high_stock": {},
        "low_shelf_life": {},
        "in_elimination": {},
        "inactive_with_stock": {},
    });
    let specs = [
        InjectionSpec::new("empty", "high_stock", "sub_category_id", "sub_category"),
        InjectionSpec::new("empty", "$.low_shelf_life", "sub_category_id", "sub_category"),
        InjectionSpec::new("empty", "$.in_elimination", "sub_category_id", "sub_category"),
        InjectionSpec::new("empty", "$.inactive_with_stock", "sub_category_id", "sub_category"),
    ];
    let result = apply(&engine, document.clone(), &specs).await.unwrap();
    assert_eq!(result, document);

    assert_eq!(store.fetch_count(), 0);
}

#[tokio::test]
async fn records_without_the_id_field_are_left_untouched() {
    let store = Arc::new(MemoryLookupStore::with_entries([("items/1", "Idly")]));
    let engine = engine_over(Arc::clone(&store));

    let document = json!({"menu": [{"item_id": 1}, {"note": "no id here"}]});
    let spec = InjectionSpec::new("metrics", "menu", "item_id", "item_name");

    let result = apply(&engine, document, &[spec]).await.unwrap();
    assert_eq!(
        result,
        json!({"menu": [
            {"item_id": 1, "item_name": "Idly"},
            {"note": "no id here"},
        ]})
    );
    assert_eq!(store.fetch_count(), 1);
}

#[tokio::test]
async fn absent_batch_values_inject_null() {
    let store = Arc::new(MemoryLookupStore::with_entries([("items/1", "Idly")]));
    let engine = engine_over(store);

    let document = json!({"menu": [{"item_id": 1}, {"item_id": 404}]});
    let spec = InjectionSpec::new("metrics", "menu", "item_id", "item_name");

    let result = apply(&engine, document, &[spec]).await.unwrap();
    assert_eq!(
        result,
        json!({"menu": [
            {"item_id": 1, "item_name": "Idly"},
            {"item_id": 404, "item_name": null},
        ]})
    );
}

#[tokio::test]
async fn explicit_buckets_override_derivation() {
    let store = Arc::new(MemoryLookupStore::with_entries([("people/7", "emp 7")]));
    let engine = engine_over(store);

    let document = json!({"table": {"employee_id": [7]}});
    let spec = InjectionSpec::new("metrics", "table", "employee_id", "employee_name")
        .with_bucket("people");

    let result = apply(&engine, document, &[spec]).await.unwrap();
    assert_eq!(
        result,
        json!({"table": {"employee_id": [7], "employee_name": ["emp 7"]}})
    );
}

#[tokio::test]
async fn missing_path_nodes_are_malformed() {
    let engine = engine_over(Arc::new(MemoryLookupStore::new()));

    let document = json!({"table": {}});
    let spec = InjectionSpec::new("metrics", "$.table.menu", "item_id", "item_name");
    let err = apply(&engine, document, &[spec]).await.unwrap_err();
    assert!(matches!(err, Error::MalformedPath { .. }));
}

#[tokio::test]
async fn scalar_nodes_are_malformed() {
    let engine = engine_over(Arc::new(MemoryLookupStore::new()));

    let document = json!({"table": 42});
    let spec = InjectionSpec::new("metrics", "table", "item_id", "item_name");
    let err = apply(&engine, document, &[spec]).await.unwrap_err();
    assert!(matches!(err, Error::MalformedPath { .. }));
}

#[tokio::test]
async fn non_array_id_columns_are_malformed() {
    let engine = engine_over(Arc::new(MemoryLookupStore::new()));

    let document = json!({"table": {"employee_id": 10}});
    let spec = InjectionSpec::new("metrics", "table", "employee_id", "employee_name");
    let err = apply(&engine, document, &[spec]).await.unwrap_err();
    assert!(matches!(err, Error::MalformedPath { .. }));
}

#[tokio::test]
async fn bracket_predicates_surface_at_first_use() {
    let engine = engine_over(Arc::new(MemoryLookupStore::new()));

    let document = json!({"table": {"menu": [{"item_id": 5}]}});
    let spec = InjectionSpec::new(
        "metrics",
        "$.table.menu[?(@.item_id=5)]",
        "item_id",
        "item_name",
    );
    let err = apply(&engine, document, &[spec]).await.unwrap_err();
    assert!(matches!(err, Error::MalformedPath { .. }));
}

/// Store whose batch responses drop the last value.
struct TruncatingStore;

#[async_trait::async_trait]
impl LookupStore for TruncatingStore {
    async fn fetch_one(&self, _key: &LookupKey) -> Result<Option<String>> {
        Ok(None)
    }

    async fn fetch_many(&self, keys: &[LookupKey]) -> Result<Vec<Option<String>>> {
        Ok(vec![Some("only".to_string()); keys.len().saturating_sub(1)])
    }

    fn provider_name(&self) -> &str {
        "truncating"
    }
}

#[tokio::test]
async fn misaligned_batch_responses_are_store_errors() {
    let engine = InjectionEngine::new(Arc::new(TruncatingStore));

    let mut document = json!({"table": {"employee_id": [1, 2]}});
    let spec = Arc::new(InjectionSpec::new(
        "metrics",
        "table",
        "employee_id",
        "employee_name",
    ));
    let err = engine.apply(&mut document, &[spec]).await.unwrap_err();
    assert!(matches!(err, Error::Store { .. }));
}
