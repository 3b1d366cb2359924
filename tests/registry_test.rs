//! Integration test for the compile-time registration tables.
//!
//! Run with: `cargo test --test registry_test`

use std::collections::HashSet;

use sea_orm::{DatabaseBackend, MockDatabase};

use showfolio_backend::registry::{Registry, Repositories};

#[test]
fn every_entity_has_exactly_one_binding() {
    let bindings = Repositories::bindings();

    let entities: Vec<&str> = bindings.iter().map(|b| b.entity).collect();
    assert_eq!(
        entities,
        vec![
            "portfolio",
            "project",
            "social_media_link",
            "portfolio_link",
            "portfolio_view",
            "portfolio_download",
        ]
    );

    let keyed: HashSet<(&str, &str)> = bindings.iter().map(|b| (b.entity, b.id_type)).collect();
    assert_eq!(keyed.len(), bindings.len(), "duplicate (entity, id) binding");
}

#[test]
fn binding_id_types_come_from_the_primary_key() {
    for binding in Repositories::bindings() {
        assert!(
            binding.id_type.ends_with("Uuid"),
            "{} has unexpected id type {}",
            binding.entity,
            binding.id_type
        );
    }
}

#[tokio::test]
async fn registry_wires_every_declared_service() {
    // Constructing the registry is the registration pass; with explicit
    // wiring a missing service cannot slip through silently.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let _registry = Registry::new(db);

    let names = Registry::services();
    assert_eq!(names, &["PortfolioService", "ProjectService"]);
}
