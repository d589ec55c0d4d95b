// ABOUTME: Integration tests for reference catalog loading
// ABOUTME: Covers file loading, missing files, invalid entries, and built-in fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealscan::catalog_loader::{builtin_catalog, load_catalog, load_catalog_file};
use mealscan::config::CatalogPaths;
use mealscan::errors::ErrorCode;
use mealscan::models::CatalogKind;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_loads_catalog_file() {
    let file = write_catalog(
        r#"[
            {"name": "순두부찌개", "unitWeight": 500, "nutrition": {"calories": 350, "protein": 20, "fat": 18, "carbs": 25}},
            {"name": "잡채", "referenceAmount": 200, "nutrition": {"calories": 300, "protein": 6, "fat": 10, "carbs": 45}}
        ]"#,
    );

    let entries = load_catalog_file(file.path(), CatalogKind::Dish).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "순두부찌개");
    assert!((entries[1].reference_amount - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_file_yields_empty_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let entries = load_catalog_file(&path, CatalogKind::Ingredient).unwrap();

    assert!(entries.is_empty());
}

#[test]
fn test_invalid_entry_rejected() {
    let file = write_catalog(
        r#"[{"name": "물냉면", "unitWeight": 0, "nutrition": {"calories": 550, "protein": 18, "fat": 8, "carbs": 100}}]"#,
    );

    let err = load_catalog_file(file.path(), CatalogKind::Dish).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert_eq!(err.context.resource_id.as_deref(), Some("물냉면"));
}

#[test]
fn test_malformed_json_rejected() {
    let file = write_catalog("[{\"name\": ");

    let err = load_catalog_file(file.path(), CatalogKind::Dish).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_unset_paths_use_builtin_tables() {
    let builtin = builtin_catalog().unwrap();
    let file = write_catalog(
        r#"[{"name": "두부", "unitWeight": 100, "nutrition": {"calories": 76, "protein": 8, "fat": 4.8, "carbs": 1.9}}]"#,
    );

    let catalog = load_catalog(&CatalogPaths {
        dishes: None,
        ingredients: Some(file.path().to_path_buf()),
    })
    .unwrap();

    assert_eq!(catalog.dishes(), builtin.dishes());
    assert_eq!(catalog.ingredients().len(), 1);
}

#[test]
fn test_builtin_dish_densities() {
    let catalog = builtin_catalog().unwrap();
    let stew = catalog
        .dishes()
        .iter()
        .find(|entry| entry.name == "김치찌개")
        .unwrap();

    let density = stew.density().unwrap();
    assert!((density.calories - 120.0).abs() < 1e-9);
}
