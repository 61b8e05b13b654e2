//! The catalog shipped with the binary.

use super::Catalog;
use std::sync::LazyLock;

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(BUILTIN_CATALOG_JSON).expect("embedded catalog is valid JSON")
});

pub(super) fn builtin_catalog() -> &'static Catalog {
    &BUILTIN
}
