//! Bundled technology rules.
//!
//! One module per technology, grouped by category. Each exposes `rule()`
//! returning the literal record; [`all`] lists them in registration order.

pub mod analytics;
pub mod db;
pub mod js;
pub mod language;
pub mod tool;

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::types::Rule;

pub fn all() -> Vec<Rule> {
    vec![
        analytics::amplitude::rule(),
        js::react::rule(),
        js::typescript::rule(),
        language::nodejs::rule(),
        language::rust::rule(),
        db::postgres::rule(),
        tool::docker::rule(),
        tool::selenium::rule(),
    ]
}

pub fn register_all(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.extend(all())
}
