use std::fmt;

use bevy::prelude::*;
use bevy_log::{debug, warn};
use bevy_platform::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Index of a liquid inside the host's liquid lookup table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LiquidIndex(pub u8);

impl fmt::Display for LiquidIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidTemplate {
    pub id: u64,
    pub identifier: String,
    pub name: String,
}

/// Host lookup tables for liquids.
///
/// Templates are keyed by their identifier string. The index table maps the
/// compact per-world liquid index to a template id; resolving a template goes
/// through the inverse of that table.
#[derive(Resource, Debug, Default, Clone)]
pub struct LiquidRegistry {
    templates: HashMap<String, LiquidTemplate>,
    index_lookup: Vec<(LiquidIndex, u64)>,
}

impl LiquidRegistry {
    pub fn register_template(&mut self, template: LiquidTemplate) {
        debug!(
            "Registered liquid template {} ({})",
            template.identifier, template.id
        );
        self.templates.insert(template.identifier.clone(), template);
    }

    pub fn assign_index(&mut self, index: LiquidIndex, template_id: u64) {
        self.index_lookup.retain(|(idx, _)| *idx != index);
        self.index_lookup.push((index, template_id));
    }

    pub fn template(&self, identifier: &str) -> Option<&LiquidTemplate> {
        self.templates.get(identifier)
    }

    pub fn index_of(&self, template_id: u64) -> Option<LiquidIndex> {
        self.index_lookup
            .iter()
            .find(|(_, id)| *id == template_id)
            .map(|(idx, _)| *idx)
    }

    /// Resolves the lookup-table index of the template named `identifier`.
    ///
    /// Returns `None` while either the template or its index is not loaded yet.
    pub fn resolve(&self, identifier: &str) -> Option<LiquidIndex> {
        let Some(template) = self.template(identifier) else {
            warn!("Liquid template {} is not loaded", identifier);
            return None;
        };
        let index = self.index_of(template.id);
        if index.is_none() {
            warn!(
                "Liquid template {} has no index in the lookup table",
                identifier
            );
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> LiquidTemplate {
        LiquidTemplate {
            id: 42,
            identifier: "lt__base_water".into(),
            name: "Water".into(),
        }
    }

    #[test]
    fn resolve_goes_through_the_inverse_index_table() {
        let mut registry = LiquidRegistry::default();
        registry.register_template(water());
        registry.assign_index(LiquidIndex(0), 7);
        registry.assign_index(LiquidIndex(3), 42);

        assert_eq!(registry.resolve("lt__base_water"), Some(LiquidIndex(3)));
    }

    #[test]
    fn resolve_fails_until_both_tables_are_populated() {
        let mut registry = LiquidRegistry::default();
        assert_eq!(registry.resolve("lt__base_water"), None);

        registry.register_template(water());
        assert_eq!(registry.resolve("lt__base_water"), None);

        registry.assign_index(LiquidIndex(1), 42);
        assert_eq!(registry.resolve("lt__base_water"), Some(LiquidIndex(1)));
    }

    #[test]
    fn reassigning_an_index_replaces_the_previous_entry() {
        let mut registry = LiquidRegistry::default();
        registry.register_template(water());
        registry.assign_index(LiquidIndex(1), 42);
        registry.assign_index(LiquidIndex(1), 9);

        assert_eq!(registry.index_of(42), None);
        assert_eq!(registry.index_of(9), Some(LiquidIndex(1)));
    }
}
