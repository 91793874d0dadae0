//! In-memory equipment catalog.
//!
//! The catalog is built once at an explicit initialization point and then
//! shared read-only (usually behind a reference or `Arc`) with the loader and
//! the allocation engine. There is no process-wide registry.

use std::collections::HashMap;
use std::sync::Arc;

use super::equipment::{EquipmentKind, EquipmentOracle, EquipmentType};
use crate::config::UnitConfig;
use crate::error::{ConstructionError, ErrorSeverity};

/// Errors raised while registering descriptors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A canonical name or alias is already taken by another descriptor.
    #[error("equipment name '{0}' is already registered")]
    DuplicateName(String),

    /// Ammunition must declare how many shots make up one ton.
    #[error("ammunition '{0}' declares no shots per ton")]
    MissingShots(String),

    /// Canonical names must contain at least one visible character.
    #[error("equipment name must not be blank")]
    BlankName,
}

impl ConstructionError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => "CATALOG_DUPLICATE_NAME",
            Self::MissingShots(_) => "CATALOG_MISSING_SHOTS",
            Self::BlankName => "CATALOG_BLANK_NAME",
        }
    }
}

/// Name-indexed equipment registry.
#[derive(Clone, Debug)]
pub struct EquipmentCatalog {
    entries: Vec<Arc<EquipmentType>>,
    index: HashMap<String, usize>,
    heat_sink_cost: f64,
}

impl Default for EquipmentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl EquipmentCatalog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            heat_sink_cost: UnitConfig::DEFAULT_HEAT_SINK_COST,
        }
    }

    /// Builds a catalog from descriptors, rejecting the first invalid entry.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = EquipmentType>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.insert(definition)?;
        }
        Ok(catalog)
    }

    pub fn with_heat_sink_cost(mut self, cost: f64) -> Self {
        self.heat_sink_cost = cost;
        self
    }

    /// Registers a descriptor under its canonical name and aliases.
    ///
    /// Nothing is registered when any of the names collides.
    pub fn insert(&mut self, definition: EquipmentType) -> Result<Arc<EquipmentType>, CatalogError> {
        if definition.name.trim().is_empty() {
            return Err(CatalogError::BlankName);
        }
        if definition.kind == EquipmentKind::Ammunition && definition.shots_per_ton == 0 {
            return Err(CatalogError::MissingShots(definition.name));
        }
        let mut seen = Vec::new();
        for name in definition.lookup_names() {
            if self.index.contains_key(name) || seen.contains(&name) {
                return Err(CatalogError::DuplicateName(name.to_string()));
            }
            seen.push(name);
        }

        let slot = self.entries.len();
        for name in definition.lookup_names() {
            self.index.insert(name.to_string(), slot);
        }
        let shared = Arc::new(definition);
        self.entries.push(Arc::clone(&shared));
        Ok(shared)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EquipmentOracle for EquipmentCatalog {
    fn get(&self, name: &str) -> Option<Arc<EquipmentType>> {
        self.index.get(name).map(|&slot| Arc::clone(&self.entries[slot]))
    }

    fn heat_sink_cost(&self) -> f64 {
        self.heat_sink_cost
    }

    fn all_definitions(&self) -> Vec<Arc<EquipmentType>> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srm() -> EquipmentType {
        EquipmentType::weapon("Improved SRM 2", 1.0, 10000.0, 28.0).with_alias("CLImprovedSRM2")
    }

    #[test]
    fn resolves_canonical_name_and_alias_to_same_descriptor() {
        let catalog = EquipmentCatalog::from_definitions([srm()]).unwrap();

        let by_name = catalog.get("Improved SRM 2").unwrap();
        let by_alias = catalog.get("CLImprovedSRM2").unwrap();
        assert!(Arc::ptr_eq(&by_name, &by_alias));
        assert!(catalog.get("Improved SRM 4").is_none());
    }

    #[test]
    fn rejects_duplicate_alias_without_partial_registration() {
        let mut catalog = EquipmentCatalog::from_definitions([srm()]).unwrap();
        let clash = EquipmentType::weapon("SRM Clone", 1.0, 1.0, 1.0).with_alias("CLImprovedSRM2");

        let err = catalog.insert(clash).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("CLImprovedSRM2".into()));
        assert!(catalog.get("SRM Clone").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn rejects_ammunition_without_shots() {
        let bad = EquipmentType::ammunition("Empty Ammo", 1.0, 1.0, 1.0, 0);
        let err = EquipmentCatalog::from_definitions([bad]).unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_MISSING_SHOTS");
    }

    #[test]
    fn heat_sink_cost_defaults_and_overrides() {
        let catalog = EquipmentCatalog::new();
        assert_eq!(catalog.heat_sink_cost(), UnitConfig::DEFAULT_HEAT_SINK_COST);
        assert_eq!(catalog.with_heat_sink_cost(1500.0).heat_sink_cost(), 1500.0);
    }
}
