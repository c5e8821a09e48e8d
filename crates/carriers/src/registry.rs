//! Carrier records (host-owned collaborator).
//!
//! The host persists carriers together with their zones, groups and
//! translations. This module only needs to create carriers from a definition,
//! delete them, and read back their rate configuration.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shiprate_core::{CarrierId, DomainError, DomainResult, Entity};
use shiprate_shipping::CarrierConfig;

/// What the module asks the host to create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierDefinition {
    /// Display name (not translated).
    pub name: String,
    /// Delivery delay shown to customers.
    #[serde(default)]
    pub delay: String,
    pub config: CarrierConfig,
}

/// Parse a JSON array of carrier definitions.
pub fn load_definitions(json: &str) -> DomainResult<Vec<CarrierDefinition>> {
    serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("carrier definitions: {e}")))
}

/// A carrier as stored by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct CarrierRecord {
    pub id: CarrierId,
    pub definition: CarrierDefinition,
    /// Name of the module that created the carrier.
    pub external_module: String,
    /// Hosts keep replaced carriers around for order history.
    pub deleted: bool,
}

impl Entity for CarrierRecord {
    type Id = CarrierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl CarrierRecord {
    pub fn config(&self) -> &CarrierConfig {
        &self.definition.config
    }

    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("carrier {0} not found")]
    NotFound(CarrierId),

    #[error("carrier registry unavailable: {0}")]
    Unavailable(String),

    #[error("lock poisoned")]
    Poisoned,
}

/// Host carrier persistence.
pub trait CarrierRegistry: Send + Sync {
    /// Create a carrier and return the identifier the host assigned.
    fn create(
        &self,
        definition: &CarrierDefinition,
        module_name: &str,
    ) -> Result<CarrierId, RegistryError>;

    /// Delete a carrier.
    fn delete(&self, id: CarrierId) -> Result<(), RegistryError>;

    /// Look up a carrier; `None` when unknown.
    fn get(&self, id: CarrierId) -> Result<Option<CarrierRecord>, RegistryError>;
}

impl<R> CarrierRegistry for Arc<R>
where
    R: CarrierRegistry + ?Sized,
{
    fn create(
        &self,
        definition: &CarrierDefinition,
        module_name: &str,
    ) -> Result<CarrierId, RegistryError> {
        (**self).create(definition, module_name)
    }

    fn delete(&self, id: CarrierId) -> Result<(), RegistryError> {
        (**self).delete(id)
    }

    fn get(&self, id: CarrierId) -> Result<Option<CarrierRecord>, RegistryError> {
        (**self).get(id)
    }
}

#[derive(Debug)]
struct RegistryState {
    next_id: i64,
    records: BTreeMap<CarrierId, CarrierRecord>,
}

/// In-memory carrier registry for tests/dev.
///
/// Assigns sequential identifiers starting at 1 and mimics host renumbering
/// through [`InMemoryCarrierRegistry::renumber`].
#[derive(Debug)]
pub struct InMemoryCarrierRegistry {
    state: RwLock<RegistryState>,
}

impl Default for InMemoryCarrierRegistry {
    fn default() -> Self {
        Self {
            state: RwLock::new(RegistryState {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryCarrierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a carrier with a copy under a fresh identifier, the way hosts
    /// do when a carrier is edited. The old record stays, flagged deleted.
    pub fn renumber(&self, old: CarrierId) -> Result<CarrierId, RegistryError> {
        let mut state = self.state.write().map_err(|_| RegistryError::Poisoned)?;

        let mut copy = match state.records.get_mut(&old) {
            Some(record) if record.is_active() => {
                record.deleted = true;
                record.clone()
            }
            _ => return Err(RegistryError::NotFound(old)),
        };

        let new = CarrierId::new(state.next_id);
        state.next_id += 1;
        copy.id = new;
        copy.deleted = false;
        state.records.insert(new, copy);
        Ok(new)
    }

    /// Active carriers, in identifier order.
    pub fn active(&self) -> Result<Vec<CarrierRecord>, RegistryError> {
        let state = self.state.read().map_err(|_| RegistryError::Poisoned)?;
        Ok(state
            .records
            .values()
            .filter(|r| r.is_active())
            .cloned()
            .collect())
    }
}

impl CarrierRegistry for InMemoryCarrierRegistry {
    fn create(
        &self,
        definition: &CarrierDefinition,
        module_name: &str,
    ) -> Result<CarrierId, RegistryError> {
        let mut state = self.state.write().map_err(|_| RegistryError::Poisoned)?;

        let id = CarrierId::new(state.next_id);
        state.next_id += 1;
        state.records.insert(
            id,
            CarrierRecord {
                id,
                definition: definition.clone(),
                external_module: module_name.to_string(),
                deleted: false,
            },
        );
        Ok(id)
    }

    fn delete(&self, id: CarrierId) -> Result<(), RegistryError> {
        let mut state = self.state.write().map_err(|_| RegistryError::Poisoned)?;
        state
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(RegistryError::NotFound(id))
    }

    fn get(&self, id: CarrierId) -> Result<Option<CarrierRecord>, RegistryError> {
        let state = self.state.read().map_err(|_| RegistryError::Poisoned)?;
        Ok(state.records.get(&id).cloned())
    }
}
