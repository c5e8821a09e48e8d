//! Host-facing adapter.
//!
//! `CarrierModule` is what a host plugin shell calls into: provisioning and
//! teardown of the module's carriers, the carrier-renumbering hook, and the
//! two shipping-cost callbacks used at checkout. Everything host-specific
//! (hook registration, zones, groups, translations) stays on the host side.

use thiserror::Error;

use shiprate_core::{CarrierId, DomainError};
use shiprate_shipping::{RateResolver, ShippingQuote};

use crate::registry::{CarrierDefinition, CarrierRegistry, RegistryError};
use crate::settings::ModuleSettings;
use crate::store::{ConfigStore, StoreError};
use crate::tracker::CarrierIdTracker;

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub struct CarrierModule<S, R> {
    settings: ModuleSettings,
    tracker: CarrierIdTracker<S>,
    registry: R,
    resolver: RateResolver,
}

impl<S, R> CarrierModule<S, R>
where
    S: ConfigStore,
    R: CarrierRegistry,
{
    pub fn new(settings: ModuleSettings, store: S, registry: R) -> Self {
        let tracker = CarrierIdTracker::new(store, settings.carrier_ids_key.clone());
        Self {
            settings,
            tracker,
            registry,
            resolver: RateResolver::new(),
        }
    }

    pub fn settings(&self) -> &ModuleSettings {
        &self.settings
    }

    pub fn tracker(&self) -> &CarrierIdTracker<S> {
        &self.tracker
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Create the module's carriers and remember their identifiers.
    ///
    /// All definitions are validated before anything is created. If the
    /// registry fails partway, the carriers already created are still recorded
    /// so a later teardown removes them.
    pub fn provision(
        &self,
        definitions: &[CarrierDefinition],
    ) -> Result<Vec<CarrierId>, ModuleError> {
        for definition in definitions {
            definition.config.validate().map_err(|err| {
                DomainError::configuration(format!("carrier '{}': {err}", definition.name))
            })?;
        }

        let mut ids = Vec::with_capacity(definitions.len());
        for definition in definitions {
            match self.registry.create(definition, &self.settings.module_name) {
                Ok(id) => {
                    tracing::info!(carrier_id = %id, name = %definition.name, "carrier created");
                    ids.push(id);
                }
                Err(err) => {
                    tracing::warn!(
                        name = %definition.name,
                        created = ?ids,
                        error = %err,
                        "carrier creation failed, recording carriers created so far"
                    );
                    self.tracker.record(&ids)?;
                    return Err(err.into());
                }
            }
        }

        self.tracker.record(&ids)?;
        Ok(ids)
    }

    /// Delete every carrier this module created and drop the stored list.
    ///
    /// Carriers the host already removed are skipped. The list is only dropped
    /// once every carrier is gone; on a registry failure it stays in place and
    /// teardown can be retried.
    pub fn teardown(&self) -> Result<Vec<CarrierId>, ModuleError> {
        let ids = self.tracker.ids()?;

        for &id in &ids {
            match self.registry.delete(id) {
                Ok(()) => tracing::info!(carrier_id = %id, "carrier deleted"),
                Err(RegistryError::NotFound(_)) => {
                    tracing::warn!(carrier_id = %id, "carrier already gone, skipping")
                }
                Err(err) => return Err(err.into()),
            }
        }

        self.tracker.clear()?;
        Ok(ids)
    }

    /// Host hook: a carrier was replaced under a new identifier.
    pub fn on_carrier_updated(
        &self,
        old: CarrierId,
        new: CarrierId,
    ) -> Result<Vec<CarrierId>, ModuleError> {
        Ok(self.tracker.remap(old, new)?)
    }

    /// Whether `id` is one of this module's carriers.
    pub fn owns(&self, id: CarrierId) -> Result<bool, ModuleError> {
        Ok(self.tracker.contains(id)?)
    }

    /// Cost of shipping a package, on top of the host's upstream `base_cost`.
    pub fn package_shipping_cost(
        &self,
        carrier: CarrierId,
        measured_value: f64,
        base_cost: u64,
    ) -> Result<ShippingQuote, ModuleError> {
        let record = self
            .registry
            .get(carrier)?
            .filter(|r| r.is_active())
            .ok_or_else(DomainError::not_found)?;

        let quote = self
            .resolver
            .resolve(record.config(), measured_value, base_cost)?;
        tracing::debug!(carrier_id = %carrier, ?quote, "package shipping cost");
        Ok(quote)
    }

    /// Cost of shipping a whole order with no upstream cost.
    pub fn order_shipping_cost(
        &self,
        carrier: CarrierId,
        measured_value: f64,
    ) -> Result<ShippingQuote, ModuleError> {
        self.package_shipping_cost(carrier, measured_value, 0)
    }
}
