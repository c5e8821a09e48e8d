//! Carrier bookkeeping and host integration.
//!
//! The host platform owns carrier records and configuration storage; this crate
//! defines the seams it plugs into (`ConfigStore`, `CarrierRegistry`), tracks
//! which carriers this module created, and exposes the callbacks a host drives
//! through `CarrierModule`.

pub mod module;
pub mod registry;
pub mod settings;
pub mod store;
pub mod tracker;

pub use module::{CarrierModule, ModuleError};
pub use registry::{
    load_definitions, CarrierDefinition, CarrierRecord, CarrierRegistry, InMemoryCarrierRegistry,
    RegistryError,
};
pub use settings::ModuleSettings;
pub use store::{ConfigStore, InMemoryConfigStore, StoreError};
pub use tracker::{remap_ids, CarrierIdTracker};
