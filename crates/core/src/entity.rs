//! Entity trait: records that keep their identity while their data changes.
//!
//! Carrier records are entities. Note that hosts may still hand a carrier a
//! brand-new identifier when it is edited; that is modelled as a new entity
//! replacing the old one, not as an identity change.

/// Entity marker + minimal interface.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
