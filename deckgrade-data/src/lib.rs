//! Reference collaborators for deck evaluation.
//!
//! The scoring core consumes synergy and ownership data through the
//! [`SynergyLookup`](deckgrade_core::SynergyLookup) and
//! [`OwnershipContext`](deckgrade_core::OwnershipContext) traits. This crate
//! provides in-memory implementations of both:
//!
//! - [`SynergyDatabase`]: an order-insensitive pair table, loadable from JSON.
//! - [`PlayerCollection`]: owned cards plus arena progress, backed by an
//!   explicit [`ArenaUnlockTable`].

#![forbid(unsafe_code)]

mod arena;
mod collection;
mod error;
mod synergy;

pub use arena::ArenaUnlockTable;
pub use collection::PlayerCollection;
pub use error::SynergyDatabaseError;
pub use synergy::{SynergyCategory, SynergyDatabase, SynergyEntry};
