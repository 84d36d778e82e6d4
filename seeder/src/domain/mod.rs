//! Domain types and services for seeding the secure-goods registries.
//!
//! The domain owns what gets seeded and in which order. Everything the
//! ledger host provides (registries, the resource factory) is reached through
//! the traits in [`ports`].

pub mod catalogue;
mod model;
pub mod ports;
mod registry_seeder;
mod resource;
mod transaction;

pub use model::{
    AssetKind, LOAD_REGISTRIES_TYPE, NS_ASSET, NS_BASE, NS_PARTICIPANT, Namespaces,
    ParticipantKind, qualify,
};
pub use registry_seeder::RegistrySeeder;
pub use resource::{DefaultResourceFactory, Resource};
pub use transaction::LoadRegistries;
