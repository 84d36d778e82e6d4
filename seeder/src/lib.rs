//! Seed-data loader for the secure-goods ledger.
//!
//! Running the `LoadRegistries` transaction populates the participant
//! registries (sellers, buyers, shippers, auditors) and the item asset
//! registry with a small fixed catalogue. The ledger runtime is reached only
//! through the capability traits in [`domain::ports`], so the same seeder
//! runs against the bundled in-memory adapter or any host that implements
//! them.
//!
//! # Overview
//!
//! - [`domain::RegistrySeeder`] builds and appends the catalogue in order.
//! - [`domain::ports::LedgerContext`] is the injected host capability.
//! - [`outbound::memory::InMemoryLedger`] is a local ledger honouring the
//!   registry contracts.
//! - [`SeederSettings`] carries the namespace base and snapshot target.
//! - [`cli`] drives the `load-registries` command.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use secure_goods_seeder::domain::{AssetKind, LoadRegistries, Namespaces, RegistrySeeder};
//! use secure_goods_seeder::outbound::memory::InMemoryLedger;
//!
//! let namespaces = Namespaces::default();
//! let ledger = Arc::new(InMemoryLedger::new(namespaces.clone()));
//! let seeder = RegistrySeeder::new(Arc::clone(&ledger), namespaces.clone());
//! let transaction = LoadRegistries::new(&mockable::DefaultClock);
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .build()
//!     .expect("runtime");
//! runtime
//!     .block_on(seeder.load_registries(&transaction))
//!     .expect("fresh ledger seeds");
//!
//! let snapshot = ledger.snapshot().expect("snapshot");
//! let items = snapshot.records(&namespaces.asset_type(AssetKind::Item));
//! assert_eq!(items.len(), 5);
//! ```

pub mod cli;
mod config;
pub mod domain;
pub mod outbound;

pub use config::{SeederSettings, SettingsError};
