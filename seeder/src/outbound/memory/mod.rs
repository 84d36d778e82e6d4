//! In-memory ledger adapter.
//!
//! Stands in for the ledger runtime during local runs and tests. It declares
//! the secure-goods model, resolves registry lookups against it, and enforces
//! the per-batch uniqueness, type and property checks a real registry applies. Batches
//! commit as they arrive; there is no transaction-wide rollback.

mod registry;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::ports::{LedgerContext, LedgerError, RegistryHandle, ResourceFactory};
use crate::domain::{AssetKind, DefaultResourceFactory, Namespaces, ParticipantKind, Resource};

pub use registry::{InMemoryRegistry, RegistryKind};

/// Ledger holding its registries in process memory.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use secure_goods_seeder::domain::{LoadRegistries, Namespaces, RegistrySeeder};
/// use secure_goods_seeder::outbound::memory::InMemoryLedger;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let ledger = Arc::new(InMemoryLedger::new(Namespaces::default()));
/// let seeder = RegistrySeeder::new(Arc::clone(&ledger), Namespaces::default());
/// let transaction = LoadRegistries::new(&mockable::DefaultClock);
///
/// tokio::runtime::Builder::new_current_thread()
///     .build()?
///     .block_on(seeder.load_registries(&transaction))?;
///
/// assert_eq!(ledger.snapshot()?.record_count(), 12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct InMemoryLedger {
    registries: BTreeMap<String, Arc<InMemoryRegistry>>,
}

impl InMemoryLedger {
    /// Create a ledger declaring every secure-goods participant and asset
    /// type under `namespaces`.
    #[must_use]
    pub fn new(namespaces: Namespaces) -> Self {
        let with_participants = ParticipantKind::ALL
            .into_iter()
            .fold(Self::empty(), |declared, kind| {
                declared.with_participant_registry(&namespaces, kind)
            });
        AssetKind::ALL
            .into_iter()
            .fold(with_participants, |declared, kind| {
                declared.with_asset_registry(&namespaces, kind)
            })
    }

    /// Create a ledger with no declared types.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            registries: BTreeMap::new(),
        }
    }

    /// Declare the participant registry for `kind`.
    #[must_use]
    pub fn with_participant_registry(
        self,
        namespaces: &Namespaces,
        kind: ParticipantKind,
    ) -> Self {
        self.with_registry(
            namespaces.participant_type(kind),
            RegistryKind::Participant,
            kind.properties(),
        )
    }

    /// Declare the asset registry for `kind`.
    #[must_use]
    pub fn with_asset_registry(self, namespaces: &Namespaces, kind: AssetKind) -> Self {
        self.with_registry(
            namespaces.asset_type(kind),
            RegistryKind::Asset,
            kind.properties(),
        )
    }

    fn with_registry(
        mut self,
        qualified_type: String,
        kind: RegistryKind,
        properties: &'static [&'static str],
    ) -> Self {
        self.registries.insert(
            qualified_type.clone(),
            Arc::new(InMemoryRegistry::new(qualified_type, kind, properties)),
        );
        self
    }

    /// Registry declared for `qualified_type`, if any.
    #[must_use]
    pub fn registry(&self, qualified_type: &str) -> Option<Arc<InMemoryRegistry>> {
        self.registries.get(qualified_type).cloned()
    }

    /// Copy every registry's records.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Transport`] when a registry lock is poisoned.
    pub fn snapshot(&self) -> Result<LedgerSnapshot, LedgerError> {
        let registries = self
            .registries
            .iter()
            .map(|(qualified_type, registry)| {
                registry
                    .records()
                    .map(|records| (qualified_type.clone(), records))
            })
            .collect::<Result<_, LedgerError>>()?;
        Ok(LedgerSnapshot { registries })
    }

    fn lookup(
        &self,
        qualified_type: &str,
        kind: RegistryKind,
    ) -> Result<Arc<dyn RegistryHandle>, LedgerError> {
        match self.registries.get(qualified_type) {
            Some(registry) if registry.kind() == kind => {
                let handle: Arc<InMemoryRegistry> = Arc::clone(registry);
                Ok(handle)
            }
            _ => Err(LedgerError::registry_not_found(qualified_type)),
        }
    }
}

#[async_trait]
impl LedgerContext for InMemoryLedger {
    async fn participant_registry(
        &self,
        qualified_type: &str,
    ) -> Result<Arc<dyn RegistryHandle>, LedgerError> {
        self.lookup(qualified_type, RegistryKind::Participant)
    }

    async fn asset_registry(
        &self,
        qualified_type: &str,
    ) -> Result<Arc<dyn RegistryHandle>, LedgerError> {
        self.lookup(qualified_type, RegistryKind::Asset)
    }

    fn factory(&self) -> Arc<dyn ResourceFactory> {
        Arc::new(DefaultResourceFactory)
    }
}

/// Point-in-time copy of a ledger's registries, keyed by qualified type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LedgerSnapshot {
    registries: BTreeMap<String, Vec<Resource>>,
}

impl LedgerSnapshot {
    /// Records held for `qualified_type`; empty when the type is undeclared.
    #[must_use]
    pub fn records(&self, qualified_type: &str) -> &[Resource] {
        self.registries
            .get(qualified_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Qualified types present in the snapshot.
    pub fn qualified_types(&self) -> impl Iterator<Item = &str> {
        self.registries.keys().map(String::as_str)
    }

    /// Total number of records across all registries.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.registries.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn namespaces() -> Namespaces {
        Namespaces::default()
    }

    #[rstest]
    fn new_declares_the_secure_goods_model(namespaces: Namespaces) {
        let ledger = InMemoryLedger::new(namespaces);
        let snapshot = ledger.snapshot().expect("snapshot");
        let types: Vec<_> = snapshot.qualified_types().collect();

        assert_eq!(
            types,
            [
                "com.makotogo.learn.composer.securegoods.asset.Item",
                "com.makotogo.learn.composer.securegoods.participant.Auditor",
                "com.makotogo.learn.composer.securegoods.participant.Buyer",
                "com.makotogo.learn.composer.securegoods.participant.Seller",
                "com.makotogo.learn.composer.securegoods.participant.Shipper",
            ]
        );
        assert_eq!(snapshot.record_count(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_type_is_not_found(namespaces: Namespaces) {
        let ledger = InMemoryLedger::new(namespaces);
        let Err(error) = ledger.participant_registry("ns.participant.Broker").await else {
            panic!("unknown type should not resolve");
        };

        assert_eq!(error, LedgerError::registry_not_found("ns.participant.Broker"));
    }

    #[rstest]
    #[tokio::test]
    async fn lookups_respect_registry_kind(namespaces: Namespaces) {
        let ledger = InMemoryLedger::new(namespaces.clone());
        let item_type = namespaces.asset_type(AssetKind::Item);
        let seller_type = namespaces.participant_type(ParticipantKind::Seller);

        assert!(ledger.asset_registry(&item_type).await.is_ok());
        assert!(ledger.participant_registry(&seller_type).await.is_ok());
        assert!(ledger.participant_registry(&item_type).await.is_err());
        assert!(ledger.asset_registry(&seller_type).await.is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn appended_records_appear_in_snapshot(namespaces: Namespaces) {
        let ledger = InMemoryLedger::new(namespaces.clone());
        let seller_type = namespaces.participant_type(ParticipantKind::Seller);
        let mut seller = ledger.factory().new_resource(
            namespaces.participant(),
            ParticipantKind::Seller.type_name(),
            "SELL001",
        );
        seller.set("name", "Selljestic");

        let Ok(registry) = ledger.participant_registry(&seller_type).await else {
            panic!("seller registry should resolve");
        };
        registry.add_all(vec![seller.clone()]).await.expect("append");

        let snapshot = ledger.snapshot().expect("snapshot");
        assert_eq!(snapshot.records(&seller_type), [seller]);
        assert!(snapshot.records("ns.undeclared").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn declared_model_rejects_malformed_records(namespaces: Namespaces) {
        let ledger = InMemoryLedger::new(namespaces.clone());
        let factory = ledger.factory();
        let nameless = factory.new_resource(
            namespaces.participant(),
            ParticipantKind::Seller.type_name(),
            "SELL001",
        );
        let mut skuless =
            factory.new_resource(namespaces.asset(), AssetKind::Item.type_name(), "WIDGET001");
        skuless.set("name", 3);

        let Ok(sellers) = ledger
            .participant_registry(&namespaces.participant_type(ParticipantKind::Seller))
            .await
        else {
            panic!("seller registry should resolve");
        };
        let Ok(items) = ledger
            .asset_registry(&namespaces.asset_type(AssetKind::Item))
            .await
        else {
            panic!("item registry should resolve");
        };

        assert!(matches!(
            sellers.add_all(vec![nameless]).await,
            Err(LedgerError::SchemaViolation { .. })
        ));
        assert!(matches!(
            items.add_all(vec![skuless]).await,
            Err(LedgerError::SchemaViolation { .. })
        ));
        assert_eq!(ledger.snapshot().expect("snapshot").record_count(), 0);
    }

    #[rstest]
    fn empty_ledger_declares_only_requested_registries(namespaces: Namespaces) {
        let ledger = InMemoryLedger::empty()
            .with_participant_registry(&namespaces, ParticipantKind::Seller);

        assert!(
            ledger
                .registry(&namespaces.participant_type(ParticipantKind::Seller))
                .is_some()
        );
        assert!(
            ledger
                .registry(&namespaces.participant_type(ParticipantKind::Buyer))
                .is_none()
        );
    }

    #[rstest]
    fn snapshot_serializes_registries_by_type(namespaces: Namespaces) {
        let ledger = InMemoryLedger::empty().with_asset_registry(&namespaces, AssetKind::Item);
        let json = serde_json::to_value(ledger.snapshot().expect("snapshot")).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({ "com.makotogo.learn.composer.securegoods.asset.Item": [] })
        );
    }
}
