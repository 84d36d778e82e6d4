//! Registry seeding orchestration.
//!
//! Builds the fixed secure-goods catalogue through the host's resource
//! factory and appends it to the participant and asset registries, one batch
//! per registry, strictly in order.

use std::sync::Arc;

use tracing::{Instrument, debug, info, info_span};

use super::catalogue::{self, AUDITORS, BUYERS, ParticipantSeed, SELLERS, SHIPPERS};
use super::model::{AssetKind, Namespaces, ParticipantKind};
use super::ports::{LedgerContext, LedgerError};
use super::transaction::LoadRegistries;

/// Service that loads the secure-goods registries.
#[derive(Clone)]
pub struct RegistrySeeder<C> {
    context: Arc<C>,
    namespaces: Namespaces,
}

impl<C> RegistrySeeder<C> {
    /// Create a seeder that writes through `context` under `namespaces`.
    pub const fn new(context: Arc<C>, namespaces: Namespaces) -> Self {
        Self {
            context,
            namespaces,
        }
    }
}

impl<C> RegistrySeeder<C>
where
    C: LedgerContext,
{
    /// Load every participant registry, then the asset registry.
    ///
    /// The call is not idempotent: running it against a ledger that already
    /// holds the catalogue fails on the first colliding identifier. Batches
    /// appended before a failure are left as they are; rolling them back is
    /// up to the host's transaction handling.
    ///
    /// # Errors
    ///
    /// Returns the first [`LedgerError`] the host reports, unmodified.
    pub async fn load_registries(&self, transaction: &LoadRegistries) -> Result<(), LedgerError> {
        let span = info_span!(
            "load_registries",
            transaction_id = %transaction.transaction_id(),
            transaction_type = transaction.qualified_type(),
        );
        async {
            self.load_participant_registries().await?;
            self.load_asset_registries().await?;
            info!("registries loaded");
            Ok::<(), LedgerError>(())
        }
        .instrument(span)
        .await
    }

    async fn load_participant_registries(&self) -> Result<(), LedgerError> {
        self.create_sellers().await?;
        self.create_buyers().await?;
        self.create_shippers().await?;
        self.create_auditors().await
    }

    async fn load_asset_registries(&self) -> Result<(), LedgerError> {
        self.create_items().await
    }

    async fn create_sellers(&self) -> Result<(), LedgerError> {
        self.create_participants(ParticipantKind::Seller, &SELLERS)
            .await
    }

    async fn create_buyers(&self) -> Result<(), LedgerError> {
        self.create_participants(ParticipantKind::Buyer, &BUYERS)
            .await
    }

    async fn create_shippers(&self) -> Result<(), LedgerError> {
        self.create_participants(ParticipantKind::Shipper, &SHIPPERS)
            .await
    }

    async fn create_auditors(&self) -> Result<(), LedgerError> {
        self.create_participants(ParticipantKind::Auditor, &AUDITORS)
            .await
    }

    async fn create_participants(
        &self,
        kind: ParticipantKind,
        seeds: &[ParticipantSeed],
    ) -> Result<(), LedgerError> {
        let qualified_type = self.namespaces.participant_type(kind);
        debug!(registry = %qualified_type, "fetching participant registry");
        let registry = self.context.participant_registry(&qualified_type).await?;

        let factory = self.context.factory();
        let participants: Vec<_> = seeds
            .iter()
            .map(|seed| {
                let mut participant = factory.new_resource(
                    self.namespaces.participant(),
                    kind.type_name(),
                    seed.identifier,
                );
                participant.set("name", seed.name);
                participant
            })
            .collect();

        let count = participants.len();
        registry.add_all(participants).await?;
        info!(registry = %qualified_type, count, "participant registry seeded");
        Ok(())
    }

    async fn create_items(&self) -> Result<(), LedgerError> {
        let kind = AssetKind::Item;
        let qualified_type = self.namespaces.asset_type(kind);
        debug!(registry = %qualified_type, "fetching asset registry");
        let registry = self.context.asset_registry(&qualified_type).await?;

        let factory = self.context.factory();
        let items: Vec<_> = catalogue::items()
            .map(|seed| {
                let mut item = factory.new_resource(
                    self.namespaces.asset(),
                    kind.type_name(),
                    &seed.identifier,
                );
                item.set("sku", seed.sku);
                item.set("description", seed.description);
                item
            })
            .collect();

        let count = items.len();
        registry.add_all(items).await?;
        info!(registry = %qualified_type, count, "asset registry seeded");
        Ok(())
    }
}
