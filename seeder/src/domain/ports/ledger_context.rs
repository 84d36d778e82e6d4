//! Capability traits supplied by the ledger runtime.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Resource;

use super::LedgerError;

/// A registry of participants or assets of one qualified type.
///
/// Implementations own uniqueness and schema checks. Callers hand over an
/// ordered batch and either every record is accepted or the call fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryHandle: Send + Sync {
    /// Append every resource in `resources` to the registry.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DuplicateIdentifier`] when an identifier is
    /// already present (or repeated within the batch) and
    /// [`LedgerError::SchemaViolation`] when a resource does not belong to
    /// this registry.
    async fn add_all(&self, resources: Vec<Resource>) -> Result<(), LedgerError>;
}

/// Constructs empty typed resources for the caller to populate.
pub trait ResourceFactory: Send + Sync {
    /// Build a new resource with no fields set.
    fn new_resource(&self, namespace: &str, type_name: &str, identifier: &str) -> Resource;
}

/// Capabilities the host exposes to a running transaction.
///
/// Registry lookups take the fully qualified type name, for example
/// `com.makotogo.learn.composer.securegoods.participant.Seller`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerContext: Send + Sync {
    /// Look up the participant registry for `qualified_type`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::RegistryNotFound`] when the type is unknown.
    async fn participant_registry(
        &self,
        qualified_type: &str,
    ) -> Result<Arc<dyn RegistryHandle>, LedgerError>;

    /// Look up the asset registry for `qualified_type`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::RegistryNotFound`] when the type is unknown.
    async fn asset_registry(
        &self,
        qualified_type: &str,
    ) -> Result<Arc<dyn RegistryHandle>, LedgerError>;

    /// Return the factory used to construct new resources.
    fn factory(&self) -> Arc<dyn ResourceFactory>;
}
