//! In-memory registry honouring the ledger's batch-append contract.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::Resource;
use crate::domain::ports::{LedgerError, RegistryHandle};

/// Whether a registry holds participants or assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryKind {
    /// Participant registry.
    Participant,
    /// Asset registry.
    Asset,
}

/// Registry storing the records of one qualified type in insertion order.
///
/// Records must carry exactly the declared string properties.
#[derive(Debug)]
pub struct InMemoryRegistry {
    qualified_type: String,
    kind: RegistryKind,
    properties: &'static [&'static str],
    records: Mutex<Vec<Resource>>,
}

impl InMemoryRegistry {
    /// Create an empty registry for `qualified_type` whose records declare
    /// `properties`.
    pub fn new(
        qualified_type: impl Into<String>,
        kind: RegistryKind,
        properties: &'static [&'static str],
    ) -> Self {
        Self {
            qualified_type: qualified_type.into(),
            kind,
            properties,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Qualified type held by this registry.
    #[must_use]
    pub fn qualified_type(&self) -> &str {
        &self.qualified_type
    }

    /// Kind of records held by this registry.
    #[must_use]
    pub const fn kind(&self) -> RegistryKind {
        self.kind
    }

    /// Copy of the stored records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Transport`] when the registry lock is poisoned.
    pub fn records(&self) -> Result<Vec<Resource>, LedgerError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Resource>>, LedgerError> {
        self.records.lock().map_err(|_| {
            LedgerError::transport(format!("registry {} lock poisoned", self.qualified_type))
        })
    }

    fn validate(&self, stored: &[Resource], batch: &[Resource]) -> Result<(), LedgerError> {
        let mut identifiers: HashSet<&str> = stored.iter().map(Resource::identifier).collect();
        for resource in batch {
            self.check_shape(resource)?;
            if !identifiers.insert(resource.identifier()) {
                return Err(LedgerError::duplicate_identifier(
                    &self.qualified_type,
                    resource.identifier(),
                ));
            }
        }
        Ok(())
    }

    fn check_shape(&self, resource: &Resource) -> Result<(), LedgerError> {
        let identifier = resource.identifier();
        let resource_type = resource.qualified_type();
        if resource_type != self.qualified_type {
            return Err(LedgerError::schema_violation(format!(
                "resource {identifier} of type {resource_type} does not belong in registry {}",
                self.qualified_type
            )));
        }
        for property in self.properties {
            match resource.field(property) {
                None => {
                    return Err(LedgerError::schema_violation(format!(
                        "resource {identifier} is missing required property {property}"
                    )));
                }
                Some(value) if !value.is_string() => {
                    return Err(LedgerError::schema_violation(format!(
                        "property {property} of resource {identifier} must be a string"
                    )));
                }
                Some(_) => {}
            }
        }
        if let Some(undeclared) = resource
            .fields()
            .keys()
            .find(|name| !self.properties.contains(&name.as_str()))
        {
            return Err(LedgerError::schema_violation(format!(
                "property {undeclared} of resource {identifier} is not declared by {resource_type}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl RegistryHandle for InMemoryRegistry {
    async fn add_all(&self, resources: Vec<Resource>) -> Result<(), LedgerError> {
        let mut stored = self.lock()?;
        if let Err(error) = self.validate(&stored, &resources) {
            warn!(
                registry = %self.qualified_type,
                batch = resources.len(),
                %error,
                "registry rejected batch"
            );
            return Err(error);
        }
        stored.extend(resources);
        Ok(())
    }
}
