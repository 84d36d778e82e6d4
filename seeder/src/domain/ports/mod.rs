//! Domain ports describing the capabilities the ledger host provides.
//!
//! The seeder never talks to a concrete ledger. It asks a [`LedgerContext`]
//! for registries and a resource factory, and every failure the host reports
//! arrives as a [`LedgerError`] that the domain passes through untouched.

mod ledger_context;
mod macros;

pub(crate) use macros::define_port_error;

pub use ledger_context::{LedgerContext, RegistryHandle, ResourceFactory};

#[cfg(test)]
pub use ledger_context::{MockLedgerContext, MockRegistryHandle};

define_port_error! {
    /// Failures reported by the ledger host while seeding registries.
    pub enum LedgerError {
        /// The requested qualified type is not part of the ledger model.
        RegistryNotFound {
            /// Fully qualified type name that was requested.
            qualified_type: String,
        } => "registry not found for type {qualified_type}",
        /// A record with the same identifier already exists in the registry.
        DuplicateIdentifier {
            /// Fully qualified type name of the target registry.
            qualified_type: String,
            /// Identifier that collided.
            identifier: String,
        } => "duplicate identifier {identifier} in registry {qualified_type}",
        /// A record does not conform to the registry's model.
        SchemaViolation {
            /// Description of the violation.
            message: String,
        } => "schema violation: {message}",
        /// The host failed to service the request.
        Transport {
            /// Description of the runtime failure.
            message: String,
        } => "ledger runtime failure: {message}",
    }
}
