//! Typed, identified ledger records.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::model::qualify;
use super::ports::ResourceFactory;

/// A participant or asset record addressed by namespace, type and identifier.
///
/// Fields are set by name after construction. Once a resource is handed to a
/// registry it is owned by the ledger and is no longer mutated.
///
/// Serialises in the Composer resource shape: `$class` carries the qualified
/// type, `$identifier` the identifier, followed by the named fields.
///
/// # Examples
/// ```
/// use secure_goods_seeder::domain::Resource;
///
/// let mut seller = Resource::new("org.example.participant", "Seller", "SELL001");
/// seller.set("name", "Selljestic");
///
/// assert_eq!(seller.qualified_type(), "org.example.participant.Seller");
/// assert_eq!(seller.field_str("name"), Some("Selljestic"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    namespace: String,
    type_name: String,
    identifier: String,
    fields: BTreeMap<String, Value>,
}

impl Resource {
    /// Create a resource with no fields set.
    pub fn new(
        namespace: impl Into<String>,
        type_name: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
            identifier: identifier.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Namespace the resource's type is declared in.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Unqualified type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Identifier, unique within the resource's registry.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Namespace-qualified type name.
    #[must_use]
    pub fn qualified_type(&self) -> String {
        qualify(&self.namespace, &self.type_name)
    }

    /// Set the named field, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Value of the named field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Value of the named field when it holds a string.
    #[must_use]
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// All fields in name order.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}

impl Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 2))?;
        map.serialize_entry("$class", &self.qualified_type())?;
        map.serialize_entry("$identifier", &self.identifier)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Factory producing plain [`Resource`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResourceFactory;

impl ResourceFactory for DefaultResourceFactory {
    fn new_resource(&self, namespace: &str, type_name: &str, identifier: &str) -> Resource {
        Resource::new(namespace, type_name, identifier)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn factory_builds_empty_resource() {
        let resource = DefaultResourceFactory.new_resource("ns.asset", "Item", "WIDGET001");

        assert_eq!(resource.namespace(), "ns.asset");
        assert_eq!(resource.type_name(), "Item");
        assert_eq!(resource.identifier(), "WIDGET001");
        assert!(resource.fields().is_empty());
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut resource = Resource::new("ns.participant", "Buyer", "BUY001");
        resource.set("name", "Buytastic");
        resource.set("name", "Buycorp");

        assert_eq!(resource.field_str("name"), Some("Buycorp"));
        assert_eq!(resource.fields().len(), 1);
    }

    #[test]
    fn field_str_ignores_non_string_values() {
        let mut resource = Resource::new("ns.asset", "Item", "WIDGET001");
        resource.set("quantity", 3);

        assert_eq!(resource.field("quantity"), Some(&json!(3)));
        assert_eq!(resource.field_str("quantity"), None);
        assert_eq!(resource.field_str("missing"), None);
    }

    #[test]
    fn serializes_in_composer_shape() {
        let mut item = Resource::new("ns.asset", "Item", "WIDGET002");
        item.set("sku", "W002");
        item.set("description", "Widget number 2");

        let value = serde_json::to_value(&item).expect("serialize resource");
        assert_eq!(
            value,
            json!({
                "$class": "ns.asset.Item",
                "$identifier": "WIDGET002",
                "sku": "W002",
                "description": "Widget number 2",
            })
        );
    }
}
