//! The fixed records loaded into a fresh secure-goods ledger.

/// Identifier and display name of a seeded participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantSeed {
    /// Registry identifier.
    pub identifier: &'static str,
    /// Value of the `name` field.
    pub name: &'static str,
}

impl ParticipantSeed {
    const fn new(identifier: &'static str, name: &'static str) -> Self {
        Self { identifier, name }
    }
}

/// Sellers, in load order.
pub const SELLERS: [ParticipantSeed; 2] = [
    ParticipantSeed::new("SELL001", "Selljestic"),
    ParticipantSeed::new("SELL002", "Selltabulous"),
];

/// Buyers, in load order.
pub const BUYERS: [ParticipantSeed; 2] = [
    ParticipantSeed::new("BUY001", "Buytastic"),
    ParticipantSeed::new("BUY002", "Buycorp"),
];

/// Shippers, in load order.
pub const SHIPPERS: [ParticipantSeed; 2] = [
    ParticipantSeed::new("SHIP001", "Shipmagic"),
    ParticipantSeed::new("SHIP002", "Shipinc"),
];

/// Auditors, in load order.
pub const AUDITORS: [ParticipantSeed; 1] = [ParticipantSeed::new("AUD001", "AuditsRUs")];

/// Number of widgets seeded into the item registry.
pub const ITEM_COUNT: u32 = 5;

/// A seeded item with its `sku` and `description` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSeed {
    /// Registry identifier, `WIDGET00{n}`.
    pub identifier: String,
    /// Stock-keeping unit, `W00{n}`.
    pub sku: String,
    /// Human-readable description, `Widget number {n}`.
    pub description: String,
}

impl ItemSeed {
    /// Build the seed for widget number `number`.
    #[must_use]
    pub fn widget(number: u32) -> Self {
        Self {
            identifier: format!("WIDGET00{number}"),
            sku: format!("W00{number}"),
            description: format!("Widget number {number}"),
        }
    }
}

/// Widgets 1 through [`ITEM_COUNT`], in load order.
pub fn items() -> impl Iterator<Item = ItemSeed> {
    (1..=ITEM_COUNT).map(ItemSeed::widget)
}
