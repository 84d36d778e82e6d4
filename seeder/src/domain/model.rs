//! Namespaces and type names of the secure-goods ledger model.

macro_rules! ns_base {
    () => {
        "com.makotogo.learn.composer.securegoods"
    };
}

/// Base namespace shared by every secure-goods type.
pub const NS_BASE: &str = ns_base!();
/// Namespace holding asset types.
pub const NS_ASSET: &str = concat!(ns_base!(), ".asset");
/// Namespace holding participant types.
pub const NS_PARTICIPANT: &str = concat!(ns_base!(), ".participant");
/// Qualified type of the transaction that triggers seeding.
pub const LOAD_REGISTRIES_TYPE: &str = concat!(ns_base!(), ".transaction.LoadRegistries");

/// Join a namespace and a type name into a qualified type name.
///
/// # Examples
/// ```
/// use secure_goods_seeder::domain::{NS_PARTICIPANT, qualify};
///
/// assert_eq!(
///     qualify(NS_PARTICIPANT, "Seller"),
///     "com.makotogo.learn.composer.securegoods.participant.Seller"
/// );
/// ```
#[must_use]
pub fn qualify(namespace: &str, type_name: &str) -> String {
    format!("{namespace}.{type_name}")
}

/// The namespaces a seeding run targets.
///
/// Asset and participant namespaces always derive from the base, so a ledger
/// deployed under a different base keeps the same relative layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    base: String,
    asset: String,
    participant: String,
}

impl Namespaces {
    /// Derive the namespaces from `base`.
    pub fn new(base: impl Into<String>) -> Self {
        let root: String = base.into();
        Self {
            asset: format!("{root}.asset"),
            participant: format!("{root}.participant"),
            base: root,
        }
    }

    /// Base namespace.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Namespace holding asset types.
    #[must_use]
    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// Namespace holding participant types.
    #[must_use]
    pub fn participant(&self) -> &str {
        &self.participant
    }

    /// Qualified type name of a participant kind.
    #[must_use]
    pub fn participant_type(&self, kind: ParticipantKind) -> String {
        qualify(&self.participant, kind.type_name())
    }

    /// Qualified type name of an asset kind.
    #[must_use]
    pub fn asset_type(&self, kind: AssetKind) -> String {
        qualify(&self.asset, kind.type_name())
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Self::new(NS_BASE)
    }
}

/// Participant types held in participant registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantKind {
    /// Sells goods.
    Seller,
    /// Buys goods.
    Buyer,
    /// Moves goods between sellers and buyers.
    Shipper,
    /// Audits trades.
    Auditor,
}

impl ParticipantKind {
    /// Every participant kind, in seeding order.
    pub const ALL: [Self; 4] = [Self::Seller, Self::Buyer, Self::Shipper, Self::Auditor];

    /// Unqualified type name as declared in the ledger model.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Seller => "Seller",
            Self::Buyer => "Buyer",
            Self::Shipper => "Shipper",
            Self::Auditor => "Auditor",
        }
    }

    /// String properties every record of this type must carry.
    #[must_use]
    pub const fn properties(self) -> &'static [&'static str] {
        match self {
            Self::Seller | Self::Buyer | Self::Shipper | Self::Auditor => &["name"],
        }
    }
}

/// Asset types held in asset registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// A tradeable item.
    Item,
}

impl AssetKind {
    /// Every asset kind, in seeding order.
    pub const ALL: [Self; 1] = [Self::Item];

    /// Unqualified type name as declared in the ledger model.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Item => "Item",
        }
    }

    /// String properties every record of this type must carry.
    #[must_use]
    pub const fn properties(self) -> &'static [&'static str] {
        match self {
            Self::Item => &["sku", "description"],
        }
    }
}
