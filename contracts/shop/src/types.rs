use soroban_sdk::{contracttype, Address, Env, String};

/// Storage keys for the LimeShop contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Initialization flag
    Initialized,
    /// Shop configuration (admin and payment token)
    Config,
    /// Next product id to assign; starts at 1
    CatalogIndex,
    /// Catalog slot by product id
    Product(u32),
    /// Product id by product name (merge lookup)
    ProductName(String),
    /// Purchase status by (buyer, product id)
    Purchase(Address, u32),
    /// Ordered buyer audit trail by product id
    ProductBuyers(u32),
}

/// A catalog slot.
///
/// Slots are never deleted: a product whose quantity reaches zero keeps its
/// row, and ids below the catalog index that were never written read back as
/// empty placeholders (empty name, zero quantity and price). Callers listing
/// the catalog are expected to filter placeholders themselves.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    /// Unique product identifier, assigned from the catalog index
    pub id: u32,
    /// Product name; the identity key for merge insertion
    pub name: String,
    /// Units currently in stock
    pub quantity: u32,
    /// Unit price in the payment token's smallest denomination
    pub price: i128,
}

impl Product {
    /// Empty placeholder row for an id with no stored product.
    pub fn placeholder(e: &Env, id: u32) -> Product {
        Product {
            id,
            name: String::from_str(e, ""),
            quantity: 0,
            price: 0,
        }
    }
}

/// Input for catalog insertion.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub quantity: u32,
    pub price: i128,
}

/// Per-(buyer, product) purchase record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchaseStatus {
    /// Ledger sequence at which the purchase was made
    pub created_at_ledger: u32,
    /// Whether the buyer holds a purchase of this product
    pub is_bought: bool,
    /// Permanently true once refunded
    pub is_refunded: bool,
}

impl PurchaseStatus {
    /// Zeroed record returned for pairs with no purchase history.
    pub fn none() -> PurchaseStatus {
        PurchaseStatus {
            created_at_ledger: 0,
            is_bought: false,
            is_refunded: false,
        }
    }

    /// An unrefunded purchase that blocks buying the same product again.
    pub fn is_active(&self) -> bool {
        self.is_bought && !self.is_refunded
    }
}

/// Shop configuration, written once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShopConfig {
    /// Administrator allowed to mutate the catalog
    pub admin: Address,
    /// Token contract used for payments and refunds
    pub token: Address,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
