use soroban_sdk::{Address, Env, String, Vec};

use crate::types::{
    Product, PurchaseStatus, ShopConfig, StorageKey, PERSISTENT_TTL_AMOUNT,
    PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INITIALIZATION STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

/// Mark contract as initialized
pub fn set_initialized(e: &Env) {
    e.storage().instance().set(&StorageKey::Initialized, &true);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Get shop configuration
pub fn get_config(e: &Env) -> Option<ShopConfig> {
    let key = StorageKey::Config;
    let config = e.storage().persistent().get::<_, ShopConfig>(&key);
    if config.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    config
}

/// Set shop configuration
pub fn set_config(e: &Env, config: &ShopConfig) {
    let key = StorageKey::Config;
    e.storage().persistent().set(&key, config);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// CATALOG INDEX STORAGE
// ============================================================================

/// Get the catalog index (next product id to assign).
/// The index starts at 1 and only advances when a new slot is created.
pub fn get_catalog_index(e: &Env) -> u32 {
    let key = StorageKey::CatalogIndex;
    let index = e.storage().persistent().get::<_, u32>(&key).unwrap_or(1);
    if index > 1 {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    index
}

/// Set the catalog index
pub fn set_catalog_index(e: &Env, index: u32) {
    let key = StorageKey::CatalogIndex;
    e.storage().persistent().set(&key, &index);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// PRODUCT STORAGE
// ============================================================================

/// Get a catalog slot by id
pub fn get_product(e: &Env, product_id: u32) -> Option<Product> {
    let key = StorageKey::Product(product_id);
    let product = e.storage().persistent().get::<_, Product>(&key);
    if product.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    product
}

/// Set a catalog slot
pub fn set_product(e: &Env, product: &Product) {
    let key = StorageKey::Product(product.id);
    e.storage().persistent().set(&key, product);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Look up a product id by name (merge-insertion key)
pub fn get_product_id_by_name(e: &Env, name: &String) -> Option<u32> {
    let key = StorageKey::ProductName(name.clone());
    let id = e.storage().persistent().get::<_, u32>(&key);
    if id.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    id
}

/// Record the name→id mapping for a new product
pub fn set_product_id_by_name(e: &Env, name: &String, product_id: u32) {
    let key = StorageKey::ProductName(name.clone());
    e.storage().persistent().set(&key, &product_id);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// PURCHASE STATUS STORAGE
// ============================================================================

/// Get the purchase record for a (buyer, product) pair
pub fn get_purchase(e: &Env, buyer: &Address, product_id: u32) -> Option<PurchaseStatus> {
    let key = StorageKey::Purchase(buyer.clone(), product_id);
    let status = e.storage().persistent().get::<_, PurchaseStatus>(&key);
    if status.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    status
}

/// Set the purchase record for a (buyer, product) pair
pub fn set_purchase(e: &Env, buyer: &Address, product_id: u32, status: &PurchaseStatus) {
    let key = StorageKey::Purchase(buyer.clone(), product_id);
    e.storage().persistent().set(&key, status);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// PRODUCT BUYERS STORAGE
// ============================================================================

/// Get the ordered buyer audit trail for a product
pub fn get_product_buyers(e: &Env, product_id: u32) -> Vec<Address> {
    let key = StorageKey::ProductBuyers(product_id);
    let buyers = e
        .storage()
        .persistent()
        .get::<_, Vec<Address>>(&key)
        .unwrap_or(Vec::new(e));
    if !buyers.is_empty() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    buyers
}

/// Append a buyer to a product's audit trail
pub fn add_product_buyer(e: &Env, product_id: u32, buyer: &Address) {
    let key = StorageKey::ProductBuyers(product_id);
    let mut buyers = get_product_buyers(e, product_id);
    buyers.push_back(buyer.clone());
    e.storage().persistent().set(&key, &buyers);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
