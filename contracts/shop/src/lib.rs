#![no_std]

mod errors;
mod events;
mod refund;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env, Map, Vec};

use crate::errors::Error;
use crate::events::*;
use crate::storage::*;
use crate::types::*;

// ============================================================================
// Constants
// ============================================================================

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

// ============================================================================
// Contract
// ============================================================================

/// LimeShop on-chain inventory and order ledger.
///
/// A single administrator publishes a catalog of purchasable items; any
/// buyer can purchase one unit each of a batch of products atomically by
/// providing sufficient payment, and can reclaim a refund within a fixed
/// window of ledgers after the purchase.
#[contract]
pub struct LimeShop;

#[contractimpl]
impl LimeShop {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the shop.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to mutate the catalog; immutable afterwards
    /// * `token` - Token contract used for payments and refunds
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(e: &Env, admin: Address, token: Address) -> Result<(), Error> {
        admin.require_auth();

        if is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        let config = ShopConfig {
            admin: admin.clone(),
            token: token.clone(),
        };

        set_config(e, &config);
        set_catalog_index(e, 1);
        set_initialized(e);
        Self::extend_instance_ttl(e);

        InitializedEventData { admin, token }.publish(e);

        Ok(())
    }

    /// Get shop configuration
    pub fn get_config(e: &Env) -> Result<ShopConfig, Error> {
        get_config(e).ok_or(Error::NotInitialized)
    }

    // ========================================================================
    // PRODUCT CATALOG
    // ========================================================================

    /// Add a product to the catalog (admin only).
    ///
    /// An insertion whose name matches an existing product merges into that
    /// slot: the quantity is added, the stored price is kept, and the
    /// existing id is returned without advancing the catalog index.
    /// Otherwise a new slot is created at the current index.
    ///
    /// # Errors
    /// * `Error::NotOwner` - If `caller` is not the administrator
    /// * `Error::InvalidQuantity` - If `input.quantity` is zero
    /// * `Error::InvalidName` - If `input.name` is empty
    pub fn add_product(e: &Env, caller: Address, input: ProductInput) -> Result<u32, Error> {
        caller.require_auth();
        Self::require_owner(e, &caller)?;

        let id = Self::insert_product(e, &input)?;

        Self::extend_instance_ttl(e);
        Ok(id)
    }

    /// Add a batch of products to the catalog (admin only).
    ///
    /// Items are inserted in order with the same create-or-merge semantics
    /// as `add_product`. Any failing item aborts the whole batch with no
    /// effect.
    ///
    /// # Errors
    /// * `Error::EmptyBatch` - If `inputs` is empty
    /// * Plus every error `add_product` can return
    pub fn add_products(
        e: &Env,
        caller: Address,
        inputs: Vec<ProductInput>,
    ) -> Result<Vec<u32>, Error> {
        caller.require_auth();
        Self::require_owner(e, &caller)?;

        if inputs.is_empty() {
            return Err(Error::EmptyBatch);
        }

        let mut ids = Vec::new(e);
        for input in inputs.iter() {
            ids.push_back(Self::insert_product(e, &input)?);
        }

        Self::extend_instance_ttl(e);
        Ok(ids)
    }

    /// List every catalog slot from id 1 up to the current index, exclusive.
    ///
    /// The result may contain empty placeholder rows (empty name, zero
    /// quantity). Slots are never compacted; filtering placeholders and
    /// sold-out rows is the caller's responsibility.
    pub fn get_products(e: &Env) -> Vec<Product> {
        let index = get_catalog_index(e);

        let mut products = Vec::new(e);
        for id in 1..index {
            let product = get_product(e, id).unwrap_or_else(|| Product::placeholder(e, id));
            products.push_back(product);
        }
        products
    }

    /// Get the catalog slot for `product_id` verbatim.
    ///
    /// Unknown ids yield an empty placeholder row rather than an error.
    pub fn get_product_by_id(e: &Env, product_id: u32) -> Product {
        get_product(e, product_id).unwrap_or_else(|| Product::placeholder(e, product_id))
    }

    /// Current catalog index: the next product id to assign.
    pub fn index(e: &Env) -> u32 {
        get_catalog_index(e)
    }

    // ========================================================================
    // ORDER LEDGER
    // ========================================================================

    /// Purchase one unit of each listed product atomically.
    ///
    /// Products are validated in listed order: a product the buyer already
    /// holds unrefunded fails the batch, as does a product with no stock
    /// left (stock is tracked across the batch itself, so listing an id
    /// twice counts as a duplicate purchase). After validation the payment
    /// must cover the sum of unit prices; the full `payment` amount is then
    /// pulled into the contract and every listed product is committed:
    /// quantity decremented, purchase status recorded at the current ledger
    /// sequence, buyer appended to the product's audit trail.
    ///
    /// Returns the total charged against the payment.
    ///
    /// # Errors
    /// * `Error::AlreadyPurchased` - Active unrefunded purchase for an id
    /// * `Error::OutOfStock` - An id has no quantity available
    /// * `Error::InsufficientPayment` - `payment` below the required total
    pub fn buy_products(
        e: &Env,
        buyer: Address,
        ids: Vec<u32>,
        payment: i128,
    ) -> Result<i128, Error> {
        buyer.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        let mut total: i128 = 0;
        let mut staged: Map<u32, Product> = Map::new(e);
        let mut line_items: Vec<(u32, i128)> = Vec::new(e);

        // Validation pass. Staged quantities make duplicate ids within the
        // batch observable before anything is written.
        for id in ids.iter() {
            if staged.contains_key(id) {
                return Err(Error::AlreadyPurchased);
            }
            if let Some(status) = get_purchase(e, &buyer, id) {
                if status.is_active() {
                    return Err(Error::AlreadyPurchased);
                }
            }

            let mut product = get_product(e, id).unwrap_or_else(|| Product::placeholder(e, id));
            if product.quantity == 0 {
                return Err(Error::OutOfStock);
            }

            total = total
                .checked_add(product.price)
                .ok_or(Error::PaymentOverflow)?;

            product.quantity -= 1;
            line_items.push_back((id, product.price));
            staged.set(id, product);
        }

        if payment < total {
            return Err(Error::InsufficientPayment);
        }

        // The contract captures the whole payment, not just the total.
        if payment > 0 {
            let token_client = token::Client::new(e, &config.token);
            token_client.transfer(&buyer, &e.current_contract_address(), &payment);
        }

        // Commit pass.
        for (_, product) in staged.iter() {
            set_product(e, &product);
        }

        let sequence = e.ledger().sequence();
        for (id, price) in line_items.iter() {
            let status = PurchaseStatus {
                created_at_ledger: sequence,
                is_bought: true,
                is_refunded: false,
            };
            set_purchase(e, &buyer, id, &status);
            add_product_buyer(e, id, &buyer);

            ProductPurchasedEventData {
                buyer: buyer.clone(),
                product_id: id,
                price,
            }
            .publish(e);
        }

        Self::extend_instance_ttl(e);
        Ok(total)
    }

    /// Refund the caller's purchase of `product_id`.
    ///
    /// Allowed while at most `refund::REFUND_WINDOW_LEDGERS` ledgers have
    /// elapsed since the purchase. The refund flag and the restored
    /// quantity are committed to storage before the token transfer back to
    /// the buyer; the transfer is always the last effect.
    ///
    /// # Errors
    /// * `Error::NeverPurchased` - No purchase record for the caller
    /// * `Error::AlreadyRefunded` - Purchase was already refunded
    /// * `Error::RefundWindowExpired` - Purchase is older than the window
    pub fn refund_product(e: &Env, buyer: Address, product_id: u32) -> Result<(), Error> {
        buyer.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        let mut status = get_purchase(e, &buyer, product_id).ok_or(Error::NeverPurchased)?;
        if !status.is_bought {
            return Err(Error::NeverPurchased);
        }
        if status.is_refunded {
            return Err(Error::AlreadyRefunded);
        }
        if refund::is_expired(status.created_at_ledger, e.ledger().sequence()) {
            return Err(Error::RefundWindowExpired);
        }

        let mut product = get_product(e, product_id).ok_or(Error::NeverPurchased)?;

        status.is_refunded = true;
        set_purchase(e, &buyer, product_id, &status);

        product.quantity += 1;
        set_product(e, &product);

        // State fully committed; the outbound transfer must come last.
        let token_client = token::Client::new(e, &config.token);
        token_client.transfer(&e.current_contract_address(), &buyer, &product.price);

        ProductRefundedEventData {
            buyer,
            product_id,
            amount: product.price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Ordered audit trail of buyers for a product.
    ///
    /// One entry per successful purchase event, insertion order preserved,
    /// duplicates retained (a buyer who refunds and purchases again appears
    /// twice).
    pub fn get_product_buyers(e: &Env, product_id: u32) -> Vec<Address> {
        get_product_buyers(e, product_id)
    }

    /// Purchase record for a (buyer, product) pair.
    ///
    /// Pairs with no history yield a zeroed record, mirroring mapping
    /// defaults.
    pub fn client_purchase(e: &Env, buyer: Address, product_id: u32) -> PurchaseStatus {
        get_purchase(e, &buyer, product_id).unwrap_or_else(PurchaseStatus::none)
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Admin equality guard for catalog mutation.
    fn require_owner(e: &Env, caller: &Address) -> Result<(), Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        if *caller != config.admin {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    /// Create-or-merge insertion shared by the single and batch entrypoints.
    fn insert_product(e: &Env, input: &ProductInput) -> Result<u32, Error> {
        if input.quantity < 1 {
            return Err(Error::InvalidQuantity);
        }
        if input.name.is_empty() {
            return Err(Error::InvalidName);
        }

        if let Some(existing_id) = get_product_id_by_name(e, &input.name) {
            if let Some(mut product) = get_product(e, existing_id) {
                product.quantity = product
                    .quantity
                    .checked_add(input.quantity)
                    .ok_or(Error::InvalidQuantity)?;
                set_product(e, &product);

                ProductRestockedEventData {
                    product_id: existing_id,
                    added_quantity: input.quantity,
                    total_quantity: product.quantity,
                }
                .publish(e);

                return Ok(existing_id);
            }
        }

        let id = get_catalog_index(e);
        let product = Product {
            id,
            name: input.name.clone(),
            quantity: input.quantity,
            price: input.price,
        };

        set_product(e, &product);
        set_product_id_by_name(e, &input.name, id);
        set_catalog_index(e, id + 1);

        ProductAddedEventData {
            product_id: id,
            name: input.name.clone(),
            quantity: input.quantity,
            price: input.price,
        }
        .publish(e);

        Ok(id)
    }

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}
