use soroban_sdk::{contractevent, Address, String};

/// Event emitted when the shop is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub token: Address,
}

/// Event emitted when a new catalog slot is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductAddedEventData {
    #[topic]
    pub product_id: u32,
    pub name: String,
    pub quantity: u32,
    pub price: i128,
}

/// Event emitted when an insertion merges into an existing slot
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductRestockedEventData {
    #[topic]
    pub product_id: u32,
    pub added_quantity: u32,
    pub total_quantity: u32,
}

/// Event emitted once per product in a successful purchase batch
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductPurchasedEventData {
    #[topic]
    pub buyer: Address,
    pub product_id: u32,
    pub price: i128,
}

/// Event emitted when a purchase is refunded
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductRefundedEventData {
    #[topic]
    pub buyer: Address,
    pub product_id: u32,
    pub amount: i128,
}
