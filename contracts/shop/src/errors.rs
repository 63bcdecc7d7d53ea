use soroban_sdk::contracterror;

/// Error codes for the LimeShop contract.
///
/// Quoted doc comments carry the human-readable failure message surfaced
/// to integrators for the same condition.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// "Ownable: caller is not the owner"
    NotOwner = 3,
    /// "Quantity should be greater than 0"
    InvalidQuantity = 4,
    /// "Product name is empty !"
    InvalidName = 5,
    /// "No products are provided !"
    EmptyBatch = 6,
    /// "Not enough ETH are provided !"
    InsufficientPayment = 7,
    /// "The client already bought that product !"
    AlreadyPurchased = 8,
    /// "There is no quantity available !"
    OutOfStock = 9,
    /// "You never bought that product !"
    NeverPurchased = 10,
    /// "You already refunded that product !"
    AlreadyRefunded = 11,
    /// "Refund period of 100 blocks is expired !"
    RefundWindowExpired = 12,
    /// Payment total overflow
    PaymentOverflow = 13,
}
