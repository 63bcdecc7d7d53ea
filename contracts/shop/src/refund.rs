//! Refund window policy.
//!
//! A purchase can be refunded for a fixed number of ledgers after it was
//! made. The boundary is inclusive: a refund exactly `REFUND_WINDOW_LEDGERS`
//! ledgers after the purchase is still allowed, one ledger later it is not.

/// Ledgers after purchase during which a refund is permitted.
pub const REFUND_WINDOW_LEDGERS: u32 = 100;

/// Whether the refund window has closed for a purchase made at
/// `purchase_ledger`, observed at `current_ledger`.
pub fn is_expired(purchase_ledger: u32, current_ledger: u32) -> bool {
    current_ledger.saturating_sub(purchase_ledger) > REFUND_WINDOW_LEDGERS
}
