use crate::utils::BPS_PRECISION;

/// Converts an oracle confidence interval into an uncertainty index:
/// `conf / price` expressed in basis points, capped at 10_000.
///
/// A wide interval relative to price means the quote is soft; the fee
/// engine charges risk-increasing operations extra for it.
///
/// # Example
/// price = $100.00 (100_000_000), conf = $0.15 (150_000) → 15 bps
pub fn uncertainty_index_bps(sol_usd_price: u64, confidence_usd: u64) -> u64 {
    if sol_usd_price == 0 || confidence_usd == 0 {
        return 0;
    }
    ((confidence_usd as u128 * BPS_PRECISION as u128) / sol_usd_price as u128)
        .min(BPS_PRECISION as u128) as u64
}
