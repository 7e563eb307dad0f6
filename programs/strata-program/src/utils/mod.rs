pub use errors::*;

pub mod errors;

// PDA seeds
pub const STRATA_SEED: &str = "strata";
pub const STATE_SEED: &str = "state";
pub const AUTHORITY_SEED: &str = "authority";
pub const STABLE_MINT_SEED: &str = "stable_mint";
pub const LEV_MINT_SEED: &str = "lev_mint";

// Fixed precisions. LST and SOL amounts are 9-decimal, stablecoin
// amounts are 6-decimal, ratios and fees are basis points.
pub const SOL_PRECISION: u64 = 1_000_000_000;
pub const USD_PRECISION: u64 = 1_000_000;
pub const BPS_PRECISION: u64 = 10_000;

/// Collateral ratio reported when there is no liability at all.
pub const CR_SENTINEL_MAX: u64 = u64::MAX;

/// `min_cr_bps` may never be configured below 100%.
pub const MIN_CR_FLOOR_BPS: u64 = 10_000;

pub const STABLE_DECIMALS: u8 = 6;
pub const LEV_DECIMALS: u8 = 9;

// Fee engine bounds
pub const MAX_BASE_FEE_BPS: u64 = 500;
pub const FEE_MIN_MULTIPLIER_BPS: u64 = 10_000;
pub const FEE_MAX_MULTIPLIER_BPS: u64 = 40_000;
pub const UNCERTAINTY_MAX_BPS: u64 = 20_000;
/// Divisor turning the uncertainty index into a multiplier surcharge:
/// each 1 bps of index adds 10 bps of multiplier.
pub const UNCERTAINTY_K: u64 = 1_000;

// Base fees applied at initialization; tunable through `update_fees`.
pub const DEFAULT_STABLE_MINT_FEE_BPS: u64 = 30;
pub const DEFAULT_STABLE_REDEEM_FEE_BPS: u64 = 30;
pub const DEFAULT_LEV_MINT_FEE_BPS: u64 = 30;
pub const DEFAULT_LEV_REDEEM_FEE_BPS: u64 = 50;

// Freshness policy defaults
pub const MAX_ORACLE_STALENESS_SLOTS: u64 = 25;
pub const MAX_CONF_BPS: u64 = 200;
pub const MAX_LST_STALE_EPOCHS: u64 = 1;

// Dust floors, in the base units of the respective token
pub const MIN_LST_DEPOSIT: u64 = 1_000_000;
pub const MIN_STABLE_MINT: u64 = 1_000;
pub const MIN_LEV_MINT: u64 = 1_000;
pub const MIN_LST_OUT: u64 = 1_000;

/// Cap on the integer-division residue the vault is allowed to
/// accumulate in its own favor.
pub const MAX_ROUNDING_RESERVE_LAMPORTS: u64 = 100_000_000;
