pub use checks::*;
pub use compute_mint_lev::*;
pub use compute_mint_stable::*;
pub use compute_redeem_lev::*;
pub use compute_redeem_stable::*;
pub use dynamic_fee_bps::*;
pub use execution_ctx::*;
pub use freshness::*;
pub use invariants::*;
pub use mul_div::*;
pub use pricing::*;
pub use uncertainty_bps::*;

pub mod checks;
pub mod compute_mint_lev;
pub mod compute_mint_stable;
pub mod compute_redeem_lev;
pub mod compute_redeem_stable;
pub mod dynamic_fee_bps;
pub mod execution_ctx;
pub mod freshness;
pub mod invariants;
pub mod mul_div;
pub mod pricing;
pub mod uncertainty_bps;
