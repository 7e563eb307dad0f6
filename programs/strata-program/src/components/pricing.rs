use crate::components::{mul_div_down, mul_div_up};
use crate::states::GlobalState;
use crate::utils::{StrataError, BPS_PRECISION, CR_SENTINEL_MAX, SOL_PRECISION};

/// Read-only balance-sheet view derived from the current snapshot.
/// The only source of truth consumed by the fee engine and the
/// mint/redeem handlers.
pub struct PricingView {
    /// SOL value of the vault's LST holdings, in lamports.
    pub tvl_sol: u64,
    /// SOL value of the outstanding stablecoin supply, rounded up.
    pub liability_sol: u64,
    /// `tvl - liability`, floored at zero.
    pub equity_sol: u64,
    /// `tvl / liability` in bps; `CR_SENTINEL_MAX` with no liability.
    pub cr_bps: u64,
    /// SOL value of one whole leveraged token, 9-decimal.
    pub lev_nav_sol: u64,
}

/// Derives the pricing view from `(total_lst, stable_supply,
/// lev_supply, sol_usd_price, lst_to_sol_rate)`. Pure, no mutation.
///
/// Liability rounds up so the accounted debt can only overstate;
/// with zero leveraged supply the NAV is defined as 1.0 SOL so the
/// first minter gets tokens 1:1 with the SOL value deposited.
pub fn pricing_view(state: &GlobalState) -> Result<PricingView, StrataError> {
    let tvl_sol = mul_div_down(state.total_lst_amount, state.lst_to_sol_rate, SOL_PRECISION)?;

    let liability_sol = if state.stable_supply == 0 {
        0
    } else {
        mul_div_up(state.stable_supply, SOL_PRECISION, state.sol_usd_price)?
    };

    let equity_sol = tvl_sol.saturating_sub(liability_sol);

    let cr_bps = if liability_sol == 0 {
        CR_SENTINEL_MAX
    } else {
        mul_div_down(tvl_sol, BPS_PRECISION, liability_sol)?
    };

    let lev_nav_sol = if state.lev_supply == 0 {
        SOL_PRECISION
    } else {
        mul_div_down(equity_sol, SOL_PRECISION, state.lev_supply)?
    };

    Ok(PricingView {
        tvl_sol,
        liability_sol,
        equity_sol,
        cr_bps,
        lev_nav_sol,
    })
}
