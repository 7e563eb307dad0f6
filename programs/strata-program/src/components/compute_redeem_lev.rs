use crate::components::{dynamic_fee_bps, mul_div_down, mul_div_up, FeeDirection, PricingView};
use crate::states::GlobalState;
use crate::utils::{
    StrataError, BPS_PRECISION, CR_SENTINEL_MAX, MIN_LST_OUT, SOL_PRECISION,
};

pub struct RedeemLevResult {
    pub fee_bps: u64,
    /// Equity value released, lamports.
    pub sol_out: u64,
    /// LST leaving the vault in total (user payout plus fee).
    pub lst_out_gross: u64,
    pub fee_lst: u64,
    pub user_lst: u64,
    pub cr_post_bps: u64,
    /// Lamports of equity released but not paid out due to flooring.
    pub reserve_delta_lamports: u64,
}

/// Arithmetic for redeeming the leveraged token for LST. The junior
/// tranche absorbs losses first: with no equity left there is nothing
/// to pay out, and the operation fails hard.
pub fn compute_redeem_lev(
    state: &GlobalState,
    pricing: &PricingView,
    lev_in: u64,
    min_lst_out: u64,
) -> Result<RedeemLevResult, StrataError> {
    if pricing.tvl_sol < pricing.liability_sol {
        return Err(StrataError::InsolventProtocol);
    }

    let sol_out = mul_div_down(lev_in, pricing.lev_nav_sol, SOL_PRECISION)?;
    let lst_out_gross = mul_div_down(sol_out, SOL_PRECISION, state.lst_to_sol_rate)?;

    if lst_out_gross < MIN_LST_OUT {
        return Err(StrataError::AmountTooSmall);
    }

    let fee_bps = dynamic_fee_bps(
        state,
        state.lev_redeem_fee_bps,
        FeeDirection::RiskIncreasing,
        pricing.cr_bps,
    )?;

    let fee_lst = mul_div_up(lst_out_gross, fee_bps, BPS_PRECISION)?;
    let user_lst = lst_out_gross
        .checked_sub(fee_lst)
        .ok_or(StrataError::MathOverflow)?;

    if user_lst < min_lst_out {
        return Err(StrataError::SlippageExceeded);
    }

    // Post-operation CR: collateral shrinks by the SOL value actually
    // leaving the vault, liability is untouched.
    let sol_paid = mul_div_down(lst_out_gross, state.lst_to_sol_rate, SOL_PRECISION)?;
    let tvl_post = pricing.tvl_sol.saturating_sub(sol_paid);

    let cr_post_bps = if pricing.liability_sol == 0 {
        CR_SENTINEL_MAX
    } else {
        mul_div_down(tvl_post, BPS_PRECISION, pricing.liability_sol)?
    };

    if cr_post_bps < state.min_cr_bps {
        return Err(StrataError::CollateralRatioTooLow);
    }

    let reserve_delta_lamports = sol_out.saturating_sub(sol_paid);

    Ok(RedeemLevResult {
        fee_bps,
        sol_out,
        lst_out_gross,
        fee_lst,
        user_lst,
        cr_post_bps,
        reserve_delta_lamports,
    })
}
