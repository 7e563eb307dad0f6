use crate::components::{dynamic_fee_bps, mul_div_down, mul_div_up, FeeDirection, PricingView};
use crate::states::GlobalState;
use crate::utils::{StrataError, BPS_PRECISION, MIN_LST_OUT, SOL_PRECISION};

pub struct RedeemStableResult {
    /// True when the protocol is insolvent and the payout was reduced
    /// pro-rata.
    pub haircut: bool,
    /// Payout ratio in bps; `BPS_PRECISION` means par.
    pub haircut_bps: u64,
    pub fee_bps: u64,
    /// SOL value released from the liability side, lamports.
    pub sol_out: u64,
    /// LST leaving the vault in total (user payout plus fee).
    pub lst_out_gross: u64,
    pub fee_lst: u64,
    pub user_lst: u64,
    /// Lamports of value burned but not paid out due to flooring;
    /// accumulates into the rounding reserve.
    pub reserve_delta_lamports: u64,
}

/// Arithmetic for redeeming stablecoin for LST. The senior tranche
/// always has an exit: at or above 100% CR a par redemption with the
/// risk-reducing fee; below 100% a zero-fee pro-rata haircut.
pub fn compute_redeem_stable(
    state: &GlobalState,
    pricing: &PricingView,
    stable_in: u64,
    min_lst_out: u64,
) -> Result<RedeemStableResult, StrataError> {
    if pricing.tvl_sol < pricing.liability_sol {
        return compute_haircut(state, pricing, stable_in, min_lst_out);
    }

    let sol_out = mul_div_down(stable_in, SOL_PRECISION, state.sol_usd_price)?;
    let lst_out_gross = mul_div_down(sol_out, SOL_PRECISION, state.lst_to_sol_rate)?;

    if lst_out_gross < MIN_LST_OUT {
        return Err(StrataError::AmountTooSmall);
    }

    let fee_bps = dynamic_fee_bps(
        state,
        state.stable_redeem_fee_bps,
        FeeDirection::RiskReducing,
        pricing.cr_bps,
    )?;

    let fee_lst = mul_div_up(lst_out_gross, fee_bps, BPS_PRECISION)?;
    let user_lst = lst_out_gross
        .checked_sub(fee_lst)
        .ok_or(StrataError::MathOverflow)?;

    if user_lst < min_lst_out {
        return Err(StrataError::SlippageExceeded);
    }

    // The floored LST payout is worth slightly less than the SOL
    // value released; the gap stays in the vault.
    let sol_paid = mul_div_down(lst_out_gross, state.lst_to_sol_rate, SOL_PRECISION)?;
    let reserve_delta_lamports = sol_out.saturating_sub(sol_paid);

    Ok(RedeemStableResult {
        haircut: false,
        haircut_bps: BPS_PRECISION,
        fee_bps,
        sol_out,
        lst_out_gross,
        fee_lst,
        user_lst,
        reserve_delta_lamports,
    })
}

/// Insolvency exit: pay `stable_in` at par, then scale by CR. No fee
/// is charged on top of the loss the holder is already taking; the
/// slippage floor still applies.
fn compute_haircut(
    state: &GlobalState,
    pricing: &PricingView,
    stable_in: u64,
    min_lst_out: u64,
) -> Result<RedeemStableResult, StrataError> {
    let haircut_bps = pricing.cr_bps.min(BPS_PRECISION);

    let sol_par = mul_div_down(stable_in, SOL_PRECISION, state.sol_usd_price)?;
    let sol_after_haircut = mul_div_down(sol_par, haircut_bps, BPS_PRECISION)?;
    let lst_out = mul_div_down(sol_after_haircut, SOL_PRECISION, state.lst_to_sol_rate)?;

    if lst_out < MIN_LST_OUT {
        return Err(StrataError::AmountTooSmall);
    }

    if lst_out < min_lst_out {
        return Err(StrataError::SlippageExceeded);
    }

    let sol_paid = mul_div_down(lst_out, state.lst_to_sol_rate, SOL_PRECISION)?;
    let reserve_delta_lamports = sol_after_haircut.saturating_sub(sol_paid);

    Ok(RedeemStableResult {
        haircut: true,
        haircut_bps,
        fee_bps: 0,
        sol_out: sol_after_haircut,
        lst_out_gross: lst_out,
        fee_lst: 0,
        user_lst: lst_out,
        reserve_delta_lamports,
    })
}
