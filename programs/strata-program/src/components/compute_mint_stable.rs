use crate::components::{dynamic_fee_bps, mul_div_down, mul_div_up, FeeDirection, PricingView};
use crate::states::GlobalState;
use crate::utils::{
    StrataError, BPS_PRECISION, CR_SENTINEL_MAX, MIN_STABLE_MINT, SOL_PRECISION,
};

pub struct MintStableResult {
    pub fee_bps: u64,
    /// SOL value of the deposited LST, lamports.
    pub sol_in: u64,
    /// Stablecoin minted in total; supply grows by this.
    pub usd_gross: u64,
    pub fee_stable: u64,
    pub user_stable: u64,
    pub cr_post_bps: u64,
}

/// Arithmetic for minting stablecoin against an LST deposit.
/// Risk-increasing: the fee scales up as CR decays and the simulated
/// post-operation CR must stay above the floor. The slippage floor is
/// checked before the CR gate so a user quoting too optimistically
/// sees `SlippageExceeded` rather than the protocol-side rejection.
pub fn compute_mint_stable(
    state: &GlobalState,
    pricing: &PricingView,
    lst_in: u64,
    min_stable_out: u64,
) -> Result<MintStableResult, StrataError> {
    let sol_in = mul_div_down(lst_in, state.lst_to_sol_rate, SOL_PRECISION)?;
    let usd_gross = mul_div_down(sol_in, state.sol_usd_price, SOL_PRECISION)?;

    if usd_gross < MIN_STABLE_MINT {
        return Err(StrataError::AmountTooSmall);
    }

    let fee_bps = dynamic_fee_bps(
        state,
        state.stable_mint_fee_bps,
        FeeDirection::RiskIncreasing,
        pricing.cr_bps,
    )?;

    // fee rounds up, user share rounds down
    let fee_stable = mul_div_up(usd_gross, fee_bps, BPS_PRECISION)?;
    let user_stable = usd_gross
        .checked_sub(fee_stable)
        .ok_or(StrataError::MathOverflow)?;

    if user_stable < min_stable_out {
        return Err(StrataError::SlippageExceeded);
    }

    // Simulate the post-operation balance sheet. The new liability is
    // booked round-up, same as the pricing view will see it.
    let tvl_post = pricing
        .tvl_sol
        .checked_add(sol_in)
        .ok_or(StrataError::MathOverflow)?;
    let liability_delta = mul_div_up(usd_gross, SOL_PRECISION, state.sol_usd_price)?;
    let liability_post = pricing
        .liability_sol
        .checked_add(liability_delta)
        .ok_or(StrataError::MathOverflow)?;

    let cr_post_bps = if liability_post == 0 {
        CR_SENTINEL_MAX
    } else {
        mul_div_down(tvl_post, BPS_PRECISION, liability_post)?
    };

    if cr_post_bps < state.min_cr_bps {
        return Err(StrataError::CollateralRatioTooLow);
    }

    Ok(MintStableResult {
        fee_bps,
        sol_in,
        usd_gross,
        fee_stable,
        user_stable,
        cr_post_bps,
    })
}
