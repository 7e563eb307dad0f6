use crate::components::{dynamic_fee_bps, mul_div_down, mul_div_up, FeeDirection, PricingView};
use crate::states::GlobalState;
use crate::utils::{StrataError, BPS_PRECISION, MIN_LEV_MINT, SOL_PRECISION};

pub struct MintLevResult {
    pub fee_bps: u64,
    /// SOL value of the deposited LST, lamports.
    pub sol_in: u64,
    /// Leveraged tokens minted in total; supply grows by this.
    pub lev_gross: u64,
    pub fee_lev: u64,
    pub user_lev: u64,
}

/// Arithmetic for minting the leveraged token against an LST deposit.
/// Risk-reducing: fresh equity enters, so no post-CR gate.
///
/// The first minter (zero supply) receives tokens 1:1 with the SOL
/// value of the deposit, which pins the starting NAV at 1.0 and makes
/// donation-based NAV inflation pointless.
pub fn compute_mint_lev(
    state: &GlobalState,
    pricing: &PricingView,
    lst_in: u64,
    min_lev_out: u64,
) -> Result<MintLevResult, StrataError> {
    let sol_in = mul_div_down(lst_in, state.lst_to_sol_rate, SOL_PRECISION)?;

    let lev_gross = if state.lev_supply == 0 {
        sol_in
    } else {
        // Outstanding supply with zero equity has no meaningful NAV;
        // minting against it would hand out unbounded tokens.
        if pricing.lev_nav_sol == 0 {
            return Err(StrataError::InsolventProtocol);
        }
        mul_div_down(sol_in, SOL_PRECISION, pricing.lev_nav_sol)?
    };

    if lev_gross < MIN_LEV_MINT {
        return Err(StrataError::AmountTooSmall);
    }

    let fee_bps = dynamic_fee_bps(
        state,
        state.lev_mint_fee_bps,
        FeeDirection::RiskReducing,
        pricing.cr_bps,
    )?;

    let fee_lev = mul_div_up(lev_gross, fee_bps, BPS_PRECISION)?;
    let user_lev = lev_gross
        .checked_sub(fee_lev)
        .ok_or(StrataError::MathOverflow)?;

    if user_lev < min_lev_out {
        return Err(StrataError::SlippageExceeded);
    }

    Ok(MintLevResult {
        fee_bps,
        sol_in,
        lev_gross,
        fee_lev,
        user_lev,
    })
}
