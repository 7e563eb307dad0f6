use crate::components::pricing_view;
use crate::states::GlobalState;
use crate::utils::{StrataError, BPS_PRECISION, MIN_CR_FLOOR_BPS};

/// Post-operation assertions. Every handler calls this after its
/// effects with freshly reloaded token-account data; a failure here
/// is a program bug and aborts the whole operation.
///
/// Checks:
/// 1. vault balance matches `total_lst_amount`
/// 2. on-chain mint supplies match the tracked totals
/// 3. TVL accounts for liability plus equity within the rounding
///    tolerance `max(tvl / 10_000, 1000)` lamports (solvent side
///    only; under insolvency equity is floored at zero by definition)
/// 4. the operation counter advanced by exactly one
/// 5. CR parameters still satisfy `target >= min >= 100%`
/// 6. the rounding reserve stays within its cap
pub fn check_invariants(
    state: &GlobalState,
    vault_balance: u64,
    stable_mint_supply: u64,
    lev_mint_supply: u64,
    pre_operation_counter: u64,
) -> Result<(), StrataError> {
    if vault_balance != state.total_lst_amount {
        return Err(StrataError::InvariantViolation);
    }

    if stable_mint_supply != state.stable_supply || lev_mint_supply != state.lev_supply {
        return Err(StrataError::InvariantViolation);
    }

    let expected_counter = pre_operation_counter
        .checked_add(1)
        .ok_or(StrataError::MathOverflow)?;
    if state.operation_counter != expected_counter {
        return Err(StrataError::InvariantViolation);
    }

    if state.min_cr_bps < MIN_CR_FLOOR_BPS || state.target_cr_bps < state.min_cr_bps {
        return Err(StrataError::InvariantViolation);
    }

    if state.rounding_reserve_lamports > state.max_rounding_reserve_lamports {
        return Err(StrataError::InvariantViolation);
    }

    let pricing = pricing_view(state)?;
    if pricing.tvl_sol >= pricing.liability_sol {
        let accounted = pricing
            .liability_sol
            .checked_add(pricing.equity_sol)
            .ok_or(StrataError::MathOverflow)?;
        let residue = pricing.tvl_sol.abs_diff(accounted);
        let tolerance = (pricing.tvl_sol / BPS_PRECISION).max(1_000);
        if residue > tolerance {
            return Err(StrataError::InvariantViolation);
        }
    }

    Ok(())
}
