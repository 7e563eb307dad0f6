use crate::components::mul_div_down;
use crate::states::GlobalState;
use crate::utils::{StrataError, BPS_PRECISION, UNCERTAINTY_K};

/// Directional label of an operation for the fee engine.
/// Risk-increasing operations worsen the collateral ratio
/// (mint stable, redeem lev); risk-reducing ones improve it
/// (mint lev, redeem stable).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeeDirection {
    RiskIncreasing,
    RiskReducing,
}

/// Derives the effective fee in bps for one operation.
///
/// Two multipliers compose on top of the base fee:
/// - a CR multiplier, piecewise-linear between `target_cr_bps`
///   (1.0x) and `min_cr_bps` (`fee_max_multiplier_bps` for
///   risk-increasing, `fee_min_multiplier_bps` for risk-reducing),
///   pinned outside that band;
/// - an uncertainty multiplier charged only to risk-increasing
///   operations, `1.0x + index/UNCERTAINTY_K`, capped at
///   `uncertainty_max_bps`.
///
/// The composed multiplier is direction-sanitized (risk-increasing
/// never below 1.0x, risk-reducing never above) and globally clamped
/// to `[fee_min_multiplier_bps, fee_max_multiplier_bps]`.
///
/// At or above `target_cr_bps` with a quiet oracle the result is
/// exactly `base_fee_bps`, both directions.
pub fn dynamic_fee_bps(
    state: &GlobalState,
    base_fee_bps: u64,
    direction: FeeDirection,
    cr_bps: u64,
) -> Result<u64, StrataError> {
    let cr_mult = cr_multiplier_bps(state, direction, cr_bps)?;

    let unc_mult = match direction {
        FeeDirection::RiskIncreasing => {
            uncertainty_multiplier_bps(state.uncertainty_index_bps, state.uncertainty_max_bps)?
        }
        FeeDirection::RiskReducing => BPS_PRECISION,
    };

    let composed = mul_div_down(cr_mult, unc_mult, BPS_PRECISION)?;

    let sanitized = match direction {
        FeeDirection::RiskIncreasing => composed.max(BPS_PRECISION),
        FeeDirection::RiskReducing => composed.min(BPS_PRECISION),
    };

    let total_mult = sanitized.clamp(state.fee_min_multiplier_bps, state.fee_max_multiplier_bps);

    mul_div_down(base_fee_bps, total_mult, BPS_PRECISION)
}

fn cr_multiplier_bps(
    state: &GlobalState,
    direction: FeeDirection,
    cr_bps: u64,
) -> Result<u64, StrataError> {
    if cr_bps >= state.target_cr_bps {
        return Ok(BPS_PRECISION);
    }

    let pinned = cr_bps <= state.min_cr_bps || state.target_cr_bps == state.min_cr_bps;

    match direction {
        FeeDirection::RiskIncreasing => {
            if pinned {
                return Ok(state.fee_max_multiplier_bps);
            }
            // rises linearly from 1.0x at target to max at min
            let rise = mul_div_down(
                state.target_cr_bps - cr_bps,
                state.fee_max_multiplier_bps - BPS_PRECISION,
                state.target_cr_bps - state.min_cr_bps,
            )?;
            Ok(BPS_PRECISION + rise)
        }
        FeeDirection::RiskReducing => {
            if pinned {
                return Ok(state.fee_min_multiplier_bps);
            }
            // falls linearly from 1.0x at target to min at min
            let drop = mul_div_down(
                state.target_cr_bps - cr_bps,
                BPS_PRECISION - state.fee_min_multiplier_bps,
                state.target_cr_bps - state.min_cr_bps,
            )?;
            Ok(BPS_PRECISION - drop)
        }
    }
}

fn uncertainty_multiplier_bps(index_bps: u64, max_bps: u64) -> Result<u64, StrataError> {
    let surcharge = mul_div_down(index_bps, BPS_PRECISION, UNCERTAINTY_K)?;
    let raw = BPS_PRECISION
        .checked_add(surcharge)
        .ok_or(StrataError::MathOverflow)?;
    Ok(raw.clamp(BPS_PRECISION, max_bps))
}
