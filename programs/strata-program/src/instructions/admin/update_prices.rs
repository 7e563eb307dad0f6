use anchor_lang::prelude::*;

use crate::components::{check_authority, uncertainty_index_bps};
use crate::events::PriceUpdateEvent;
use crate::states::GlobalState;
use crate::utils::{StrataError, STATE_SEED, STRATA_SEED};

/// Refreshes the oracle snapshot. Both freshness cursors are stamped
/// in the same write: the call carries a fresh LST rate, so leaving
/// the epoch cursor behind would immediately re-stale the data it
/// just wrote.
pub fn update_prices(
    ctx: Context<UpdatePricesInstructionAccounts>,
    sol_usd: u64,
    lst_rate: u64,
    conf_usd: u64,
) -> Result<()> {
    let state = &mut ctx.accounts.global_state;

    check_authority(state, &ctx.accounts.signer)?;

    require!(sol_usd > 0, StrataError::ZeroAmount);
    require!(lst_rate > 0, StrataError::ZeroAmount);

    let clock = Clock::get()?;

    state.sol_usd_price = sol_usd;
    state.lst_to_sol_rate = lst_rate;
    state.oracle_confidence_usd = conf_usd;
    state.uncertainty_index_bps = uncertainty_index_bps(sol_usd, conf_usd);
    state.last_oracle_update_slot = clock.slot;
    state.last_lst_sync_epoch = clock.epoch;

    emit!(PriceUpdateEvent {
        sol_usd_price: sol_usd,
        lst_to_sol_rate: lst_rate,
        oracle_confidence_usd: conf_usd,
        uncertainty_index_bps: state.uncertainty_index_bps,
        slot: clock.slot,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdatePricesInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(mut, seeds = [STRATA_SEED.as_bytes(), STATE_SEED.as_bytes()], bump)]
    pub global_state: Account<'info, GlobalState>,
}
