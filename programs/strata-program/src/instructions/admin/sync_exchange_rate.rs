use anchor_lang::prelude::*;

use crate::states::GlobalState;
use crate::utils::{STATE_SEED, STRATA_SEED};

/// Restamps the LST exchange-rate cursor. Permissionless: the call
/// moves no value, it only re-validates the cached rate for the
/// current epoch.
pub fn sync_exchange_rate(ctx: Context<SyncExchangeRateInstructionAccounts>) -> Result<()> {
    let state = &mut ctx.accounts.global_state;

    let clock = Clock::get()?;
    state.last_lst_sync_epoch = clock.epoch;

    msg!("SyncExchangeRate {{epoch: {}}}", clock.epoch);

    Ok(())
}

#[derive(Accounts)]
pub struct SyncExchangeRateInstructionAccounts<'info> {
    pub signer: Signer<'info>,

    #[account(mut, seeds = [STRATA_SEED.as_bytes(), STATE_SEED.as_bytes()], bump)]
    pub global_state: Account<'info, GlobalState>,
}
