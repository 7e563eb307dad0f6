use anchor_lang::prelude::*;

use crate::components::check_authority;
use crate::states::GlobalState;
use crate::utils::{STATE_SEED, STRATA_SEED};

pub fn emergency_pause(
    ctx: Context<EmergencyPauseInstructionAccounts>,
    mint_paused: bool,
    redeem_paused: bool,
) -> Result<()> {
    let state = &mut ctx.accounts.global_state;

    check_authority(state, &ctx.accounts.signer)?;

    state.mint_paused = mint_paused;
    state.redeem_paused = redeem_paused;

    msg!(
        "EmergencyPause {{mint_paused: {}, redeem_paused: {}}}",
        mint_paused,
        redeem_paused
    );

    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyPauseInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(mut, seeds = [STRATA_SEED.as_bytes(), STATE_SEED.as_bytes()], bump)]
    pub global_state: Account<'info, GlobalState>,
}
