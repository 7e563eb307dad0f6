use anchor_lang::prelude::*;

use crate::components::check_authority;
use crate::states::GlobalState;
use crate::utils::{StrataError, MIN_CR_FLOOR_BPS, STATE_SEED, STRATA_SEED};

pub fn update_parameters(
    ctx: Context<UpdateParametersInstructionAccounts>,
    new_min_cr_bps: u64,
    new_target_cr_bps: u64,
) -> Result<()> {
    let state = &mut ctx.accounts.global_state;

    check_authority(state, &ctx.accounts.signer)?;

    require!(new_min_cr_bps >= MIN_CR_FLOOR_BPS, StrataError::InvalidParameter);
    require!(new_target_cr_bps >= new_min_cr_bps, StrataError::InvalidParameter);

    state.min_cr_bps = new_min_cr_bps;
    state.target_cr_bps = new_target_cr_bps;

    msg!(
        "UpdateParameters {{min_cr_bps: {}, target_cr_bps: {}}}",
        state.min_cr_bps,
        state.target_cr_bps
    );

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateParametersInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(mut, seeds = [STRATA_SEED.as_bytes(), STATE_SEED.as_bytes()], bump)]
    pub global_state: Account<'info, GlobalState>,
}
