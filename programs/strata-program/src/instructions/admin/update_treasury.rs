use anchor_lang::prelude::*;

use crate::components::check_authority;
use crate::states::GlobalState;
use crate::utils::{STATE_SEED, STRATA_SEED};

pub fn update_treasury(
    ctx: Context<UpdateTreasuryInstructionAccounts>,
    new_treasury: Pubkey,
) -> Result<()> {
    let state = &mut ctx.accounts.global_state;

    check_authority(state, &ctx.accounts.signer)?;

    state.treasury = new_treasury;

    msg!("UpdateTreasury {{treasury: {}}}", new_treasury);

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateTreasuryInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(mut, seeds = [STRATA_SEED.as_bytes(), STATE_SEED.as_bytes()], bump)]
    pub global_state: Account<'info, GlobalState>,
}
