use anchor_lang::prelude::*;

use crate::components::check_authority;
use crate::states::GlobalState;
use crate::utils::{StrataError, MAX_BASE_FEE_BPS, STATE_SEED, STRATA_SEED};

pub fn update_fees(
    ctx: Context<UpdateFeesInstructionAccounts>,
    stable_mint_fee_bps: u64,
    stable_redeem_fee_bps: u64,
    lev_mint_fee_bps: u64,
    lev_redeem_fee_bps: u64,
) -> Result<()> {
    let state = &mut ctx.accounts.global_state;

    check_authority(state, &ctx.accounts.signer)?;

    require!(stable_mint_fee_bps <= MAX_BASE_FEE_BPS, StrataError::InvalidParameter);
    require!(stable_redeem_fee_bps <= MAX_BASE_FEE_BPS, StrataError::InvalidParameter);
    require!(lev_mint_fee_bps <= MAX_BASE_FEE_BPS, StrataError::InvalidParameter);
    require!(lev_redeem_fee_bps <= MAX_BASE_FEE_BPS, StrataError::InvalidParameter);

    state.stable_mint_fee_bps = stable_mint_fee_bps;
    state.stable_redeem_fee_bps = stable_redeem_fee_bps;
    state.lev_mint_fee_bps = lev_mint_fee_bps;
    state.lev_redeem_fee_bps = lev_redeem_fee_bps;

    msg!(
        "UpdateFees {{stable_mint: {}, stable_redeem: {}, lev_mint: {}, lev_redeem: {}}}",
        stable_mint_fee_bps,
        stable_redeem_fee_bps,
        lev_mint_fee_bps,
        lev_redeem_fee_bps
    );

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateFeesInstructionAccounts<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(mut, seeds = [STRATA_SEED.as_bytes(), STATE_SEED.as_bytes()], bump)]
    pub global_state: Account<'info, GlobalState>,
}
