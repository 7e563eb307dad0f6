use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::ID as SYSVAR_INSTRUCTIONS_ID;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount},
};

use crate::components::{
    check_execution_ctx, check_freshness, check_invariants, compute_redeem_stable, pricing_view,
};
use crate::events::RedeemStableEvent;
use crate::states::GlobalState;
use crate::utils::*;

/// Burn stablecoin, withdraw LST. Risk-reducing, and the senior
/// tranche keeps a priority exit even under insolvency: below 100%
/// CR the payout is scaled pro-rata instead of rejected.
///
/// # Arguments
/// * `ctx` - context containing all accounts
/// * `stable_in` - stablecoin burned, base units
/// * `min_lst_out` - slippage floor on the LST received
#[inline(never)]
pub fn redeem_stable(
    ctx: Context<RedeemStableInstructionAccounts>,
    stable_in: u64,
    min_lst_out: u64,
) -> Result<()> {
    check_execution_ctx(&ctx.accounts.instruction_sysvar)?;

    let state = &mut ctx.accounts.global_state;

    require!(!state.redeem_paused, StrataError::RedeemPaused);

    let clock = Clock::get()?;
    check_freshness(state, clock.slot, clock.epoch)?;

    require!(stable_in > 0, StrataError::ZeroAmount);

    let pricing = pricing_view(state)?;
    let result = compute_redeem_stable(state, &pricing, stable_in, min_lst_out)?;

    require!(
        ctx.accounts.user_stable_ata.amount >= stable_in,
        StrataError::InsufficientSupply
    );

    // a redeem may empty the vault, but not leave dust behind
    let remaining_lst = state
        .total_lst_amount
        .checked_sub(result.lst_out_gross)
        .ok_or(StrataError::MathOverflow)?;
    require!(
        remaining_lst == 0 || remaining_lst >= MIN_LST_DEPOSIT,
        StrataError::BelowMinimumTVL
    );

    // burn first, user signs
    let burn_accounts = token::Burn {
        mint: ctx.accounts.stable_mint.to_account_info(),
        from: ctx.accounts.user_stable_ata.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    token::burn(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), burn_accounts),
        stable_in,
    )?;

    // LST vault → user (and treasury fee), vault authority signs
    let seeds: &[&[u8]; 3] = &[
        STRATA_SEED.as_bytes(),
        AUTHORITY_SEED.as_bytes(),
        &[state.vault_authority_bump],
    ];
    let signer_seeds: &[&[&[u8]]; 1] = &[&seeds[..]];

    let transfer_user = token::Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.user_lst_ata.to_account_info(),
        authority: ctx.accounts.vault_authority.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_user,
            signer_seeds,
        ),
        result.user_lst,
    )?;

    if result.fee_lst > 0 {
        let transfer_fee = token::Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.treasury_lst_ata.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        };
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                transfer_fee,
                signer_seeds,
            ),
            result.fee_lst,
        )?;
    }

    let pre_counter = state.operation_counter;

    state.total_lst_amount = remaining_lst;
    state.stable_supply = state
        .stable_supply
        .checked_sub(stable_in)
        .ok_or(StrataError::MathOverflow)?;
    state.rounding_reserve_lamports = state
        .rounding_reserve_lamports
        .saturating_add(result.reserve_delta_lamports)
        .min(state.max_rounding_reserve_lamports);
    state.operation_counter = pre_counter
        .checked_add(1)
        .ok_or(StrataError::MathOverflow)?;
    state.last_tvl_update_slot = clock.slot;

    ctx.accounts.vault.reload()?;
    ctx.accounts.stable_mint.reload()?;
    check_invariants(
        state,
        ctx.accounts.vault.amount,
        ctx.accounts.stable_mint.supply,
        ctx.accounts.lev_mint.supply,
        pre_counter,
    )?;

    emit!(RedeemStableEvent {
        user: ctx.accounts.user.key(),
        stable_in,
        lst_out: result.user_lst,
        fee_lst: result.fee_lst,
        fee_bps: result.fee_bps,
        haircut_bps: result.haircut_bps,
    });

    Ok(())
}

/// Accounts required for the redeem_stable instruction
#[derive(Accounts)]
pub struct RedeemStableInstructionAccounts<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [STRATA_SEED.as_bytes(), STATE_SEED.as_bytes()],
        bump,
        has_one = stable_mint,
        has_one = lev_mint,
        has_one = supported_lst_mint,
        has_one = vault,
    )]
    pub global_state: Account<'info, GlobalState>,

    pub supported_lst_mint: Account<'info, Mint>,

    #[account(mut)]
    pub stable_mint: Account<'info, Mint>,

    pub lev_mint: Account<'info, Mint>,

    /// CHECK: CPI signer PDA, never read or written
    #[account(
        seeds = [STRATA_SEED.as_bytes(), AUTHORITY_SEED.as_bytes()],
        bump = global_state.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(mut, token::mint = supported_lst_mint, token::authority = vault_authority)]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut, token::authority = user, token::mint = stable_mint)]
    pub user_stable_ata: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = supported_lst_mint,
        associated_token::authority = user,
    )]
    pub user_lst_ata: Account<'info, TokenAccount>,

    /// CHECK: fee recipient recorded in the global state
    #[account(address = global_state.treasury)]
    pub treasury: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = supported_lst_mint,
        associated_token::authority = treasury,
    )]
    pub treasury_lst_ata: Account<'info, TokenAccount>,

    /// CHECK: instructions sysvar, address constrained
    #[account(address = SYSVAR_INSTRUCTIONS_ID)]
    pub instruction_sysvar: UncheckedAccount<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
