use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::ID as SYSVAR_INSTRUCTIONS_ID;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount},
};

use crate::components::{
    check_execution_ctx, check_freshness, check_invariants, compute_mint_lev, pricing_view,
};
use crate::events::MintLevEvent;
use crate::states::GlobalState;
use crate::utils::*;

/// Deposit LST, mint the leveraged token at the current NAV.
/// Risk-reducing: fresh equity improves the collateral ratio.
///
/// # Arguments
/// * `ctx` - context containing all accounts
/// * `lst_in` - LST deposited, base units
/// * `min_lev_out` - slippage floor on the tokens received
#[inline(never)]
pub fn mint_lev(
    ctx: Context<MintLevInstructionAccounts>,
    lst_in: u64,
    min_lev_out: u64,
) -> Result<()> {
    check_execution_ctx(&ctx.accounts.instruction_sysvar)?;

    let state = &mut ctx.accounts.global_state;

    require!(!state.mint_paused, StrataError::MintPaused);

    let clock = Clock::get()?;
    check_freshness(state, clock.slot, clock.epoch)?;

    require!(lst_in > 0, StrataError::ZeroAmount);
    require!(lst_in >= MIN_LST_DEPOSIT, StrataError::AmountTooSmall);

    let pricing = pricing_view(state)?;
    let result = compute_mint_lev(state, &pricing, lst_in, min_lev_out)?;

    require!(
        ctx.accounts.user_lst_ata.amount >= lst_in,
        StrataError::InsufficientCollateral
    );

    // LST user → vault, user signs
    let cpi_accounts = token::Transfer {
        from: ctx.accounts.user_lst_ata.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        lst_in,
    )?;

    // leveraged token minted under the vault authority
    let seeds: &[&[u8]; 3] = &[
        STRATA_SEED.as_bytes(),
        AUTHORITY_SEED.as_bytes(),
        &[state.vault_authority_bump],
    ];
    let signer_seeds: &[&[&[u8]]; 1] = &[&seeds[..]];

    let mint_user = token::MintTo {
        mint: ctx.accounts.lev_mint.to_account_info(),
        to: ctx.accounts.user_lev_ata.to_account_info(),
        authority: ctx.accounts.vault_authority.to_account_info(),
    };
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            mint_user,
            signer_seeds,
        ),
        result.user_lev,
    )?;

    if result.fee_lev > 0 {
        let mint_fee = token::MintTo {
            mint: ctx.accounts.lev_mint.to_account_info(),
            to: ctx.accounts.treasury_lev_ata.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        };
        token::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                mint_fee,
                signer_seeds,
            ),
            result.fee_lev,
        )?;
    }

    let pre_counter = state.operation_counter;

    state.total_lst_amount = state
        .total_lst_amount
        .checked_add(lst_in)
        .ok_or(StrataError::MathOverflow)?;
    state.lev_supply = state
        .lev_supply
        .checked_add(result.lev_gross)
        .ok_or(StrataError::MathOverflow)?;
    state.operation_counter = pre_counter
        .checked_add(1)
        .ok_or(StrataError::MathOverflow)?;
    state.last_tvl_update_slot = clock.slot;

    ctx.accounts.vault.reload()?;
    ctx.accounts.lev_mint.reload()?;
    check_invariants(
        state,
        ctx.accounts.vault.amount,
        ctx.accounts.stable_mint.supply,
        ctx.accounts.lev_mint.supply,
        pre_counter,
    )?;

    emit!(MintLevEvent {
        user: ctx.accounts.user.key(),
        lst_in,
        lev_out: result.user_lev,
        fee_lev: result.fee_lev,
        fee_bps: result.fee_bps,
    });

    Ok(())
}

/// Accounts required for the mint_lev instruction
#[derive(Accounts)]
pub struct MintLevInstructionAccounts<'info> {
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

    pub stable_mint: Account<'info, Mint>,

    #[account(mut)]
    pub lev_mint: Account<'info, Mint>,

    /// CHECK: CPI signer PDA, never read or written
    #[account(
        seeds = [STRATA_SEED.as_bytes(), AUTHORITY_SEED.as_bytes()],
        bump = global_state.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(mut, token::mint = supported_lst_mint, token::authority = vault_authority)]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut, token::authority = user, token::mint = supported_lst_mint)]
    pub user_lst_ata: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = lev_mint,
        associated_token::authority = user,
    )]
    pub user_lev_ata: Account<'info, TokenAccount>,

    /// CHECK: fee recipient recorded in the global state
    #[account(address = global_state.treasury)]
    pub treasury: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = lev_mint,
        associated_token::authority = treasury,
    )]
    pub treasury_lev_ata: Account<'info, TokenAccount>,

    /// CHECK: instructions sysvar, address constrained
    #[account(address = SYSVAR_INSTRUCTIONS_ID)]
    pub instruction_sysvar: UncheckedAccount<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
