use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::components::uncertainty_index_bps;
use crate::states::GlobalState;
use crate::utils::*;

/// Creates the global state, both issued-token mints and the LST
/// vault. Runs exactly once; a second call fails on the version tag.
pub fn initialize(
    ctx: Context<InitializeInstructionAccounts>,
    min_cr_bps: u64,
    target_cr_bps: u64,
    init_sol_usd: u64,
    init_lst_rate: u64,
) -> Result<()> {
    let state = &mut ctx.accounts.global_state;

    require!(state.version == 0, StrataError::AlreadyInitialized);
    require!(min_cr_bps >= MIN_CR_FLOOR_BPS, StrataError::InvalidParameter);
    require!(target_cr_bps >= min_cr_bps, StrataError::InvalidParameter);
    require!(init_sol_usd > 0, StrataError::ZeroAmount);
    require!(init_lst_rate > 0, StrataError::ZeroAmount);

    let clock = Clock::get()?;

    state.version = 1;
    state.authority = ctx.accounts.authority.key();
    // fees flow to the authority until a dedicated treasury is set
    state.treasury = ctx.accounts.authority.key();

    state.stable_mint = ctx.accounts.stable_mint.key();
    state.lev_mint = ctx.accounts.lev_mint.key();
    state.supported_lst_mint = ctx.accounts.supported_lst_mint.key();
    state.vault = ctx.accounts.vault.key();
    state.vault_authority = ctx.accounts.vault_authority.key();
    state.vault_authority_bump = ctx.bumps.vault_authority;

    state.total_lst_amount = 0;
    state.stable_supply = 0;
    state.lev_supply = 0;

    state.min_cr_bps = min_cr_bps;
    state.target_cr_bps = target_cr_bps;

    state.stable_mint_fee_bps = DEFAULT_STABLE_MINT_FEE_BPS;
    state.stable_redeem_fee_bps = DEFAULT_STABLE_REDEEM_FEE_BPS;
    state.lev_mint_fee_bps = DEFAULT_LEV_MINT_FEE_BPS;
    state.lev_redeem_fee_bps = DEFAULT_LEV_REDEEM_FEE_BPS;
    state.fee_min_multiplier_bps = FEE_MIN_MULTIPLIER_BPS;
    state.fee_max_multiplier_bps = FEE_MAX_MULTIPLIER_BPS;

    state.uncertainty_index_bps = uncertainty_index_bps(init_sol_usd, 0);
    state.uncertainty_max_bps = UNCERTAINTY_MAX_BPS;

    state.rounding_reserve_lamports = 0;
    state.max_rounding_reserve_lamports = MAX_ROUNDING_RESERVE_LAMPORTS;

    state.max_oracle_staleness_slots = MAX_ORACLE_STALENESS_SLOTS;
    state.max_conf_bps = MAX_CONF_BPS;
    state.max_lst_stale_epochs = MAX_LST_STALE_EPOCHS;

    state.last_tvl_update_slot = clock.slot;
    state.last_oracle_update_slot = clock.slot;
    state.last_lst_sync_epoch = clock.epoch;

    state.sol_usd_price = init_sol_usd;
    state.lst_to_sol_rate = init_lst_rate;
    state.oracle_confidence_usd = 0;

    state.mint_paused = false;
    state.redeem_paused = false;

    state.operation_counter = 0;

    msg!(
        "Initialize {{min_cr_bps: {}, target_cr_bps: {}, sol_usd: {}, lst_rate: {}}}",
        min_cr_bps,
        target_cr_bps,
        init_sol_usd,
        init_lst_rate
    );

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeInstructionAccounts<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub supported_lst_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [STRATA_SEED.as_bytes(), STATE_SEED.as_bytes()],
        bump,
        space = 8 + 1 + (7 * 32) + 1 + (25 * 8) + 2,
    )]
    pub global_state: Account<'info, GlobalState>,

    /// CHECK: PDA owning the vault and both issued-token mints; only
    /// ever used as a CPI signer
    #[account(seeds = [STRATA_SEED.as_bytes(), AUTHORITY_SEED.as_bytes()], bump)]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [STRATA_SEED.as_bytes(), STABLE_MINT_SEED.as_bytes()],
        bump,
        mint::decimals = STABLE_DECIMALS,
        mint::authority = vault_authority,
    )]
    pub stable_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [STRATA_SEED.as_bytes(), LEV_MINT_SEED.as_bytes()],
        bump,
        mint::decimals = LEV_DECIMALS,
        mint::authority = vault_authority,
    )]
    pub lev_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = supported_lst_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
