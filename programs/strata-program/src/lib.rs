#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

use instructions::admin::*;
use instructions::user::*;

pub mod states;
pub mod instructions;
pub mod components;
pub mod utils;
pub mod events;

declare_id!("Fny5mCfgyefMTN8X2NcSxR83cMhJ2v2wT4bLEN6GA74H");

#[program]
pub mod strata_program {
    use super::*;

    pub fn initialize(
        ctx: Context<InitializeInstructionAccounts>,
        min_cr_bps: u64,
        target_cr_bps: u64,
        init_sol_usd: u64,
        init_lst_rate: u64,
    ) -> Result<()> {
        instructions::admin::initialize(ctx, min_cr_bps, target_cr_bps, init_sol_usd, init_lst_rate)
    }

    pub fn update_parameters(
        ctx: Context<UpdateParametersInstructionAccounts>,
        new_min_cr_bps: u64,
        new_target_cr_bps: u64,
    ) -> Result<()> {
        instructions::admin::update_parameters(ctx, new_min_cr_bps, new_target_cr_bps)
    }

    pub fn update_fees(
        ctx: Context<UpdateFeesInstructionAccounts>,
        stable_mint_fee_bps: u64,
        stable_redeem_fee_bps: u64,
        lev_mint_fee_bps: u64,
        lev_redeem_fee_bps: u64,
    ) -> Result<()> {
        instructions::admin::update_fees(
            ctx,
            stable_mint_fee_bps,
            stable_redeem_fee_bps,
            lev_mint_fee_bps,
            lev_redeem_fee_bps,
        )
    }

    pub fn update_treasury(
        ctx: Context<UpdateTreasuryInstructionAccounts>,
        new_treasury: Pubkey,
    ) -> Result<()> {
        instructions::admin::update_treasury(ctx, new_treasury)
    }

    pub fn update_prices(
        ctx: Context<UpdatePricesInstructionAccounts>,
        sol_usd: u64,
        lst_rate: u64,
        conf_usd: u64,
    ) -> Result<()> {
        instructions::admin::update_prices(ctx, sol_usd, lst_rate, conf_usd)
    }

    pub fn sync_exchange_rate(ctx: Context<SyncExchangeRateInstructionAccounts>) -> Result<()> {
        instructions::admin::sync_exchange_rate(ctx)
    }

    pub fn emergency_pause(
        ctx: Context<EmergencyPauseInstructionAccounts>,
        mint_paused: bool,
        redeem_paused: bool,
    ) -> Result<()> {
        instructions::admin::emergency_pause(ctx, mint_paused, redeem_paused)
    }

    // User instructions
    pub fn mint_stable(
        ctx: Context<MintStableInstructionAccounts>,
        lst_in: u64,
        min_stable_out: u64,
    ) -> Result<()> {
        instructions::user::mint_stable(ctx, lst_in, min_stable_out)
    }

    pub fn redeem_stable(
        ctx: Context<RedeemStableInstructionAccounts>,
        stable_in: u64,
        min_lst_out: u64,
    ) -> Result<()> {
        instructions::user::redeem_stable(ctx, stable_in, min_lst_out)
    }

    pub fn mint_lev(
        ctx: Context<MintLevInstructionAccounts>,
        lst_in: u64,
        min_lev_out: u64,
    ) -> Result<()> {
        instructions::user::mint_lev(ctx, lst_in, min_lev_out)
    }

    pub fn redeem_lev(
        ctx: Context<RedeemLevInstructionAccounts>,
        lev_in: u64,
        min_lst_out: u64,
    ) -> Result<()> {
        instructions::user::redeem_lev(ctx, lev_in, min_lst_out)
    }
}
