use anchor_lang::prelude::*;

/// Single process-wide balance sheet of the protocol. One LST vault
/// backs the stablecoin (senior tranche) and the leveraged token
/// (junior tranche) at the same time.
#[account]
pub struct GlobalState {
    pub version: u8,

    pub authority: Pubkey,
    pub treasury: Pubkey,

    pub stable_mint: Pubkey,
    pub lev_mint: Pubkey,
    pub supported_lst_mint: Pubkey,

    pub vault: Pubkey,
    pub vault_authority: Pubkey,
    pub vault_authority_bump: u8,

    /// Authoritative LST balance of the vault, in LST base units.
    pub total_lst_amount: u64,
    /// Outstanding stablecoin supply, 6-decimal USD units.
    pub stable_supply: u64,
    /// Outstanding leveraged-token supply, 9-decimal units.
    pub lev_supply: u64,

    pub min_cr_bps: u64,
    pub target_cr_bps: u64,

    pub stable_mint_fee_bps: u64,
    pub stable_redeem_fee_bps: u64,
    pub lev_mint_fee_bps: u64,
    pub lev_redeem_fee_bps: u64,
    pub fee_min_multiplier_bps: u64,
    pub fee_max_multiplier_bps: u64,

    /// Oracle confidence relative to price, in bps; recomputed on
    /// every price update.
    pub uncertainty_index_bps: u64,
    pub uncertainty_max_bps: u64,

    /// Integer-division residue accumulated in the vault's favor.
    pub rounding_reserve_lamports: u64,
    pub max_rounding_reserve_lamports: u64,

    pub max_oracle_staleness_slots: u64,
    pub max_conf_bps: u64,
    pub max_lst_stale_epochs: u64,

    pub last_tvl_update_slot: u64,
    pub last_oracle_update_slot: u64,
    pub last_lst_sync_epoch: u64,

    /// SOL/USD snapshot, 6-decimal USD per SOL.
    pub sol_usd_price: u64,
    /// LST-to-SOL exchange rate, 9-decimal SOL per LST.
    pub lst_to_sol_rate: u64,
    /// Oracle confidence interval, 6-decimal USD.
    pub oracle_confidence_usd: u64,

    pub mint_paused: bool,
    pub redeem_paused: bool,

    /// Strictly monotonic per-operation sequence number.
    pub operation_counter: u64,
}
