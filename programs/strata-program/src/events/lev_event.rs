use anchor_lang::prelude::*;

#[event]
pub struct MintLevEvent {
    pub user: Pubkey,
    pub lst_in: u64,
    pub lev_out: u64,
    pub fee_lev: u64,
    pub fee_bps: u64,
}

#[event]
pub struct RedeemLevEvent {
    pub user: Pubkey,
    pub lev_in: u64,
    pub lst_out: u64,
    pub fee_lst: u64,
    pub fee_bps: u64,
    pub cr_post_bps: u64,
}
