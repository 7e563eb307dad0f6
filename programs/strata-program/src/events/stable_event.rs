use anchor_lang::prelude::*;

#[event]
pub struct MintStableEvent {
    pub user: Pubkey,
    pub lst_in: u64,
    pub stable_out: u64,
    pub fee_stable: u64,
    pub fee_bps: u64,
    pub cr_post_bps: u64,
}

#[event]
pub struct RedeemStableEvent {
    pub user: Pubkey,
    pub stable_in: u64,
    pub lst_out: u64,
    pub fee_lst: u64,
    pub fee_bps: u64,
    /// Payout ratio in bps; 10_000 is par, anything lower means the
    /// redemption went through the insolvency haircut.
    pub haircut_bps: u64,
}
