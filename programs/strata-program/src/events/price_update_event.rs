use anchor_lang::prelude::*;

#[event]
pub struct PriceUpdateEvent {
    pub sol_usd_price: u64,
    pub lst_to_sol_rate: u64,
    pub oracle_confidence_usd: u64,
    pub uncertainty_index_bps: u64,
    pub slot: u64,
}
