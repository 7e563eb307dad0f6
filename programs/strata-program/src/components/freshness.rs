use crate::states::GlobalState;
use crate::utils::StrataError;

/// Oracle snapshot must have been written within the staleness window.
pub fn check_oracle_fresh(
    current_slot: u64,
    last_oracle_update_slot: u64,
    max_staleness_slots: u64,
) -> Result<(), StrataError> {
    if current_slot.saturating_sub(last_oracle_update_slot) > max_staleness_slots {
        return Err(StrataError::OraclePriceStale);
    }
    Ok(())
}

/// Oracle confidence, expressed as the uncertainty index, must be
/// tighter than the configured bound.
pub fn check_confidence(uncertainty_index_bps: u64, max_conf_bps: u64) -> Result<(), StrataError> {
    if uncertainty_index_bps > max_conf_bps {
        return Err(StrataError::OracleConfidenceTooWide);
    }
    Ok(())
}

/// The LST exchange-rate cache is epoch-granular: the rate only moves
/// when staking rewards land, once per epoch.
pub fn check_lst_rate_fresh(
    current_epoch: u64,
    last_lst_sync_epoch: u64,
    max_stale_epochs: u64,
) -> Result<(), StrataError> {
    if current_epoch.saturating_sub(last_lst_sync_epoch) > max_stale_epochs {
        return Err(StrataError::LstRateStale);
    }
    Ok(())
}

/// Full freshness gate run before every mint/redeem.
pub fn check_freshness(
    state: &GlobalState,
    current_slot: u64,
    current_epoch: u64,
) -> Result<(), StrataError> {
    check_oracle_fresh(
        current_slot,
        state.last_oracle_update_slot,
        state.max_oracle_staleness_slots,
    )?;
    check_confidence(state.uncertainty_index_bps, state.max_conf_bps)?;
    check_lst_rate_fresh(
        current_epoch,
        state.last_lst_sync_epoch,
        state.max_lst_stale_epochs,
    )?;
    Ok(())
}
