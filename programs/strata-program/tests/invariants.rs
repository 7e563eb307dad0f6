use anchor_lang::prelude::Pubkey;
use strata_program::components::check_invariants;
use strata_program::states::GlobalState;
use strata_program::utils::StrataError;

// Balanced book: 100 LST at 1.05 → 105 SOL TVL, 5_250 USD at $100 →
// 52.5 SOL liability, 42 LEV against the 52.5 SOL of equity.
fn make_state() -> GlobalState {
    GlobalState {
        version: 1,
        authority: Pubkey::default(),
        treasury: Pubkey::default(),
        stable_mint: Pubkey::default(),
        lev_mint: Pubkey::default(),
        supported_lst_mint: Pubkey::default(),
        vault: Pubkey::default(),
        vault_authority: Pubkey::default(),
        vault_authority_bump: 255,
        total_lst_amount: 100_000_000_000,
        stable_supply: 5_250_000_000,
        lev_supply: 42_000_000_000,
        min_cr_bps: 13_000,
        target_cr_bps: 15_000,
        stable_mint_fee_bps: 30,
        stable_redeem_fee_bps: 30,
        lev_mint_fee_bps: 30,
        lev_redeem_fee_bps: 50,
        fee_min_multiplier_bps: 10_000,
        fee_max_multiplier_bps: 40_000,
        uncertainty_index_bps: 0,
        uncertainty_max_bps: 20_000,
        rounding_reserve_lamports: 0,
        max_rounding_reserve_lamports: 100_000_000,
        max_oracle_staleness_slots: 25,
        max_conf_bps: 200,
        max_lst_stale_epochs: 1,
        last_tvl_update_slot: 0,
        last_oracle_update_slot: 0,
        last_lst_sync_epoch: 0,
        sol_usd_price: 100_000_000,
        lst_to_sol_rate: 1_050_000_000,
        oracle_confidence_usd: 0,
        mint_paused: false,
        redeem_paused: false,
        operation_counter: 7,
    }
}

#[test]
fn consistent_state_passes() {
    let state = make_state();
    assert!(check_invariants(&state, 100_000_000_000, 5_250_000_000, 42_000_000_000, 6).is_ok());
}

#[test]
fn vault_desync_detected() {
    let state = make_state();
    assert!(matches!(
        check_invariants(&state, 99_999_999_999, 5_250_000_000, 42_000_000_000, 6),
        Err(StrataError::InvariantViolation)
    ));
}

#[test]
fn stable_supply_desync_detected() {
    let state = make_state();
    assert!(matches!(
        check_invariants(&state, 100_000_000_000, 5_250_000_001, 42_000_000_000, 6),
        Err(StrataError::InvariantViolation)
    ));
}

#[test]
fn lev_supply_desync_detected() {
    let state = make_state();
    assert!(matches!(
        check_invariants(&state, 100_000_000_000, 5_250_000_000, 41_000_000_000, 6),
        Err(StrataError::InvariantViolation)
    ));
}

#[test]
fn counter_must_advance_by_exactly_one() {
    let state = make_state();
    // pre-counter equal to current → no advance
    assert!(matches!(
        check_invariants(&state, 100_000_000_000, 5_250_000_000, 42_000_000_000, 7),
        Err(StrataError::InvariantViolation)
    ));
    // skipped a step
    assert!(matches!(
        check_invariants(&state, 100_000_000_000, 5_250_000_000, 42_000_000_000, 5),
        Err(StrataError::InvariantViolation)
    ));
}

#[test]
fn cr_parameter_corruption_detected() {
    let mut state = make_state();
    state.target_cr_bps = 12_000; // below min_cr_bps
    assert!(matches!(
        check_invariants(&state, 100_000_000_000, 5_250_000_000, 42_000_000_000, 6),
        Err(StrataError::InvariantViolation)
    ));

    let mut state = make_state();
    state.min_cr_bps = 9_999; // below the 100% floor
    assert!(matches!(
        check_invariants(&state, 100_000_000_000, 5_250_000_000, 42_000_000_000, 6),
        Err(StrataError::InvariantViolation)
    ));
}

#[test]
fn reserve_above_cap_detected() {
    let mut state = make_state();
    state.rounding_reserve_lamports = state.max_rounding_reserve_lamports + 1;
    assert!(matches!(
        check_invariants(&state, 100_000_000_000, 5_250_000_000, 42_000_000_000, 6),
        Err(StrataError::InvariantViolation)
    ));
}

#[test]
fn insolvent_state_still_passes_the_balance_sheet_check() {
    // equity floors at zero below 100% CR; the tolerance check only
    // applies on the solvent side
    let mut state = make_state();
    state.sol_usd_price = 4_000_000; // $4 → liability 1_312.5 SOL >> 105 SOL TVL
    assert!(check_invariants(&state, 100_000_000_000, 5_250_000_000, 42_000_000_000, 6).is_ok());
}
