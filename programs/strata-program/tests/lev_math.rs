use anchor_lang::prelude::Pubkey;
use strata_program::components::{compute_mint_lev, compute_redeem_lev, pricing_view};
use strata_program::states::GlobalState;
use strata_program::utils::StrataError;

fn make_state(total_lst: u64, stable_supply: u64, lev_supply: u64) -> GlobalState {
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
        total_lst_amount: total_lst,
        stable_supply,
        lev_supply,
        min_cr_bps: 13_000,
        target_cr_bps: 15_000,
        stable_mint_fee_bps: 50,
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
        sol_usd_price: 100_000_000,  // $100.00
        lst_to_sol_rate: 1_050_000_000, // 1.05 SOL per LST
        oracle_confidence_usd: 0,
        mint_paused: false,
        redeem_paused: false,
        operation_counter: 0,
    }
}

// --- minting ---

#[test]
fn first_mint_bootstraps_one_to_one() {
    // Empty vault. Deposit 10 LST at rate 1.05:
    //   sol_in    = 10.5 SOL → lev_gross = 10_500_000_000 exactly (1:1)
    //   CR at sentinel → base fee 30 bps
    //   fee  = ceil(10_500_000_000 * 30 / 10_000) = 31_500_000
    //   user = 10_468_500_000
    let state = make_state(0, 0, 0);
    let pricing = pricing_view(&state).unwrap();
    let result = compute_mint_lev(&state, &pricing, 10_000_000_000, 1).unwrap();

    assert_eq!(result.sol_in, 10_500_000_000);
    assert_eq!(result.lev_gross, 10_500_000_000);
    assert_eq!(result.fee_bps, 30);
    assert_eq!(result.fee_lev, 31_500_000);
    assert_eq!(result.user_lev, 10_468_500_000);
}

#[test]
fn later_mints_price_at_nav() {
    // 100 LST → 105 SOL TVL; 5_250 USD → 52.5 SOL liability;
    // 42 LEV over 52.5 SOL equity → NAV 1.25 SOL.
    // Deposit 10 LST: sol_in 10.5 → lev_gross = 10.5 / 1.25 = 8.4
    let state = make_state(100_000_000_000, 5_250_000_000, 42_000_000_000);
    let pricing = pricing_view(&state).unwrap();
    assert_eq!(pricing.lev_nav_sol, 1_250_000_000);

    let result = compute_mint_lev(&state, &pricing, 10_000_000_000, 1).unwrap();
    assert_eq!(result.lev_gross, 8_400_000_000);
    assert_eq!(result.fee_lev, 25_200_000);
    assert_eq!(result.user_lev, 8_374_800_000);
}

#[test]
fn donation_cannot_inflate_the_first_mint() {
    // LST sitting in the vault with zero supply does not change the
    // 1:1 bootstrap: the first minter still gets sol_in worth.
    let state = make_state(50_000_000_000, 0, 0);
    let pricing = pricing_view(&state).unwrap();
    let result = compute_mint_lev(&state, &pricing, 10_000_000_000, 1).unwrap();
    assert_eq!(result.lev_gross, 10_500_000_000);
}

#[test]
fn minting_against_wiped_equity_rejected() {
    // supply outstanding but equity zero → no meaningful NAV
    let mut state = make_state(9_500_000_000, 1_000_000_000, 5_000_000_000);
    state.lst_to_sol_rate = 1_000_000_000;
    let pricing = pricing_view(&state).unwrap();
    assert_eq!(pricing.lev_nav_sol, 0);
    assert!(matches!(
        compute_mint_lev(&state, &pricing, 10_000_000_000, 1),
        Err(StrataError::InsolventProtocol)
    ));
}

#[test]
fn tiny_lev_mint_rejected_as_dust() {
    // 900 LST base units → 945 lamports → 945 LEV units < 1_000
    let state = make_state(0, 0, 0);
    let pricing = pricing_view(&state).unwrap();
    assert!(matches!(
        compute_mint_lev(&state, &pricing, 900, 1),
        Err(StrataError::AmountTooSmall)
    ));
}

// --- redeeming ---

#[test]
fn redeem_pays_nav_minus_fee() {
    // NAV 1.25 (as above). Redeem 8 LEV:
    //   sol_out       = 8 * 1.25 = 10 SOL
    //   lst_out_gross = 10 / 1.05 = 9_523_809_523 (floor)
    //   fee (50 bps)  = ceil(9_523_809_523 * 50 / 10_000) = 47_619_048
    //   user          = 9_476_190_475
    let state = make_state(100_000_000_000, 5_250_000_000, 42_000_000_000);
    let pricing = pricing_view(&state).unwrap();
    let result = compute_redeem_lev(&state, &pricing, 8_000_000_000, 1).unwrap();

    assert_eq!(result.sol_out, 10_000_000_000);
    assert_eq!(result.lst_out_gross, 9_523_809_523);
    assert_eq!(result.fee_bps, 50);
    assert_eq!(result.fee_lst, 47_619_048);
    assert_eq!(result.user_lst, 9_476_190_475);
    // sol_paid = floor(9_523_809_523 * 1.05) = 9_999_999_999
    assert_eq!(result.reserve_delta_lamports, 1);
    // post: (105 - 9.999999999) / 52.5 = 18_095 bps
    assert_eq!(result.cr_post_bps, 18_095);
}

#[test]
fn redeem_that_breaks_the_cr_floor_is_rejected() {
    // 14 SOL TVL / 10 SOL liability → CR 14_000; equity 4 SOL over
    // 4 LEV → NAV 1.0. Redeeming 2 LEV would drop TVL to 12 SOL →
    // CR 12_000 < 13_000.
    let mut state = make_state(14_000_000_000, 1_000_000_000, 4_000_000_000);
    state.lst_to_sol_rate = 1_000_000_000;
    let pricing = pricing_view(&state).unwrap();
    assert!(matches!(
        compute_redeem_lev(&state, &pricing, 2_000_000_000, 1),
        Err(StrataError::CollateralRatioTooLow)
    ));
}

#[test]
fn redeem_with_no_equity_fails_hard() {
    // junior tranche absorbs the loss: under 100% CR there is nothing
    // to redeem against
    let mut state = make_state(9_500_000_000, 1_000_000_000, 5_000_000_000);
    state.lst_to_sol_rate = 1_000_000_000;
    let pricing = pricing_view(&state).unwrap();
    assert!(matches!(
        compute_redeem_lev(&state, &pricing, 1_000_000_000, 1),
        Err(StrataError::InsolventProtocol)
    ));
}

#[test]
fn redeem_with_no_liability_skips_the_cr_gate() {
    // only LEV outstanding: CR stays at the sentinel, the floor can
    // never bind
    let state = make_state(10_000_000_000, 0, 10_500_000_000);
    let pricing = pricing_view(&state).unwrap();
    let result = compute_redeem_lev(&state, &pricing, 1_000_000_000, 1).unwrap();
    assert!(result.user_lst > 0);
    assert_eq!(result.cr_post_bps, u64::MAX);
}
