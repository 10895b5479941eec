use crate::tests::sut::{fill_position, init_ledger, set_time, THOUSAND, YEAR};
use crate::*;
use soroban_sdk::testutils::Address as _;

#[test]
fn should_return_zeroed_position_for_unknown_user() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let user = Address::generate(&env);

    let position = sut.ledger.get_position(&user, &sut.invoices);
    assert_eq!(position.raw_balance, 0);
    assert_eq!(position.staked_balance, 0);
    assert_eq!(position.accrued_yield, 0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_fail_when_asset_not_found() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let user = Address::generate(&env);

    sut.ledger.get_position(&user, &Symbol::new(&env, "UNKNOWN"));
}

#[test]
fn should_accrue_yield_to_now() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let user = fill_position(&env, &sut);

    set_time(&env, YEAR / 2);

    // half a year of 8.5% on 1000 invoices
    let position = sut.ledger.get_position(&user, &sut.invoices);
    assert_eq!(position.accrued_yield, 425_000_000);
    assert_eq!(position.staked_balance, THOUSAND);
}

#[test]
fn should_not_persist_viewed_accrual() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let user = fill_position(&env, &sut);

    set_time(&env, YEAR / 2);
    sut.ledger.get_position(&user, &sut.invoices);

    set_time(&env, YEAR);

    // the view at half a year did not truncate the stream
    let position = sut.ledger.get_position(&user, &sut.invoices);
    assert_eq!(position.accrued_yield, 850_000_000);
}
