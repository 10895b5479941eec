use crate::tests::sut::init_ledger;
use crate::*;

#[test]
fn should_replace_price_and_keep_other_fields() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);

    sut.ledger.update_price(&sut.invoices, &12_000_000);

    let config = sut.ledger.get_asset(&sut.invoices).unwrap();
    assert_eq!(config.price, 12_000_000);
    assert_eq!(config.collateral_factor, 7_500);
    assert_eq!(config.yield_rate, 850);
}

#[test]
fn should_require_admin_auth() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);

    sut.ledger.update_price(&sut.invoices, &12_000_000);

    assert_eq!(env.auths().pop().map(|(who, _)| who).unwrap(), sut.admin);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #102)")]
fn should_fail_when_price_is_not_positive() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);

    sut.ledger.update_price(&sut.invoices, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_fail_when_asset_not_found() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);

    sut.ledger
        .update_price(&Symbol::new(&env, "UNKNOWN"), &10_000_000);
}
