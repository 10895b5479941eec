use crate::tests::sut::init_ledger;
use crate::*;
use ledger_interface::types::asset_config::AssetConfig;
use soroban_sdk::String;

#[test]
fn should_register_catalog_entry() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);

    let config = sut.ledger.get_asset(&sut.invoices).unwrap();

    assert_eq!(config.decimals, 7);
    assert_eq!(config.price, 10_500_000);
    assert_eq!(config.collateral_factor, 7_500);
    assert_eq!(config.yield_rate, 850);

    assert!(sut.ledger.get_asset(&Symbol::new(&env, "UNKNOWN")).is_none());
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_fail_when_asset_already_initialized() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);

    sut.ledger.init_asset(
        &sut.invoices,
        &AssetConfig {
            name: String::from_str(&env, "Tokenized Invoices"),
            decimals: 7,
            price: 10_500_000,
            collateral_factor: 7_500,
            yield_rate: 850,
        },
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #4)")]
fn should_fail_when_collateral_factor_above_one() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);

    sut.ledger.init_asset(
        &Symbol::new(&env, "ESTATE"),
        &AssetConfig {
            name: String::from_str(&env, "Real Estate"),
            decimals: 7,
            price: 10_000_000,
            collateral_factor: 10_001,
            yield_rate: 500,
        },
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #102)")]
fn should_fail_when_price_is_not_positive() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);

    sut.ledger.init_asset(
        &Symbol::new(&env, "ESTATE"),
        &AssetConfig {
            name: String::from_str(&env, "Real Estate"),
            decimals: 7,
            price: 0,
            collateral_factor: 7_000,
            yield_rate: 500,
        },
    );
}
