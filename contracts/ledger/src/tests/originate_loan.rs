use crate::tests::sut::{fill_loan, fill_position, init_ledger, LOAN_500, THOUSAND};
use crate::*;
use ledger_interface::types::collateral::Collateral;
use ledger_interface::types::loan_status::LoanStatus;
use soroban_sdk::vec;

#[test]
fn should_credit_proceeds_and_record_loan() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_position(&env, &sut);

    sut.ledger.originate_loan(
        &borrower,
        &vec![&env, Collateral::new(sut.invoices.clone(), THOUSAND)],
        &LOAN_500,
        &12,
    );

    let loan = sut.ledger.get_loan(&borrower).unwrap();
    assert_eq!(loan.borrower, borrower);
    assert_eq!(loan.principal, LOAN_500);
    assert_eq!(loan.outstanding_debt, LOAN_500);
    assert_eq!(loan.interest_rate, 1_200);
    assert_eq!(loan.duration_months, 12);
    assert_eq!(loan.status, LoanStatus::Active);

    assert_eq!(sut.ledger.balance(&borrower), LOAN_500);

    // $787.5 of discounted collateral against a $500 debt
    assert_eq!(sut.ledger.health_factor(&borrower), 1_575_000_000);
}

#[test]
fn should_borrow_up_to_origination_floor() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_position(&env, &sut);

    // $787.5 discounted collateral divided by the 1.40 floor
    sut.ledger.originate_loan(
        &borrower,
        &vec![&env, Collateral::new(sut.invoices.clone(), THOUSAND)],
        &5_625_000_000,
        &12,
    );

    assert_eq!(sut.ledger.balance(&borrower), 5_625_000_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #402)")]
fn should_fail_when_exceeds_max_borrow() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_position(&env, &sut);

    sut.ledger.originate_loan(
        &borrower,
        &vec![&env, Collateral::new(sut.invoices.clone(), THOUSAND)],
        &5_630_000_000,
        &12,
    );
}

#[test]
fn should_aggregate_collateral_basket() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_position(&env, &sut);

    // 10 t-bills at 9 decimals, $100 each
    let tbills_amount = 10_000_000_000i128;
    sut.ledger.mint(&borrower, &sut.tbills, &tbills_amount);
    sut.ledger.stake(&borrower, &sut.tbills, &tbills_amount);

    // basket is worth $787.5 + $800 discounted, more than either leg allows
    sut.ledger.originate_loan(
        &borrower,
        &vec![
            &env,
            Collateral::new(sut.invoices.clone(), THOUSAND),
            Collateral::new(sut.tbills.clone(), tbills_amount),
        ],
        &11_000_000_000,
        &12,
    );

    assert_eq!(sut.ledger.balance(&borrower), 11_000_000_000);

    let loan = sut.ledger.get_loan(&borrower).unwrap();
    assert_eq!(loan.collateral.len(), 2);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #201)")]
fn should_fail_when_duplicate_entries_exceed_staked() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_position(&env, &sut);

    let six_hundred = 6_000_000_000i128;
    sut.ledger.originate_loan(
        &borrower,
        &vec![
            &env,
            Collateral::new(sut.invoices.clone(), six_hundred),
            Collateral::new(sut.invoices.clone(), six_hundred),
        ],
        &1_000_000_000,
        &12,
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #400)")]
fn should_fail_when_loan_already_active() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_loan(&env, &sut);

    sut.ledger.originate_loan(
        &borrower,
        &vec![&env, Collateral::new(sut.invoices.clone(), THOUSAND)],
        &1_000_000_000,
        &12,
    );
}

#[test]
fn should_allow_new_loan_after_repayment() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_loan(&env, &sut);

    sut.ledger.repay_loan(&borrower, &LOAN_500);

    sut.ledger.originate_loan(
        &borrower,
        &vec![&env, Collateral::new(sut.invoices.clone(), THOUSAND)],
        &LOAN_500,
        &6,
    );

    let loan = sut.ledger.get_loan(&borrower).unwrap();
    assert_eq!(loan.status, LoanStatus::Active);
    assert_eq!(loan.duration_months, 6);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #406)")]
fn should_fail_when_no_collateral() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_position(&env, &sut);

    sut.ledger
        .originate_loan(&borrower, &vec![&env], &LOAN_500, &12);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #407)")]
fn should_fail_when_invalid_duration() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_position(&env, &sut);

    sut.ledger.originate_loan(
        &borrower,
        &vec![&env, Collateral::new(sut.invoices.clone(), THOUSAND)],
        &LOAN_500,
        &0,
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #200)")]
fn should_fail_when_invalid_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_position(&env, &sut);

    sut.ledger.originate_loan(
        &borrower,
        &vec![&env, Collateral::new(sut.invoices.clone(), THOUSAND)],
        &0,
        &12,
    );
}
