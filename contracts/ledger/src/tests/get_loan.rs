use crate::tests::sut::{fill_loan, init_ledger, set_time, LOAN_500, YEAR};
use crate::*;
use ledger_interface::types::loan_status::LoanStatus;
use soroban_sdk::testutils::Address as _;

#[test]
fn should_return_none_for_unknown_borrower() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let user = Address::generate(&env);

    assert!(sut.ledger.get_loan(&user).is_none());
}

#[test]
fn should_report_interest_accrued_to_now() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_loan(&env, &sut);

    set_time(&env, YEAR);

    // a year of 12% on the $500 principal
    let loan = sut.ledger.get_loan(&borrower).unwrap();
    assert_eq!(loan.principal, LOAN_500);
    assert_eq!(loan.outstanding_debt, 5_600_000_000);
    assert_eq!(loan.status, LoanStatus::Active);
}

#[test]
fn should_freeze_terminal_loans() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let borrower = fill_loan(&env, &sut);

    sut.ledger.repay_loan(&borrower, &LOAN_500);

    set_time(&env, YEAR);

    // no interest accrues once the loan is closed
    let loan = sut.ledger.get_loan(&borrower).unwrap();
    assert_eq!(loan.outstanding_debt, 0);
    assert_eq!(loan.status, LoanStatus::Repaid);
}
