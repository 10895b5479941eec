use ledger_interface::types::error::Error;
use ledger_interface::types::loan::Loan;
use ledger_interface::types::loan_status::LoanStatus;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::constants::DEBT_DUST;
use crate::event;
use crate::storage::{read_balance, read_loan, write_balance, write_loan};

use super::utils::accrual::accrue_interest;
use super::utils::validation::{require_not_paused, require_positive_amount};

pub fn repay_loan(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let mut loan = read_loan(env, who)
        .filter(Loan::is_active)
        .ok_or(Error::LoanNotFound)?;
    accrue_interest(env, &mut loan)?;

    let repayment = amount.min(loan.outstanding_debt);

    let balance = read_balance(env, who);
    assert_with_error!(env, balance >= repayment, Error::InsufficientBalance);
    write_balance(env, who, balance - repayment);

    apply_repayment(env, who, &mut loan, repayment)
}

/// Reduces the outstanding debt and closes the loan once only dust remains.
/// The caller settles funding and must pass an interest-accrued loan with
/// `repayment <= outstanding_debt`.
pub fn apply_repayment(
    env: &Env,
    who: &Address,
    loan: &mut Loan,
    repayment: i128,
) -> Result<(), Error> {
    loan.outstanding_debt = loan
        .outstanding_debt
        .checked_sub(repayment)
        .ok_or(Error::MathOverflowError)?;

    event::loan_repay(env, who, repayment, loan.outstanding_debt);

    if loan.outstanding_debt < DEBT_DUST {
        loan.outstanding_debt = 0;
        loan.status = LoanStatus::Repaid;

        event::loan_close(env, who);
    }

    write_loan(env, who, loan);

    Ok(())
}
