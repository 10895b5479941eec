use ledger_interface::types::loan::Loan;
use soroban_sdk::{Address, Env};

use crate::storage::read_loan;

use super::utils::accrual::accrue_interest;

/// Latest loan of `who` with interest accrued to now. Terminal loans are
/// returned as stored.
pub fn get_loan(env: &Env, who: &Address) -> Option<Loan> {
    let mut loan = read_loan(env, who)?;
    accrue_interest(env, &mut loan).ok()?;

    Some(loan)
}
