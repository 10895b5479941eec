use ledger_interface::types::error::Error;
use ledger_interface::types::loan::Loan;
use soroban_sdk::{Address, Env};

use crate::constants::HEALTH_FACTOR_SAFE;
use crate::storage::read_loan;

use super::utils::accrual::accrue_interest;
use super::utils::collateral::health_factor_of;

/// Health factor of the borrower's active loan as a FixedI128 inner value,
/// computed against interest accrued to now. The safe sentinel is reported
/// when there is no active debt.
pub fn health_factor(env: &Env, who: &Address) -> Result<i128, Error> {
    let Some(mut loan) = read_loan(env, who).filter(Loan::is_active) else {
        return Ok(HEALTH_FACTOR_SAFE);
    };

    accrue_interest(env, &mut loan)?;

    if loan.outstanding_debt == 0 {
        return Ok(HEALTH_FACTOR_SAFE);
    }

    Ok(health_factor_of(env, &loan)?.into_inner())
}
