use common::FixedI128;
use ledger_interface::types::error::Error;
use ledger_interface::types::loan::Loan;
use ledger_interface::types::loan_status::LoanStatus;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::event;
use crate::storage::{read_asset, read_config, read_loan, read_position, write_loan, write_position};

use super::utils::accrual::{accrue_interest, accrue_yield};
use super::utils::collateral::{base_value, health_factor_of};
use super::utils::validation::require_not_paused;

/// Checked liquidation: succeeds only when the health factor has fallen
/// below the liquidation threshold. Locked collateral is seized out of the
/// borrower's staked balances and the debt is written off.
pub fn try_liquidate(env: &Env, liquidator: &Address, who: &Address) -> Result<(), Error> {
    liquidator.require_auth();

    require_not_paused(env);

    let mut loan = read_loan(env, who)
        .filter(Loan::is_active)
        .ok_or(Error::LoanNotFound)?;
    accrue_interest(env, &mut loan)?;

    let config = read_config(env)?;
    let threshold =
        FixedI128::from_percentage(config.liquidation_threshold).ok_or(Error::MathOverflowError)?;
    let health = health_factor_of(env, &loan)?;

    assert_with_error!(env, health < threshold, Error::NotLiquidatable);

    let mut seized_value = 0i128;
    for entry in loan.collateral.iter() {
        let asset_config = read_asset(env, &entry.asset)?;

        let mut position = read_position(env, who, &entry.asset);
        accrue_yield(env, &mut position, &asset_config)?;

        position.staked_balance = position
            .staked_balance
            .checked_sub(entry.amount)
            .ok_or(Error::MathOverflowError)?;
        position.accrued_yield = 0;
        write_position(env, who, &entry.asset, &position);

        seized_value = seized_value
            .checked_add(base_value(entry.amount, &asset_config)?)
            .ok_or(Error::MathOverflowError)?;
    }

    let covered_debt = loan.outstanding_debt;
    loan.outstanding_debt = 0;
    loan.status = LoanStatus::Liquidated;
    write_loan(env, who, &loan);

    event::liquidation(env, who, covered_debt, seized_value);

    Ok(())
}
