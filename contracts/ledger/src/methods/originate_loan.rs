use common::FixedI128;
use ledger_interface::types::collateral::Collateral;
use ledger_interface::types::error::Error;
use ledger_interface::types::loan::Loan;
use ledger_interface::types::loan_status::LoanStatus;
use soroban_sdk::{assert_with_error, Address, Env, Map, Vec};

use crate::event;
use crate::storage::{
    read_asset, read_balance, read_config, read_loan, read_position, write_balance, write_loan,
    write_position,
};

use super::utils::accrual::accrue_yield;
use super::utils::collateral::discounted_value;
use super::utils::validation::{require_not_paused, require_positive_amount};

/// Opens a loan against a basket of staked collateral. The requested amount
/// must keep the health factor at or above the origination floor; the
/// proceeds are credited to the borrower's stablecoin balance.
pub fn originate_loan(
    env: &Env,
    who: &Address,
    collateral: &Vec<Collateral>,
    amount: i128,
    duration_months: u32,
) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    assert_with_error!(env, duration_months > 0, Error::InvalidDuration);
    assert_with_error!(env, !collateral.is_empty(), Error::NoCollateral);
    assert_with_error!(
        env,
        !read_loan(env, who).is_some_and(|loan| loan.is_active()),
        Error::LoanAlreadyActive
    );

    // one loan per borrower, so the whole staked balance is lockable;
    // duplicate basket entries are checked cumulatively
    let mut requested: Map<_, i128> = Map::new(env);
    for entry in collateral.iter() {
        require_positive_amount(env, entry.amount);

        let config = read_asset(env, &entry.asset)?;
        let mut position = read_position(env, who, &entry.asset);
        accrue_yield(env, &mut position, &config)?;
        write_position(env, who, &entry.asset, &position);

        let total = requested
            .get(entry.asset.clone())
            .unwrap_or(0)
            .checked_add(entry.amount)
            .ok_or(Error::MathOverflowError)?;

        assert_with_error!(
            env,
            total <= position.staked_balance,
            Error::InsufficientBalance
        );

        requested.set(entry.asset.clone(), total);
    }

    let config = read_config(env)?;

    let value = discounted_value(env, collateral)?;
    let max_borrow = FixedI128::from_percentage(config.min_health_factor)
        .ok_or(Error::MathOverflowError)?
        .recip_mul_int(value)
        .ok_or(Error::MathOverflowError)?;

    assert_with_error!(env, amount <= max_borrow, Error::ExceedsMaxBorrow);

    let now = env.ledger().timestamp();
    let loan = Loan {
        borrower: who.clone(),
        collateral: collateral.clone(),
        principal: amount,
        outstanding_debt: amount,
        interest_rate: config.borrow_rate,
        originated_at: now,
        last_accrual: now,
        duration_months,
        status: LoanStatus::Active,
    };
    write_loan(env, who, &loan);

    let balance = read_balance(env, who)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;
    write_balance(env, who, balance);

    event::loan_create(env, who, amount, duration_months);

    Ok(())
}
