use ledger_interface::types::error::Error;
use ledger_interface::types::loan::Loan;
use ledger_interface::types::loan_status::LoanStatus;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env, Symbol};

use crate::event;
use crate::storage::{read_asset, read_balance, read_loan, read_position, write_balance, write_position};

use super::utils::accrual::accrue_yield;
use super::utils::collateral::{base_value, in_early_window, locked_collateral};
use super::utils::validation::{require_not_paused, require_positive_amount};

/// Returns staked holdings to the raw balance. Collateral contributed to a
/// loan stays locked: for the whole life of an active loan, and for the
/// early window of the term even after payoff. Accumulated yield is claimed
/// to the stablecoin balance as a side effect.
pub fn unstake(env: &Env, who: &Address, asset: &Symbol, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let config = read_asset(env, asset)?;

    let mut position = read_position(env, who, asset);
    accrue_yield(env, &mut position, &config)?;

    assert_with_error!(
        env,
        amount <= position.staked_balance,
        Error::InsufficientBalance
    );

    let restricted = restricted_collateral(env, read_loan(env, who).as_ref(), asset);
    let available = position
        .staked_balance
        .checked_sub(restricted.amount)
        .ok_or(Error::MathOverflowError)?;

    if amount > available {
        if restricted.early_window {
            panic_with_error!(env, Error::EarlyUnstakeRestricted);
        }
        panic_with_error!(env, Error::CollateralLocked);
    }

    if position.accrued_yield > 0 {
        let claimed = base_value(position.accrued_yield, &config)?;

        // yield worth less than a stablecoin unit stays accrued for a
        // later claim
        if claimed > 0 {
            position.accrued_yield = 0;

            let balance = read_balance(env, who)
                .checked_add(claimed)
                .ok_or(Error::MathOverflowError)?;
            write_balance(env, who, balance);

            event::yield_claim(env, who, asset, claimed, false);
        }
    }

    position.staked_balance -= amount;
    position.raw_balance = position
        .raw_balance
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_position(env, who, asset, &position);

    event::unstake(env, who, asset, amount);

    Ok(())
}

struct RestrictedCollateral {
    amount: i128,
    early_window: bool,
}

/// Amount of `asset` the latest loan keeps out of reach. An active loan
/// locks its contribution outright; a repaid loan still inside the early
/// window keeps it locked until the window passes. Seized collateral of a
/// liquidated loan is already gone from the staked balance.
fn restricted_collateral(env: &Env, loan: Option<&Loan>, asset: &Symbol) -> RestrictedCollateral {
    let Some(loan) = loan else {
        return RestrictedCollateral {
            amount: 0,
            early_window: false,
        };
    };

    let early_window = in_early_window(env, loan);
    let locked = match loan.status {
        LoanStatus::Active => locked_collateral(loan, asset),
        LoanStatus::Repaid if early_window => locked_collateral(loan, asset),
        _ => 0,
    };

    RestrictedCollateral {
        amount: locked,
        early_window,
    }
}
