use ledger_interface::types::error::Error;
use soroban_sdk::{assert_with_error, Address, Env, Symbol};

use crate::event;
use crate::storage::{read_asset, read_position, write_position};

use super::utils::accrual::accrue_yield;
use super::utils::validation::{require_not_paused, require_positive_amount};

/// Moves raw holdings into the yield-bearing balance, 1:1. The staked
/// receipt is non-rebasing; yield accumulates in `accrued_yield` instead.
pub fn stake(env: &Env, who: &Address, asset: &Symbol, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let config = read_asset(env, asset)?;

    let mut position = read_position(env, who, asset);
    accrue_yield(env, &mut position, &config)?;

    assert_with_error!(
        env,
        amount <= position.raw_balance,
        Error::InsufficientBalance
    );

    position.raw_balance -= amount;
    position.staked_balance = position
        .staked_balance
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_position(env, who, asset, &position);

    event::stake(env, who, asset, amount);

    Ok(())
}
