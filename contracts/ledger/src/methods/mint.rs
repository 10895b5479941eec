use ledger_interface::types::error::Error;
use soroban_sdk::{assert_with_error, Address, Env, Symbol};

use crate::constants::MAX_MINT_WHOLE_UNITS;
use crate::event;
use crate::storage::{read_asset, read_position, write_position};

use super::utils::accrual::accrue_yield;
use super::utils::validation::{require_not_paused, require_positive_amount};

/// Faucet-style mint of the mock RWA token: any user may credit their own
/// unstaked balance, capped per call
pub fn mint(env: &Env, who: &Address, asset: &Symbol, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let config = read_asset(env, asset)?;

    let max_mint = 10i128
        .checked_pow(config.decimals)
        .and_then(|scale| scale.checked_mul(MAX_MINT_WHOLE_UNITS))
        .ok_or(Error::MathOverflowError)?;
    assert_with_error!(env, amount <= max_mint, Error::ExceedsMaxMint);

    let mut position = read_position(env, who, asset);
    accrue_yield(env, &mut position, &config)?;

    position.raw_balance = position
        .raw_balance
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_position(env, who, asset, &position);

    event::mint(env, who, asset, amount);

    Ok(())
}
