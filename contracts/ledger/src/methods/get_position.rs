use ledger_interface::types::error::Error;
use ledger_interface::types::position::Position;
use soroban_sdk::{Address, Env, Symbol};

use crate::storage::{read_asset, read_position};

use super::utils::accrual::accrue_yield;

/// Read-only view with yield accrued to now; the accrual is not persisted,
/// mutations re-derive it from `last_accrual`
pub fn get_position(env: &Env, who: &Address, asset: &Symbol) -> Result<Position, Error> {
    let config = read_asset(env, asset)?;

    let mut position = read_position(env, who, asset);
    accrue_yield(env, &mut position, &config)?;

    Ok(position)
}
