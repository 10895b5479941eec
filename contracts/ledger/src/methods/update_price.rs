use ledger_interface::types::error::Error;
use soroban_sdk::{assert_with_error, Env, Symbol};

use crate::event;
use crate::storage::{read_asset, write_asset};

use super::utils::validation::require_admin;

/// Oracle price update. The price is the only runtime-mutable asset field.
pub fn update_price(env: &Env, asset: &Symbol, price: i128) -> Result<(), Error> {
    require_admin(env)?;

    assert_with_error!(env, price > 0, Error::InvalidPrice);

    let mut config = read_asset(env, asset)?;
    config.price = price;
    write_asset(env, asset, &config);

    event::price_update(env, asset, price);

    Ok(())
}
