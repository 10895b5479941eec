use common::PERCENTAGE_FACTOR;
use ledger_interface::types::asset_config::AssetConfig;
use ledger_interface::types::error::Error;
use ledger_interface::types::pool_config::PoolConfig;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{has_admin, paused, read_admin};

pub fn require_admin_not_exist(env: &Env) {
    if has_admin(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_admin(env: &Env) -> Result<(), Error> {
    let admin: Address = read_admin(env)?;
    admin.require_auth();
    Ok(())
}

pub fn require_not_paused(env: &Env) {
    assert_with_error!(env, !paused(env), Error::Paused);
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_lte_percentage_factor(env: &Env, value: u32) {
    assert_with_error!(
        env,
        value <= PERCENTAGE_FACTOR,
        Error::MustBeLtePercentageFactor
    );
}

pub fn require_gt_percentage_factor(env: &Env, value: u32) {
    assert_with_error!(
        env,
        value > PERCENTAGE_FACTOR,
        Error::MustBeGtPercentageFactor
    );
}

pub fn require_valid_pool_config(env: &Env, config: &PoolConfig) {
    require_lte_percentage_factor(env, config.borrow_rate);
    require_gt_percentage_factor(env, config.min_health_factor);
    require_gt_percentage_factor(env, config.liquidation_threshold);
}

pub fn require_valid_asset_config(env: &Env, config: &AssetConfig) {
    require_lte_percentage_factor(env, config.collateral_factor);
    require_lte_percentage_factor(env, config.yield_rate);
    assert_with_error!(env, config.price > 0, Error::InvalidPrice);
}
