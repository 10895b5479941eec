#![deny(warnings)]
#![no_std]

use ledger_interface::types::asset_config::AssetConfig;
use ledger_interface::types::collateral::Collateral;
use ledger_interface::types::error::Error;
use ledger_interface::types::loan::Loan;
use ledger_interface::types::pool_config::PoolConfig;
use ledger_interface::types::position::Position;
use ledger_interface::RwaLedgerTrait;
use methods::{
    claim_yield::claim_yield, get_loan::get_loan, get_position::get_position,
    health_factor::health_factor, init_asset::init_asset, initialize::initialize, mint::mint,
    originate_loan::originate_loan, repay_loan::repay_loan, set_auto_repay::set_auto_repay,
    set_pause::set_pause, stake::stake, try_liquidate::try_liquidate, unstake::unstake,
    update_price::update_price,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

use crate::storage::*;

mod constants;
mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct RwaLedger;

#[contractimpl]
impl RwaLedgerTrait for RwaLedger {
    fn initialize(env: Env, admin: Address, config: PoolConfig) -> Result<(), Error> {
        initialize(&env, &admin, &config)
    }

    fn version() -> u32 {
        1
    }

    fn set_pause(env: Env, value: bool) -> Result<(), Error> {
        set_pause(&env, value)
    }

    fn paused(env: Env) -> bool {
        paused(&env)
    }

    fn init_asset(env: Env, asset: Symbol, config: AssetConfig) -> Result<(), Error> {
        init_asset(&env, &asset, &config)
    }

    fn update_price(env: Env, asset: Symbol, price: i128) -> Result<(), Error> {
        update_price(&env, &asset, price)
    }

    fn get_asset(env: Env, asset: Symbol) -> Option<AssetConfig> {
        read_asset(&env, &asset).ok()
    }

    fn mint(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error> {
        mint(&env, &who, &asset, amount)
    }

    fn stake(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error> {
        stake(&env, &who, &asset, amount)
    }

    fn unstake(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error> {
        unstake(&env, &who, &asset, amount)
    }

    fn claim_yield(env: Env, who: Address, asset: Symbol) -> Result<i128, Error> {
        claim_yield(&env, &who, &asset)
    }

    fn set_auto_repay(
        env: Env,
        who: Address,
        asset: Symbol,
        enabled: bool,
    ) -> Result<(), Error> {
        set_auto_repay(&env, &who, &asset, enabled)
    }

    fn auto_repay(env: Env, who: Address, asset: Symbol) -> bool {
        read_auto_repay(&env, &who, &asset)
    }

    fn originate_loan(
        env: Env,
        who: Address,
        collateral: Vec<Collateral>,
        amount: i128,
        duration_months: u32,
    ) -> Result<(), Error> {
        originate_loan(&env, &who, &collateral, amount, duration_months)
    }

    fn repay_loan(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        repay_loan(&env, &who, amount)
    }

    fn try_liquidate(env: Env, liquidator: Address, who: Address) -> Result<(), Error> {
        try_liquidate(&env, &liquidator, &who)
    }

    fn health_factor(env: Env, who: Address) -> Result<i128, Error> {
        health_factor(&env, &who)
    }

    fn get_position(env: Env, who: Address, asset: Symbol) -> Result<Position, Error> {
        get_position(&env, &who, &asset)
    }

    fn get_loan(env: Env, who: Address) -> Option<Loan> {
        get_loan(&env, &who)
    }

    fn balance(env: Env, who: Address) -> i128 {
        read_balance(&env, &who)
    }
}
