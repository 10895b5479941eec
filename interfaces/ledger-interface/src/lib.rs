#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Symbol, Vec};
use types::asset_config::AssetConfig;
use types::collateral::Collateral;
use types::error::Error;
use types::loan::Loan;
use types::pool_config::PoolConfig;
use types::position::Position;

pub mod types;

pub struct Spec;

/// Interface for the RWA lending ledger
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "RwaLedgerClient")]
pub trait RwaLedgerTrait {
    /// Sets the admin and risk configuration. Can be invoked only once.
    fn initialize(env: Env, admin: Address, config: PoolConfig) -> Result<(), Error>;

    fn version() -> u32;

    fn set_pause(env: Env, value: bool) -> Result<(), Error>;

    fn paused(env: Env) -> bool;

    /// Registers a collateral asset class in the catalog. Admin only.
    fn init_asset(env: Env, asset: Symbol, config: AssetConfig) -> Result<(), Error>;

    /// Replaces the oracle price of an asset. Admin only.
    /// Price is expressed in USD with 7 decimals per whole asset unit.
    fn update_price(env: Env, asset: Symbol, price: i128) -> Result<(), Error>;

    fn get_asset(env: Env, asset: Symbol) -> Option<AssetConfig>;

    /// Credits `amount` of the asset to the unstaked balance of `who`
    fn mint(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error>;

    /// Moves `amount` from the unstaked balance into the yield-bearing
    /// staked balance, 1:1
    fn stake(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error>;

    /// Moves `amount` back from the staked balance. Accumulated yield is
    /// claimed to the stablecoin balance as a side effect. Fails while the
    /// amount is locked as loan collateral or inside the early-loan window.
    fn unstake(env: Env, who: Address, asset: Symbol, amount: i128) -> Result<(), Error>;

    /// Claims accrued yield. Returns the claimed value in stablecoin units.
    /// With the auto-repay policy enabled and an active loan collateralized
    /// by `asset`, the value services the loan debt instead of the balance.
    fn claim_yield(env: Env, who: Address, asset: Symbol) -> Result<i128, Error>;

    fn set_auto_repay(env: Env, who: Address, asset: Symbol, enabled: bool)
        -> Result<(), Error>;

    fn auto_repay(env: Env, who: Address, asset: Symbol) -> bool;

    /// Opens a loan of `amount` stablecoin against a basket of staked
    /// collateral. One active loan per borrower.
    fn originate_loan(
        env: Env,
        who: Address,
        collateral: Vec<Collateral>,
        amount: i128,
        duration_months: u32,
    ) -> Result<(), Error>;

    /// Applies `amount` of the stablecoin balance to the outstanding debt.
    /// Repayment above the debt is capped at the debt.
    fn repay_loan(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    /// Seizes the collateral of an unhealthy loan. Fails with
    /// `NotLiquidatable` while the health factor is at or above the
    /// liquidation threshold.
    fn try_liquidate(env: Env, liquidator: Address, who: Address) -> Result<(), Error>;

    /// Health factor of the active loan of `who` as a FixedI128 inner value.
    /// Returns i128::MAX when there is no debt.
    fn health_factor(env: Env, who: Address) -> Result<i128, Error>;

    /// Current position with yield accrued to now. Zeroed record when
    /// nothing was ever minted.
    fn get_position(env: Env, who: Address, asset: Symbol) -> Result<Position, Error>;

    /// Latest loan of `who` with interest accrued to now
    fn get_loan(env: Env, who: Address) -> Option<Loan>;

    /// Liquid stablecoin balance of `who`
    fn balance(env: Env, who: Address) -> i128;
}
