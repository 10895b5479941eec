use common::FixedI128;
use ledger_interface::types::asset_config::AssetConfig;
use ledger_interface::types::collateral::Collateral;
use ledger_interface::types::error::Error;
use ledger_interface::types::loan::Loan;
use soroban_sdk::{Env, Symbol, Vec};

use crate::constants::{EARLY_UNSTAKE_WINDOW_PART, SECONDS_PER_MONTH};
use crate::storage::read_asset;

/// Value of an asset amount in stablecoin units at the current oracle price
pub fn base_value(amount: i128, config: &AssetConfig) -> Result<i128, Error> {
    let scale = 10i128
        .checked_pow(config.decimals)
        .ok_or(Error::MathOverflowError)?;

    amount
        .checked_mul(config.price)
        .ok_or(Error::MathOverflowError)?
        .checked_div(scale)
        .ok_or(Error::MathOverflowError)
}

/// Risk-adjusted value of a collateral basket: sum of amount * price,
/// discounted by each asset's collateral factor
pub fn discounted_value(env: &Env, collateral: &Vec<Collateral>) -> Result<i128, Error> {
    let mut total = 0i128;

    for entry in collateral.iter() {
        let config = read_asset(env, &entry.asset)?;
        let value = base_value(entry.amount, &config)?;

        let discounted = FixedI128::from_percentage(config.collateral_factor)
            .ok_or(Error::MathOverflowError)?
            .mul_int(value)
            .ok_or(Error::MathOverflowError)?;

        total = total
            .checked_add(discounted)
            .ok_or(Error::MathOverflowError)?;
    }

    Ok(total)
}

/// Staked amount of `asset` contributed to the loan's basket
pub fn locked_collateral(loan: &Loan, asset: &Symbol) -> i128 {
    let mut locked = 0i128;

    for entry in loan.collateral.iter() {
        if entry.asset.eq(asset) {
            locked += entry.amount;
        }
    }

    locked
}

/// True while the loan is inside the first fifth of its term, during which
/// contributed collateral cannot be unstaked regardless of payoff
pub fn in_early_window(env: &Env, loan: &Loan) -> bool {
    let elapsed = env.ledger().timestamp().saturating_sub(loan.originated_at);
    let duration = u64::from(loan.duration_months) * SECONDS_PER_MONTH;

    elapsed.saturating_mul(EARLY_UNSTAKE_WINDOW_PART) < duration
}

/// Health factor of an interest-accrued loan: discounted collateral value
/// over outstanding debt. The caller handles the zero-debt case.
pub fn health_factor_of(env: &Env, loan: &Loan) -> Result<FixedI128, Error> {
    let value = discounted_value(env, &loan.collateral)?;

    FixedI128::from_rational(value, loan.outstanding_debt).ok_or(Error::MathOverflowError)
}
