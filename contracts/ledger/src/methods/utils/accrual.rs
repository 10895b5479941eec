use common::{FixedI128, ONE_YEAR};
use ledger_interface::types::asset_config::AssetConfig;
use ledger_interface::types::error::Error;
use ledger_interface::types::loan::Loan;
use ledger_interface::types::position::Position;
use soroban_sdk::Env;

/// Applies staking yield accumulated since the last touch of the position
/// and advances `last_accrual`. Called before every read or mutation, so no
/// scheduler is needed.
pub fn accrue_yield(env: &Env, position: &mut Position, config: &AssetConfig) -> Result<(), Error> {
    let now = env.ledger().timestamp();
    let elapsed = now.saturating_sub(position.last_accrual);
    position.last_accrual = now;

    if elapsed == 0 || position.staked_balance == 0 {
        return Ok(());
    }

    let accrued = annualized(config.yield_rate, elapsed)?
        .mul_int(position.staked_balance)
        .ok_or(Error::MathOverflowError)?;

    position.accrued_yield = position
        .accrued_yield
        .checked_add(accrued)
        .ok_or(Error::MathOverflowError)?;

    Ok(())
}

/// Compounds interest accumulated since the last touch into the outstanding
/// debt of an active loan
pub fn accrue_interest(env: &Env, loan: &mut Loan) -> Result<(), Error> {
    if !loan.is_active() {
        return Ok(());
    }

    let now = env.ledger().timestamp();
    let elapsed = now.saturating_sub(loan.last_accrual);
    loan.last_accrual = now;

    if elapsed == 0 || loan.outstanding_debt == 0 {
        return Ok(());
    }

    let interest = annualized(loan.interest_rate, elapsed)?
        .mul_int(loan.outstanding_debt)
        .ok_or(Error::MathOverflowError)?;

    loan.outstanding_debt = loan
        .outstanding_debt
        .checked_add(interest)
        .ok_or(Error::MathOverflowError)?;

    Ok(())
}

/// Annual rate scaled down to the elapsed period
fn annualized(rate: u32, elapsed: u64) -> Result<FixedI128, Error> {
    let rate = FixedI128::from_percentage(rate).ok_or(Error::MathOverflowError)?;
    let period = FixedI128::from_rational(i128::from(elapsed), i128::from(ONE_YEAR))
        .ok_or(Error::MathOverflowError)?;

    rate.checked_mul(period).ok_or(Error::MathOverflowError)
}
