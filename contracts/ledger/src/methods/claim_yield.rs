use ledger_interface::types::error::Error;
use ledger_interface::types::loan::Loan;
use soroban_sdk::{assert_with_error, Address, Env, Symbol};

use crate::event;
use crate::storage::{
    read_asset, read_auto_repay, read_balance, read_loan, read_position, write_balance,
    write_position,
};

use super::repay_loan::apply_repayment;
use super::utils::accrual::{accrue_interest, accrue_yield};
use super::utils::collateral::{base_value, locked_collateral};
use super::utils::validation::require_not_paused;

/// Claims accrued yield at the current oracle price. With the auto-repay
/// policy enabled and an active loan collateralized by `asset`, the value
/// services the debt first; only the surplus reaches the balance. Returns
/// the claimed stablecoin value.
pub fn claim_yield(env: &Env, who: &Address, asset: &Symbol) -> Result<i128, Error> {
    who.require_auth();

    require_not_paused(env);

    let config = read_asset(env, asset)?;

    let mut position = read_position(env, who, asset);
    accrue_yield(env, &mut position, &config)?;

    // covers both an empty accrual and one that floors to zero stablecoin
    // units, which would otherwise be destroyed on claim
    let claimed = base_value(position.accrued_yield, &config)?;
    assert_with_error!(env, claimed > 0, Error::NothingToClaim);

    position.accrued_yield = 0;
    write_position(env, who, asset, &position);

    let redirected = read_auto_repay(env, who, asset)
        .then(|| read_loan(env, who).filter(Loan::is_active))
        .flatten()
        .filter(|loan| locked_collateral(loan, asset) > 0);

    match redirected {
        Some(mut loan) => {
            accrue_interest(env, &mut loan)?;

            let repayment = claimed.min(loan.outstanding_debt);
            let surplus = claimed - repayment;

            if surplus > 0 {
                let balance = read_balance(env, who)
                    .checked_add(surplus)
                    .ok_or(Error::MathOverflowError)?;
                write_balance(env, who, balance);
            }

            apply_repayment(env, who, &mut loan, repayment)?;

            event::yield_claim(env, who, asset, claimed, true);
        }
        None => {
            let balance = read_balance(env, who)
                .checked_add(claimed)
                .ok_or(Error::MathOverflowError)?;
            write_balance(env, who, balance);

            event::yield_claim(env, who, asset, claimed, false);
        }
    }

    Ok(claimed)
}
