use ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env, Symbol};

use crate::event;
use crate::storage::write_auto_repay;

use super::utils::validation::require_not_paused;

/// Idempotent policy toggle consumed by the yield claim path
pub fn set_auto_repay(
    env: &Env,
    who: &Address,
    asset: &Symbol,
    enabled: bool,
) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);

    write_auto_repay(env, who, asset, enabled);

    event::auto_repay_set(env, who, asset, enabled);

    Ok(())
}
