use ledger_interface::types::error::Error;
use ledger_interface::types::pool_config::PoolConfig;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{write_admin, write_config};

use super::utils::validation::{require_admin_not_exist, require_valid_pool_config};

pub fn initialize(env: &Env, admin: &Address, config: &PoolConfig) -> Result<(), Error> {
    require_admin_not_exist(env);
    require_valid_pool_config(env, config);

    write_admin(env, admin);
    write_config(env, config);

    event::initialized(env, admin, config);

    Ok(())
}
