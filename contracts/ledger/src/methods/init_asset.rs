use ledger_interface::types::asset_config::AssetConfig;
use ledger_interface::types::error::Error;
use soroban_sdk::{assert_with_error, Env, Symbol};

use crate::event;
use crate::storage::{has_asset, write_asset};

use super::utils::validation::{require_admin, require_valid_asset_config};

pub fn init_asset(env: &Env, asset: &Symbol, config: &AssetConfig) -> Result<(), Error> {
    require_admin(env)?;

    assert_with_error!(
        env,
        !has_asset(env, asset),
        Error::AssetAlreadyInitialized
    );
    require_valid_asset_config(env, config);

    write_asset(env, asset, config);

    event::asset_init(env, asset);

    Ok(())
}
