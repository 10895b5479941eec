use ledger_interface::types::asset_config::AssetConfig;
use ledger_interface::types::error::Error;
use ledger_interface::types::loan::Loan;
use ledger_interface::types::pool_config::PoolConfig;
use ledger_interface::types::position::Position;
use soroban_sdk::{contracttype, Address, Env, Symbol};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 20 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 30 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    Pause,
    Asset(Symbol),
    Position(Address, Symbol),
    Balance(Address),
    Loan(Address),
    AutoRepay(Address, Symbol),
}

pub fn has_admin(env: &Env) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_config(env: &Env, config: &PoolConfig) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<PoolConfig, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::Uninitialized)
}

pub fn paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Pause)
        .unwrap_or(false)
}

pub fn write_pause(env: &Env, value: bool) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::Pause, &value);
}

pub fn has_asset(env: &Env, asset: &Symbol) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .has(&DataKey::Asset(asset.clone()))
}

pub fn read_asset(env: &Env, asset: &Symbol) -> Result<AssetConfig, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Asset(asset.clone()))
        .ok_or(Error::AssetNotFound)
}

pub fn write_asset(env: &Env, asset: &Symbol, config: &AssetConfig) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    let asset_key = DataKey::Asset(asset.clone());
    env.storage().instance().set(&asset_key, config);
}

/// Missing records read as a zeroed position starting accrual at now
pub fn read_position(env: &Env, who: &Address, asset: &Symbol) -> Position {
    let key = DataKey::Position(who.clone(), asset.clone());
    let position: Option<Position> = env.storage().persistent().get(&key);

    if position.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    position.unwrap_or_else(|| Position::new(env.ledger().timestamp()))
}

pub fn write_position(env: &Env, who: &Address, asset: &Symbol, position: &Position) {
    let key = DataKey::Position(who.clone(), asset.clone());
    env.storage().persistent().set(&key, position);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn read_balance(env: &Env, who: &Address) -> i128 {
    let key = DataKey::Balance(who.clone());
    let balance: Option<i128> = env.storage().persistent().get(&key);

    if balance.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    balance.unwrap_or(0i128)
}

pub fn write_balance(env: &Env, who: &Address, balance: i128) {
    let key = DataKey::Balance(who.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn read_loan(env: &Env, who: &Address) -> Option<Loan> {
    let key = DataKey::Loan(who.clone());
    let loan: Option<Loan> = env.storage().persistent().get(&key);

    if loan.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    loan
}

pub fn write_loan(env: &Env, who: &Address, loan: &Loan) {
    let key = DataKey::Loan(who.clone());
    env.storage().persistent().set(&key, loan);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn read_auto_repay(env: &Env, who: &Address, asset: &Symbol) -> bool {
    let key = DataKey::AutoRepay(who.clone(), asset.clone());
    let enabled: Option<bool> = env.storage().persistent().get(&key);

    if enabled.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    enabled.unwrap_or(false)
}

pub fn write_auto_repay(env: &Env, who: &Address, asset: &Symbol, enabled: bool) {
    let key = DataKey::AutoRepay(who.clone(), asset.clone());
    env.storage().persistent().set(&key, &enabled);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}
