use ledger_interface::types::pool_config::PoolConfig;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address, config: &PoolConfig) {
    let topics = (Symbol::new(e, "initialize"), admin);
    e.events().publish(
        topics,
        (
            config.borrow_rate,
            config.min_health_factor,
            config.liquidation_threshold,
        ),
    );
}

pub(crate) fn asset_init(e: &Env, asset: &Symbol) {
    let topics = (Symbol::new(e, "asset_init"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn price_update(e: &Env, asset: &Symbol, price: i128) {
    let topics = (Symbol::new(e, "price_update"), asset.clone());
    e.events().publish(topics, price);
}

pub(crate) fn mint(e: &Env, who: &Address, asset: &Symbol, amount: i128) {
    let topics = (symbol_short!("mint"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn stake(e: &Env, who: &Address, asset: &Symbol, amount: i128) {
    let topics = (symbol_short!("stake"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn unstake(e: &Env, who: &Address, asset: &Symbol, amount: i128) {
    let topics = (symbol_short!("unstake"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn yield_claim(e: &Env, who: &Address, asset: &Symbol, amount: i128, redirected: bool) {
    let topics = (Symbol::new(e, "yield_claim"), who.clone());
    e.events().publish(topics, (asset.clone(), amount, redirected));
}

pub(crate) fn auto_repay_set(e: &Env, who: &Address, asset: &Symbol, enabled: bool) {
    let topics = (Symbol::new(e, "auto_repay_set"), who.clone());
    e.events().publish(topics, (asset.clone(), enabled));
}

pub(crate) fn loan_create(e: &Env, who: &Address, amount: i128, duration_months: u32) {
    let topics = (Symbol::new(e, "loan_create"), who.clone());
    e.events().publish(topics, (amount, duration_months));
}

pub(crate) fn loan_repay(e: &Env, who: &Address, amount: i128, outstanding_debt: i128) {
    let topics = (Symbol::new(e, "loan_repay"), who.clone());
    e.events().publish(topics, (amount, outstanding_debt));
}

pub(crate) fn loan_close(e: &Env, who: &Address) {
    let topics = (Symbol::new(e, "loan_close"), who.clone());
    e.events().publish(topics, ());
}

pub(crate) fn liquidation(e: &Env, who: &Address, covered_debt: i128, seized_value: i128) {
    let topics = (Symbol::new(e, "liquidation"), who.clone());
    e.events().publish(topics, (covered_debt, seized_value));
}
