use soroban_sdk::{contracttype, Symbol};

/// Staked amount of one asset locked behind a loan
#[derive(Debug, Clone)]
#[contracttype]
pub struct Collateral {
    pub asset: Symbol,
    pub amount: i128,
}

impl Collateral {
    pub fn new(asset: Symbol, amount: i128) -> Self {
        Self { asset, amount }
    }
}
