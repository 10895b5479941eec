use soroban_sdk::contracttype;

/// Per (user, asset) balances. Never deleted, zeroed instead.
#[derive(Debug, Clone)]
#[contracttype]
pub struct Position {
    /// Unstaked holdings
    pub raw_balance: i128,
    /// Yield-bearing holdings
    pub staked_balance: i128,
    /// Claimable yield in asset units, accrued up to `last_accrual`
    pub accrued_yield: i128,
    pub last_accrual: u64,
}

impl Position {
    pub fn new(timestamp: u64) -> Self {
        Self {
            raw_balance: 0,
            staked_balance: 0,
            accrued_yield: 0,
            last_accrual: timestamp,
        }
    }
}
