use soroban_sdk::contracttype;

/// Risk configuration, fixed at initialization
#[derive(Debug, Clone, Copy)]
#[contracttype]
pub struct PoolConfig {
    /// Annual interest rate applied to loans, percentage
    pub borrow_rate: u32,
    /// Health factor floor required at loan origination, percentage (> 100%)
    pub min_health_factor: u32,
    /// Health factor below which a loan becomes liquidatable, percentage
    pub liquidation_threshold: u32,
}
