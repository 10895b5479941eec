use soroban_sdk::{contracttype, String};

/// Catalog entry of a collateral asset class.
///
/// `price` is the only field mutable after registration; rate or factor
/// changes would retroactively reprice existing loans and require a
/// migration instead.
#[derive(Debug, Clone)]
#[contracttype]
pub struct AssetConfig {
    pub name: String,
    /// Number of decimals of asset amounts
    pub decimals: u32,
    /// Oracle price in stablecoin units (7 decimals) per whole asset unit
    pub price: i128,
    /// Fraction of the asset value creditable as borrowing power [0%, 100%]
    pub collateral_factor: u32,
    /// Annual staking yield, percentage
    pub yield_rate: u32,
}
