use common::ONE_YEAR;

/// Loan durations are quoted in months
pub(crate) const SECONDS_PER_MONTH: u64 = ONE_YEAR / 12;

/// Outstanding debt below 0.01 stablecoin unit closes the loan on repayment
pub(crate) const DEBT_DUST: i128 = 100_000;

/// Collateral cannot be unstaked during the first 1/5 of the loan term
pub(crate) const EARLY_UNSTAKE_WINDOW_PART: u64 = 5;

/// Faucet cap per mint call, in whole asset units
pub(crate) const MAX_MINT_WHOLE_UNITS: i128 = 1_000_000;

/// Health factor sentinel reported while there is no debt
pub(crate) const HEALTH_FACTOR_SAFE: i128 = i128::MAX;
