pub mod asset_config;
pub mod collateral;
pub mod error;
pub mod loan;
pub mod loan_status;
pub mod pool_config;
pub mod position;
