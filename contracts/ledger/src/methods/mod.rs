pub mod claim_yield;
pub mod get_loan;
pub mod get_position;
pub mod health_factor;
pub mod init_asset;
pub mod initialize;
pub mod mint;
pub mod originate_loan;
pub mod repay_loan;
pub mod set_auto_repay;
pub mod set_pause;
pub mod stake;
pub mod try_liquidate;
pub mod unstake;
pub mod update_price;
pub mod utils;
