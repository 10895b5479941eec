pub mod accrual;
pub mod collateral;
pub mod validation;
