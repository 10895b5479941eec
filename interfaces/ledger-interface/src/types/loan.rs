use soroban_sdk::{contracttype, Address, Vec};

use super::collateral::Collateral;
use super::loan_status::LoanStatus;

#[derive(Debug, Clone)]
#[contracttype]
pub struct Loan {
    pub borrower: Address,
    /// Basket of staked collateral locked while the loan is active
    pub collateral: Vec<Collateral>,
    /// Stablecoin amount credited at origination
    pub principal: i128,
    /// Principal plus accrued interest minus repayments,
    /// accrued up to `last_accrual`
    pub outstanding_debt: i128,
    /// Annual interest rate, percentage
    pub interest_rate: u32,
    pub originated_at: u64,
    pub last_accrual: u64,
    pub duration_months: u32,
    pub status: LoanStatus,
}

impl Loan {
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }
}
