use soroban_sdk::contracttype;

/// `Repaid` and `Liquidated` are terminal
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[contracttype]
pub enum LoanStatus {
    Active,
    Repaid,
    Liquidated,
}
