use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Paused = 2,
    MathOverflowError = 3,
    MustBeLtePercentageFactor = 4,
    MustBeGtPercentageFactor = 5,

    AssetAlreadyInitialized = 100,
    AssetNotFound = 101,
    InvalidPrice = 102,

    InvalidAmount = 200,
    InsufficientBalance = 201,
    ExceedsMaxMint = 202,

    NothingToClaim = 300,

    LoanAlreadyActive = 400,
    LoanNotFound = 401,
    ExceedsMaxBorrow = 402,
    CollateralLocked = 403,
    EarlyUnstakeRestricted = 404,
    NotLiquidatable = 405,
    NoCollateral = 406,
    InvalidDuration = 407,
}
