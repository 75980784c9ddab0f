use soroban_sdk::{contracterror, contracttype, Address, Vec};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Pair,
    Total(u32),
    Provided,
    ProvidedAt,
    Liquidity,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Balance(Address, u32), // (Depositor, TokenIndex)
}

/// Immutable campaign parameters fixed by the constructor.
#[derive(Clone, Debug)]
#[contracttype]
pub struct CampaignConfig {
    pub router: Address,
    pub tokens: Vec<Address>,
    pub targets: Vec<i128>,
    pub deadline: u64,     // Deposits and seeding close at this timestamp
    pub unlock_delay: u64, // Seconds after seeding before claims open
}

/// Campaign phase as seen at the current ledger timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum CampaignPhase {
    Open,
    Expired,
    Provided,
}

/// Failure codes returned by the coordinator.
///
/// Phase violations (`CampaignExpired` through `BailUnavailable`) and no-op
/// rejections (`Nothing*`) never mutate state. Token and router failures are
/// not wrapped: they abort the invocation with the collaborator's own error.
/// Codes start at 100 so they never alias the Stellar asset contract's
/// error codes (1-13) when those surface through a failed deposit or refund.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SeedError {
    InvalidConfig = 100,
    InvalidIndex = 101,
    InvalidAmounts = 102,
    CampaignExpired = 103,
    TargetsNotMet = 104,
    AlreadyProvided = 105,
    NotProvided = 106,
    ClaimLocked = 107,
    BailUnavailable = 108,
    NothingToDeposit = 109,
    NothingToClaim = 110,
    NothingToBail = 111,
    IncompleteSeeding = 112,
    ArithmeticError = 113,
}

// Constants
pub const LEGS: u32 = 2; // Token A and token B
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
