use soroban_sdk::contracterror;

pub type RocketResult<T = ()> = Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    // Preconditions
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InvalidAmount = 4,
    InvalidFee = 5,
    DepositsDisabled = 6,
    DepositIdCollision = 7,
    DepositNotFound = 8,
    InvalidStatus = 9,
    InsufficientBalance = 10,
    DepositExceedsCapacity = 11,
    UnfundedDeposit = 12,
    InvalidChunkSize = 13,
    NodeDepositExists = 14,
    DepositsRemaining = 15,
    StakingNotStarted = 16,

    // Invariants
    ChunkNotFullyMatched = 20,
    QueueBalanceMismatch = 21,
    MathError = 22,
    DivisionByZero = 23,
    FailedUnwrap = 24,

    // Collaborators
    VaultTransferFailed = 30,
}
