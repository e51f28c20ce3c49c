use anchor_lang::prelude::*;

#[error_code]
pub enum PassMintError {
    // Access control errors
    #[msg("Caller is not authorized to perform this action")]
    Unauthorized,

    // Claim engine errors
    #[msg("Requested units exceed remaining pool capacity")]
    CapacityExceeded,
    #[msg("Requested units exceed the remaining allowance of the verified source")]
    AllowanceExceeded,
    #[msg("No delegated source address matches the supplied proof")]
    InvalidProof,

    // Reveal and metadata errors
    #[msg("Metadata base path cannot be changed after the reveal")]
    InvariantViolation,
    #[msg("Invalid oracle account")]
    InvalidOracle,

    // Configuration errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Allowance commitment root cannot be empty")]
    InvalidCommitmentRoot,
    #[msg("Invalid pass credential")]
    InvalidPassCredential,
    #[msg("Invalid delegation registry")]
    InvalidDelegationRegistry,
    #[msg("Metadata path exceeds the maximum length")]
    UriTooLong,

    // Claim account plumbing errors
    #[msg("Delegation record is not a valid account of the configured registry")]
    InvalidDelegationRecord,
    #[msg("Claim accounting account does not match the verified source")]
    SourceAccountMismatch,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,
    #[msg("Token mint does not match the pool's token mint")]
    TokenMintMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
