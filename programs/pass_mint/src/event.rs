use anchor_lang::prelude::*;

/// Event emitted when a new pool is created
#[event]
pub struct PoolCreated {
    /// The pool account public key
    pub pool: Pubkey,
    /// Nonce of the pool
    pub nonce: u32,
    /// Authority of the pool
    pub authority: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Credential identifier handed to the delegation directory
    pub pass_credential: Pubkey,
    /// External delegation registry program
    pub delegation_registry: Pubkey,
    /// Oracle authority allowed to deliver randomness
    pub randomness_oracle: Pubkey,
    /// Fixed cap on total issuable units
    pub capacity: u64,
    /// Lamports charged per claimed unit
    pub claim_price: u64,
}

/// Event emitted when the allowance commitment root is set
#[event]
pub struct AllowanceRootSet {
    /// The pool account public key
    pub pool: Pubkey,
    /// Authority who set the root
    pub authority: Pubkey,
    /// The commitment root hash
    pub allowance_root: [u8; 32],
}

/// Event emitted when the metadata base path is set
#[event]
pub struct BaseUriSet {
    /// The pool account public key
    pub pool: Pubkey,
    /// Authority who set the path
    pub authority: Pubkey,
    /// The new metadata base path
    pub base_uri: String,
}

/// Event emitted when the placeholder metadata path is set
#[event]
pub struct PlaceholderUriSet {
    /// The pool account public key
    pub pool: Pubkey,
    /// Authority who set the path
    pub authority: Pubkey,
    /// The new placeholder path
    pub placeholder_uri: String,
}

/// Event emitted when units are claimed
#[event]
pub struct UnitsClaimed {
    /// The pool account public key
    pub pool: Pubkey,
    /// Address that received the units
    pub claimant: Pubkey,
    /// Source address whose allowance was charged
    pub source: Pubkey,
    /// Units issued in this transaction
    pub units: u64,
    /// Cumulative units charged to this source
    pub source_claimed_total: u64,
    /// Total units issued from the pool by all claims
    pub total_issued: u64,
}

/// Event emitted when the authority requests a randomized reveal
#[event]
pub struct RevealRequested {
    /// The pool account public key
    pub pool: Pubkey,
    /// Authority who triggered the request
    pub authority: Pubkey,
    /// Identifier of the randomness request
    pub request_id: [u8; 32],
    /// Lamports paid to the oracle for this request
    pub fee: u64,
}

/// Event emitted when the reveal is finalized, at most once per pool
#[event]
pub struct RevealFinalized {
    /// The pool account public key
    pub pool: Pubkey,
    /// Identifier echoed by the oracle callback
    pub request_id: [u8; 32],
    /// The finalized metadata offset, in [1, capacity)
    pub random_offset: u64,
}

/// Event emitted when accumulated funds are withdrawn
#[event]
pub struct FundsWithdrawn {
    /// The pool account public key
    pub pool: Pubkey,
    /// Authority who withdrew the funds
    pub authority: Pubkey,
    /// Lamports moved to the authority
    pub lamports: u64,
}
