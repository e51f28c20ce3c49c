use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines the constant values used throughout the pass mint program:
 * the randomness request fee, the committed leaf encoding, the delegation
 * resolution policy, and the PDA derivation seeds.
 */

#[constant]
/// ===== REVEAL CONSTANTS =====

/// Fixed fee paid to the randomness oracle per reveal request
/// - Transferred from the authority to the oracle account on every trigger
/// - A failed fee transfer fails the whole trigger call
/// - Value: 2,000,000 lamports = 0.002 SOL
pub const REVEAL_REQUEST_FEE: u64 = 2_000_000;

/// ===== COMMITMENT ENCODING =====

/// Separator byte between the source address and the allowance in a leaf
/// - Leaf preimage: 32-byte source address, this separator, 8-byte
///   little-endian allowance
/// - Part of the commitment's public contract: off-chain tree builders must
///   reproduce the preimage byte for byte
pub const LEAF_SEPARATOR: &[u8] = b"_";

/// Maximum byte length accepted for the metadata base and placeholder paths
/// - Bounds the space reserved inside the pool account
pub const MAX_URI_LEN: usize = 200;

/// ===== DELEGATION RESOLUTION POLICY =====

/// Minimum pass count a delegation entry must carry to resolve
pub const MIN_PASS_COUNT: u32 = 1;

/// Whether non-primary delegation entries resolve
pub const INCLUDE_SECONDARY_PASSES: bool = true;

/// Whether inactive delegation entries resolve
pub const INCLUDE_INACTIVE_PASSES: bool = false;

/// ===== PDA SEED CONSTANTS =====

/// Seed for the authority nonce PDA derivation
/// - Used in: ["authority_nonce", authority]
/// - Tracks the pool counter per authority for automatic nonce assignment
pub const NONCE_SEED: &str = "authority_nonce";

/// Seed for the pool PDA derivation
/// - Used in: ["pool", token_mint, authority, nonce]
/// - One pool per (token, authority, nonce) combination
pub const POOL_SEED: &str = "pool";

/// Seed for the token vault PDA derivation
/// - Used in: ["vault", pool_key]
/// - The vault holds the pool's fixed supply and is controlled by the pool PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for the source claim PDA derivation
/// - Used in: ["claim", pool_key, source]
/// - One cumulative claim record per (pool, source address) pair
/// - Records are created on first claim and never closed
pub const CLAIM_SEED: &str = "claim";
