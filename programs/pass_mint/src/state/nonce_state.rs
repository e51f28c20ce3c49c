use anchor_lang::prelude::*;

/**
 * Nonce state account
 *
 * Tracks the pool counter for each authority, enabling automatic nonce
 * assignment when the same authority creates several pools.
 *
 * Derivation: ["authority_nonce", authority]
 *
 * Lifecycle:
 * 1. Created on the authority's first pool (using init_if_needed)
 * 2. Incremented with each further pool creation
 * 3. Persistent across pools
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Increments with each pool creation
    /// - Ensures unique nonces for each authority's pools
    pub nonce: u32,
}

impl NonceState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();
}
