use anchor_lang::prelude::*;

use crate::constants::MAX_URI_LEN;
use crate::error::PassMintError;

/**
 * Main pool state account
 *
 * This struct represents one pass-gated drop: a fixed supply of units held in
 * a vault, an allowance commitment gating who may claim them, and the state of
 * the one-time randomized metadata reveal.
 *
 * Derivation: ["pool", token_mint, authority, nonce]
 *
 * Lifecycle:
 * 1. Created during create_pool, vault funded with exactly `capacity` units
 * 2. Updated when the authority sets the allowance root and metadata paths
 * 3. Updated during claims (total_issued increments)
 * 4. Finalized at most once by the oracle reveal callback
 */
#[account]
#[derive(Default, Debug)]
pub struct MintPool {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during claim operations
    pub bump: u8,

    /// Nonce number for this pool
    /// - Allows multiple pools for the same token/authority pair
    pub nonce: u32,

    /// Single administrative authority
    /// - Sets the root and metadata paths, triggers the reveal, withdraws funds
    pub authority: Pubkey,

    /// Token mint of the distributed units
    pub token_mint: Pubkey,

    /// Token vault holding the undistributed supply
    /// - Controlled by the pool PDA
    /// - Derived from: ["vault", pool_key]
    pub token_vault: Pubkey,

    /// Credential identifier handed to the delegation directory on every
    /// resolution
    pub pass_credential: Pubkey,

    /// External registry program whose accounts are the authoritative
    /// delegation directory
    pub delegation_registry: Pubkey,

    /// Oracle authority
    /// - Receives the request fee and is the only signer the reveal callback
    ///   accepts
    pub randomness_oracle: Pubkey,

    /// Fixed cap on total issuable units
    /// - Set once at creation, validated nonzero, never changed
    /// - Also bounds the modular metadata offset
    pub capacity: u64,

    /// Total units issued by all claims so far
    pub total_issued: u64,

    /// Lamports charged per claimed unit, paid into the pool account
    /// - Zero disables the fee
    pub claim_price: u64,

    /// Allowance commitment root
    /// - 32-byte hash committing every (source address, allowance) pair
    /// - All zeroes means unset; replacing it never revalidates recorded
    ///   claims
    pub allowance_root: [u8; 32],

    /// Whether the metadata ordering has been revealed
    pub revealed: bool,

    /// Finalized metadata offset
    /// - Zero doubles as the "not yet finalized" sentinel, so a callback
    ///   whose value reduces to zero leaves the machine untriggered
    pub random_offset: u64,

    /// Identifier of the most recent randomness request or callback
    pub reveal_request_id: [u8; 32],

    /// Counter feeding request id derivation, one increment per trigger
    pub reveal_request_nonce: u64,

    /// Metadata base path, frozen once revealed
    pub base_uri: String,

    /// Placeholder path served for every token before the reveal
    pub placeholder_uri: String,
}

impl MintPool {
    /// Space required for this account
    /// - 8-byte discriminator + fixed fields + two length-prefixed paths
    pub const LEN: usize = 8   // discriminator
        + 1                    // bump
        + 4                    // nonce
        + 32                   // authority
        + 32                   // token_mint
        + 32                   // token_vault
        + 32                   // pass_credential
        + 32                   // delegation_registry
        + 32                   // randomness_oracle
        + 8                    // capacity
        + 8                    // total_issued
        + 8                    // claim_price
        + 32                   // allowance_root
        + 1                    // revealed
        + 8                    // random_offset
        + 32                   // reveal_request_id
        + 8                    // reveal_request_nonce
        + (4 + MAX_URI_LEN)    // base_uri
        + (4 + MAX_URI_LEN);   // placeholder_uri

    /// Total issued after a prospective claim of `units`, gated by capacity.
    ///
    /// This is the global gate of the claim engine. It runs once per claim,
    /// before any source is examined, so an over-capacity request fails with
    /// `CapacityExceeded` even when no valid proof was supplied.
    pub fn issued_after(&self, units: u64) -> std::result::Result<u64, PassMintError> {
        let total = self
            .total_issued
            .checked_add(units)
            .ok_or(PassMintError::ArithmeticOverflow)?;
        if total > self.capacity {
            return Err(PassMintError::CapacityExceeded);
        }
        Ok(total)
    }

    /// Units still issuable from the pool.
    pub fn remaining_capacity(&self) -> u64 {
        self.capacity.saturating_sub(self.total_issued)
    }

    /// Applies an oracle callback to the reveal state.
    ///
    /// The request id is recorded unconditionally. The offset transition runs
    /// at most once: only a callback that observes the zero sentinel and
    /// reduces to a nonzero offset finalizes the reveal. A callback reducing
    /// to zero leaves the offset and the revealed flag in their initial
    /// state, so the reveal looks untriggered and a later callback may still
    /// finalize it.
    ///
    /// Returns the offset when this callback finalized the reveal.
    pub fn record_randomness(&mut self, request_id: [u8; 32], random_value: u64) -> Option<u64> {
        self.reveal_request_id = request_id;
        if self.random_offset != 0 {
            return None;
        }
        // capacity is validated nonzero at pool creation
        let offset = random_value.checked_rem(self.capacity)?;
        if offset == 0 {
            return None;
        }
        self.random_offset = offset;
        self.revealed = true;
        Some(offset)
    }

    /// Metadata index a token resolves to once revealed.
    ///
    /// Indices are taken modulo capacity, with the finalized offset applied.
    /// The sum is widened so the reduction stays exact for indices near the
    /// top of the range.
    pub fn metadata_index(&self, token_index: u64) -> u64 {
        ((token_index as u128 + self.random_offset as u128) % self.capacity as u128) as u64
    }

    /// Computed metadata path for a token index.
    ///
    /// Before the reveal every index resolves to the placeholder. After it,
    /// the base path is suffixed with the permuted metadata index.
    pub fn token_uri(&self, token_index: u64) -> String {
        if !self.revealed {
            return self.placeholder_uri.clone();
        }
        format!("{}{}", self.base_uri, self.metadata_index(token_index))
    }
}
