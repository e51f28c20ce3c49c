use anchor_lang::prelude::*;

declare_id!("DuhsLavYovqX261MgT4fh34Cc8WqwvxbUVvyti6npvS2");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Pass Mint Program
 *
 * A Solana program for distributing a fixed supply of units to holders of a
 * delegated pass credential, with merkle-committed per-source allowances and
 * a one-time randomized reveal of metadata ordering.
 *
 * Key Features:
 * - Merkle tree-based allowance verification per source (cold) address
 * - Delegation-aware claiming: a hot wallet claims on behalf of the source
 *   addresses an external registry resolves it to, first match wins
 * - Cumulative per-source claim accounting that never exceeds the committed
 *   allowance, plus a single global capacity cap
 * - Oracle-driven metadata reveal that finalizes a random offset exactly once
 * - Optional per-unit claim fee collected into the pool treasury
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Nonce State PDA: Tracks nonce counter for each authority (automatic nonce management)
 * - Mint Pool PDA: Stores issuance parameters, commitment root and reveal state
 * - Token Vault PDA: Holds the claimable units, funded with exactly `capacity`
 * - Source Claim PDAs: Track cumulative units issued per source address
 *
 * Workflow:
 * 1. Authority creates a pool and deposits the full capacity of units
 * 2. Authority publishes the allowance commitment root and metadata paths
 * 3. Delegates claim units against their sources' committed allowances
 * 4. Authority triggers the reveal; the oracle callback finalizes the offset
 * 5. Authority withdraws accumulated claim fees
 */
#[program]
pub mod pass_mint {
    use super::*;

    /**
     * Creates a new mint pool
     *
     * Initializes a pass-gated drop with automatic nonce management. The
     * authority deposits exactly `capacity` units into a vault controlled by
     * the pool PDA and wires up the delegation registry and randomness
     * oracle the pool will trust.
     *
     * @param ctx - Account context containing pool, vault, counter, and authority accounts
     * @param capacity - Total number of units the pool may ever issue
     * @param claim_price - Lamports charged per unit on claim (0 for free pools)
     * @param placeholder_uri - Metadata path served for every token before the reveal
     *
     * Access Control: Authority only
     */
    pub fn create_pool(
        ctx: Context<CreatePool>,
        capacity: u64,
        claim_price: u64,
        placeholder_uri: String,
    ) -> Result<()> {
        handle_create_pool(ctx, capacity, claim_price, placeholder_uri)
    }

    /**
     * Sets the allowance commitment root
     *
     * Publishes the merkle root committing every (source, allowance) pair the
     * pool honors. Claims verify their proofs against this root.
     *
     * @param ctx - Account context containing pool and authority accounts
     * @param allowance_root - 32-byte hash representing the merkle tree root
     *
     * Access Control: Authority only
     * Note: The root can be updated multiple times; recorded claims stay recorded
     */
    pub fn set_allowance_root(
        ctx: Context<SetAllowanceRoot>,
        allowance_root: [u8; 32],
    ) -> Result<()> {
        handle_set_allowance_root(ctx, allowance_root)
    }

    /**
     * Sets the metadata base path
     *
     * Configures the path prefix revealed tokens resolve under. Rejected once
     * the reveal has finalized so resolved metadata never moves.
     *
     * @param ctx - Account context containing pool and authority accounts
     * @param base_uri - Path prefix the shuffled metadata index is appended to
     *
     * Access Control: Authority only
     */
    pub fn set_base_uri(ctx: Context<SetBaseUri>, base_uri: String) -> Result<()> {
        handle_set_base_uri(ctx, base_uri)
    }

    /**
     * Sets the placeholder metadata path
     *
     * Configures the single path every token resolves to before the reveal.
     *
     * @param ctx - Account context containing pool and authority accounts
     * @param placeholder_uri - Path served for every token before the reveal
     *
     * Access Control: Authority only
     */
    pub fn set_placeholder_uri(
        ctx: Context<SetPlaceholderUri>,
        placeholder_uri: String,
    ) -> Result<()> {
        handle_set_placeholder_uri(ctx, placeholder_uri)
    }

    /**
     * Claims units on behalf of a delegated source address
     *
     * Resolves the caller's source addresses through the delegation registry,
     * gates the request against global capacity, scans the sources in
     * resolution order for the first one whose allowance leaf verifies, and
     * issues the units against that source's cumulative allowance.
     *
     * @param ctx - Account context containing pool, delegation list, claim record, and token accounts
     * @param source - Source address whose claim record the caller supplied
     * @param units - Number of units to issue
     * @param claimed_allowance - Committed allowance of the targeted source
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any delegate the registry resolves, with a valid proof
     */
    pub fn claim(
        ctx: Context<Claim>,
        source: Pubkey,
        units: u64,
        claimed_allowance: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, source, units, claimed_allowance, proof)
    }

    /**
     * Requests the randomized metadata reveal
     *
     * Derives a fresh request identifier and pays the fixed fee to the
     * configured oracle. May be called again while a request is outstanding;
     * each call issues an independent request. A no-op once revealed.
     *
     * @param ctx - Account context containing pool, authority and oracle accounts
     *
     * Access Control: Authority only
     */
    pub fn trigger_reveal(ctx: Context<TriggerReveal>) -> Result<()> {
        handle_trigger_reveal(ctx)
    }

    /**
     * Delivers the oracle's randomness callback
     *
     * Records the request identifier and, if the reveal is not yet
     * finalized, reduces the random value modulo capacity to fix the
     * metadata offset. The offset transition happens at most once.
     *
     * @param ctx - Account context containing pool and oracle accounts
     * @param request_id - Identifier of the request this callback answers
     * @param random_value - The oracle's random value
     *
     * Access Control: Configured oracle only
     */
    pub fn fulfill_reveal(
        ctx: Context<FulfillReveal>,
        request_id: [u8; 32],
        random_value: u64,
    ) -> Result<()> {
        handle_fulfill_reveal(ctx, request_id, random_value)
    }

    /**
     * Withdraws accumulated claim fees
     *
     * Moves the pool account's balance above its rent-exempt floor to the
     * authority.
     *
     * @param ctx - Account context containing pool and authority accounts
     *
     * Access Control: Authority only
     */
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<()> {
        handle_withdraw_funds(ctx)
    }

    /**
     * Reads the metadata path for a token index
     *
     * Returns the placeholder path before the reveal and the offset-permuted
     * base path after it, as instruction return data.
     *
     * @param ctx - Account context containing the pool account
     * @param token_index - Index of the token being looked up
     *
     * Access Control: Anyone
     */
    pub fn token_uri(ctx: Context<TokenUri>, token_index: u64) -> Result<String> {
        handle_token_uri(ctx, token_index)
    }
}
