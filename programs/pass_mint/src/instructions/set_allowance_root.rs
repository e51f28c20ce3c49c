use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for setting the allowance commitment root
 *
 * This instruction allows the pool authority to set the merkle root hash
 * that commits to every (source, allowance) pair the pool honors. Claims
 * verify their proofs against this root.
 *
 * Access Control: Only the pool authority can set the root
 *
 * Business Logic:
 * - The root defines which sources may claim and how many units each covers
 * - Each leaf in the merkle tree represents one (source, allowance) pair
 * - Claimants must provide a valid merkle proof against this root
 * - The root can be updated by the authority if the allowance set changes
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetAllowanceRoot<'info> {
    /// The pool account to update
    /// - Must be a valid existing pool PDA
    /// - Will be modified to set the allowance_root
    #[account(mut)]
    pub pool: Account<'info, MintPool>,

    /// The authority who can set the root
    /// - Must match the authority stored in the pool state
    #[account(constraint = authority.key() == pool.authority @ PassMintError::Unauthorized)]
    pub authority: Signer<'info>,
}

/**
 * Sets the allowance commitment root for the pool
 *
 * @param ctx - The account context containing pool and authority accounts
 * @param allowance_root - 32-byte hash representing the root of the merkle tree
 *
 * Merkle Tree Structure:
 * - Each leaf: hash(source_pubkey + "_" + allowance)
 * - Intermediate nodes: hash(left_child + right_child) with lexicographic ordering
 * - Root: The final hash at the top of the tree
 *
 * Validation Rules:
 * - The root cannot be all zeros (empty hash)
 * - Only the pool authority can set the root
 * - The root can be updated multiple times if needed
 */
pub fn handle_set_allowance_root(
    ctx: Context<SetAllowanceRoot>,
    allowance_root: [u8; 32],
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    // Validate that the root is not empty
    // An empty root would allow no valid claims
    require!(
        allowance_root != [0; 32],
        PassMintError::InvalidCommitmentRoot
    );

    // Set the root for claim verification
    pool.allowance_root = allowance_root;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(AllowanceRootSet {
        pool: pool.key(),
        authority: ctx.accounts.authority.key(),
        allowance_root,
    });

    Ok(())
}
