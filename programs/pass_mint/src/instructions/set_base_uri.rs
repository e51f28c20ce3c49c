use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for setting the metadata base path
 *
 * Once the reveal finalizes, every token's metadata URI is formed by
 * appending its shuffled index to this path. The path may be staged and
 * corrected any number of times before the reveal, but becomes immutable
 * the moment the reveal finalizes so already-resolved URIs never move.
 *
 * Access Control: Only the pool authority can set the base path
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetBaseUri<'info> {
    /// The pool account to update
    /// - Must be a valid existing pool PDA
    /// - Will be modified to set the base_uri
    #[account(mut)]
    pub pool: Account<'info, MintPool>,

    /// The authority who can set the base path
    /// - Must match the authority stored in the pool state
    #[account(constraint = authority.key() == pool.authority @ PassMintError::Unauthorized)]
    pub authority: Signer<'info>,
}

/**
 * Sets the metadata base path for revealed tokens
 *
 * @param ctx - The account context containing pool and authority accounts
 * @param base_uri - Path prefix the shuffled metadata index is appended to
 */
pub fn handle_set_base_uri(ctx: Context<SetBaseUri>, base_uri: String) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    // The base path is frozen once the reveal has finalized
    require!(!pool.revealed, PassMintError::InvariantViolation);

    // Validate path length against the allocated space
    require!(base_uri.len() <= MAX_URI_LEN, PassMintError::UriTooLong);

    pool.base_uri = base_uri.clone();

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(BaseUriSet {
        pool: pool.key(),
        authority: ctx.accounts.authority.key(),
        base_uri,
    });

    Ok(())
}
