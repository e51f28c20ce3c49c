use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for the oracle's randomness callback
 *
 * The configured oracle delivers one random value in answer to an earlier
 * trigger_reveal request. The first callback that lands while the offset
 * sentinel is still zero finalizes the metadata ordering; every later
 * callback only records its request identifier.
 *
 * Access Control: Only the configured oracle authority can fulfill
 */
#[event_cpi]
#[derive(Accounts)]
pub struct FulfillReveal<'info> {
    /// The pool account holding the reveal state
    /// - Must be a valid existing pool PDA
    /// - Will be modified to record the callback, and possibly finalized
    #[account(mut)]
    pub pool: Account<'info, MintPool>,

    /// The oracle delivering the random value
    /// - Must match the oracle stored in the pool state
    #[account(constraint = oracle.key() == pool.randomness_oracle @ PassMintError::Unauthorized)]
    pub oracle: Signer<'info>,
}

/**
 * Applies an oracle callback to the reveal state machine
 *
 * @param ctx - The account context containing pool and oracle accounts
 * @param request_id - Identifier of the request this callback answers
 * @param random_value - The oracle's random value, reduced modulo capacity
 *
 * The offset transition happens at most once. A callback whose value
 * reduces to zero modulo capacity does not finalize anything: the offset
 * keeps its zero sentinel and the pool stays unrevealed, so a later
 * trigger and callback may still land.
 */
pub fn handle_fulfill_reveal(
    ctx: Context<FulfillReveal>,
    request_id: [u8; 32],
    random_value: u64,
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let pool_key = pool.key();

    match pool.record_randomness(request_id, random_value) {
        Some(random_offset) => {
            // Emit event for off-chain indexing and monitoring
            emit_cpi!(RevealFinalized {
                pool: pool_key,
                request_id,
                random_offset,
            });
        }
        None => {
            msg!("reveal callback recorded without finalizing");
        }
    }

    Ok(())
}
