use anchor_lang::prelude::*;

use crate::state::*;

/**
 * Account context for reading a token's metadata path
 *
 * Read-only lookup, usable by anyone. The result is returned as
 * instruction return data so off-chain callers can simulate the call
 * instead of reimplementing the offset math.
 */
#[derive(Accounts)]
pub struct TokenUri<'info> {
    /// The pool account holding the reveal state and path configuration
    pub pool: Account<'info, MintPool>,
}

/**
 * Computes the metadata path a token index currently resolves to
 *
 * @param ctx - The account context containing the pool account
 * @param token_index - Index of the token being looked up
 *
 * Before the reveal every index resolves to the placeholder path. After
 * it, the base path is suffixed with the permuted metadata index.
 */
pub fn handle_token_uri(ctx: Context<TokenUri>, token_index: u64) -> Result<String> {
    Ok(ctx.accounts.pool.token_uri(token_index))
}
