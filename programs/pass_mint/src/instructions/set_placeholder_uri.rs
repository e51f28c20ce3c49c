use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for setting the placeholder metadata path
 *
 * Until the reveal finalizes, every token resolves to this single
 * placeholder path regardless of its index. The authority may update it
 * at any time, including after the reveal (at which point it is unused).
 *
 * Access Control: Only the pool authority can set the placeholder path
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetPlaceholderUri<'info> {
    /// The pool account to update
    /// - Must be a valid existing pool PDA
    /// - Will be modified to set the placeholder_uri
    #[account(mut)]
    pub pool: Account<'info, MintPool>,

    /// The authority who can set the placeholder path
    /// - Must match the authority stored in the pool state
    #[account(constraint = authority.key() == pool.authority @ PassMintError::Unauthorized)]
    pub authority: Signer<'info>,
}

/**
 * Sets the pre-reveal placeholder metadata path
 *
 * @param ctx - The account context containing pool and authority accounts
 * @param placeholder_uri - Path served for every token before the reveal
 */
pub fn handle_set_placeholder_uri(
    ctx: Context<SetPlaceholderUri>,
    placeholder_uri: String,
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    // Validate path length against the allocated space
    require!(
        placeholder_uri.len() <= MAX_URI_LEN,
        PassMintError::UriTooLong
    );

    pool.placeholder_uri = placeholder_uri.clone();

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(PlaceholderUriSet {
        pool: pool.key(),
        authority: ctx.accounts.authority.key(),
        placeholder_uri,
    });

    Ok(())
}
