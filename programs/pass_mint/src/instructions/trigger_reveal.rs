use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use anchor_lang::system_program;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for requesting the randomized metadata reveal
 *
 * The authority asks the randomness oracle for one random value. The pool
 * records a request identifier and pays the fixed request fee; the oracle
 * answers later through fulfill_reveal. Nothing here guards against an
 * outstanding request: triggering again simply issues another independent
 * request, and whichever callback lands first finalizes the offset.
 *
 * Access Control: Only the pool authority can trigger a reveal
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TriggerReveal<'info> {
    /// The pool account holding the reveal state
    /// - Must be a valid existing pool PDA
    /// - Will be modified to record the request identifier
    #[account(mut)]
    pub pool: Account<'info, MintPool>,

    /// The authority who can trigger the reveal
    /// - Must match the authority stored in the pool state
    /// - Pays the oracle request fee
    #[account(
        mut,
        constraint = authority.key() == pool.authority @ PassMintError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// The oracle account receiving the request fee
    /// - Must match the oracle stored in the pool state
    /// CHECK: Validated against pool.randomness_oracle, only receives lamports
    #[account(
        mut,
        constraint = oracle.key() == pool.randomness_oracle @ PassMintError::InvalidOracle
    )]
    pub oracle: UncheckedAccount<'info>,

    /// System program for the fee transfer
    pub system_program: Program<'info, System>,
}

/**
 * Requests one random value from the configured oracle
 *
 * @param ctx - The account context containing pool, authority and oracle accounts
 *
 * Request identifiers are derived from the pool key, a per-pool request
 * counter and the current slot, so every trigger produces a distinct id
 * the oracle must echo back. If the fee transfer fails the whole call
 * fails and no request is recorded.
 */
pub fn handle_trigger_reveal(ctx: Context<TriggerReveal>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    // Once finalized there is nothing left to randomize
    if pool.revealed {
        msg!("reveal already finalized, ignoring trigger");
        return Ok(());
    }

    // Derive a fresh request identifier
    let request_nonce = pool
        .reveal_request_nonce
        .checked_add(1)
        .ok_or(PassMintError::ArithmeticOverflow)?;
    let pool_key = pool.key();
    let slot = Clock::get()?.slot;
    let request_id = hashv(&[
        pool_key.as_ref(),
        &request_nonce.to_le_bytes(),
        &slot.to_le_bytes(),
    ])
    .to_bytes();

    // Record the request before paying for it
    pool.reveal_request_nonce = request_nonce;
    pool.reveal_request_id = request_id;

    // Pay the fixed request fee to the oracle
    // A failed transfer fails the trigger, the request is not retried
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.authority.to_account_info(),
                to: ctx.accounts.oracle.to_account_info(),
            },
        ),
        REVEAL_REQUEST_FEE,
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(RevealRequested {
        pool: pool_key,
        authority: ctx.accounts.authority.key(),
        request_id,
        fee: REVEAL_REQUEST_FEE,
    });

    Ok(())
}
