use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for withdrawing accumulated claim fees
 *
 * Claim fees are collected as lamports on the pool account itself. This
 * instruction moves everything above the pool's rent-exempt floor to the
 * authority. The pool keeps operating afterwards; fees simply accumulate
 * again with further claims.
 *
 * Access Control: Only the pool authority can withdraw
 */
#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    /// The pool account holding the accumulated fees
    /// - Must be a valid existing pool PDA
    /// - Keeps its rent-exempt minimum balance
    #[account(mut)]
    pub pool: Account<'info, MintPool>,

    /// The authority receiving the fees
    /// - Must match the authority stored in the pool state
    #[account(
        mut,
        constraint = authority.key() == pool.authority @ PassMintError::Unauthorized
    )]
    pub authority: Signer<'info>,
}

/**
 * Moves accumulated claim fees from the pool to the authority
 *
 * @param ctx - The account context containing pool and authority accounts
 *
 * The pool account must stay rent exempt, so only the balance above the
 * rent floor is withdrawable. Withdrawing with nothing accumulated is a
 * harmless no-op that still reports a zero amount.
 */
pub fn handle_withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<()> {
    let pool_info = ctx.accounts.pool.to_account_info();

    // Everything above the rent-exempt floor is fee revenue
    let rent_floor = Rent::get()?.minimum_balance(pool_info.data_len());
    let surplus = pool_info.lamports().saturating_sub(rent_floor);

    // The pool is program-owned, so lamports move by direct adjustment
    // rather than a system program transfer
    if surplus > 0 {
        **pool_info.try_borrow_mut_lamports()? -= surplus;
        **ctx
            .accounts
            .authority
            .to_account_info()
            .try_borrow_mut_lamports()? += surplus;
    }

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(FundsWithdrawn {
        pool: ctx.accounts.pool.key(),
        authority: ctx.accounts.authority.key(),
        lamports: surplus,
    });

    Ok(())
}
