use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::find_claim_source;
use crate::utils::resolve_sources;
use crate::utils::transfer_units;

/**
 * Account context for claiming units
 *
 * This instruction lets a delegate claim units on behalf of one of its
 * source (cold) addresses. The delegation directory decides which sources
 * the caller may act for, the merkle proof decides which of them the
 * supplied allowance belongs to, and the per-source claim record enforces
 * the cumulative cap.
 *
 * Access Control: Any caller the delegation directory resolves to at least
 * one source address, with a valid merkle proof for that source
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(source: Pubkey)]
pub struct Claim<'info> {
    /// The pool account containing issuance parameters
    /// - Must be a valid existing pool PDA
    /// - Will be modified to update total_issued
    #[account(mut)]
    pub pool: Account<'info, MintPool>,

    /// The caller's delegation list account from the external registry
    /// - Holds the ordered source addresses the caller may act for
    /// - Validated in the handler: registry ownership, delegate and
    ///   credential binding, wire layout
    /// CHECK: Deserialized and validated against pool.delegation_registry in the handler
    pub delegation_list: UncheckedAccount<'info>,

    /// Cumulative claim record for the source being charged
    /// - Tracks how many units were already issued on this source's behalf
    /// - Derived from: ["claim", pool_key, source]
    #[account(
        init_if_needed,
        payer = claimant,
        space = SourceClaim::LEN,
        seeds = [CLAIM_SEED.as_bytes(), pool.key().as_ref(), source.as_ref()],
        bump
    )]
    pub source_claim: Account<'info, SourceClaim>,

    /// Token vault holding the undistributed units
    /// - Controlled by the pool PDA
    /// - Derived from: ["vault", pool_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the units
    /// - Must be owned by the claimant
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = pool.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the pool's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == pool.token_mint @ PassMintError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The claimant attempting to claim units
    /// - Must sign the transaction
    /// - Pays the per-unit claim price into the pool treasury
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation and fee transfer
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Runs the global capacity gate, then scans the resolved sources for the
/// first one whose allowance leaf verifies against the pool's root.
///
/// The gate runs exactly once, before any source is examined, so an
/// over-capacity request fails the same way whether or not the proof is
/// valid. Returns the post-claim issued total and the matched source.
pub(crate) fn gate_and_match(
    pool: &MintPool,
    sources: &[Pubkey],
    proof: &[[u8; 32]],
    units: u64,
    claimed_allowance: u64,
) -> std::result::Result<(u64, Pubkey), PassMintError> {
    let new_total_issued = pool.issued_after(units)?;

    let matched_source =
        find_claim_source(sources, proof, pool.allowance_root, claimed_allowance)
            .ok_or(PassMintError::InvalidProof)?;

    Ok((new_total_issued, matched_source))
}

/**
 * Processes a claim with delegation resolution and merkle proof verification
 *
 * @param ctx - The account context containing all required accounts
 * @param source - Source address whose claim record the caller supplied
 * @param units - Number of units to issue in this claim
 * @param claimed_allowance - Committed allowance of the targeted source (from merkle tree)
 * @param proof - Array of 32-byte hashes forming the merkle proof path
 *
 * Validation Process:
 * 1. Resolve the caller's source addresses through the delegation registry
 * 2. Gate the request against remaining global capacity, once
 * 3. Scan the sources in resolution order for the first verifying leaf
 * 4. Check the matched source's remaining allowance (terminal on failure)
 * 5. Collect the claim fee and transfer the units
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    source: Pubkey,
    units: u64,
    claimed_allowance: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let source_claim = &mut ctx.accounts.source_claim;

    // ===== DELEGATION RESOLUTION PHASE =====

    // Ask the registry which sources the claimant may act for right now.
    // The directory is authoritative per call; nothing is cached.
    let sources = resolve_sources(
        &ctx.accounts.delegation_list,
        &pool.delegation_registry,
        &ctx.accounts.claimant.key(),
        &pool.pass_credential,
    )?;

    // ===== CAPACITY GATE AND PROOF SCAN =====

    // One proof, many candidates: the same (proof, claimed_allowance) pair
    // is tested against every resolved source's leaf, first match wins
    let (new_total_issued, matched_source) =
        match gate_and_match(pool, &sources, &proof, units, claimed_allowance) {
            Ok(outcome) => outcome,
            Err(PassMintError::CapacityExceeded) => {
                msg!(
                    "requested {} units, {} remaining in the pool",
                    units,
                    pool.remaining_capacity()
                );
                return Err(PassMintError::CapacityExceeded.into());
            }
            Err(reason) => return Err(reason.into()),
        };

    // The supplied claim record must belong to the source the proof matched
    require_keys_eq!(
        matched_source,
        source,
        PassMintError::SourceAccountMismatch
    );

    // ===== ALLOWANCE CHECK =====

    // A verifying source is terminal: if its remaining allowance cannot
    // cover the request the claim fails here instead of scanning further
    let new_claimed_amount = match source_claim.check_units(units, claimed_allowance) {
        Ok(next) => next,
        Err(reason) => {
            msg!(
                "requested {} units, {} remaining for source {}",
                units,
                source_claim.remaining_allowance(claimed_allowance),
                matched_source
            );
            return Err(reason.into());
        }
    };

    // ===== EFFECTS PHASE (State Updates) =====

    // Update claim accounting before any transfer (CEI pattern)
    source_claim.claimed_amount = new_claimed_amount;
    pool.total_issued = new_total_issued;

    // Prepare immutable copies for seed derivation and events
    let nonce_bytes = pool.nonce.to_le_bytes();
    let token_mint_key = pool.token_mint;
    let authority_key = pool.authority;
    let pool_bump = pool.bump;
    let pool_key = pool.key();

    // Claim fee owed for this many units
    let claim_fee = pool
        .claim_price
        .checked_mul(units)
        .ok_or(PassMintError::ArithmeticOverflow)?;

    // Check vault has sufficient balance before proceeding
    require!(
        ctx.accounts.token_vault.amount >= units,
        PassMintError::InsufficientVaultBalance
    );

    // ===== INTERACTIONS PHASE (Transfers) =====

    // Collect the claim fee into the pool treasury
    if claim_fee > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.claimant.to_account_info(),
                    to: ctx.accounts.pool.to_account_info(),
                },
            ),
            claim_fee,
        )?;
    }

    // Prepare PDA signing seeds for the unit transfer
    let seeds = &[
        POOL_SEED.as_bytes(),
        token_mint_key.as_ref(),
        authority_key.as_ref(),
        nonce_bytes.as_ref(),
        &[pool_bump],
    ];
    let signer = &[&seeds[..]];

    // Transfer units from vault to claimant using PDA authority
    transfer_units(
        ctx.accounts.pool.to_account_info(), // Delayed AccountInfo acquisition
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        units,
        ctx.accounts.token_mint.decimals,
        Some(signer), // PDA signing for secure transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(UnitsClaimed {
        pool: pool_key,
        claimant: ctx.accounts.claimant.key(),
        source: matched_source,
        units,
        source_claimed_total: new_claimed_amount,
        total_issued: new_total_issued,
    });

    Ok(())
}
