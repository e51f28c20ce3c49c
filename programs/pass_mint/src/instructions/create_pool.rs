use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_units;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new mint pool
 *
 * This instruction initializes a new mint pool with automatic nonce management:
 * - Creates or updates a nonce state PDA to track nonce numbers
 * - Creates a pool PDA with auto-incremented nonce number
 * - Creates a token vault PDA to hold the claimable units
 * - Transfers exactly `capacity` units from the authority into the vault
 * - Records the delegation registry and randomness oracle the pool trusts
 *
 * Access Control: Only the authority can create a pool
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreatePool<'info> {
    /// Nonce state account (PDA) that tracks nonce numbers for this authority
    /// - Stores the current nonce counter for automatic nonce assignment
    /// - Derived from: ["authority_nonce", authority]
    #[account(
        init_if_needed,
        payer = authority,
        space = NonceState::LEN,
        seeds = [NONCE_SEED.as_bytes(), authority.key().as_ref()],
        bump
    )]
    pub authority_nonce: Account<'info, NonceState>,

    /// The main pool account (PDA)
    /// - Stores all issuance parameters and reveal state
    /// - Derived from: ["pool", token_mint, authority, current_nonce]
    /// - Nonce is automatically determined from authority_nonce.nonce + 1
    #[account(
        init,
        payer = authority,
        space = MintPool::LEN,
        seeds = [
            POOL_SEED.as_bytes(),
            token_mint.key().as_ref(),
            authority.key().as_ref(),
            (authority_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub pool: Account<'info, MintPool>,

    /// Token vault account (PDA) that holds the claimable units
    /// - Controlled by the pool PDA as token authority
    /// - Derived from: ["vault", pool_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = pool,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump,
        payer = authority,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint whose units the pool issues
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Authority's token account containing the units to be deposited
    /// - Must be owned by the authority signer
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub authority_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The authority of the pool
    /// - Has full control over the pool
    /// - Can set roots and URIs, trigger the reveal, and withdraw proceeds
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Credential the delegation registry scopes delegations under
    /// CHECK: This account is validated by storing its key in the pool state
    pub pass_credential: AccountInfo<'info>,

    /// The delegation registry program whose list accounts claims resolve through
    /// CHECK: This account is validated by storing its key in the pool state
    pub delegation_registry: AccountInfo<'info>,

    /// The oracle authority allowed to fulfill reveal requests
    /// CHECK: This account is validated by storing its key in the pool state
    pub randomness_oracle: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new mint pool with automatic nonce management
 *
 * @param ctx - The account context containing all required accounts
 * @param capacity - Total number of units the pool may ever issue
 * @param claim_price - Lamports charged per unit on claim (0 for free pools)
 * @param placeholder_uri - URI served for every token until the reveal lands
 */
pub fn handle_create_pool(
    ctx: Context<CreatePool>,
    capacity: u64,
    claim_price: u64,
    placeholder_uri: String,
) -> Result<()> {
    // Validate capacity (also keeps the reveal modulus nonzero)
    require!(capacity > 0, PassMintError::InvalidAmount);

    // Validate configured collaborators are not empty accounts
    require!(
        ctx.accounts.pass_credential.key() != Pubkey::default(),
        PassMintError::InvalidPassCredential
    );
    require!(
        ctx.accounts.delegation_registry.key() != Pubkey::default(),
        PassMintError::InvalidDelegationRegistry
    );
    require!(
        ctx.accounts.randomness_oracle.key() != Pubkey::default(),
        PassMintError::InvalidOracle
    );

    // Validate placeholder URI length against the allocated space
    require!(
        placeholder_uri.len() <= MAX_URI_LEN,
        PassMintError::UriTooLong
    );

    let authority_nonce = &mut ctx.accounts.authority_nonce;
    let pool = &mut ctx.accounts.pool;

    // Calculate nonce number with overflow protection
    let current_nonce = authority_nonce
        .nonce
        .checked_add(1)
        .ok_or(PassMintError::ArithmeticOverflow)?;

    // Update nonce state with current nonce
    authority_nonce.nonce = current_nonce;

    // Initialize pool state with auto-assigned nonce
    pool.bump = ctx.bumps.pool;
    pool.nonce = current_nonce;
    pool.authority = ctx.accounts.authority.key();
    pool.token_mint = ctx.accounts.token_mint.key();
    pool.token_vault = ctx.accounts.token_vault.key();
    pool.pass_credential = ctx.accounts.pass_credential.key();
    pool.delegation_registry = ctx.accounts.delegation_registry.key();
    pool.randomness_oracle = ctx.accounts.randomness_oracle.key();
    pool.capacity = capacity;
    pool.claim_price = claim_price;
    pool.placeholder_uri = placeholder_uri;
    // Note: total_issued, allowance_root, reveal fields and base_uri use default values

    // Transfer exactly `capacity` units from authority to vault
    // This ensures the vault can cover every unit the pool may issue
    // Uses transfer_checked for compatibility with both SPL Token and Token 2022
    transfer_units(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.authority_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        capacity,
        ctx.accounts.token_mint.decimals,
        None, // No signer seeds needed for authority-signed transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    // Uses emit_cpi! for cross-program call compatibility
    emit_cpi!(PoolCreated {
        pool: pool.key(),
        nonce: current_nonce,
        authority: ctx.accounts.authority.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        pass_credential: ctx.accounts.pass_credential.key(),
        delegation_registry: ctx.accounts.delegation_registry.key(),
        randomness_oracle: ctx.accounts.randomness_oracle.key(),
        capacity,
        claim_price,
    });

    Ok(())
}
