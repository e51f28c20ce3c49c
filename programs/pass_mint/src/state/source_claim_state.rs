use anchor_lang::prelude::*;

use crate::error::PassMintError;

/**
 * Cumulative claim record for one source address
 *
 * Tracks how many units have been issued on behalf of a single source
 * (cold) address, across every caller the delegation directory authorizes
 * to act for it.
 *
 * Derivation: ["claim", pool_key, source]
 *
 * Lifecycle:
 * 1. Created on the first claim charged to the source (init_if_needed)
 * 2. Incremented by every later claim charged to it
 * 3. Never closed
 *
 * Design Notes:
 * - The committed allowance is not stored here; the caller re-supplies it
 *   with each proof and the engine re-verifies it against the current root
 * - claimed_amount is monotonically non-decreasing
 */
#[account]
#[derive(Default, Debug)]
pub struct SourceClaim {
    /// Total units issued on behalf of this source (cumulative)
    pub claimed_amount: u64,
}

impl SourceClaim {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<SourceClaim>();

    /// Allowance still claimable for this source under the supplied
    /// committed allowance.
    pub fn remaining_allowance(&self, claimed_allowance: u64) -> u64 {
        claimed_allowance.saturating_sub(self.claimed_amount)
    }

    /// Checks that charging `units` more keeps the record within the
    /// committed allowance, returning the new cumulative total.
    pub fn check_units(
        &self,
        units: u64,
        claimed_allowance: u64,
    ) -> std::result::Result<u64, PassMintError> {
        let next = self
            .claimed_amount
            .checked_add(units)
            .ok_or(PassMintError::ArithmeticOverflow)?;
        if next > claimed_allowance {
            return Err(PassMintError::AllowanceExceeded);
        }
        Ok(next)
    }
}
