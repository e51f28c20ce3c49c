use anchor_lang::prelude::*;

use crate::constants::{INCLUDE_INACTIVE_PASSES, INCLUDE_SECONDARY_PASSES, MIN_PASS_COUNT};
use crate::error::PassMintError;

/**
 * Delegation directory adapter
 *
 * The directory is an external registry program. It maintains one list
 * account per (delegate, credential) pair recording the source addresses the
 * delegate may act for. This module knows the registry's wire layout, reads a
 * list account, validates it belongs to the configured registry and to the
 * caller, and filters it down to the ordered source sequence the claim
 * engine scans.
 *
 * The directory is treated as authoritative on every call. Nothing here is
 * cached or persisted.
 */

/// Wire layout of a registry list account (plain borsh, no discriminator).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DelegationList {
    /// The claiming address this list belongs to
    pub delegate: Pubkey,
    /// Credential the delegations were granted under
    pub credential: Pubkey,
    /// Delegation grants, in the order the registry recorded them
    pub entries: Vec<DelegationEntry>,
}

/// One delegation grant inside a list account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelegationEntry {
    /// Source (cold) address the delegate may act for
    pub source: Pubkey,
    /// Number of passes the grant covers
    pub pass_count: u32,
    /// Whether the registry marks this grant as the primary one
    pub primary: bool,
    /// Whether the grant is currently active
    pub active: bool,
}

/// Filters registry entries down to resolvable sources, preserving the
/// registry's order.
pub fn filter_sources(
    entries: &[DelegationEntry],
    min_count: u32,
    include_secondary: bool,
    include_inactive: bool,
) -> Vec<Pubkey> {
    entries
        .iter()
        .filter(|entry| entry.pass_count >= min_count)
        .filter(|entry| entry.primary || include_secondary)
        .filter(|entry| entry.active || include_inactive)
        .map(|entry| entry.source)
        .collect()
}

/// Resolves the ordered source addresses a caller may currently claim for.
///
/// An empty account resolves to an empty sequence (the caller holds no
/// delegations). A non-empty account must be owned by the configured
/// registry and match the caller and the pool's credential, otherwise the
/// record is rejected rather than silently skipped.
pub fn resolve_sources(
    delegation_list: &AccountInfo,
    registry: &Pubkey,
    delegate: &Pubkey,
    credential: &Pubkey,
) -> Result<Vec<Pubkey>> {
    if delegation_list.data_is_empty() {
        return Ok(Vec::new());
    }

    require!(
        delegation_list.owner == registry,
        PassMintError::InvalidDelegationRecord
    );

    let data = delegation_list.try_borrow_data()?;
    let list = DelegationList::deserialize(&mut data.as_ref())
        .map_err(|_| PassMintError::InvalidDelegationRecord)?;

    require_keys_eq!(
        list.delegate,
        *delegate,
        PassMintError::InvalidDelegationRecord
    );
    require_keys_eq!(
        list.credential,
        *credential,
        PassMintError::InvalidDelegationRecord
    );

    Ok(filter_sources(
        &list.entries,
        MIN_PASS_COUNT,
        INCLUDE_SECONDARY_PASSES,
        INCLUDE_INACTIVE_PASSES,
    ))
}
