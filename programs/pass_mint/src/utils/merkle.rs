use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::LEAF_SEPARATOR;

/// Verifies a membership proof against the allowance commitment root.
///
/// The proof is folded left to right starting from the leaf. Each step hashes
/// the running value with the next proof element, concatenated in ascending
/// byte order, so proof generation does not depend on the tree's left/right
/// convention. The function is total: malformed input simply folds to a hash
/// that does not match the root.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed_hash = leaf;
    for proof_element in proof.iter() {
        if computed_hash <= *proof_element {
            computed_hash = hashv(&[&computed_hash, proof_element]).to_bytes();
        } else {
            computed_hash = hashv(&[proof_element, &computed_hash]).to_bytes();
        }
    }
    computed_hash == root
}

/// Committed leaf for a (source address, allowance) pair.
///
/// Preimage layout: 32-byte source address, the literal separator byte, the
/// allowance as 8 little-endian bytes. The layout is part of the commitment's
/// public contract and off-chain tree builders must match it exactly.
pub fn allowance_leaf(source: &Pubkey, allowance: u64) -> [u8; 32] {
    hashv(&[source.as_ref(), LEAF_SEPARATOR, &allowance.to_le_bytes()]).to_bytes()
}

/// First resolved source whose derived leaf verifies under the supplied
/// proof and claimed allowance.
///
/// Resolution order decides precedence: the scan stops at the first hit and
/// later sources are never examined, matching or not.
pub fn find_claim_source(
    sources: &[Pubkey],
    proof: &[[u8; 32]],
    root: [u8; 32],
    claimed_allowance: u64,
) -> Option<Pubkey> {
    sources
        .iter()
        .find(|source| verify(proof, root, allowance_leaf(source, claimed_allowance)))
        .copied()
}
