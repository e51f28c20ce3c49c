use anchor_lang::solana_program::hash::{hashv, Hash};
use anchor_lang::solana_program::pubkey::Pubkey;

use crate::utils::allowance_leaf;

/// One committed (source, allowance) pair.
#[derive(Debug, Clone)]
pub(crate) struct AllowanceNode {
    pub(crate) source: Pubkey,
    pub(crate) allowance: u64,
}

/// Off-chain mirror of the allowance commitment: builds the sorted-pair tree
/// over allowance leaves and produces the sibling proofs the verifier folds.
pub(crate) struct AllowanceTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl AllowanceTree {
    pub(crate) fn new(tree_nodes: &[AllowanceNode]) -> Self {
        let leaf_count = tree_nodes.len();
        let nodes = tree_nodes
            .iter()
            .map(|node| allowance_leaf(&node.source, node.allowance))
            .collect();

        let mut tree = AllowanceTree { nodes, leaf_count };
        tree.build();
        tree
    }

    fn hash_intermediate(left: &[u8; 32], right: &[u8; 32]) -> Hash {
        // Same ascending-byte-order pairing as the on-chain verifier
        if left <= right {
            hashv(&[left, right])
        } else {
            hashv(&[right, left])
        }
    }

    fn build(&mut self) {
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let parent_len = level_len.div_ceil(2);
            for i in 0..parent_len {
                let left = self.nodes[level_start + 2 * i];
                // Duplicate the last entry when the level is odd
                let right_idx = (2 * i + 1).min(level_len - 1);
                let right = self.nodes[level_start + right_idx];
                self.nodes
                    .push(Self::hash_intermediate(&left, &right).to_bytes());
            }
            level_start += level_len;
            level_len = parent_len;
        }
    }

    pub(crate) fn root(&self) -> [u8; 32] {
        self.nodes[self.nodes.len() - 1]
    }

    /// Sibling path for the leaf at `index`, ordered bottom to top.
    pub(crate) fn proof(&self, index: usize) -> Vec<[u8; 32]> {
        assert!(index < self.leaf_count, "leaf index out of bounds");

        let mut proof = Vec::new();
        let mut current = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling = if current % 2 == 0 {
                (current + 1).min(level_len - 1)
            } else {
                current - 1
            };
            proof.push(self.nodes[level_start + sibling]);

            current /= 2;
            level_start += level_len;
            level_len = level_len.div_ceil(2);
        }

        proof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{find_claim_source, verify};

    fn get_test_data() -> Vec<AllowanceNode> {
        vec![
            AllowanceNode {
                source: Pubkey::new_from_array([0x11; 32]),
                allowance: 10,
            },
            AllowanceNode {
                source: Pubkey::new_from_array([0x22; 32]),
                allowance: 20,
            },
            AllowanceNode {
                source: Pubkey::new_from_array([0x33; 32]),
                allowance: 30,
            },
            AllowanceNode {
                source: Pubkey::new_from_array([0x44; 32]),
                allowance: 40,
            },
        ]
    }

    #[test]
    fn test_allowance_leaf_encoding() {
        println!("=== Testing allowance leaf encoding ===");

        let source = Pubkey::new_from_array([0xAA; 32]);
        let leaf = allowance_leaf(&source, 5);

        // 32-byte source, literal underscore, 8-byte little-endian allowance
        let mut preimage = Vec::with_capacity(41);
        preimage.extend_from_slice(source.as_ref());
        preimage.extend_from_slice(b"_");
        preimage.extend_from_slice(&5u64.to_le_bytes());
        assert_eq!(preimage.len(), 41);
        assert_eq!(leaf, hashv(&[&preimage]).to_bytes());

        // Computed independently with an off-chain sha256 implementation
        let expected: [u8; 32] = [
            140, 255, 26, 219, 95, 86, 45, 166, 181, 93, 230, 122, 66, 67, 131, 116, 46, 239, 224,
            135, 8, 156, 146, 204, 92, 244, 1, 62, 110, 212, 46, 36,
        ];
        assert_eq!(leaf, expected);

        // A different allowance for the same source is a different leaf
        assert_ne!(leaf, allowance_leaf(&source, 6));

        println!("✅ Leaf encoding matches the committed preimage layout");
    }

    #[test]
    fn test_merkle_tree_consistency() {
        println!("=== Testing Merkle Tree Consistency ===");

        // Two-pair commitment
        let pair_tree = AllowanceTree::new(&[
            AllowanceNode {
                source: Pubkey::new_from_array([0xAA; 32]),
                allowance: 5,
            },
            AllowanceNode {
                source: Pubkey::new_from_array([0xBB; 32]),
                allowance: 3,
            },
        ]);
        let expected_pair_root: [u8; 32] = [
            56, 153, 170, 235, 151, 238, 60, 47, 111, 64, 34, 254, 74, 220, 25, 7, 0, 140, 26, 55,
            237, 252, 173, 42, 15, 48, 108, 138, 239, 211, 125, 110,
        ];
        println!("Two-leaf root: {:?}", pair_tree.root());
        assert_eq!(pair_tree.root(), expected_pair_root);

        // Four-pair commitment
        let tree = AllowanceTree::new(&get_test_data());
        let expected_root: [u8; 32] = [
            126, 96, 98, 153, 44, 44, 139, 54, 108, 81, 8, 40, 184, 41, 92, 211, 208, 206, 246,
            73, 82, 8, 164, 137, 181, 182, 229, 96, 174, 32, 245, 32,
        ];
        println!("Four-leaf root: {:?}", tree.root());
        assert_eq!(tree.root(), expected_root);

        println!("✅ SUCCESS: tree roots match the independently computed values");
    }

    #[test]
    fn test_get_proof_and_verify() {
        println!("=== Testing get_proof and verify ===");

        let tree_nodes = get_test_data();
        let tree = AllowanceTree::new(&tree_nodes);
        let root = tree.root();

        for (index, node) in tree_nodes.iter().enumerate() {
            println!("\n--- Testing node {} ---", index);
            println!("Source: {}", node.source);
            println!("Allowance: {}", node.allowance);

            let leaf = allowance_leaf(&node.source, node.allowance);
            let proof = tree.proof(index);
            println!("Proof length: {}", proof.len());

            let is_valid = verify(&proof, root, leaf);
            println!(
                "Proof verification: {}",
                if is_valid { "✅ VALID" } else { "❌ INVALID" }
            );
            assert!(is_valid, "Proof verification failed for index {}", index);
        }

        println!("\n✅ All proofs verified successfully!");
    }

    #[test]
    fn test_invalid_proof() {
        println!("=== Testing invalid proof ===");

        let tree_nodes = get_test_data();
        let tree = AllowanceTree::new(&tree_nodes);
        let root = tree.root();
        let proof = tree.proof(0);

        // A source outside the commitment does not verify
        let foreign_leaf = allowance_leaf(&Pubkey::new_from_array([0x99; 32]), 10);
        assert!(
            !verify(&proof, root, foreign_leaf),
            "Foreign source should not verify"
        );

        // The right source with the wrong allowance does not verify
        let inflated_leaf = allowance_leaf(&tree_nodes[0].source, 10_000);
        assert!(
            !verify(&proof, root, inflated_leaf),
            "Inflated allowance should not verify"
        );

        // A tampered proof does not verify
        let correct_leaf = allowance_leaf(&tree_nodes[0].source, tree_nodes[0].allowance);
        let mut tampered_proof = tree.proof(0);
        tampered_proof[0][0] = tampered_proof[0][0].wrapping_add(1);
        assert!(
            !verify(&tampered_proof, root, correct_leaf),
            "Tampered proof should not verify"
        );

        println!("✅ Invalid proof tests passed!");
    }

    #[test]
    fn test_proof_edge_cases() {
        println!("=== Testing proof edge cases ===");

        // Single pair: the root is the leaf itself and the proof is empty
        let single = vec![AllowanceNode {
            source: Pubkey::new_from_array([0xAA; 32]),
            allowance: 5,
        }];
        let single_tree = AllowanceTree::new(&single);
        let single_proof = single_tree.proof(0);
        assert_eq!(single_proof.len(), 0, "Single pair should have empty proof");

        let single_leaf = allowance_leaf(&single[0].source, single[0].allowance);
        assert_eq!(single_tree.root(), single_leaf);
        assert!(verify(&single_proof, single_tree.root(), single_leaf));

        // Odd leaf count: the last leaf is duplicated upward and every
        // proof still folds to the root
        let odd_nodes = vec![
            AllowanceNode {
                source: Pubkey::new_from_array([0x51; 32]),
                allowance: 7,
            },
            AllowanceNode {
                source: Pubkey::new_from_array([0x52; 32]),
                allowance: 8,
            },
            AllowanceNode {
                source: Pubkey::new_from_array([0x53; 32]),
                allowance: 9,
            },
        ];
        let odd_tree = AllowanceTree::new(&odd_nodes);
        for (index, node) in odd_nodes.iter().enumerate() {
            let leaf = allowance_leaf(&node.source, node.allowance);
            assert!(
                verify(&odd_tree.proof(index), odd_tree.root(), leaf),
                "Odd-count proof failed for index {}",
                index
            );
        }

        println!("✅ Edge case tests passed!");
    }

    #[test]
    fn test_find_claim_source_scans_in_order() {
        println!("=== Testing claim source scan ===");

        let tree_nodes = get_test_data();
        let tree = AllowanceTree::new(&tree_nodes);
        let root = tree.root();

        // Proof targets the second pair; earlier non-matching sources are
        // skipped and the scan settles on the proof's owner
        let proof = tree.proof(1);
        let resolved = vec![
            tree_nodes[0].source,
            tree_nodes[1].source,
            tree_nodes[2].source,
        ];
        let matched = find_claim_source(&resolved, &proof, root, tree_nodes[1].allowance);
        assert_eq!(matched, Some(tree_nodes[1].source));

        // No resolved source owns the proof
        let strangers = vec![Pubkey::new_from_array([0x77; 32])];
        assert_eq!(
            find_claim_source(&strangers, &proof, root, tree_nodes[1].allowance),
            None
        );

        // An empty resolution matches nothing
        assert_eq!(
            find_claim_source(&[], &proof, root, tree_nodes[1].allowance),
            None
        );

        println!("✅ Scan follows resolution order and stops at the match");
    }
}
