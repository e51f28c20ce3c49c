use crate::state::MintPool;

fn reveal_pool(capacity: u64) -> MintPool {
    MintPool {
        capacity,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_finalizes_once() {
        println!("=== Testing reveal finalization ===");

        let mut pool = reveal_pool(400);
        assert!(!pool.revealed);
        assert_eq!(pool.random_offset, 0);

        // First callback observing the zero sentinel finalizes the offset
        let offset = pool.record_randomness([0x01; 32], 1_234_567);
        assert_eq!(offset, Some(167));
        assert!(pool.revealed);
        assert_eq!(pool.random_offset, 167);
        assert_eq!(pool.reveal_request_id, [0x01; 32]);

        println!("✅ First callback finalized offset {}", pool.random_offset);
    }

    #[test]
    fn test_finalized_state_is_idempotent() {
        println!("=== Testing callback idempotence ===");

        let mut pool = reveal_pool(400);
        pool.record_randomness([0x01; 32], 1_234_567);

        // A duplicate callback and a late callback from an independent
        // request both record their id without touching the offset
        for (request_id, random_value) in [([0x01; 32], 1_234_567u64), ([0x02; 32], 999)] {
            let result = pool.record_randomness(request_id, random_value);
            assert_eq!(result, None);
            assert!(pool.revealed);
            assert_eq!(pool.random_offset, 167);
            assert_eq!(pool.reveal_request_id, request_id);
        }

        println!("✅ Finalized offset never moves");
    }

    #[test]
    fn test_zero_offset_leaves_machine_untriggered() {
        println!("=== Testing the zero-offset callback ===");

        let mut pool = reveal_pool(400);

        // 800 reduces to zero modulo 400: the offset keeps its zero
        // sentinel and the pool stays unrevealed, indistinguishable from
        // a pool whose reveal was never triggered
        let offset = pool.record_randomness([0x03; 32], 800);
        assert_eq!(offset, None);
        assert!(!pool.revealed);
        assert_eq!(pool.random_offset, 0);
        assert_eq!(pool.reveal_request_id, [0x03; 32]);

        // A later callback can still finalize
        let offset = pool.record_randomness([0x04; 32], 801);
        assert_eq!(offset, Some(1));
        assert!(pool.revealed);
        assert_eq!(pool.random_offset, 1);

        // Capacity one reduces every value to zero, so such a pool can
        // never leave the unrevealed state
        let mut tiny = reveal_pool(1);
        assert_eq!(tiny.record_randomness([0x05; 32], u64::MAX), None);
        assert!(!tiny.revealed);

        println!("✅ Zero offset keeps the sentinel in place");
    }

    #[test]
    fn test_metadata_index_wraps_modulo_capacity() {
        let mut pool = reveal_pool(400);
        pool.record_randomness([0x01; 32], 1_234_567);
        assert_eq!(pool.random_offset, 167);

        assert_eq!(pool.metadata_index(0), 167);
        assert_eq!(pool.metadata_index(233), 0);
        assert_eq!(pool.metadata_index(399), 166);
        // Indices past capacity keep wrapping instead of erroring
        assert_eq!(pool.metadata_index(400), 167);
        // Indices near the top of the u64 range still reduce exactly
        assert_eq!(pool.metadata_index(u64::MAX), 182);
    }

    #[test]
    fn test_token_uri_switches_on_reveal() {
        println!("=== Testing metadata path resolution ===");

        let mut pool = reveal_pool(400);
        pool.placeholder_uri = "ipfs://hidden.json".to_string();
        pool.base_uri = "ipfs://revealed/".to_string();

        // Every index resolves to the placeholder before the reveal
        assert_eq!(pool.token_uri(0), "ipfs://hidden.json");
        assert_eq!(pool.token_uri(399), "ipfs://hidden.json");
        assert_eq!(pool.token_uri(123_456), "ipfs://hidden.json");

        pool.record_randomness([0x01; 32], 1_234_567);

        // After it, the permuted index is appended to the base path
        assert_eq!(pool.token_uri(0), "ipfs://revealed/167");
        assert_eq!(pool.token_uri(233), "ipfs://revealed/0");
        assert_eq!(pool.token_uri(399), "ipfs://revealed/166");

        println!("✅ Path resolution follows the reveal state");
    }
}
