pub mod nonce_state;
pub mod pool_state;
pub mod source_claim_state;

pub use nonce_state::*;
pub use pool_state::*;
pub use source_claim_state::*;
