pub mod create_pool;
pub mod set_allowance_root;
pub mod set_base_uri;
pub mod set_placeholder_uri;
pub mod claim;
pub mod trigger_reveal;
pub mod fulfill_reveal;
pub mod withdraw_funds;
pub mod token_uri;

pub use create_pool::*;
pub use set_allowance_root::*;
pub use set_base_uri::*;
pub use set_placeholder_uri::*;
pub use claim::*;
pub use trigger_reveal::*;
pub use fulfill_reveal::*;
pub use withdraw_funds::*;
pub use token_uri::*;
