pub mod delegation;
pub mod merkle;
pub mod token;

pub use delegation::*;
pub use merkle::*;
pub use token::*;
