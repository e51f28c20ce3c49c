pub mod test_merkle;
pub mod test_reveal;
