//! Policy input records and CSV block loading

mod data;
pub mod loader;

pub use data::PolicyInput;
pub use loader::{load_policy_block, DEFAULT_BLOCK_PATH};
