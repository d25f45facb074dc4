pub mod batching;
pub mod export;
pub mod filter;
