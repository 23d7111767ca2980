pub mod config;
pub mod error;
pub mod payloads;
pub mod utils;
pub mod worker;
