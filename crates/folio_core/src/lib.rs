pub mod config;
pub mod constants;
pub mod content;
pub mod types;

pub use config::PageConfig;
pub use constants::*;
pub use types::*;
