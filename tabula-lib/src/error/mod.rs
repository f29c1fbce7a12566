//! Error types

mod config;
mod page;

pub use config::*;
pub use page::*;
