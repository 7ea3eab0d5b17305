pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod score;
pub mod types;

pub use error::{LegisError, Result};
pub use score::Engine;
