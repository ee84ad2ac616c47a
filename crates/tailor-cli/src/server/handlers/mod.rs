//! API request handlers.

mod generate;
mod health;

pub use generate::*;
pub use health::*;
