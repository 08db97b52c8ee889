pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

pub use crate::core::{TreeRenderer, WalkOptions};
pub use crate::error::{TreeError, UsageError};
