//! Output generation for the consolidated CPV mapping.

pub mod error;
pub mod json;

pub use error::OutputError;
pub use json::{Freshness, check_mapping, render_mapping, write_mapping};
