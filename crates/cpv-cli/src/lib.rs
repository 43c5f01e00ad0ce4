//! CLI library components for the CPV mapping generator.

pub mod logging;
pub mod pipeline;
