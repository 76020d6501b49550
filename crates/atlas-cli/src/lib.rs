//! CLI library components for the country atlas.

pub mod cli;
pub mod logging;
pub mod summary;
