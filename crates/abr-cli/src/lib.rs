//! CLI library components for the Business Report toolkit.

pub mod logging;
pub mod pipeline;
