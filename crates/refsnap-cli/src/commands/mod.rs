//! CLI command implementations

mod extract;
mod plan;

pub use extract::cmd_extract;
pub use plan::cmd_plan;
