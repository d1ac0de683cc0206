//! Benchmark driver: runs both traversals per target and renders the report.

mod driver;
mod report;

pub use driver::*;
pub use report::*;
