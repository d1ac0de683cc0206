pub mod bench;
pub mod error;
pub mod fs;
pub mod logging;
pub mod search;
pub mod sets;
pub mod statistics;
