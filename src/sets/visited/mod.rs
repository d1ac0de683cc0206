mod bitset;
mod visitor_set;

pub use bitset::*;
pub use visitor_set::*;
