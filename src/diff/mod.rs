//! Copy decisions - destination mapping and timestamp comparison

mod compare;

pub use compare::{decide, destination_path};
