//! Terminal reporting

mod report;

pub use report::Reporter;
