//! Inspection of a zoo
//!
//! This module provides:
//! - StatusLine: the `#`-delimited log line format
//! - Inspection: one run over a zoo's enclosures, producing an InspectionReport
//! - Inspector: facade that runs an inspection and hands its lines to the log

pub mod inspector;
pub mod report;
pub mod runner;
pub mod status;

pub use inspector::Inspector;
pub use report::InspectionReport;
pub use runner::Inspection;
pub use status::{StatusLine, Verdict};
