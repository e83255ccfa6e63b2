//! Zoo Inspector - walks a zoo's enclosures and reports what it finds
//!
//! Each enclosure and its animal are photographed and classified by an
//! image recognition system. Unsafe enclosures and sick animals trigger
//! closures and dispatches, and every run ends with a zoo-level status line.

pub mod collaborators;
pub mod domain;
pub mod error;
pub mod inspection;
pub mod scenario;
pub mod simulation;

pub use collaborators::{ImageRecognitionSystem, InspectionLog, Zoo};
pub use error::{InspectorError, Result};
pub use inspection::{Inspection, InspectionReport, Inspector, StatusLine, Verdict};
pub use scenario::Scenario;
