//! Domain types for the zoo inspector
//!
//! This module contains the values that flow between the inspection and
//! its collaborators:
//! - ZooId, EnclosureId, Enclosure, Animal: what gets inspected
//! - Subject, Picture: what the zoo's cameras capture
//! - EnclosureStatus, AnimalStatus: verdicts from the recognition system

pub mod picture;
pub mod verdict;
pub mod zoo;

pub use picture::{Picture, Subject};
pub use verdict::{AnimalStatus, EnclosureStatus};
pub use zoo::{Animal, Enclosure, EnclosureId, ZooId};
