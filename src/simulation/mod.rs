//! In-memory collaborators
//!
//! Stand-ins for the real zoo, recognition system and log, used by the
//! command line tool and by tests:
//! - InMemoryZoo: fixed enclosures, journals closures and dispatches
//! - ScriptedRecognition: verdicts looked up by enclosure id or animal name
//! - MemoryLog / ConsoleLog: keep or print the status lines

pub mod log;
pub mod recognition;
pub mod zoo;

pub use self::log::{ConsoleLog, MemoryLog};
pub use recognition::ScriptedRecognition;
pub use zoo::{InMemoryZoo, ZooEvent};
