//! External collaborators consulted by an inspection
//!
//! The inspection never stores zoo data, recognizes images or persists
//! logs itself; it only calls these interfaces, in order, and propagates
//! whatever errors they return.

use crate::domain::{Animal, AnimalStatus, Enclosure, EnclosureStatus, Picture, Subject, ZooId};
use crate::error::Result;

/// The zoo being inspected: its enclosures, cameras and dispatch desk
pub trait Zoo: Send + Sync {
    /// Identifier used in the zoo-level status line
    fn id(&self) -> &ZooId;

    /// Enclosures in the order they must be inspected
    fn enclosures(&self) -> Result<Vec<Enclosure>>;

    /// Take a picture of an enclosure or of the animal inside it
    fn capture_picture_of(&self, subject: Subject<'_>) -> Result<Picture>;

    /// Close an enclosure to visitors. Closing twice is allowed.
    fn close_enclosure(&self, enclosure: &Enclosure) -> Result<()>;

    fn request_security_to(&self, enclosure: &Enclosure) -> Result<()>;

    fn request_maintenance_crew_to(&self, enclosure: &Enclosure) -> Result<()>;

    fn request_veterinary_to(&self, animal: &Animal) -> Result<()>;
}

/// Classifies pictures taken by the zoo's cameras
pub trait ImageRecognitionSystem: Send + Sync {
    fn recognize_enclosure_status(&self, enclosure: &Enclosure, picture: Picture) -> Result<EnclosureStatus>;

    fn recognize_animal_status(&self, animal: &Animal, picture: Picture) -> Result<AnimalStatus>;
}

/// Receives the status lines of a finished inspection
pub trait InspectionLog: Send + Sync {
    fn log(&self, lines: &[String]) -> Result<()>;
}
