//! In-memory zoo that records every action taken against it.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use crate::collaborators::Zoo;
use crate::domain::{Animal, Enclosure, EnclosureId, Picture, Subject, ZooId};
use crate::error::{InspectorError, Result};

/// Something the inspection asked the zoo to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZooEvent {
    Closed(EnclosureId),
    Security(EnclosureId),
    Maintenance(EnclosureId),
    /// Veterinary dispatched to the named animal
    Veterinary(String),
}

impl fmt::Display for ZooEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZooEvent::Closed(id) => write!(f, "closed enclosure {}", id),
            ZooEvent::Security(id) => write!(f, "security -> {}", id),
            ZooEvent::Maintenance(id) => write!(f, "maintenance -> {}", id),
            ZooEvent::Veterinary(name) => write!(f, "veterinary -> {}", name),
        }
    }
}

/// Requested actions and the enclosures they left closed, guarded together
#[derive(Debug, Default)]
struct Journal {
    events: Vec<ZooEvent>,
    closed: HashSet<EnclosureId>,
}

/// Zoo with a fixed list of enclosures and a journal of requested actions
pub struct InMemoryZoo {
    id: ZooId,
    enclosures: Vec<Enclosure>,
    journal: Mutex<Journal>,
}

impl InMemoryZoo {
    pub fn new(id: impl Into<String>, enclosures: Vec<Enclosure>) -> Self {
        Self {
            id: ZooId::new(id),
            enclosures,
            journal: Mutex::new(Journal::default()),
        }
    }

    /// Journal of closures and dispatches, in the order they were requested
    pub fn events(&self) -> Vec<ZooEvent> {
        recover(&self.journal).events.clone()
    }

    pub fn is_closed(&self, id: &EnclosureId) -> bool {
        recover(&self.journal).closed.contains(id)
    }

    /// Number of close requests, including repeats for the same enclosure
    pub fn closed_count(&self) -> usize {
        self.count(|event| matches!(event, ZooEvent::Closed(_)))
    }

    pub fn security_count(&self) -> usize {
        self.count(|event| matches!(event, ZooEvent::Security(_)))
    }

    pub fn maintenance_count(&self) -> usize {
        self.count(|event| matches!(event, ZooEvent::Maintenance(_)))
    }

    pub fn veterinary_count(&self) -> usize {
        self.count(|event| matches!(event, ZooEvent::Veterinary(_)))
    }

    fn count(&self, predicate: impl Fn(&ZooEvent) -> bool) -> usize {
        recover(&self.journal)
            .events
            .iter().filter(|event| predicate(event)).count()
    }

    fn ensure_enclosure(&self, enclosure: &Enclosure) -> Result<()> {
        if self.enclosures.iter().any(|e| e.id() == enclosure.id()) {
            Ok(())
        } else {
            Err(InspectorError::Zoo(format!(
                "Unknown enclosure {} in zoo {}",
                enclosure.id(),
                self.id
            )))
        }
    }

    fn journal(&self) -> Result<MutexGuard<'_, Journal>> {
        self.journal.lock().map_err(|e| InspectorError::Zoo(e.to_string()))
    }

    fn record(&self, event: ZooEvent) -> Result<()> {
        self.journal()?.events.push(event);
        Ok(())
    }
}

impl Zoo for InMemoryZoo {
    fn id(&self) -> &ZooId {
        &self.id
    }

    fn enclosures(&self) -> Result<Vec<Enclosure>> {
        Ok(self.enclosures.clone())
    }

    fn capture_picture_of(&self, subject: Subject<'_>) -> Result<Picture> {
        match subject {
            Subject::Enclosure(enclosure) => self.ensure_enclosure(enclosure)?,
            Subject::Animal(animal) => {
                if !self.enclosures.iter().any(|e| e.animal() == animal) {
                    return Err(InspectorError::Zoo(format!(
                        "No animal named {} in zoo {}",
                        animal.name(),
                        self.id
                    )));
                }
            }
        }
        Ok(Picture::new(subject.to_string()))
    }

    fn close_enclosure(&self, enclosure: &Enclosure) -> Result<()> {
        self.ensure_enclosure(enclosure)?;
        let mut journal = self.journal()?;
        journal.closed.insert(enclosure.id().clone());
        journal.events.push(ZooEvent::Closed(enclosure.id().clone()));
        Ok(())
    }

    fn request_security_to(&self, enclosure: &Enclosure) -> Result<()> {
        self.ensure_enclosure(enclosure)?;
        self.record(ZooEvent::Security(enclosure.id().clone()))
    }

    fn request_maintenance_crew_to(&self, enclosure: &Enclosure) -> Result<()> {
        self.ensure_enclosure(enclosure)?;
        self.record(ZooEvent::Maintenance(enclosure.id().clone()))
    }

    fn request_veterinary_to(&self, animal: &Animal) -> Result<()> {
        self.record(ZooEvent::Veterinary(animal.name().to_string()))
    }
}

/// Read access survives a poisoned lock; the journal is append-only.
fn recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoo() -> InMemoryZoo {
        InMemoryZoo::new("Z1", vec![Enclosure::new("E1", Animal::new("Leo"))])
    }

    #[test]
    fn test_capture_names_subject() {
        let zoo = zoo();
        let enclosures = zoo.enclosures().unwrap();
        let enclosure = &enclosures[0];

        let picture = zoo.capture_picture_of(Subject::Enclosure(enclosure)).unwrap();
        assert_eq!(picture.as_bytes(), b"enclosure:E1");

        let picture = zoo.capture_picture_of(Subject::Animal(enclosure.animal())).unwrap();
        assert_eq!(picture.as_bytes(), b"animal:Leo");
    }

    #[test]
    fn test_capture_unknown_subject_fails() {
        let zoo = zoo();
        let stranger = Enclosure::new("E9", Animal::new("Rex"));

        assert!(zoo.capture_picture_of(Subject::Enclosure(&stranger)).is_err());
        assert!(zoo.capture_picture_of(Subject::Animal(stranger.animal())).is_err());
    }

    #[test]
    fn test_close_is_idempotent() {
        let zoo = zoo();
        let enclosure = zoo.enclosures().unwrap().remove(0);

        zoo.close_enclosure(&enclosure).unwrap();
        zoo.close_enclosure(&enclosure).unwrap();

        assert!(zoo.is_closed(enclosure.id()));
        assert_eq!(zoo.closed_count(), 2);
    }

    #[test]
    fn test_close_keeps_journal_and_closed_set_in_step() {
        let zoo = zoo();
        let enclosure = zoo.enclosures().unwrap().remove(0);
        let stranger = Enclosure::new("E9", Animal::new("Rex"));

        assert!(zoo.close_enclosure(&stranger).is_err());
        assert!(!zoo.is_closed(stranger.id()));
        assert!(zoo.events().is_empty());

        zoo.close_enclosure(&enclosure).unwrap();
        assert!(zoo.is_closed(enclosure.id()));
        assert_eq!(zoo.events(), vec![ZooEvent::Closed(enclosure.id().clone())]);
    }

    #[test]
    fn test_event_display() {
        let id = EnclosureId::new("E1");
        assert_eq!(ZooEvent::Closed(id.clone()).to_string(), "closed enclosure E1");
        assert_eq!(ZooEvent::Security(id.clone()).to_string(), "security -> E1");
        assert_eq!(ZooEvent::Maintenance(id).to_string(), "maintenance -> E1");
        assert_eq!(ZooEvent::Veterinary("Leo".to_string()).to_string(), "veterinary -> Leo");
    }

    #[test]
    fn test_dispatch_journal_order() {
        let zoo = zoo();
        let enclosure = zoo.enclosures().unwrap().remove(0);

        zoo.request_security_to(&enclosure).unwrap();
        zoo.request_veterinary_to(enclosure.animal()).unwrap();
        zoo.request_maintenance_crew_to(&enclosure).unwrap();

        assert_eq!(
            zoo.events(),
            vec![
                ZooEvent::Security(enclosure.id().clone()),
                ZooEvent::Veterinary("Leo".to_string()),
                ZooEvent::Maintenance(enclosure.id().clone()),
            ]
        );
        assert_eq!(zoo.security_count(), 1);
        assert_eq!(zoo.maintenance_count(), 1);
        assert_eq!(zoo.veterinary_count(), 1);
        assert_eq!(zoo.closed_count(), 0);
    }

    #[test]
    fn test_dispatch_to_unknown_enclosure_fails() {
        let zoo = zoo();
        let stranger = Enclosure::new("E9", Animal::new("Rex"));

        let err = zoo.request_security_to(&stranger).unwrap_err();
        assert!(matches!(err, InspectorError::Zoo(_)));
        assert!(zoo.events().is_empty());
    }
}
