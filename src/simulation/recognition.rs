//! Recognition system answering from a fixed script of verdicts.

use std::collections::HashMap;

use crate::collaborators::ImageRecognitionSystem;
use crate::domain::{Animal, AnimalStatus, Enclosure, EnclosureStatus, Picture, Subject};
use crate::error::{InspectorError, Result};

/// Verdicts keyed by enclosure id and animal name
#[derive(Debug, Clone, Default)]
pub struct ScriptedRecognition {
    /// Enclosure id -> safe
    enclosures: HashMap<String, bool>,
    /// Animal name -> sick
    animals: HashMap<String, bool>,
}

impl ScriptedRecognition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enclosure(mut self, id: impl Into<String>, safe: bool) -> Self {
        self.enclosures.insert(id.into(), safe);
        self
    }

    pub fn with_animal(mut self, name: impl Into<String>, sick: bool) -> Self {
        self.animals.insert(name.into(), sick);
        self
    }
}

/// The picture must show the subject being classified.
fn ensure_shows(picture: &Picture, subject: Subject<'_>) -> Result<()> {
    let expected = subject.to_string();
    if picture.as_bytes() == expected.as_bytes() {
        Ok(())
    } else {
        Err(InspectorError::Recognition(format!(
            "Picture does not show {} ({} bytes)",
            expected,
            picture.len()
        )))
    }
}

impl ImageRecognitionSystem for ScriptedRecognition {
    fn recognize_enclosure_status(&self, enclosure: &Enclosure, picture: Picture) -> Result<EnclosureStatus> {
        ensure_shows(&picture, Subject::Enclosure(enclosure))?;
        self.enclosures
            .get(enclosure.id().as_str())
            .map(|safe| EnclosureStatus::from_safe(*safe))
            .ok_or_else(|| InspectorError::Recognition(format!("No verdict for enclosure {}", enclosure.id())))
    }

    fn recognize_animal_status(&self, animal: &Animal, picture: Picture) -> Result<AnimalStatus> {
        ensure_shows(&picture, Subject::Animal(animal))?;
        self.animals
            .get(animal.name())
            .map(|sick| AnimalStatus::from_sick(*sick))
            .ok_or_else(|| InspectorError::Recognition(format!("No verdict for animal {}", animal.name())))
    }
}
