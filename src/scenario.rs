//! Scenario files describing a zoo and how its pictures will be classified.
//!
//! ```yaml
//! id: Z1
//! enclosures:
//!   - id: E1
//!     animal: Leo
//!     safe: true
//!     sick: true
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Animal, Enclosure};
use crate::error::{InspectorError, Result};
use crate::simulation::{InMemoryZoo, ScriptedRecognition};

/// A zoo plus the verdicts the recognition system should return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    #[serde(default)]
    pub enclosures: Vec<EnclosureScenario>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosureScenario {
    pub id: String,
    pub animal: String,
    #[serde(default = "default_safe")]
    pub safe: bool,
    #[serde(default)]
    pub sick: bool,
}

fn default_safe() -> bool {
    true
}

impl Scenario {
    /// Read and validate a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let scenario = Self::from_yaml(&content)?;
        log::info!(
            "Loaded scenario for zoo {} from {}",
            scenario.id,
            path.as_ref().display()
        );
        Ok(scenario)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let scenario: Self = serde_yaml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        let mut animals = HashSet::new();
        for enclosure in &self.enclosures {
            if !ids.insert(enclosure.id.as_str()) {
                return Err(InspectorError::Scenario(format!(
                    "Duplicate enclosure id {} in zoo {}",
                    enclosure.id, self.id
                )));
            }
            // verdicts are keyed by animal name, so names must be unique too
            if !animals.insert(enclosure.animal.as_str()) {
                return Err(InspectorError::Scenario(format!(
                    "Animal {} appears in more than one enclosure of zoo {}",
                    enclosure.animal, self.id
                )));
            }
        }
        Ok(())
    }

    /// Zoo holding the scenario's enclosures in file order
    pub fn zoo(&self) -> InMemoryZoo {
        let enclosures = self
            .enclosures
            .iter()
            .map(|e| Enclosure::new(e.id.clone(), Animal::new(e.animal.clone())))
            .collect();
        InMemoryZoo::new(self.id.clone(), enclosures)
    }

    /// Recognition system answering with the scenario's verdicts
    pub fn recognition(&self) -> ScriptedRecognition {
        self.enclosures
            .iter()
            .fold(ScriptedRecognition::new(), |recognition, e| {
                recognition
                    .with_enclosure(e.id.clone(), e.safe)
                    .with_animal(e.animal.clone(), e.sick)
            })
    }
}
