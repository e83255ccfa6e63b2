//! Inspection runner - one pass over a zoo's enclosures.
//!
//! For every enclosure, in the zoo's order, the runner checks the enclosure
//! and then its animal. Both checks always run. A failed check closes the
//! enclosure, dispatches the right responders and records a warning line.
//! After the last enclosure the zoo-level line is appended.
//!
//! Any collaborator error aborts the run; lines gathered so far are dropped.

use log::{debug, info, warn};

use super::report::InspectionReport;
use super::status::StatusLine;
use crate::collaborators::{ImageRecognitionSystem, Zoo};
use crate::domain::{Enclosure, Subject};
use crate::error::Result;

/// Lines and warning flag accumulated while a run is in progress.
#[derive(Debug, Default)]
struct Tally {
    lines: Vec<StatusLine>,
    zoo_warning: bool,
}

impl Tally {
    fn warn(&mut self, line: StatusLine) {
        warn!("{}", line);
        self.lines.push(line);
        self.zoo_warning = true;
    }
}

/// A single inspection of one zoo.
///
/// Built fresh for every run and consumed by [`Inspection::run`], so no
/// state carries over between runs.
pub struct Inspection<'a> {
    zoo: &'a dyn Zoo,
    recognition: &'a dyn ImageRecognitionSystem,
}

impl<'a> Inspection<'a> {
    pub fn new(zoo: &'a dyn Zoo, recognition: &'a dyn ImageRecognitionSystem) -> Self {
        Self { zoo, recognition }
    }

    /// Inspect every enclosure and report.
    pub fn run(self) -> Result<InspectionReport> {
        info!("Starting inspection of zoo {}", self.zoo.id());
        let mut tally = Tally::default();

        for enclosure in self.zoo.enclosures()? {
            self.check_enclosure(&enclosure, &mut tally)?;
            self.check_animal(&enclosure, &mut tally)?;
        }

        let report = InspectionReport::conclude(self.zoo.id().clone(), tally.lines, tally.zoo_warning);
        info!(
            "Finished inspection of zoo {}: {} ({} warnings)",
            report.zoo_id,
            report.verdict(),
            report.warning_count()
        );
        Ok(report)
    }

    fn check_enclosure(&self, enclosure: &Enclosure, tally: &mut Tally) -> Result<()> {
        let picture = self.zoo.capture_picture_of(Subject::Enclosure(enclosure))?;
        let status = self.recognition.recognize_enclosure_status(enclosure, picture)?;
        debug!("Enclosure {} safe: {}", enclosure.id(), status.is_enclosure_safe());

        if !status.is_enclosure_safe() {
            self.zoo.close_enclosure(enclosure)?;
            self.zoo.request_security_to(enclosure)?;
            self.zoo.request_maintenance_crew_to(enclosure)?;
            tally.warn(StatusLine::EnclosureWarning(enclosure.id().clone()));
        }
        Ok(())
    }

    fn check_animal(&self, enclosure: &Enclosure, tally: &mut Tally) -> Result<()> {
        let animal = enclosure.animal();
        let picture = self.zoo.capture_picture_of(Subject::Animal(animal))?;
        let status = self.recognition.recognize_animal_status(animal, picture)?;
        debug!("Animal {} sick: {}", animal.name(), status.is_animal_sick());

        if status.is_animal_sick() {
            self.zoo.close_enclosure(enclosure)?;
            self.zoo.request_veterinary_to(animal)?;
            tally.warn(StatusLine::AnimalWarning(animal.name().to_string()));
        }
        Ok(())
    }
}
