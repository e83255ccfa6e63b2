//! Inspector facade - runs one inspection per call and logs its lines.

use std::sync::Arc;

use super::report::InspectionReport;
use super::runner::Inspection;
use crate::collaborators::{ImageRecognitionSystem, InspectionLog, Zoo};
use crate::error::Result;

/// Inspects zoos with a fixed recognition system and log.
pub struct Inspector {
    /// Classifies enclosure and animal pictures
    recognition: Arc<dyn ImageRecognitionSystem>,
    /// Receives the status lines of every completed run
    log: Arc<dyn InspectionLog>,
}

impl Inspector {
    pub fn new(recognition: Arc<dyn ImageRecognitionSystem>, log: Arc<dyn InspectionLog>) -> Self {
        Self { recognition, log }
    }

    /// Inspect a zoo and hand the resulting lines to the log.
    pub fn inspect(&self, zoo: &dyn Zoo) -> Result<()> {
        self.inspect_report(zoo).map(|_| ())
    }

    /// Same as [`Inspector::inspect`], also returning the report.
    ///
    /// Nothing reaches the log when the run fails.
    pub fn inspect_report(&self, zoo: &dyn Zoo) -> Result<InspectionReport> {
        let report = Inspection::new(zoo, self.recognition.as_ref()).run()?;
        self.log.log(&report.rendered())?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Animal, Enclosure};
    use crate::error::InspectorError;
    use crate::simulation::{InMemoryZoo, MemoryLog, ScriptedRecognition};

    fn leo_zoo(id: &str) -> InMemoryZoo {
        InMemoryZoo::new(id, vec![Enclosure::new("E1", Animal::new("Leo"))])
    }

    #[test]
    fn test_inspect_logs_lines() {
        let recognition = Arc::new(ScriptedRecognition::new().with_enclosure("E1", true).with_animal("Leo", true));
        let log = Arc::new(MemoryLog::new());
        let inspector = Inspector::new(recognition, log.clone());

        inspector.inspect(&leo_zoo("Z1")).unwrap();

        assert_eq!(log.batches(), vec![vec!["ANIMAL#Leo#WARNING", "ZOO#Z1#WARNING"]]);
    }

    #[test]
    fn test_each_call_is_independent() {
        let recognition = Arc::new(ScriptedRecognition::new().with_enclosure("E1", false).with_animal("Leo", false));
        let log = Arc::new(MemoryLog::new());
        let inspector = Inspector::new(recognition, log.clone());
        let zoo = leo_zoo("Z1");

        inspector.inspect(&zoo).unwrap();
        inspector.inspect(&zoo).unwrap();

        let batches = log.batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0], batches[1]);
        assert_eq!(batches[0], vec!["ENCLOSURE#E1#WARNING", "ZOO#Z1#WARNING"]);
    }

    #[test]
    fn test_failed_run_logs_nothing() {
        let recognition = Arc::new(ScriptedRecognition::new());
        let log = Arc::new(MemoryLog::new());
        let inspector = Inspector::new(recognition, log.clone());

        let err = inspector.inspect(&leo_zoo("Z1")).unwrap_err();

        assert!(matches!(err, InspectorError::Recognition(_)));
        assert!(log.batches().is_empty());
    }

    #[test]
    fn test_inspect_report_returns_report() {
        let recognition = Arc::new(ScriptedRecognition::new().with_enclosure("E1", true).with_animal("Leo", false));
        let log = Arc::new(MemoryLog::new());
        let inspector = Inspector::new(recognition, log.clone());

        let report = inspector.inspect_report(&leo_zoo("Z9")).unwrap();

        assert_eq!(report.rendered(), vec!["ZOO#Z9#OK"]);
        assert_eq!(log.batches(), vec![report.rendered()]);
    }
}
