//! Result of a completed inspection run.

use serde::Serialize;

use super::status::{StatusLine, Verdict};
use crate::domain::ZooId;

/// Ordered status lines of one run, ending with the zoo-level line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionReport {
    pub zoo_id: ZooId,
    pub lines: Vec<StatusLine>,
    pub warning: bool,
}

impl InspectionReport {
    /// Close a run: append the zoo line reflecting any warning raised.
    pub(crate) fn conclude(zoo_id: ZooId, mut lines: Vec<StatusLine>, warning: bool) -> Self {
        lines.push(StatusLine::Zoo {
            id: zoo_id.clone(),
            verdict: Verdict::from(warning),
        });
        Self { zoo_id, lines, warning }
    }

    /// Lines as handed to the inspection log
    pub fn rendered(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from(self.warning)
    }

    /// Number of enclosure and animal warnings, excluding the zoo line
    pub fn warning_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| !matches!(line, StatusLine::Zoo { .. }))
            .count()
    }
}
