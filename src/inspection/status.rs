//! Status lines written to the inspection log.
//!
//! Every line has the shape `<KIND>#<subject>#<VERDICT>`. Subjects are
//! written verbatim; a `#` inside an id or name is not escaped.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::{EnclosureId, ZooId};

const ZOO: &str = "ZOO";
const ENCLOSURE: &str = "ENCLOSURE";
const ANIMAL: &str = "ANIMAL";
const WARNING: &str = "WARNING";
const OK: &str = "OK";
const SEPARATOR: char = '#';

/// Outcome recorded on a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Warning,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Ok => OK,
            Verdict::Warning => WARNING,
        }
    }
}

impl From<bool> for Verdict {
    /// `true` means a warning was raised
    fn from(warning: bool) -> Self {
        if warning {
            Verdict::Warning
        } else {
            Verdict::Ok
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the inspection log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// Enclosure classified unsafe
    EnclosureWarning(EnclosureId),
    /// Animal classified sick
    AnimalWarning(String),
    /// Overall zoo verdict, always the last line of a run
    Zoo { id: ZooId, verdict: Verdict },
}

impl StatusLine {
    pub fn kind(&self) -> &'static str {
        match self {
            StatusLine::EnclosureWarning(_) => ENCLOSURE,
            StatusLine::AnimalWarning(_) => ANIMAL,
            StatusLine::Zoo { .. } => ZOO,
        }
    }

    pub fn subject(&self) -> &str {
        match self {
            StatusLine::EnclosureWarning(id) => id.as_str(),
            StatusLine::AnimalWarning(name) => name,
            StatusLine::Zoo { id, .. } => id.as_str(),
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            StatusLine::EnclosureWarning(_) | StatusLine::AnimalWarning(_) => Verdict::Warning,
            StatusLine::Zoo { verdict, .. } => *verdict,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.verdict() == Verdict::Warning
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.kind(),
            self.subject(),
            self.verdict()
        )
    }
}

impl Serialize for StatusLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
