//! Verdicts returned by the image recognition system.

/// Whether an enclosure looks safe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnclosureStatus {
    safe: bool,
}

impl EnclosureStatus {
    pub fn safe() -> Self {
        Self { safe: true }
    }

    pub fn hazardous() -> Self {
        Self { safe: false }
    }

    pub fn from_safe(safe: bool) -> Self {
        Self { safe }
    }

    pub fn is_enclosure_safe(&self) -> bool {
        self.safe
    }
}

/// Whether an animal looks sick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimalStatus {
    sick: bool,
}

impl AnimalStatus {
    pub fn healthy() -> Self {
        Self { sick: false }
    }

    pub fn sick() -> Self {
        Self { sick: true }
    }

    pub fn from_sick(sick: bool) -> Self {
        Self { sick }
    }

    pub fn is_animal_sick(&self) -> bool {
        self.sick
    }
}
