//! Captured pictures and what they show.

use std::fmt;

use super::zoo::{Animal, Enclosure};

/// What a camera is pointed at
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Enclosure(&'a Enclosure),
    Animal(&'a Animal),
}

impl fmt::Display for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Enclosure(enclosure) => write!(f, "enclosure:{}", enclosure.id()),
            Subject::Animal(animal) => write!(f, "animal:{}", animal.name()),
        }
    }
}

/// Opaque capture result, handed straight to the recognition system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    data: Vec<u8>,
}

impl Picture {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
