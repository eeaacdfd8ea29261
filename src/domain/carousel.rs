// src/domain/carousel.rs

use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Previous,
}

impl CarouselAction {
    /// Parses the `nav` query parameter.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "next" => Some(CarouselAction::Next),
            "previous" | "prev" => Some(CarouselAction::Previous),
            _ => None,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            CarouselAction::Next => "next",
            CarouselAction::Previous => "previous",
        }
    }
}

/// Cyclic pointer into a listing's image sequence.
///
/// `index` is always in `0..len`; the length can never be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: NonZeroUsize,
}

impl Carousel {
    /// Returns `None` for an empty image sequence.
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self { index: 0, len })
    }

    /// Pointer at `index`, wrapped into range.
    pub fn at(len: usize, index: usize) -> Option<Self> {
        Self::new(len).map(|c| Self {
            index: index % c.len.get(),
            ..c
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn has_many(&self) -> bool {
        self.len() > 1
    }

    /// Reducer: old pointer + action -> new pointer.
    pub fn apply(self, action: CarouselAction) -> Self {
        let len = self.len.get();
        let index = match action {
            CarouselAction::Next => (self.index + 1) % len,
            CarouselAction::Previous => (self.index + len - 1) % len,
        };
        Self { index, ..self }
    }

    pub fn next(self) -> Self {
        self.apply(CarouselAction::Next)
    }

    pub fn previous(self) -> Self {
        self.apply(CarouselAction::Previous)
    }
}
