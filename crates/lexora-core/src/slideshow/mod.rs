//! Showcase slideshow
//!
//! A fixed, non-empty sequence of slides and a cursor that moves around it
//! as a ring. The cursor is advanced by a recurring timer and by manual
//! navigation; the two never coordinate, so a manual move can be followed
//! immediately by a scheduled tick.

mod catalog;

#[cfg(feature = "runtime")]
mod auto_advance;

pub use catalog::SHOWCASE_SLIDES;

#[cfg(feature = "runtime")]
pub use auto_advance::{AutoAdvance, SlideshowController};

use crate::{CoreError, CoreResult};
use serde::Serialize;
use std::time::Duration;

/// Auto-advance period used by the showcase
pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// A static display record in the showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub id: u32,
    pub image_ref: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Position of the active slide within a ring of `len` slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowState {
    current: usize,
    len: usize,
}

impl SlideshowState {
    pub fn new(len: usize) -> CoreResult<Self> {
        if len == 0 {
            return Err(CoreError::EmptySlideshow);
        }
        Ok(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Select a slide directly.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the ring. Indices come from enumerating
    /// the slide sequence, so an out-of-range value is a caller bug.
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.len,
            "slide index {} out of range for {} slides",
            index,
            self.len
        );
        self.current = index;
    }
}

/// Slides paired with the cursor that selects one of them
#[derive(Debug, Clone)]
pub struct Slideshow {
    slides: &'static [Slide],
    state: SlideshowState,
}

impl Slideshow {
    pub fn new(slides: &'static [Slide]) -> CoreResult<Self> {
        Ok(Self {
            slides,
            state: SlideshowState::new(slides.len())?,
        })
    }

    /// The showcase used on the landing page
    pub fn showcase() -> Self {
        Self {
            slides: SHOWCASE_SLIDES,
            state: SlideshowState {
                current: 0,
                len: SHOWCASE_SLIDES.len(),
            },
        }
    }

    pub fn slides(&self) -> &'static [Slide] {
        self.slides
    }

    pub fn state(&self) -> SlideshowState {
        self.state
    }

    pub fn state_mut(&mut self) -> &mut SlideshowState {
        &mut self.state
    }

    pub fn active(&self) -> &'static Slide {
        &self.slides[self.state.current()]
    }

    /// Every slide with its index and whether it is the visible one
    pub fn frames(&self) -> impl Iterator<Item = (usize, &'static Slide, bool)> + '_ {
        self.slides
            .iter()
            .enumerate()
            .map(move |(index, slide)| (index, slide, self.state.is_active(index)))
    }
}
