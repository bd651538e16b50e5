//! Text measurement used by layout and drawing.

mod cosmic;

pub use cosmic::CosmicFont;

use glam::{IVec2, ivec2};

pub trait Font {
    /// Line height in pixels.
    fn height(&self) -> i32;

    fn string_width(&self, s: &str) -> i32;

    fn string_size(&self, s: &str) -> IVec2 {
        ivec2(self.string_width(s), self.height())
    }
}

/// Fixed-advance font. Every char is `advance` wide.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MonoFont {
    pub advance: i32,
    pub height: i32,
}

impl MonoFont {
    pub fn new(advance: i32, height: i32) -> Self {
        Self { advance, height }
    }
}

impl Default for MonoFont {
    fn default() -> Self {
        Self::new(8, 16)
    }
}

impl Font for MonoFont {
    fn height(&self) -> i32 {
        self.height
    }

    fn string_width(&self, s: &str) -> i32 {
        s.chars().count() as i32 * self.advance
    }
}
