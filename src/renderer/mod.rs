pub mod primatives;
pub mod surface;

use glam::{IVec2, Vec4, ivec2};

pub use primatives::RenderPrimative;
pub use surface::{Surface, draw_border};

use crate::{layout::Rect, text::Font};

/// Surface that records what was painted instead of rasterizing it.
///
/// Primitives falling completely outside the current clip are dropped, so
/// the list only holds what would reach the screen.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    size: IVec2,
    prims: Vec<RenderPrimative>,
    clips: Vec<Rect>,
}

impl DisplayList {
    pub fn new(size: IVec2) -> Self {
        Self {
            size,
            prims: Vec::new(),
            clips: Vec::new(),
        }
    }

    pub fn begin_frame(&mut self) {
        self.prims.clear();
        self.clips.clear();
    }

    pub fn resize(&mut self, size: IVec2) {
        self.size = size;
    }

    pub fn primatives(&self) -> &[RenderPrimative] {
        &self.prims
    }

    pub fn len(&self) -> usize {
        self.prims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    /// All text painted this frame, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.prims
            .iter()
            .filter_map(|p| match p {
                RenderPrimative::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Filled rectangles painted this frame.
    pub fn fills(&self) -> Vec<Rect> {
        self.prims
            .iter()
            .filter_map(|p| match p {
                RenderPrimative::Rectangle { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    fn clip(&self) -> Rect {
        self.clips
            .last()
            .copied()
            .unwrap_or_else(|| Rect::from_size(self.size))
    }

    fn push(&mut self, prim: RenderPrimative) {
        if let Some(b) = prim.bounds() {
            if !b.intersects(&self.clip()) {
                return;
            }
        }
        self.prims.push(prim);
    }
}

impl Surface for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Vec4) {
        if rect.is_empty() {
            return;
        }
        self.push(RenderPrimative::Rectangle { rect, color });
    }

    fn draw_text(&mut self, p: IVec2, text: &str, font: &dyn Font, color: Vec4) -> IVec2 {
        if !text.is_empty() {
            self.push(RenderPrimative::Text {
                text: text.to_string(),
                position: p,
                color,
            });
        }
        p + ivec2(font.string_width(text), 0)
    }

    fn line(&mut self, start: IVec2, end: IVec2, width: i32, color: Vec4) {
        self.push(RenderPrimative::Line {
            start,
            end,
            color,
            width,
        });
    }

    fn arc(&mut self, center: IVec2, radius: i32, color: Vec4) {
        self.push(RenderPrimative::Circle {
            center,
            radius,
            color,
            filled: false,
        });
    }

    fn fill_arc(&mut self, center: IVec2, radius: i32, color: Vec4) {
        self.push(RenderPrimative::Circle {
            center,
            radius,
            color,
            filled: true,
        });
    }

    fn push_clip(&mut self, r: Rect) {
        let cur = self.clip();
        let min = cur.min().max(r.min());
        let max = cur.max().min(r.max()).max(min);
        self.clips.push(Rect::from_corners(min, max));
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }
}
