use glam::{IVec2, Vec4};

use crate::layout::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderPrimative {
    Rectangle {
        rect: Rect,
        color: Vec4,
    },
    Text {
        text: String,
        position: IVec2,
        color: Vec4,
    },
    Line {
        start: IVec2,
        end: IVec2,
        color: Vec4,
        width: i32,
    },
    Circle {
        center: IVec2,
        radius: i32,
        color: Vec4,
        filled: bool,
    },
}

impl RenderPrimative {
    /// Bounding box of the primitive, when it has a cheap one.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            RenderPrimative::Rectangle { rect, .. } => Some(*rect),
            RenderPrimative::Circle { center, radius, .. } => Some(Rect::from_corners(
                *center - IVec2::splat(*radius),
                *center + IVec2::splat(*radius + 1),
            )),
            RenderPrimative::Line { start, end, .. } => {
                Some(Rect::from_corners(start.min(*end), start.max(*end) + IVec2::ONE))
            }
            RenderPrimative::Text { .. } => None,
        }
    }
}
