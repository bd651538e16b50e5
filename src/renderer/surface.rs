use glam::{IVec2, Vec4, ivec2};

use crate::{layout::Rect, text::Font};

/// Pixel surface the tree paints onto. Coordinates are absolute, after
/// origin translation by the caller.
pub trait Surface {
    fn fill_rect(&mut self, r: Rect, color: Vec4);

    /// Draws `text` with its top-left corner at `p` and returns the pen
    /// position just past the text.
    fn draw_text(&mut self, p: IVec2, text: &str, font: &dyn Font, color: Vec4) -> IVec2;

    fn line(&mut self, a: IVec2, b: IVec2, width: i32, color: Vec4);

    fn arc(&mut self, center: IVec2, radius: i32, color: Vec4);

    fn fill_arc(&mut self, center: IVec2, radius: i32, color: Vec4);

    /// Restricts painting to `r` (intersected with the current clip) until
    /// the matching `pop_clip`.
    fn push_clip(&mut self, r: Rect);

    fn pop_clip(&mut self);

    fn bounds(&self) -> Rect;
}

/// One pixel border with the corner pixels left out.
pub fn draw_border(img: &mut dyn Surface, r: Rect, color: Vec4) {
    if r.dx() < 3 || r.dy() < 3 {
        img.fill_rect(r, color);
        return;
    }
    let (min, max) = (r.min(), r.max() - IVec2::ONE);
    img.line(ivec2(min.x + 1, min.y), ivec2(max.x - 1, min.y), 1, color);
    img.line(ivec2(min.x + 1, max.y), ivec2(max.x - 1, max.y), 1, color);
    img.line(ivec2(min.x, min.y + 1), ivec2(min.x, max.y - 1), 1, color);
    img.line(ivec2(max.x, min.y + 1), ivec2(max.x, max.y - 1), 1, color);
}
