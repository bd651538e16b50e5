use glam::{IVec2, ivec2};

use crate::{ctx::UiCtx, layout::Kid, style::Grid};

/// Lays out and places kids in `grid.cols` equal-width columns.
///
/// Each kid is offered one cell width. A row is as tall as its tallest kid.
/// Returns the content size, always `avail.x` wide.
pub fn compute(
    ctx: &UiCtx,
    grid: Grid,
    kids: &mut [Kid],
    avail: IVec2,
    content_origin: IVec2,
    force: bool,
) -> IVec2 {
    let cols = grid.cols.max(1) as usize;
    let cw = ((avail.x - grid.gap.x * (cols as i32 - 1)) / cols as i32).max(0);

    let mut y = 0;
    for (r, row) in kids.chunks_mut(cols).enumerate() {
        if r > 0 {
            y += grid.gap.y;
        }
        let mut row_h = 0;
        for (c, k) in row.iter_mut().enumerate() {
            k.layout(ctx, ivec2(cw, (avail.y - y).max(0)), force);
            let x = c as i32 * (cw + grid.gap.x);
            k.slot.rect.origin = content_origin + ivec2(x, y);
            row_h = row_h.max(k.slot.rect.size.y);
        }
        y += row_h;
    }

    ivec2(avail.x, y)
}
