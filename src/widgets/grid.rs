use glam::{IVec2, ivec2};

use crate::{
    ctx::UiCtx,
    debug,
    input::Mouse,
    layout::{
        Kid, Slot, State, WidgetId, grid, kids_draw, kids_first_focus, kids_focus, kids_key,
        kids_layout, kids_mark, kids_mouse, kids_print,
    },
    renderer::Surface,
    style,
    widgets::{Response, Widget},
};

/// Kids in a fixed number of equal-width columns, filled row by row.
pub struct Grid {
    pub kids: Vec<Kid>,
    pub grid: style::Grid,
    size: IVec2,
}

impl Grid {
    pub fn new(cols: u16, kids: Vec<Kid>) -> Self {
        Self {
            kids,
            grid: style::Grid {
                cols,
                ..style::Grid::default()
            },
            size: IVec2::ZERO,
        }
    }

    pub fn gap(mut self, gap: i32) -> Self {
        self.grid.gap = IVec2::splat(gap);
        self
    }
}

impl Widget for Grid {
    fn layout(&mut self, ctx: &UiCtx, slot: &mut Slot, size_avail: IVec2, force: bool) {
        ctx.debug_layout("Grid", slot);
        if kids_layout(ctx, slot, &mut self.kids, force) {
            return;
        }
        self.size = grid::compute(ctx, self.grid, &mut self.kids, size_avail, IVec2::ZERO, force);
        slot.rect.size = self.size;
        slot.layout = State::Clean;
    }

    fn draw(
        &mut self,
        ctx: &UiCtx,
        slot: &mut Slot,
        img: &mut dyn Surface,
        orig: IVec2,
        m: Mouse,
        force: bool,
    ) {
        kids_draw("Grid", ctx, slot, &mut self.kids, self.size, img, orig, m, force);
    }

    fn mouse(
        &mut self,
        ctx: &UiCtx,
        slot: &mut Slot,
        m: Mouse,
        orig_m: Mouse,
        orig: IVec2,
    ) -> Response {
        kids_mouse(ctx, slot, &mut self.kids, m, orig_m, orig)
    }

    fn key(&mut self, ctx: &UiCtx, slot: &mut Slot, k: char, m: Mouse, orig: IVec2) -> Response {
        kids_key(ctx, slot, &mut self.kids, k, m, orig)
    }

    fn first_focus(&self, ctx: &UiCtx) -> Option<IVec2> {
        kids_first_focus(ctx, &self.kids)
    }

    fn focus(&self, ctx: &UiCtx, slot: &Slot, target: WidgetId) -> Option<IVec2> {
        if slot.id == target {
            return self.first_focus(ctx);
        }
        kids_focus(ctx, &self.kids, target)
    }

    fn mark(&mut self, slot: &mut Slot, target: WidgetId, for_layout: bool, state: State) -> bool {
        kids_mark(slot, &mut self.kids, target, for_layout, state)
    }

    fn print(&self, slot: &Slot, indent: usize, out: &mut String) {
        debug::print_ui("Grid", slot, indent, out);
        kids_print(&self.kids, indent + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::walk::tests::{Probe, ctx};

    #[test]
    fn focus_goes_through_the_cell_offset() {
        let ctx = ctx();
        let mut focusable = Probe::new(ivec2(5, 5));
        focusable.focus_at = Some(ivec2(1, 1));
        let grid = Grid::new(2, crate::kids![Probe::new(ivec2(5, 5)), focusable]).gap(2);
        let target = grid.kids[1].id();
        let mut root = Kid::new(grid);
        root.layout(&ctx, ivec2(22, 50), false);

        assert_eq!(root.slot.rect.size, ivec2(22, 5));
        assert_eq!(root.first_focus(&ctx), Some(ivec2(13, 1)));
        assert_eq!(root.focus(&ctx, target), Some(ivec2(13, 1)));
        assert_eq!(root.focus(&ctx, root.id()), Some(ivec2(13, 1)));
    }
}
