use glam::{IVec2, ivec2};

use crate::{
    ctx::UiCtx,
    debug,
    input::Mouse,
    layout::{
        Kid, Slot, State, WidgetId, flexbox, kids_draw, kids_first_focus, kids_focus, kids_key,
        kids_layout, kids_mark, kids_mouse, kids_print,
    },
    renderer::Surface,
    style::{Align, Flex, FlexDir, Justify},
    widgets::{Response, Widget},
};

/// Places its kids in a row or a column.
#[derive(Default)]
pub struct Stack {
    pub kids: Vec<Kid>,
    pub flex: Flex,
    pub padding: i32,
    size: IVec2,
}

impl Stack {
    pub fn new(kids: Vec<Kid>) -> Self {
        Self {
            kids,
            ..Self::default()
        }
    }

    pub fn row(kids: Vec<Kid>) -> Self {
        Self::new(kids).flex_direction(FlexDir::Row)
    }

    pub fn column(kids: Vec<Kid>) -> Self {
        Self::new(kids).flex_direction(FlexDir::Column)
    }

    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.kids.push(Kid::new(widget));
        self
    }

    pub fn padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    pub fn flex_direction(mut self, dir: FlexDir) -> Self {
        self.flex.dir = dir;
        self
    }

    pub fn justify_content(mut self, justify: Justify) -> Self {
        self.flex.justify = justify;
        self
    }

    pub fn align_items(mut self, align: Align) -> Self {
        self.flex.align = align;
        self
    }

    pub fn gap(mut self, gap: i32) -> Self {
        self.flex.gap = gap;
        self
    }
}

impl Widget for Stack {
    fn layout(&mut self, ctx: &UiCtx, slot: &mut Slot, size_avail: IVec2, force: bool) {
        ctx.debug_layout("Stack", slot);
        if kids_layout(ctx, slot, &mut self.kids, force) {
            return;
        }

        let pad = IVec2::splat(self.padding);
        let inner = (size_avail - pad * 2).max(IVec2::ZERO);
        let row = self.flex.dir == FlexDir::Row;
        let mut used = 0;
        for k in self.kids.iter_mut() {
            // kids along the main axis share what is left
            let avail = if row {
                ivec2((inner.x - used).max(0), inner.y)
            } else {
                ivec2(inner.x, (inner.y - used).max(0))
            };
            k.layout(ctx, avail, force);
            let size = k.slot.rect.size;
            used += if row { size.x } else { size.y } + self.flex.gap;
        }

        self.size = flexbox::compute(self.flex, &mut self.kids, inner, pad) + pad * 2;
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
        kids_draw("Stack", ctx, slot, &mut self.kids, self.size, img, orig, m, force);
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
        debug::print_ui("Stack", slot, indent, out);
        kids_print(&self.kids, indent + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{
        Rect,
        walk::tests::{Probe, ctx},
    };

    #[test]
    fn column_with_padding_and_gap() {
        let ctx = ctx();
        let mut root = Kid::new(
            Stack::column(crate::kids![Probe::new(ivec2(10, 4)), Probe::new(ivec2(6, 4))])
                .padding(2)
                .gap(1),
        );
        root.layout(&ctx, ivec2(100, 100), false);
        assert_eq!(root.slot.rect, Rect::from_size(ivec2(14, 13)));
        assert_eq!(root.slot.layout, State::Clean);
        assert_eq!(root.slot.draw, State::Dirty);
    }

    #[test]
    fn unchanged_kid_keeps_stack_geometry() {
        let ctx = ctx();
        let probe = Probe::new(ivec2(10, 4));
        let calls = probe.calls.clone();
        let stack = Stack::row(crate::kids![probe, Probe::new(ivec2(3, 3))]);
        let first = stack.kids[0].id();
        let mut root = Kid::new(stack);
        root.layout(&ctx, ivec2(100, 100), false);
        let before = root.slot.rect;

        root.mark(first, true, State::Dirty);
        assert_eq!(root.slot.layout, State::DirtyKid);
        root.layout(&ctx, ivec2(100, 100), false);
        assert_eq!(root.slot.rect, before);
        assert_eq!(root.slot.layout, State::Clean);
        assert_eq!(calls.borrow().layout, 2);
    }

    #[test]
    fn grown_kid_relayouts_stack() {
        let ctx = ctx();
        let probe = Probe::new(ivec2(10, 4));
        let size = probe.size.clone();
        let stack = Stack::row(crate::kids![probe, Probe::new(ivec2(3, 3))]);
        let first = stack.kids[0].id();
        let mut root = Kid::new(stack);
        root.layout(&ctx, ivec2(100, 100), false);
        assert_eq!(root.slot.rect.size, ivec2(13, 4));

        *size.borrow_mut() = ivec2(20, 4);
        root.mark(first, true, State::Dirty);
        root.layout(&ctx, ivec2(100, 100), false);
        assert_eq!(root.slot.rect.size, ivec2(23, 4));
        assert_eq!(root.slot.layout, State::Clean);
    }

    #[test]
    fn stretched_kid_relayout_keeps_stack_geometry() {
        let ctx = ctx();
        let narrow = Probe::new(ivec2(10, 4));
        let narrow_calls = narrow.calls.clone();
        let wide = Probe::new(ivec2(30, 4));
        let wide_calls = wide.calls.clone();
        let stack = Stack::column(crate::kids![narrow, wide]).align_items(Align::Stretch);
        let first = stack.kids[0].id();
        let mut root = Kid::new(stack);
        root.layout(&ctx, ivec2(100, 100), false);
        let before = root.slot.rect;

        root.mark(first, true, State::Dirty);
        root.layout(&ctx, ivec2(100, 100), false);
        assert_eq!(root.slot.rect, before);
        assert_eq!(root.slot.layout, State::Clean);
        assert_eq!(narrow_calls.borrow().layout, 2);
        // no full pass: the wide kid was not laid out again
        assert_eq!(wide_calls.borrow().layout, 1);
    }
}
