use glam::IVec2;

use crate::{
    ctx::UiCtx,
    debug,
    input::Mouse,
    layout::{Slot, State, WidgetId},
    renderer::Surface,
};

/// Outcome of routing one input sample through the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Widget that handled the sample.
    pub hit: Option<WidgetId>,
    pub consumed: bool,
    /// Where the pointer should be moved, in root coordinates.
    pub warp: Option<IVec2>,
    /// Set by the [`App`](crate::App): the tree needs a layout pass.
    pub layout: bool,
    /// Set by the [`App`](crate::App): the tree needs a draw pass.
    pub draw: bool,
}

/// Side effects a widget callback asks for, merged into a [`Response`]
/// with [`propagate_event`](crate::layout::propagate_event).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub consumed: bool,
    pub need_layout: bool,
    pub need_draw: bool,
}

/// What every node in the tree implements.
///
/// The `slot` argument is the node's own geometry and dirty state, held by
/// its parent. Containers keep their children as [`Kid`](crate::layout::Kid)s
/// and hand them to the `kids_*` walkers in [`crate::layout`].
pub trait Widget {
    /// Sets `slot.rect.size` from `size_avail`, leaving the origin alone,
    /// and leaves `slot.layout` at `Clean` (or `Dirty` to make the parent
    /// redo its own layout). Never `DirtyKid`.
    fn layout(&mut self, ctx: &UiCtx, slot: &mut Slot, size_avail: IVec2, force: bool);

    /// Paints the whole of `slot.rect`, translated to `orig`. `m` is in
    /// widget-local coordinates.
    fn draw(
        &mut self,
        ctx: &UiCtx,
        slot: &mut Slot,
        img: &mut dyn Surface,
        orig: IVec2,
        m: Mouse,
        force: bool,
    );

    /// `m` and `orig_m` (the sample at button-down) are widget-local;
    /// `orig` is the widget's absolute origin.
    fn mouse(
        &mut self,
        ctx: &UiCtx,
        slot: &mut Slot,
        m: Mouse,
        orig_m: Mouse,
        orig: IVec2,
    ) -> Response;

    fn key(&mut self, ctx: &UiCtx, slot: &mut Slot, k: char, m: Mouse, orig: IVec2) -> Response;

    /// Widget-local point that should get keyboard focus first, if any.
    fn first_focus(&self, _ctx: &UiCtx) -> Option<IVec2> {
        None
    }

    /// Focus point for `target` if it is this widget or one below it.
    fn focus(&self, ctx: &UiCtx, slot: &Slot, target: WidgetId) -> Option<IVec2> {
        if slot.id != target {
            return None;
        }
        self.first_focus(ctx)
    }

    fn mark(&mut self, slot: &mut Slot, target: WidgetId, for_layout: bool, state: State) -> bool {
        slot.mark(target, for_layout, state)
    }

    fn print(&self, slot: &Slot, indent: usize, out: &mut String) {
        debug::print_ui(debug::widget_type::<Self>(), slot, indent, out);
    }
}
