use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use glam::IVec2;

use crate::{
    ctx::UiCtx,
    input::Mouse,
    layout::{Rect, State},
    renderer::Surface,
    signals::{Pass, ScopedNodeContext},
    widgets::{Response, Widget},
};

/// Identity of a widget in the tree, assigned when its [`Kid`] is created.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

impl WidgetId {
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Geometry and dirty state a parent keeps for one kid.
///
/// `rect` is in the parent's coordinates. The kid's own `Layout` sets the
/// size; the parent places the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub id: WidgetId,
    pub rect: Rect,
    pub layout: State,
    pub draw: State,
    /// Size the kid chose before its parent stretched `rect`.
    pub natural: Option<IVec2>,
}

impl Slot {
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            rect: Rect::default(),
            layout: State::Dirty,
            draw: State::Dirty,
            natural: None,
        }
    }

    /// Sets the layout or draw marker if `target` is this slot's widget.
    pub fn mark(&mut self, target: WidgetId, for_layout: bool, state: State) -> bool {
        if target != self.id {
            return false;
        }
        if for_layout {
            self.layout = state;
        } else {
            self.draw = state;
        }
        true
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::new()
    }
}

/// A widget plus the slot its parent keeps for it. The unit of composition.
pub struct Kid {
    pub ui: Box<dyn Widget>,
    pub slot: Slot,
}

impl Kid {
    pub fn new(ui: impl Widget + 'static) -> Self {
        Self::boxed(Box::new(ui))
    }

    pub fn boxed(ui: Box<dyn Widget>) -> Self {
        Self {
            ui,
            slot: Slot::new(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.slot.id
    }

    pub fn layout(&mut self, ctx: &UiCtx, size_avail: IVec2, force: bool) {
        let _scope = ScopedNodeContext::new(self.slot.id, Pass::Layout);
        self.ui.layout(ctx, &mut self.slot, size_avail, force);
    }

    pub fn draw(&mut self, ctx: &UiCtx, img: &mut dyn Surface, orig: IVec2, m: Mouse, force: bool) {
        let _scope = ScopedNodeContext::new(self.slot.id, Pass::Draw);
        self.ui.draw(ctx, &mut self.slot, img, orig, m, force);
    }

    pub fn mouse(&mut self, ctx: &UiCtx, m: Mouse, orig_m: Mouse, orig: IVec2) -> Response {
        self.ui.mouse(ctx, &mut self.slot, m, orig_m, orig)
    }

    pub fn key(&mut self, ctx: &UiCtx, k: char, m: Mouse, orig: IVec2) -> Response {
        self.ui.key(ctx, &mut self.slot, k, m, orig)
    }

    pub fn first_focus(&self, ctx: &UiCtx) -> Option<IVec2> {
        self.ui.first_focus(ctx)
    }

    pub fn focus(&self, ctx: &UiCtx, target: WidgetId) -> Option<IVec2> {
        self.ui.focus(ctx, &self.slot, target)
    }

    pub fn mark(&mut self, target: WidgetId, for_layout: bool, state: State) -> bool {
        self.ui.mark(&mut self.slot, target, for_layout, state)
    }

    pub fn print(&self, indent: usize, out: &mut String) {
        self.ui.print(&self.slot, indent, out);
    }
}

impl fmt::Debug for Kid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kid").field("slot", &self.slot).finish_non_exhaustive()
    }
}

/// Wraps each widget in a [`Kid`].
pub fn new_kids(uis: Vec<Box<dyn Widget>>) -> Vec<Kid> {
    uis.into_iter().map(Kid::boxed).collect()
}

#[macro_export]
macro_rules! kids {
    ($($ui:expr),* $(,)?) => {
        vec![$($crate::layout::Kid::new($ui)),*]
    };
}
