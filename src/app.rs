use std::sync::mpsc;

use glam::IVec2;
use winit::event::WindowEvent;

use crate::{
    ctx::UiCtx,
    input::{Mouse, platform::PointerTracker},
    layout::{Kid, State, WidgetId},
    renderer::Surface,
    signals::{MarkRoute, MarkSender, Pass},
    widgets::{Response, Widget},
};

/// Owns the root of the tree and drives every pass over it.
///
/// Callers feed it pointer samples and keys, then call [`App::render`]
/// whenever a [`Response`] asks for layout or drawing.
pub struct App {
    ctx: UiCtx,
    root: Kid,
    size: IVec2,
    dirty_tx: MarkSender,
    dirty_rx: mpsc::Receiver<(WidgetId, Pass)>,
    pointer: PointerTracker,
    mouse: Mouse,
    orig_mouse: Mouse,
}

impl App {
    pub fn new(ctx: UiCtx, root: impl Widget + 'static) -> Self {
        let (dirty_tx, dirty_rx) = mpsc::channel();
        Self {
            ctx,
            root: Kid::new(root),
            size: IVec2::ZERO,
            dirty_tx,
            dirty_rx,
            pointer: PointerTracker::new(),
            mouse: Mouse::default(),
            orig_mouse: Mouse::default(),
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.resize(IVec2::new(width, height));
        self
    }

    pub fn ctx(&self) -> &UiCtx {
        &self.ctx
    }

    pub fn root(&self) -> &Kid {
        &self.root
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    /// Last pointer sample, moved by any warp since.
    pub fn pointer(&self) -> Mouse {
        self.mouse
    }

    pub fn resize(&mut self, size: IVec2) {
        if size != self.size {
            self.size = size;
            self.root.slot.layout = State::Dirty;
        }
    }

    /// Applies marks queued by signal writes.
    fn apply_marks(&mut self) {
        for (id, pass) in self.dirty_rx.try_iter() {
            if !self.root.mark(id, pass.for_layout(), State::Dirty) {
                log::debug!("mark for {id} outside the tree");
            }
        }
    }

    pub fn layout(&mut self) {
        self.apply_marks();
        if self.root.slot.layout.is_clean() {
            return;
        }
        self.ctx.debug_layout("App", &self.root.slot);
        let _route = MarkRoute::enter(&self.dirty_tx);
        self.root.layout(&self.ctx, self.size, false);
        match self.root.slot.layout {
            State::Clean => {}
            // nobody above the root to hand a size change to
            State::Dirty => self.root.layout(&self.ctx, self.size, true),
            State::DirtyKid => panic!("layout of root {} left it at DirtyKid", self.root.id()),
        }
    }

    /// Draws what changed since the last draw. Returns whether anything was
    /// painted.
    pub fn draw(&mut self, img: &mut dyn Surface) -> bool {
        self.apply_marks();
        if self.root.slot.draw.is_clean() {
            return false;
        }
        let force = self.root.slot.draw == State::Dirty;
        let _route = MarkRoute::enter(&self.dirty_tx);
        self.root.draw(&self.ctx, img, IVec2::ZERO, self.mouse, force);
        self.root.slot.draw = State::Clean;
        true
    }

    pub fn render(&mut self, img: &mut dyn Surface) -> bool {
        self.layout();
        self.draw(img)
    }

    /// Routes one pointer sample.
    ///
    /// Samples are routed by where the buttons went down, so a press, drag
    /// and release all reach the same widget.
    pub fn mouse(&mut self, m: Mouse) -> Response {
        self.apply_marks();
        if self.mouse.buttons == 0 {
            self.orig_mouse = m;
        }
        self.mouse = m;
        let _route = MarkRoute::enter(&self.dirty_tx);
        let r = self.root.mouse(&self.ctx, m, self.orig_mouse, IVec2::ZERO);
        self.finish(r)
    }

    /// Routes one key to the widget under the pointer.
    pub fn key(&mut self, k: char) -> Response {
        self.apply_marks();
        let _route = MarkRoute::enter(&self.dirty_tx);
        let r = self.root.key(&self.ctx, k, self.mouse, IVec2::ZERO);
        self.finish(r)
    }

    fn finish(&mut self, mut r: Response) -> Response {
        if self.root.slot.layout == State::Dirty {
            self.layout();
        }
        self.apply_marks();
        if let Some(p) = r.warp {
            self.mouse.point = p;
        }
        r.layout = !self.root.slot.layout.is_clean();
        r.draw = !self.root.slot.draw.is_clean();
        r
    }

    /// Feeds a winit window event through the tree. Returns the response
    /// for pointer and key events.
    pub fn window_event(&mut self, event: &WindowEvent) -> Option<Response> {
        match event {
            WindowEvent::Resized(size) => {
                self.resize(IVec2::new(size.width as i32, size.height as i32));
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let k = self.pointer.key(event)?;
                Some(self.key(k))
            }
            _ => {
                let m = self.pointer.handle(event)?;
                Some(self.mouse(m))
            }
        }
    }

    pub fn mark(&mut self, id: WidgetId, for_layout: bool, state: State) -> bool {
        self.root.mark(id, for_layout, state)
    }

    /// Root coordinates of the focus point of widget `id`.
    pub fn focus(&self, id: WidgetId) -> Option<IVec2> {
        self.root
            .focus(&self.ctx, id)
            .map(|p| p + self.root.slot.rect.origin)
    }

    pub fn first_focus(&self) -> Option<IVec2> {
        self.root
            .first_focus(&self.ctx)
            .map(|p| p + self.root.slot.rect.origin)
    }

    /// Structural dump of the whole tree, also logged at info level.
    pub fn print(&self) -> String {
        let mut out = String::new();
        self.root.print(0, &mut out);
        log::info!("ui tree:\n{out}");
        out
    }
}
