use glam::{IVec2, ivec2};

use crate::{
    ctx::UiCtx,
    input::{Mouse, keys},
    layout::{Rect, Slot, State, propagate_event},
    renderer::{Surface, draw_border},
    widgets::{Event, Response, Widget},
};

/// Push button with a text label.
pub struct Button {
    pub text: String,
    pub disabled: bool,
    pub primary: bool,
    on_click: Option<Box<dyn FnMut(&mut Event)>>,
    m: Mouse,
}

impl Button {
    pub fn label<S: Into<String>>(txt: S) -> Self {
        Self {
            text: txt.into(),
            disabled: false,
            primary: false,
            on_click: None,
            m: Mouse::default(),
        }
    }

    pub fn on_click(mut self, f: impl FnMut(&mut Event) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn padding(ctx: &UiCtx) -> IVec2 {
        let h = ctx.font().height();
        ivec2(h / 2, h / 4)
    }

    fn size(&self, ctx: &UiCtx) -> IVec2 {
        ctx.font().string_size(&self.text) + Self::padding(ctx) * 2
    }

    fn click(&mut self, slot: &mut Slot, r: &mut Response) {
        r.consumed = true;
        if let Some(f) = self.on_click.as_mut() {
            let mut e = Event::default();
            f(&mut e);
            propagate_event(slot, r, e);
        }
    }
}

impl Widget for Button {
    fn layout(&mut self, ctx: &UiCtx, slot: &mut Slot, _size_avail: IVec2, _force: bool) {
        ctx.debug_layout("Button", slot);
        slot.rect.size = self.size(ctx);
        slot.layout = State::Clean;
    }

    fn draw(
        &mut self,
        ctx: &UiCtx,
        slot: &mut Slot,
        img: &mut dyn Surface,
        orig: IVec2,
        m: Mouse,
        _force: bool,
    ) {
        ctx.debug_draw("Button", slot);
        let r = Rect::from_size(self.size(ctx));
        let hover = m.in_rect(&r);
        let theme = &ctx.theme;
        let colors = if self.disabled {
            theme.disabled
        } else if self.primary {
            theme.primary
        } else if hover {
            theme.hover
        } else {
            theme.normal
        };

        let r = r.translate(orig);
        img.fill_rect(r.inset(1), colors.background);
        draw_border(img, r, colors.border);

        // pressed text sinks by a pixel
        let hit = if hover && !self.disabled && m.b1() {
            ivec2(0, 1)
        } else {
            IVec2::ZERO
        };
        img.draw_text(
            r.min() + Self::padding(ctx) + hit,
            &self.text,
            ctx.font(),
            colors.text,
        );
    }

    fn mouse(
        &mut self,
        ctx: &UiCtx,
        slot: &mut Slot,
        m: Mouse,
        _orig_m: Mouse,
        _orig: IVec2,
    ) -> Response {
        let mut r = Response::default();
        let rect = Rect::from_size(self.size(ctx));
        let hover = m.in_rect(&rect);
        if hover != self.m.in_rect(&rect) || self.m.b1() != m.b1() {
            slot.draw = State::Dirty;
        }
        if !self.disabled && hover && self.m.b1() && !m.b1() {
            self.click(slot, &mut r);
        }
        self.m = m;
        r
    }

    fn key(&mut self, _ctx: &UiCtx, slot: &mut Slot, k: char, _m: Mouse, _orig: IVec2) -> Response {
        let mut r = Response::default();
        if !self.disabled && (k == ' ' || k == keys::ENTER) {
            self.click(slot, &mut r);
        }
        r
    }

    fn first_focus(&self, ctx: &UiCtx) -> Option<IVec2> {
        Some(IVec2::splat(ctx.space()))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::{config::Config, input::BUTTON1, renderer::DisplayList};

    fn counted() -> (Button, Rc<Cell<u32>>) {
        let clicks = Rc::new(Cell::new(0));
        let seen = clicks.clone();
        let button = Button::label("ok").on_click(move |_| seen.set(seen.get() + 1));
        (button, clicks)
    }

    #[test]
    fn size_is_text_plus_padding() {
        let ctx = UiCtx::headless(Config::default());
        let mut slot = Slot::new();
        Button::label("ok").layout(&ctx, &mut slot, ivec2(500, 500), false);
        // 2 chars of 8px, padding (8, 4)
        assert_eq!(slot.rect.size, ivec2(32, 24));
        assert_eq!(slot.layout, State::Clean);
    }

    #[test]
    fn clicks_on_release_inside() {
        let ctx = UiCtx::headless(Config::default());
        let (mut button, clicks) = counted();
        let mut slot = Slot::new();
        slot.draw = State::Clean;

        let down = Mouse::new(ivec2(5, 5), BUTTON1);
        let up = Mouse::new(ivec2(5, 5), 0);
        let r = button.mouse(&ctx, &mut slot, down, down, IVec2::ZERO);
        assert!(!r.consumed);
        assert_eq!(slot.draw, State::Dirty);
        let r = button.mouse(&ctx, &mut slot, up, down, IVec2::ZERO);
        assert!(r.consumed);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn release_outside_does_not_click() {
        let ctx = UiCtx::headless(Config::default());
        let (mut button, clicks) = counted();
        let mut slot = Slot::new();
        let down = Mouse::new(ivec2(5, 5), BUTTON1);
        let up = Mouse::new(ivec2(90, 5), 0);
        button.mouse(&ctx, &mut slot, down, down, IVec2::ZERO);
        button.mouse(&ctx, &mut slot, up, down, IVec2::ZERO);
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn disabled_ignores_keys() {
        let ctx = UiCtx::headless(Config::default());
        let (button, clicks) = counted();
        let mut button = button.disabled(true);
        let mut slot = Slot::new();
        let r = button.key(&ctx, &mut slot, ' ', Mouse::default(), IVec2::ZERO);
        assert!(!r.consumed);
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn pressed_text_sinks() {
        let ctx = UiCtx::headless(Config::default());
        let mut button = Button::label("ok");
        let mut slot = Slot::new();
        let mut img = DisplayList::new(ivec2(100, 100));
        let m = Mouse::new(ivec2(5, 5), BUTTON1);
        button.draw(&ctx, &mut slot, &mut img, ivec2(10, 10), m, true);
        let text_at = img.primatives().iter().find_map(|p| match p {
            crate::renderer::RenderPrimative::Text { position, .. } => Some(*position),
            _ => None,
        });
        assert_eq!(text_at, Some(ivec2(18, 15)));
    }
}
