use glam::{IVec2, ivec2};

use crate::{
    ctx::UiCtx,
    input::{BUTTON1, Mouse, keys},
    layout::{Rect, Slot, State, WidgetId, propagate_event},
    renderer::Surface,
    signals::ReadSignal,
    text::Font,
    widgets::{Event, Response, Widget},
};

/// Read-only text, wrapped at the available width.
pub struct Label {
    pub text: ReadSignal<String>,
    on_click: Option<Box<dyn FnMut(&mut Event)>>,
    lines: Vec<String>,
    size: IVec2,
    m: Mouse,
}

impl Label {
    pub fn new(text: impl Into<ReadSignal<String>>) -> Self {
        Self {
            text: text.into(),
            on_click: None,
            lines: Vec::new(),
            size: IVec2::ZERO,
            m: Mouse::default(),
        }
    }

    /// Called on a button-1 press or Enter.
    pub fn on_click(mut self, f: impl FnMut(&mut Event) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    fn click(&mut self, slot: &mut Slot, r: &mut Response) {
        if let Some(f) = self.on_click.as_mut() {
            let mut e = Event::default();
            f(&mut e);
            propagate_event(slot, r, e);
        }
    }
}

/// Splits `text` into lines no wider than `width`, breaking at newlines and
/// before the char that would overflow. A line always holds at least one
/// char. Returns the lines and the size they cover.
pub fn wrap(font: &dyn Font, text: &str, width: i32) -> (Vec<String>, IVec2) {
    let mut lines = Vec::new();
    let (mut s, mut x, mut xmax) = (0, 0, 0);
    for (i, c) in text.char_indices() {
        if c == '\n' {
            xmax = xmax.max(x);
            lines.push(text[s..i].to_string());
            s = i + 1;
            x = 0;
            continue;
        }
        let dx = font.string_width(c.encode_utf8(&mut [0; 4]));
        x += dx;
        if i == s || x <= width {
            continue;
        }
        xmax = xmax.max(x - dx);
        lines.push(text[s..i].to_string());
        s = i;
        x = dx;
    }
    if s < text.len() || s == 0 {
        lines.push(text[s..].to_string());
        xmax = xmax.max(x);
    }
    let size = ivec2(xmax, lines.len() as i32 * font.height());
    (lines, size)
}

impl Widget for Label {
    fn layout(&mut self, ctx: &UiCtx, slot: &mut Slot, size_avail: IVec2, _force: bool) {
        ctx.debug_layout("Label", slot);
        let (lines, size) = self.text.with(|t| wrap(ctx.font(), t, size_avail.x));
        self.lines = lines;
        self.size = size;
        slot.rect.size = size;
        slot.layout = State::Clean;
    }

    fn draw(
        &mut self,
        ctx: &UiCtx,
        slot: &mut Slot,
        img: &mut dyn Surface,
        orig: IVec2,
        _m: Mouse,
        _force: bool,
    ) {
        ctx.debug_draw("Label", slot);
        let font = ctx.font();
        let mut p = orig;
        for line in &self.lines {
            img.draw_text(p, line, font, ctx.theme.normal.text);
            p.y += font.height();
        }
    }

    fn mouse(
        &mut self,
        _ctx: &UiCtx,
        slot: &mut Slot,
        m: Mouse,
        _orig_m: Mouse,
        _orig: IVec2,
    ) -> Response {
        let mut r = Response::default();
        if m.in_rect(&Rect::from_size(self.size)) && self.m.buttons == 0 && m.buttons == BUTTON1 {
            self.click(slot, &mut r);
        }
        self.m = m;
        r
    }

    fn key(&mut self, ctx: &UiCtx, slot: &mut Slot, k: char, _m: Mouse, _orig: IVec2) -> Response {
        let mut r = Response::default();
        match k {
            keys::ENTER => self.click(slot, &mut r),
            keys::CMD_C => {
                self.text.with(|t| ctx.write_snarf(t.as_bytes()));
                r.consumed = true;
            }
            _ => {}
        }
        r
    }

    fn focus(&self, _ctx: &UiCtx, slot: &Slot, target: WidgetId) -> Option<IVec2> {
        (slot.id == target).then_some(IVec2::ZERO)
    }
}
