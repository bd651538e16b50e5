use glam::{IVec2, ivec2};

use crate::{
    ctx::UiCtx,
    input::{Mouse, keys},
    layout::{Rect, Slot, State, propagate_event},
    renderer::{Surface, draw_border},
    widgets::{Event, Response, Widget},
};

const STARTS: &[u8] = b"[{(<\"'`";
const ENDS: &[u8] = b"]})>\"'`";
const SPACE: &[u8] = b" \t\r\n\x0c";

type Changed = Box<dyn FnMut(&str, &mut Event)>;
type Keys = Box<dyn FnMut(Mouse, char, &mut Event)>;

/// Single line text entry.
///
/// The cursor and the selection anchor are byte offsets into `text`. The
/// selection runs between the anchor and the cursor.
#[derive(Default)]
pub struct Field {
    pub text: String,
    pub disabled: bool,
    cursor: usize,
    anchor: Option<usize>,
    on_changed: Option<Changed>,
    on_keys: Option<Keys>,
    size: IVec2,
    m: Mouse,
    prev_b1_release: Option<Mouse>,
    /// Horizontal text offset of the previous draw, for long text.
    text_offset: i32,
}

impl Field {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            cursor: text.len(),
            text,
            ..Self::default()
        }
    }

    /// Called after the text changed by a key.
    pub fn on_changed(mut self, f: impl FnMut(&str, &mut Event) + 'static) -> Self {
        self.on_changed = Some(Box::new(f));
        self
    }

    /// Called before a key is handled. Consuming the event skips the
    /// default handling and `on_changed`.
    pub fn on_keys(mut self, f: impl FnMut(Mouse, char, &mut Event) + 'static) -> Self {
        self.on_keys = Some(Box::new(f));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor.min(self.text.len())
    }

    /// Selected byte range, if not empty.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?.min(self.text.len());
        let cursor = self.cursor();
        let (s, e) = (cursor.min(anchor), cursor.max(anchor));
        (s < e).then_some((s, e))
    }

    pub fn selected_text(&self) -> &str {
        match self.selection() {
            Some((s, e)) => &self.text[s..e],
            None => "",
        }
    }

    /// Keeps cursor and anchor inside the text and on char boundaries.
    fn fix_cursor(&mut self) {
        let clamp = |text: &str, mut i: usize| {
            i = i.min(text.len());
            while !text.is_char_boundary(i) {
                i -= 1;
            }
            i
        };
        self.cursor = clamp(&self.text, self.cursor);
        self.anchor = self.anchor.map(|a| clamp(&self.text, a));
    }

    fn prev_char(&self, i: usize) -> usize {
        self.text[..i]
            .char_indices()
            .next_back()
            .map_or(0, |(j, _)| j)
    }

    fn next_char(&self, i: usize) -> usize {
        self.text[i..]
            .chars()
            .next()
            .map_or(i, |c| i + c.len_utf8())
    }

    fn remove_selection(&mut self) -> usize {
        if let Some((s, e)) = self.selection() {
            self.text.replace_range(s..e, "");
            self.cursor = s;
        }
        self.anchor = None;
        self.cursor
    }

    fn locate_cursor(&self, ctx: &UiCtx, x: i32) -> usize {
        let font = ctx.font();
        let mx = x - ctx.space();
        let mut px = 0;
        for (i, c) in self.text.char_indices() {
            let dx = font.string_width(c.encode_utf8(&mut [0; 4]));
            if mx <= px + dx / 2 {
                return i;
            }
            px += dx;
        }
        self.text.len()
    }

    fn edit(&mut self, ctx: &UiCtx, k: char) -> bool {
        let mut cursor = self.cursor;
        match k {
            keys::LEFT => {
                cursor = self.prev_char(cursor);
                self.anchor = None;
            }
            keys::RIGHT => {
                cursor = self.next_char(cursor);
                self.anchor = None;
            }
            keys::CTRL_A | keys::HOME => {
                cursor = 0;
                self.anchor = None;
            }
            keys::CTRL_E | keys::END => {
                cursor = self.text.len();
                self.anchor = None;
            }
            keys::BACKSPACE => {
                cursor = self.remove_selection();
                if cursor > 0 {
                    let prev = self.prev_char(cursor);
                    self.text.replace_range(prev..cursor, "");
                    cursor = prev;
                }
            }
            keys::CTRL_W => {
                // back over blanks, then over the word before them
                let end = self.remove_selection();
                cursor = end;
                let is_space = |c: char| c.is_ascii() && SPACE.contains(&(c as u8));
                while cursor > 0 && self.text[..cursor].ends_with(is_space) {
                    cursor = self.prev_char(cursor);
                }
                while cursor > 0 && !self.text[..cursor].ends_with(is_space) {
                    cursor = self.prev_char(cursor);
                }
                self.text.replace_range(cursor..end, "");
            }
            keys::CTRL_U => {
                self.remove_selection();
                self.text.clear();
                cursor = 0;
            }
            keys::CTRL_K => {
                cursor = self.remove_selection();
                self.text.truncate(cursor);
            }
            keys::DELETE => {
                cursor = self.remove_selection();
                if cursor < self.text.len() {
                    let next = self.next_char(cursor);
                    self.text.replace_range(cursor..next, "");
                }
            }
            keys::CMD_A => {
                cursor = 0;
                self.anchor = Some(self.text.len());
            }
            keys::CMD_C => {
                let sel = self.selected_text();
                if !sel.is_empty() {
                    ctx.write_snarf(sel.as_bytes());
                }
            }
            keys::CMD_X => {
                // nothing is removed unless it reached the clipboard
                if let Some((s, e)) = self.selection()
                    && ctx.write_snarf(self.text[s..e].as_bytes())
                {
                    self.text.replace_range(s..e, "");
                    cursor = s;
                    self.anchor = None;
                }
            }
            keys::CMD_V => {
                // a failed read leaves the text alone
                if let Some(t) = ctx.read_snarf() {
                    cursor = self.remove_selection();
                    self.text.insert_str(cursor, &t);
                    self.anchor = Some(cursor);
                    cursor += t.len();
                }
            }
            c if c.is_control() || is_synthetic(c) => return false,
            c => {
                cursor = self.remove_selection();
                self.text.insert(cursor, c);
                cursor += c.len_utf8();
            }
        }
        self.cursor = cursor;
        self.fix_cursor();
        true
    }

    fn colors(&self, ctx: &UiCtx, hover: bool) -> (crate::style::Colors, crate::style::Colors) {
        let theme = &ctx.theme;
        if self.disabled {
            (theme.disabled, theme.selection)
        } else if hover {
            (theme.hover, theme.selection_hover)
        } else {
            (theme.normal, theme.selection)
        }
    }
}

/// Navigation and command codes that must never be inserted as text.
fn is_synthetic(c: char) -> bool {
    ('\u{E000}'..='\u{F8FF}').contains(&c)
}

/// Byte range to select for a double click at `i`.
///
/// Next to a bracket or quote selects up to its partner, inside a blank
/// run selects the run, otherwise the word around `i`. At either end of
/// the text everything is selected.
pub fn expand_selection(t: &str, i: usize) -> (usize, usize) {
    let b = t.as_bytes();
    let n = b.len();
    if i == 0 || i >= n {
        return (0, n);
    }

    if let Some(idx) = STARTS.iter().position(|&c| c == b[i - 1]) {
        let (up, down) = (STARTS[idx], ENDS[idx]);
        let mut nested = 1;
        for (e, &c) in b.iter().enumerate().skip(i) {
            // quotes are their own partner: test the closing byte first
            if c == down {
                nested -= 1;
            } else if c == up {
                nested += 1;
            }
            if nested == 0 {
                return (i, e);
            }
        }
        return (i, i);
    }

    if let Some(idx) = ENDS.iter().position(|&c| c == b[i]) {
        let (up, down) = (ENDS[idx], STARTS[idx]);
        let mut nested = 1;
        for s in (0..i).rev() {
            if b[s] == down {
                nested -= 1;
            } else if b[s] == up {
                nested += 1;
            }
            if nested == 0 {
                return (s + 1, i);
            }
        }
        return (i, i);
    }

    let is_space = |c: u8| SPACE.contains(&c);
    let is_bracket = |c: u8| STARTS.contains(&c) || ENDS.contains(&c);
    let blanks = is_space(b[i - 1]) && is_space(b[i]);
    let keep = |c: u8| is_space(c) == blanks && !is_bracket(c);

    let (mut s, mut e) = (i, i);
    while s > 0 && keep(b[s - 1]) {
        s -= 1;
    }
    while e < n && keep(b[e]) {
        e += 1;
    }
    (s, e)
}

impl Widget for Field {
    fn layout(&mut self, ctx: &UiCtx, slot: &mut Slot, size_avail: IVec2, _force: bool) {
        ctx.debug_layout("Field", slot);
        self.size = ivec2(size_avail.x, 2 * ctx.space() + ctx.font().height());
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
        _force: bool,
    ) {
        ctx.debug_draw("Field", slot);
        if self.size.x <= 0 || self.size.y <= 0 {
            return;
        }
        let r = Rect::from_size(self.size);
        let hover = m.in_rect(&r);
        let r = r.translate(orig);
        let (colors, sel_colors) = self.colors(ctx, hover);
        img.fill_rect(r, colors.background);
        draw_border(img, r, colors.border);

        self.fix_cursor();
        let font = ctx.font();
        let space = ctx.space();
        let inner = r.inset(space);
        let cursor_x = font.string_width(&self.text[..self.cursor]);

        // keep the cursor in view, moving the text as little as possible
        self.text_offset = if font.string_width(&self.text) <= inner.dx() {
            0
        } else {
            let at = cursor_x + self.text_offset;
            if at < 0 {
                -cursor_x
            } else if at > inner.dx() {
                inner.dx() - cursor_x
            } else {
                self.text_offset
            }
        };

        img.push_clip(Rect::from_corners(
            ivec2(inner.min().x, r.min().y),
            ivec2(inner.max().x, r.max().y),
        ));
        let mut p = inner.min() + ivec2(self.text_offset, 0);
        match self.selection() {
            None => {
                img.draw_text(p, &self.text, font, colors.text);
            }
            Some((s, e)) => {
                p = img.draw_text(p, &self.text[..s], font, colors.text);
                let sel = &self.text[s..e];
                let sel_r = Rect::new(p, font.string_size(sel)).outset(ivec2(0, space / 2));
                img.fill_rect(sel_r, sel_colors.background);
                p = img.draw_text(p, sel, font, sel_colors.text);
                img.draw_text(p, &self.text[e..], font, colors.text);
            }
        }
        if hover && !self.disabled {
            let x = (cursor_x + self.text_offset).clamp(0, (inner.dx() - 1).max(0));
            let top = inner.min() + ivec2(x, 0);
            img.line(top, top + ivec2(0, font.height()), 1, ctx.theme.hover.border);
        }
        img.pop_clip();
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
        if !m.in_rect(&Rect::from_size(self.size)) {
            return r;
        }
        r.hit = Some(slot.id);

        let (was, is) = (self.m.b1(), m.b1());
        if !was && is {
            // start a selection
            self.cursor = self.locate_cursor(ctx, m.point.x);
            self.anchor = Some(self.cursor);
            r.consumed = true;
            slot.draw = State::Dirty;
        } else if was || is {
            self.cursor = self.locate_cursor(ctx, m.point.x);
            r.consumed = true;
            slot.draw = State::Dirty;
            if was && !is {
                let window = ctx.config.double_click.as_millis() as u32;
                let double = self
                    .prev_b1_release
                    .is_some_and(|prev| m.msec.wrapping_sub(prev.msec) < window);
                if double {
                    let (s, e) = expand_selection(&self.text, self.cursor);
                    self.cursor = s;
                    self.anchor = Some(e);
                }
                self.prev_b1_release = Some(m);
            }
        }
        self.m = m;
        r
    }

    fn key(&mut self, ctx: &UiCtx, slot: &mut Slot, k: char, m: Mouse, _orig: IVec2) -> Response {
        let mut r = Response::default();
        if !m.in_rect(&Rect::from_size(self.size)) {
            return r;
        }
        r.hit = Some(slot.id);
        if self.disabled {
            return r;
        }

        if let Some(f) = self.on_keys.as_mut() {
            let mut e = Event::default();
            f(m, k, &mut e);
            propagate_event(slot, &mut r, e);
            if r.consumed {
                return r;
            }
        }

        // left for the container: focus movement and submit
        if matches!(
            k,
            keys::PAGE_UP | keys::PAGE_DOWN | keys::UP | keys::DOWN | keys::TAB | keys::ENTER
        ) {
            return r;
        }

        let before = self.text.clone();
        self.fix_cursor();
        if !self.edit(ctx, k) {
            return r;
        }
        r.consumed = true;
        slot.draw = State::Dirty;
        if self.text != before {
            if let Some(f) = self.on_changed.as_mut() {
                let mut e = Event::default();
                f(&self.text, &mut e);
                propagate_event(slot, &mut r, e);
            }
        }
        r
    }

    fn first_focus(&self, _ctx: &UiCtx) -> Option<IVec2> {
        Some(IVec2::ZERO)
    }
}
