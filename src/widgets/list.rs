use glam::{IVec2, ivec2};

use crate::{
    ctx::UiCtx,
    input::{BUTTON1, Mouse, keys},
    layout::{Rect, Slot, State, propagate_event},
    renderer::Surface,
    widgets::{Event, Response, Widget},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListValue {
    pub label: String,
    pub selected: bool,
}

impl ListValue {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selected: false,
        }
    }
}

type Changed = Box<dyn FnMut(usize, &mut Event)>;
type Click = Box<dyn FnMut(usize, u32, &mut Event)>;
type Keys = Box<dyn FnMut(Option<usize>, Mouse, char, &mut Event)>;

/// Rows of text with single or multiple selection.
#[derive(Default)]
pub struct List {
    pub values: Vec<ListValue>,
    pub multiple: bool,
    on_changed: Option<Changed>,
    on_click: Option<Click>,
    on_keys: Option<Keys>,
    size: IVec2,
    m: Mouse,
}

impl List {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            values: labels.into_iter().map(ListValue::new).collect(),
            ..Self::default()
        }
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Called with the index of a row whose selection changed.
    pub fn on_changed(mut self, f: impl FnMut(usize, &mut Event) + 'static) -> Self {
        self.on_changed = Some(Box::new(f));
        self
    }

    /// Called with the row index and buttons for every sample with a
    /// button held. Consuming the event skips the default toggle.
    pub fn on_click(mut self, f: impl FnMut(usize, u32, &mut Event) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Called before key handling with the index of the only selected row.
    /// Consuming the event skips the default handling.
    pub fn on_keys(mut self, f: impl FnMut(Option<usize>, Mouse, char, &mut Event) + 'static) -> Self {
        self.on_keys = Some(Box::new(f));
        self
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.selected.then_some(i))
            .collect()
    }

    fn row_height(ctx: &UiCtx) -> i32 {
        4 * ctx.font().height() / 3
    }

    fn changed(&mut self, index: usize, slot: &mut Slot, r: &mut Response) {
        if let Some(f) = self.on_changed.as_mut() {
            let mut e = Event::default();
            f(index, &mut e);
            propagate_event(slot, r, e);
        }
    }

    fn toggle(&mut self, index: usize) {
        let selected = !self.values[index].selected;
        self.values[index].selected = selected;
        if selected && !self.multiple {
            for (i, v) in self.values.iter_mut().enumerate() {
                if i != index {
                    v.selected = false;
                }
            }
        }
    }
}

impl Widget for List {
    fn layout(&mut self, ctx: &UiCtx, slot: &mut Slot, size_avail: IVec2, _force: bool) {
        ctx.debug_layout("List", slot);
        self.size = ivec2(size_avail.x, self.values.len() as i32 * Self::row_height(ctx));
        slot.rect.size = self.size;
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
        ctx.debug_draw("List", slot);
        let font = ctx.font();
        let rowh = Self::row_height(ctx);
        let r = Rect::from_size(self.size).translate(orig);
        img.fill_rect(r, ctx.theme.normal.background);

        let mut line = Rect::new(r.origin, ivec2(r.size.x, rowh));
        let inset = IVec2::splat(font.height() / 4);
        for v in &self.values {
            let colors = if v.selected {
                ctx.theme.inverse
            } else {
                ctx.theme.normal
            };
            img.fill_rect(line, colors.background);
            img.draw_text(line.min() + inset, &v.label, font, colors.text);
            line = line.translate(ivec2(0, rowh));
        }
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
        let prev = std::mem::replace(&mut self.m, m);
        if !m.in_rect(&Rect::from_size(self.size)) {
            return r;
        }
        let index = (m.point.y / Self::row_height(ctx)) as usize;
        if index >= self.values.len() {
            return r;
        }

        if m.buttons != 0 {
            if let Some(f) = self.on_click.as_mut() {
                let mut e = Event::default();
                f(index, m.buttons, &mut e);
                propagate_event(slot, &mut r, e);
            }
        }
        if !r.consumed && m.buttons == BUTTON1 && prev.buttons == 0 {
            self.toggle(index);
            self.changed(index, slot, &mut r);
            slot.draw = State::Dirty;
            r.consumed = true;
        }
        r
    }

    fn key(&mut self, ctx: &UiCtx, slot: &mut Slot, k: char, m: Mouse, orig: IVec2) -> Response {
        let mut r = Response::default();
        if !m.in_rect(&Rect::from_size(self.size)) {
            return r;
        }
        let sel = self.selected_indices();
        if let Some(f) = self.on_keys.as_mut() {
            let index = match sel.as_slice() {
                [i] => Some(*i),
                _ => None,
            };
            let mut e = Event::default();
            f(index, m, k, &mut e);
            propagate_event(slot, &mut r, e);
            if r.consumed {
                return r;
            }
        }

        let n = self.values.len();
        if n == 0 || (k != keys::UP && k != keys::DOWN) {
            return r;
        }
        r.consumed = true;
        let (old, new) = match (k, sel.first(), sel.last()) {
            (keys::UP, Some(&first), _) => (Some(first), (first + n - 1) % n),
            (keys::UP, None, _) => (None, n - 1),
            (_, _, Some(&last)) => (Some(last), (last + 1) % n),
            (_, _, None) => (None, 0),
        };
        if let Some(old) = old {
            self.values[old].selected = false;
        }
        self.values[new].selected = true;
        slot.draw = State::Dirty;
        self.changed(new, slot, &mut r);

        let rowh = Self::row_height(ctx);
        r.warp = Some(orig + ivec2(m.point.x, new as i32 * rowh + ctx.font().height() / 2));
        r
    }

    fn first_focus(&self, _ctx: &UiCtx) -> Option<IVec2> {
        Some(IVec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::config::Config;

    fn laid_out(list: &mut List, ctx: &UiCtx) -> Slot {
        let mut slot = Slot::new();
        list.layout(ctx, &mut slot, ivec2(100, 100), false);
        slot
    }

    #[test]
    fn rows_are_four_thirds_of_the_font() {
        let ctx = UiCtx::headless(Config::default().with_font_height(12));
        let mut list = List::new(["a", "b", "c"]);
        let slot = laid_out(&mut list, &ctx);
        assert_eq!(slot.rect.size, ivec2(100, 48));
    }

    #[test]
    fn click_selects_one_row() {
        let ctx = UiCtx::headless(Config::default());
        let mut list = List::new(["a", "b", "c"]);
        let mut slot = laid_out(&mut list, &ctx);
        let rowh = List::row_height(&ctx);

        for y in [5, rowh + 5] {
            let up = Mouse::new(ivec2(5, y), 0);
            let down = Mouse::new(ivec2(5, y), BUTTON1);
            list.mouse(&ctx, &mut slot, up, up, IVec2::ZERO);
            let r = list.mouse(&ctx, &mut slot, down, down, IVec2::ZERO);
            assert!(r.consumed);
        }
        assert_eq!(list.selected_indices(), vec![1]);
    }

    #[test]
    fn multiple_keeps_other_rows() {
        let ctx = UiCtx::headless(Config::default());
        let mut list = List::new(["a", "b"]).multiple();
        let mut slot = laid_out(&mut list, &ctx);
        let rowh = List::row_height(&ctx);
        for y in [5, rowh + 5] {
            let up = Mouse::new(ivec2(5, y), 0);
            let down = Mouse::new(ivec2(5, y), BUTTON1);
            list.mouse(&ctx, &mut slot, up, up, IVec2::ZERO);
            list.mouse(&ctx, &mut slot, down, down, IVec2::ZERO);
        }
        assert_eq!(list.selected_indices(), vec![0, 1]);
    }

    #[test]
    fn arrows_cycle_and_warp() {
        let ctx = UiCtx::headless(Config::default());
        let changed = Rc::new(RefCell::new(Vec::new()));
        let seen = changed.clone();
        let mut list = List::new(["a", "b", "c"]).on_changed(move |i, _| seen.borrow_mut().push(i));
        let mut slot = laid_out(&mut list, &ctx);
        let m = Mouse::new(ivec2(7, 1), 0);

        let r = list.key(&ctx, &mut slot, keys::UP, m, ivec2(10, 20));
        assert!(r.consumed);
        assert_eq!(list.selected_indices(), vec![2]);
        // row 2 of 21px rows, middle of a 16px font
        assert_eq!(r.warp, Some(ivec2(17, 20 + 42 + 8)));

        list.key(&ctx, &mut slot, keys::DOWN, m, IVec2::ZERO);
        assert_eq!(list.selected_indices(), vec![0]);
        assert_eq!(*changed.borrow(), vec![2, 0]);
    }

    #[test]
    fn keys_callback_can_take_over() {
        let ctx = UiCtx::headless(Config::default());
        let mut list = List::new(["a", "b"]).on_keys(|_, _, _, e| e.consumed = true);
        let mut slot = laid_out(&mut list, &ctx);
        let r = list.key(&ctx, &mut slot, keys::DOWN, Mouse::new(ivec2(1, 1), 0), IVec2::ZERO);
        assert!(r.consumed);
        assert!(list.selected_indices().is_empty());
    }
}
