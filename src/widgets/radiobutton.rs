use std::{cell::Cell, rc::Rc};

use glam::{IVec2, ivec2};

use crate::{
    ctx::UiCtx,
    input::Mouse,
    layout::{Rect, Slot, State, propagate_event},
    renderer::Surface,
    signals::{ReadSignal, WriteSignal, create_signal},
    widgets::{Event, Response, Widget},
};

/// Selection shared by a set of [`Radiobutton`]s.
///
/// Buttons read the selection while drawing, so changing it repaints
/// every member that shows it.
#[derive(Clone)]
pub struct RadioGroup {
    selected: ReadSignal<Option<usize>>,
    set_selected: WriteSignal<Option<usize>>,
    members: Rc<Cell<usize>>,
}

impl RadioGroup {
    pub fn new() -> Self {
        let (selected, set_selected) = create_signal(None);
        Self {
            selected,
            set_selected,
            members: Rc::new(Cell::new(0)),
        }
    }

    /// Index of the selected member, in joining order.
    pub fn selected(&self) -> Option<usize> {
        self.set_selected.peek(|s| *s)
    }

    pub fn select(&self, index: Option<usize>) {
        if self.selected() != index {
            self.set_selected.set(index);
        }
    }

    fn join(&self) -> usize {
        let index = self.members.get();
        self.members.set(index + 1);
        index
    }
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::new()
    }
}

type Changed<T> = Box<dyn FnMut(&T, &mut Event)>;

pub struct Radiobutton<T> {
    pub value: T,
    pub disabled: bool,
    group: RadioGroup,
    index: usize,
    on_change: Option<Changed<T>>,
    m: Mouse,
}

impl<T: 'static> Radiobutton<T> {
    pub fn new(group: &RadioGroup, value: T) -> Self {
        Self {
            value,
            disabled: false,
            group: group.clone(),
            index: group.join(),
            on_change: None,
            m: Mouse::default(),
        }
    }

    /// Called with this button's value when it becomes the selected one.
    pub fn on_change(mut self, f: impl FnMut(&T, &mut Event) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn selected(mut self) -> Self {
        self.group.select(Some(self.index));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_selected(&self) -> bool {
        self.group.selected() == Some(self.index)
    }

    fn diameter(ctx: &UiCtx) -> i32 {
        2 * ctx.border() + 4 * ctx.font().height() / 5
    }

    fn check(&mut self, slot: &mut Slot, r: &mut Response) {
        self.group.select(Some(self.index));
        if let Some(f) = self.on_change.as_mut() {
            let mut e = Event::default();
            f(&self.value, &mut e);
            propagate_event(slot, r, e);
        }
    }
}

impl<T: 'static> Widget for Radiobutton<T> {
    fn layout(&mut self, ctx: &UiCtx, slot: &mut Slot, _size_avail: IVec2, _force: bool) {
        ctx.debug_layout("Radiobutton", slot);
        // one extra row for the pressed offset
        slot.rect.size = IVec2::splat(Self::diameter(ctx)) + ivec2(0, 1);
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
        ctx.debug_draw("Radiobutton", slot);
        let r = Rect::from_size(IVec2::splat(Self::diameter(ctx)));
        let hover = m.in_rect(&r);
        let r = r.translate(orig);

        let theme = &ctx.theme;
        let (colors, color) = if self.disabled {
            (theme.disabled, theme.disabled.border)
        } else if hover {
            (theme.hover, theme.hover.border)
        } else {
            (theme.normal, theme.normal.text)
        };
        let hit = if hover && m.b1() {
            ivec2(0, 1)
        } else {
            IVec2::ZERO
        };

        img.fill_rect(r.extend_y(1), colors.background);
        let r = r.translate(hit);
        let radius = r.dx() / 2;
        img.arc(r.min() + radius, radius, color);

        let selected = self.group.selected.get() == Some(self.index);
        if selected {
            let cr = r.inset((4 * ctx.font().height() / 5) / 5);
            let radius = cr.dx() / 2;
            img.fill_arc(cr.min() + radius, radius, color);
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
        if self.disabled {
            return r;
        }
        let rect = Rect::from_size(IVec2::splat(Self::diameter(ctx)));
        let hover = m.in_rect(&rect);
        if hover != self.m.in_rect(&rect) {
            slot.draw = State::Dirty;
        }
        if hover && self.m.b1() != m.b1() {
            slot.draw = State::Dirty;
            if !m.b1() {
                r.consumed = true;
                self.check(slot, &mut r);
            }
        }
        self.m = m;
        r
    }

    fn key(&mut self, _ctx: &UiCtx, slot: &mut Slot, k: char, _m: Mouse, _orig: IVec2) -> Response {
        let mut r = Response::default();
        if k == ' ' && !self.disabled {
            r.consumed = true;
            slot.draw = State::Dirty;
            self.check(slot, &mut r);
        }
        r
    }

    fn first_focus(&self, _ctx: &UiCtx) -> Option<IVec2> {
        Some(IVec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{config::Config, input::BUTTON1};

    #[test]
    fn only_the_newly_selected_callback_fires() {
        let ctx = UiCtx::headless(Config::default());
        let group = RadioGroup::new();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let (c1, c2) = (changes.clone(), changes.clone());
        let mut a = Radiobutton::new(&group, "a")
            .selected()
            .on_change(move |v, _| c1.borrow_mut().push(*v));
        let mut b = Radiobutton::new(&group, "b").on_change(move |v, _| c2.borrow_mut().push(*v));
        let (mut sa, mut sb) = (Slot::new(), Slot::new());
        assert!(a.is_selected());

        let r = b.key(&ctx, &mut sb, ' ', Mouse::default(), IVec2::ZERO);
        assert!(r.consumed);
        assert!(b.is_selected() && !a.is_selected());
        assert_eq!(*changes.borrow(), vec!["b"]);

        let down = Mouse::new(ivec2(2, 2), BUTTON1);
        let up = Mouse::new(ivec2(2, 2), 0);
        a.mouse(&ctx, &mut sa, down, down, IVec2::ZERO);
        let r = a.mouse(&ctx, &mut sa, up, down, IVec2::ZERO);
        assert!(r.consumed);
        assert_eq!(group.selected(), Some(0));
        assert_eq!(*changes.borrow(), vec!["b", "a"]);
    }

    #[test]
    fn size_leaves_room_for_press_offset() {
        let ctx = UiCtx::headless(Config::default());
        let mut slot = Slot::new();
        Radiobutton::new(&RadioGroup::new(), ()).layout(&ctx, &mut slot, IVec2::ZERO, false);
        // 2*1 + 4*16/5
        assert_eq!(slot.rect.size, ivec2(14, 15));
    }

    #[test]
    fn disabled_ignores_the_pointer() {
        let ctx = UiCtx::headless(Config::default());
        let group = RadioGroup::new();
        let mut rb = Radiobutton::new(&group, 1).disabled(true);
        let mut slot = Slot::new();
        slot.draw = State::Clean;
        let down = Mouse::new(ivec2(2, 2), BUTTON1);
        let up = Mouse::new(ivec2(2, 2), 0);
        rb.mouse(&ctx, &mut slot, down, down, IVec2::ZERO);
        rb.mouse(&ctx, &mut slot, up, down, IVec2::ZERO);
        assert_eq!(group.selected(), None);
        assert_eq!(slot.draw, State::Clean);
    }
}
