//! Tree walking shared by every container.
//!
//! Containers hold their children as a slice of [`Kid`]s and call these
//! functions from their own `Widget` methods. All transitions of the dirty
//! markers between a container and its kids happen here.

use glam::IVec2;

use crate::{
    ctx::UiCtx,
    input::{Mouse, keys},
    layout::{Kid, Rect, Slot, State, WidgetId},
    renderer::Surface,
    widgets::{Event, Response},
};

/// Decides how much layout work a container has to do.
///
/// Returns `true` when the container's geometry is already resolved and it
/// can return right away. On `false` the container must lay out all kids
/// and compute its own size.
pub fn kids_layout(ctx: &UiCtx, slot: &mut Slot, kids: &mut [Kid], force: bool) -> bool {
    if force {
        slot.layout = State::Clean;
        slot.draw = State::Dirty;
        return false;
    }
    match slot.layout {
        State::Clean => return true,
        State::Dirty => {
            slot.layout = State::Clean;
            slot.draw = State::Dirty;
            return false;
        }
        State::DirtyKid => {}
    }

    for k in kids.iter_mut() {
        if k.slot.layout.is_clean() {
            continue;
        }
        let resized = relayout_in_place(ctx, k);
        match k.slot.layout {
            State::DirtyKid => panic!("layout of kid {} left it at DirtyKid", k.id()),
            State::Clean if !resized => continue,
            State::Clean | State::Dirty => {
                // our own size may change with it
                slot.layout = State::Dirty;
                slot.draw = State::Dirty;
                return false;
            }
        }
    }
    slot.layout = State::Clean;
    slot.draw = State::Dirty;
    true
}

/// Lays `k` out again in its current rectangle. Returns whether its size
/// changed; if not, the rectangle is left exactly as the parent placed it.
fn relayout_in_place(ctx: &UiCtx, k: &mut Kid) -> bool {
    let prev = k.slot.rect;
    k.layout(ctx, prev.size, false);
    let size = k.slot.rect.size;
    // a stretched kid comes back at its natural size
    let resized = size != prev.size && Some(size) != k.slot.natural;
    if !resized {
        k.slot.rect = prev;
    }
    resized
}

/// Draws the kids that need it.
///
/// With `force` (or our own draw marker at `Dirty`) the whole `ui_size`
/// area is cleared and every kid is drawn. Otherwise `Clean` kids are
/// skipped, `Dirty` kids get their old rectangle cleared first and
/// `DirtyKid` kids only recurse.
#[allow(clippy::too_many_arguments)]
pub fn kids_draw(
    name: &str,
    ctx: &UiCtx,
    slot: &mut Slot,
    kids: &mut [Kid],
    ui_size: IVec2,
    img: &mut dyn Surface,
    orig: IVec2,
    m: Mouse,
    force: bool,
) {
    ctx.debug_draw(name, slot);

    let force = force || slot.draw == State::Dirty;
    if force {
        slot.draw = State::Dirty;
        img.fill_rect(Rect::from_size(ui_size).translate(orig), ctx.theme.background);
    }

    let debug_colors = ctx.theme.debug_colors;
    for (i, k) in kids.iter_mut().enumerate() {
        if !force && k.slot.draw.is_clean() {
            continue;
        }
        let r = k.slot.rect.translate(orig);
        if ctx.config.debug_kids {
            img.fill_rect(r, debug_colors[i % debug_colors.len()]);
            k.slot.draw = State::Clean;
            continue;
        }
        if !force && k.slot.draw == State::Dirty {
            img.fill_rect(r, ctx.theme.background);
        }
        if force {
            k.slot.draw = State::Dirty;
        }
        let origin = k.slot.rect.origin;
        k.draw(ctx, img, orig + origin, m.relative_to(origin), force);
        k.slot.draw = State::Clean;
    }
    slot.draw = State::Clean;
}

/// Brings a container's markers up to date after kid `k` handled input.
///
/// A kid left needing layout is laid out again right away. If its size
/// changed the container needs a new layout itself; otherwise only a
/// redraw of the kid is needed.
pub fn propagate_result(ctx: &UiCtx, slot: &mut Slot, k: &mut Kid) {
    if !k.slot.layout.is_clean() {
        if k.slot.layout == State::DirtyKid {
            panic!("kid {} propagated layout kids", k.id());
        }
        let resized = relayout_in_place(ctx, k);
        if k.slot.layout == State::DirtyKid {
            panic!("layout of kid {} left it at DirtyKid", k.id());
        }
        if resized {
            slot.layout = State::Dirty;
        } else {
            k.slot.layout = State::Clean;
            k.slot.draw = State::Dirty;
            slot.draw.escalate(State::DirtyKid);
        }
    } else if !k.slot.draw.is_clean() {
        slot.draw.escalate(State::DirtyKid);
    }
}

/// Merges a callback's [`Event`] into the widget's markers and `r`.
pub fn propagate_event(slot: &mut Slot, r: &mut Response, e: Event) {
    if e.need_layout {
        slot.layout = State::Dirty;
    }
    if e.need_draw {
        slot.draw = State::Dirty;
    }
    r.consumed = e.consumed || r.consumed;
}

/// Routes a pointer sample to the first kid containing it.
///
/// Containment is tested with `orig_m`, the sample at button-down, so a
/// drag keeps going to the kid it started in.
pub fn kids_mouse(
    ctx: &UiCtx,
    slot: &mut Slot,
    kids: &mut [Kid],
    m: Mouse,
    orig_m: Mouse,
    orig: IVec2,
) -> Response {
    for k in kids.iter_mut() {
        if !orig_m.in_rect(&k.slot.rect) {
            continue;
        }
        let origin = k.slot.rect.origin;
        let mut r = k.mouse(
            ctx,
            m.relative_to(origin),
            orig_m.relative_to(origin),
            orig + origin,
        );
        if r.hit.is_none() {
            r.hit = Some(k.id());
        }
        propagate_result(ctx, slot, k);
        return r;
    }
    Response::default()
}

/// Routes a key to the kid under the pointer.
///
/// An unconsumed tab moves focus forward to the next sibling that accepts
/// focus, by warping the pointer there. There is no wrap-around.
pub fn kids_key(
    ctx: &UiCtx,
    slot: &mut Slot,
    kids: &mut [Kid],
    key: char,
    m: Mouse,
    orig: IVec2,
) -> Response {
    let Some(i) = kids.iter().position(|k| m.in_rect(&k.slot.rect)) else {
        return Response::default();
    };
    let (head, rest) = kids.split_at_mut(i + 1);
    let k = &mut head[i];

    let origin = k.slot.rect.origin;
    let mut r = k.key(ctx, key, m.relative_to(origin), orig + origin);
    if !r.consumed && key == keys::TAB {
        let next = rest
            .iter()
            .find_map(|n| n.first_focus(ctx).map(|p| p + orig + n.slot.rect.origin));
        if let Some(p) = next {
            r.warp = Some(p);
            r.consumed = true;
        }
    }
    if r.hit.is_none() {
        r.hit = Some(slot.id);
    }
    propagate_result(ctx, slot, k);
    r
}

pub fn kids_first_focus(ctx: &UiCtx, kids: &[Kid]) -> Option<IVec2> {
    kids.iter()
        .find_map(|k| k.first_focus(ctx).map(|p| p + k.slot.rect.origin))
}

pub fn kids_focus(ctx: &UiCtx, kids: &[Kid], target: WidgetId) -> Option<IVec2> {
    kids.iter()
        .find_map(|k| k.focus(ctx, target).map(|p| p + k.slot.rect.origin))
}

/// Sets a marker on the widget `target`, searching depth first.
///
/// Every container on the path down to it gets the same kind of marker
/// raised to at least `DirtyKid`.
pub fn kids_mark(
    slot: &mut Slot,
    kids: &mut [Kid],
    target: WidgetId,
    for_layout: bool,
    state: State,
) -> bool {
    if slot.mark(target, for_layout, state) {
        return true;
    }
    for k in kids.iter_mut() {
        if !k.mark(target, for_layout, state) {
            continue;
        }
        if for_layout {
            slot.layout.escalate(State::DirtyKid);
        } else {
            slot.draw.escalate(State::DirtyKid);
        }
        return true;
    }
    false
}

pub fn kids_print(kids: &[Kid], indent: usize, out: &mut String) {
    for k in kids {
        k.print(indent, out);
    }
}
