use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use sprig::{
    App, Button, Config, DisplayList, Field, Label, List, Mouse, RadioGroup, Radiobutton, Stack,
    State, UiCtx, create_signal,
    input::BUTTON1,
    ivec2, keys,
    renderer::RenderPrimative,
};

// Headless metrics: chars are 8x16, space is 4.
//
// Column layout used below:
//   Label "name"  (0,0)  32x16
//   Field         (0,16) 200x24
//   Button "ok"   (0,40) 32x24
fn form(clicks: Rc<Cell<u32>>, typed: Rc<RefCell<String>>) -> App {
    let root = Stack::column(sprig::kids![
        Label::new("name"),
        Field::new("").on_changed(move |t, _| *typed.borrow_mut() = t.to_string()),
        Button::label("ok").on_click(move |_| clicks.set(clicks.get() + 1)),
    ]);
    App::new(UiCtx::headless(Config::default()), root).with_size(200, 200)
}

fn click(app: &mut App, x: i32, y: i32) -> sprig::Response {
    app.mouse(Mouse::new(ivec2(x, y), BUTTON1));
    app.mouse(Mouse::new(ivec2(x, y), 0))
}

#[test]
fn first_render_paints_everything_then_nothing() {
    let mut app = form(Rc::default(), Rc::default());
    let mut img = DisplayList::new(ivec2(200, 200));
    assert!(app.render(&mut img));
    assert_eq!(img.texts(), vec!["name", "ok"]);
    assert_eq!(app.root().slot.rect.size, ivec2(200, 64));

    img.begin_frame();
    assert!(!app.render(&mut img));
    assert!(img.is_empty());
}

#[test]
fn button_click_redraws_only_the_button() {
    let clicks = Rc::new(Cell::new(0));
    let mut app = form(clicks.clone(), Rc::default());
    let mut img = DisplayList::new(ivec2(200, 200));
    app.render(&mut img);

    img.begin_frame();
    let r = app.mouse(Mouse::new(ivec2(5, 45), BUTTON1));
    assert!(r.draw && !r.layout);
    assert_eq!(app.root().slot.draw, State::DirtyKid);
    app.render(&mut img);
    assert_eq!(img.texts(), vec!["ok"]);

    let r = app.mouse(Mouse::new(ivec2(5, 45), 0));
    assert!(r.consumed);
    assert_eq!(clicks.get(), 1);
}

#[test]
fn release_goes_where_the_press_started() {
    let clicks = Rc::new(Cell::new(0));
    let mut app = form(clicks.clone(), Rc::default());
    app.render(&mut DisplayList::new(ivec2(200, 200)));

    app.mouse(Mouse::new(ivec2(5, 45), BUTTON1));
    // dragged onto the field and released there: the button still sees it,
    // but the pointer left it, so no click
    app.mouse(Mouse::new(ivec2(100, 20), BUTTON1));
    app.mouse(Mouse::new(ivec2(100, 20), 0));
    assert_eq!(clicks.get(), 0);
}

#[test]
fn typing_into_the_field() {
    let typed = Rc::new(RefCell::new(String::new()));
    let mut app = form(Rc::default(), typed.clone());
    let mut img = DisplayList::new(ivec2(200, 200));
    app.render(&mut img);

    click(&mut app, 10, 20);
    for k in ['h', 'i'] {
        let r = app.key(k);
        assert!(r.consumed && r.draw);
    }
    assert_eq!(*typed.borrow(), "hi");

    img.begin_frame();
    app.render(&mut img);
    assert_eq!(img.texts(), vec!["hi"]);
}

#[test]
fn tab_warps_from_field_to_button() {
    let clicks = Rc::new(Cell::new(0));
    let mut app = form(clicks.clone(), Rc::default());
    app.render(&mut DisplayList::new(ivec2(200, 200)));

    app.mouse(Mouse::new(ivec2(10, 20), 0));
    let r = app.key(keys::TAB);
    assert!(r.consumed);
    // button focus point (space, space) at the button's origin
    assert_eq!(r.warp, Some(ivec2(4, 44)));
    assert_eq!(app.pointer().point, ivec2(4, 44));

    app.key(' ');
    assert_eq!(clicks.get(), 1);

    // nothing focusable after the button
    let r = app.key(keys::TAB);
    assert!(!r.consumed);
    assert_eq!(r.warp, None);
}

#[test]
fn signal_write_relayouts_the_label() {
    let (text, set_text) = create_signal(String::from("hello"));
    let root = Stack::column(sprig::kids![Label::new(text), Button::label("b")]);
    let mut app = App::new(UiCtx::headless(Config::default()), root).with_size(100, 100);
    let mut img = DisplayList::new(ivec2(100, 100));
    app.render(&mut img);
    assert_eq!(img.texts(), vec!["hello", "b"]);

    // 128px of text wraps at the 100px width
    set_text.set(String::from("abcdefghijklmnop"));
    img.begin_frame();
    assert!(app.render(&mut img));
    assert_eq!(img.texts(), vec!["abcdefghijkl", "mnop", "b"]);
    assert_eq!(app.root().slot.layout, State::Clean);
}

#[test]
fn radio_selection_repaints_the_old_choice() {
    let group = RadioGroup::new();
    let chosen = Rc::new(RefCell::new(Vec::new()));
    let log = chosen.clone();
    let root = Stack::row(sprig::kids![
        Radiobutton::new(&group, "left").selected(),
        Radiobutton::new(&group, "right").on_change(move |v, _| log.borrow_mut().push(*v)),
    ]);
    let mut app = App::new(UiCtx::headless(Config::default()), root).with_size(100, 100);
    let mut img = DisplayList::new(ivec2(100, 100));
    app.render(&mut img);

    // second button starts at x=14
    click(&mut app, 16, 5);
    assert_eq!(group.selected(), Some(1));
    assert_eq!(*chosen.borrow(), vec!["right"]);

    img.begin_frame();
    app.render(&mut img);
    let circles = img
        .primatives()
        .iter()
        .filter(|p| matches!(p, RenderPrimative::Circle { .. }))
        .count();
    // two outlines and one dot
    assert_eq!(circles, 3);
}

#[test]
fn list_arrow_warps_in_root_coordinates() {
    let root = Stack::column(sprig::kids![Label::new("x"), List::new(["a", "b", "c"])]);
    let mut app = App::new(UiCtx::headless(Config::default()), root).with_size(100, 100);
    app.render(&mut DisplayList::new(ivec2(100, 100)));

    app.mouse(Mouse::new(ivec2(3, 20), 0));
    let r = app.key(keys::DOWN);
    assert!(r.consumed && r.draw);
    assert_eq!(r.warp, Some(ivec2(3, 16 + 8)));
}

#[test]
fn print_dumps_the_tree() {
    let app = form(Rc::default(), Rc::default());
    let out = app.print();
    let names: Vec<&str> = out
        .lines()
        .map(|l| l.trim_start().split(' ').next().unwrap_or(""))
        .collect();
    assert_eq!(names, vec!["Stack", "Label", "Field", "Button"]);
    assert!(out.lines().nth(1).is_some_and(|l| l.starts_with("  Label")));
}

#[test]
fn focus_finds_widgets_by_id() {
    let stack = Stack::column(sprig::kids![Label::new("l"), Button::label("b")]);
    let (label, button) = (stack.kids[0].id(), stack.kids[1].id());
    let mut app = App::new(UiCtx::headless(Config::default()), stack).with_size(100, 100);
    app.layout();
    assert_eq!(app.focus(label), Some(ivec2(0, 0)));
    assert_eq!(app.focus(button), Some(ivec2(4, 16 + 4)));
    assert_eq!(app.first_focus(), Some(ivec2(4, 20)));
}

#[test]
fn marking_a_widget_redraws_it() {
    let stack = Stack::column(sprig::kids![Label::new("l"), Button::label("b")]);
    let button = stack.kids[1].id();
    let mut app = App::new(UiCtx::headless(Config::default()), stack).with_size(100, 100);
    let mut img = DisplayList::new(ivec2(100, 100));
    app.render(&mut img);

    assert!(app.mark(button, false, State::Dirty));
    assert_eq!(app.root().slot.draw, State::DirtyKid);
    img.begin_frame();
    app.render(&mut img);
    assert_eq!(img.texts(), vec!["b"]);
}

#[test]
fn resize_relayouts() {
    let mut app = form(Rc::default(), Rc::default());
    app.render(&mut DisplayList::new(ivec2(200, 200)));
    app.resize(ivec2(120, 200));
    assert_eq!(app.root().slot.layout, State::Dirty);
    app.layout();
    assert_eq!(app.root().slot.rect.size, ivec2(120, 64));
}

#[test]
fn signal_marks_reach_their_own_app() {
    let (text, set_text) = create_signal(String::from("one"));
    let mut a = App::new(
        UiCtx::headless(Config::default()),
        Stack::column(sprig::kids![Label::new(text)]),
    )
    .with_size(100, 100);
    let mut img = DisplayList::new(ivec2(100, 100));
    a.render(&mut img);

    let (other, set_other) = create_signal(String::from("x"));
    let mut b = App::new(
        UiCtx::headless(Config::default()),
        Stack::column(sprig::kids![Label::new(other)]),
    )
    .with_size(100, 100);
    let mut img_b = DisplayList::new(ivec2(100, 100));
    b.render(&mut img_b);

    set_text.set(String::from("two"));
    set_other.set(String::from("y"));

    img.begin_frame();
    assert!(a.render(&mut img));
    assert_eq!(img.texts(), vec!["two"]);

    img_b.begin_frame();
    assert!(b.render(&mut img_b));
    assert_eq!(img_b.texts(), vec!["y"]);
}
