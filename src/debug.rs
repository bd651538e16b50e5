use std::fmt::Write;

use crate::layout::Slot;

/// Last path segment of a type name, without generics.
pub fn widget_type<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    let name = name.split('<').next().unwrap_or(name);
    name.rsplit_once("::").map(|(_, t)| t).unwrap_or(name)
}

/// One line of the structural dump.
pub fn print_ui(name: &str, slot: &Slot, indent: usize, out: &mut String) {
    let _ = writeln!(
        out,
        "{}{} {} r={} layout={:?} draw={:?}",
        "  ".repeat(indent),
        name,
        slot.id,
        slot.rect,
        slot.layout,
        slot.draw
    );
}
