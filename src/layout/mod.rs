pub mod dirty;
pub mod flexbox;
pub mod grid;
pub mod kid;
pub mod rect;
pub mod walk;

pub use dirty::State;
pub use kid::{Kid, Slot, WidgetId, new_kids};
pub use rect::Rect;
pub use walk::{
    kids_draw, kids_first_focus, kids_focus, kids_key, kids_layout, kids_mark, kids_mouse,
    kids_print, propagate_event, propagate_result,
};
