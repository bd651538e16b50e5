pub mod base;
pub mod button;
pub mod field;
pub mod grid;
pub mod label;
pub mod list;
pub mod radiobutton;
pub mod stack;

pub use base::{Event, Response, Widget};
pub use button::Button;
pub use field::Field;
pub use grid::Grid;
pub use label::Label;
pub use list::{List, ListValue};
pub use radiobutton::{RadioGroup, Radiobutton};
pub use stack::Stack;
