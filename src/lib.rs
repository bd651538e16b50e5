pub mod app;
pub mod clipboard;
pub mod config;
pub mod ctx;
pub mod debug;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod signals;
pub mod style;
pub mod text;
pub mod widgets;

pub use app::App;
pub use config::Config;
pub use ctx::UiCtx;
pub use input::{Mouse, keys};
pub use layout::{Kid, Rect, Slot, State, WidgetId};
pub use renderer::{DisplayList, Surface};
pub use signals::{ReadSignal, WriteSignal, create_signal};
pub use widgets::{
    Button, Event, Field, Grid, Label, List, RadioGroup, Radiobutton, Response, Stack, Widget,
};

pub use glam::{IVec2, Vec4, ivec2};

pub type Result<T> = anyhow::Result<T>;

pub fn init_logging() {
    env_logger::init();
}
