use std::cell::RefCell;

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping};

use super::Font;

/// System font shaped with cosmic-text.
pub struct CosmicFont {
    font_system: RefCell<FontSystem>,
    metrics: Metrics,
}

impl CosmicFont {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_system: RefCell::new(FontSystem::new()),
            metrics: Metrics::new(font_size, font_size * 1.2),
        }
    }
}

impl Font for CosmicFont {
    fn height(&self) -> i32 {
        self.metrics.line_height.ceil() as i32
    }

    fn string_width(&self, s: &str) -> i32 {
        if s.is_empty() {
            return 0;
        }
        let mut font_system = self.font_system.borrow_mut();
        let mut buffer = Buffer::new(&mut font_system, self.metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);
        buffer.set_text(s, &Attrs::new(), Shaping::Advanced);
        buffer.shape_until_scroll(true);
        let width = buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0_f32, f32::max);
        width.ceil() as i32
    }
}
