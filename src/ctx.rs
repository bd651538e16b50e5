//! The visual context threaded through every tree operation.

use anyhow::Context;

use crate::{
    clipboard::{self, MemoryClipboard, Snarf, SystemClipboard},
    config::Config,
    layout::Slot,
    style::Theme,
    text::{CosmicFont, Font, MonoFont},
};

/// Font, palette, spacing, clipboard and debug switches.
///
/// Built once at startup and only read by the tree afterwards.
pub struct UiCtx {
    pub config: Config,
    pub theme: Theme,
    font: Box<dyn Font>,
    clipboard: Box<dyn Snarf>,
}

impl UiCtx {
    pub fn new(config: Config, font: Box<dyn Font>, clipboard: Box<dyn Snarf>) -> Self {
        Self {
            config,
            theme: Theme::default(),
            font,
            clipboard,
        }
    }

    /// Fixed-width font and an in-memory clipboard. Needs no display.
    pub fn headless(config: Config) -> Self {
        let font = MonoFont::new((config.font_height / 2).max(1), config.font_height);
        Self::new(config, Box::new(font), Box::new(MemoryClipboard::new()))
    }

    /// System fonts and the system clipboard.
    pub fn system(config: Config) -> crate::Result<Self> {
        let clipboard = SystemClipboard::new().context("opening system clipboard")?;
        let font = CosmicFont::new(config.font_height as f32 / 1.2);
        Ok(Self::new(config, Box::new(font), Box::new(clipboard)))
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn font(&self) -> &dyn Font {
        self.font.as_ref()
    }

    pub fn snarf(&self) -> &dyn Snarf {
        self.clipboard.as_ref()
    }

    pub fn space(&self) -> i32 {
        self.config.space
    }

    pub fn border(&self) -> i32 {
        self.config.border
    }

    /// Whole clipboard text, or `None` after logging why it could not be read.
    pub fn read_snarf(&self) -> Option<String> {
        match clipboard::read_all(self.snarf()) {
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!("readsnarf: {err}");
                None
            }
        }
    }

    /// Replaces the clipboard text. Returns false after logging a failure.
    pub fn write_snarf(&self, data: &[u8]) -> bool {
        match self.clipboard.write_snarf(data) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("writesnarf: {err}");
                false
            }
        }
    }

    pub fn debug_layout(&self, name: &str, slot: &Slot) {
        if self.config.debug_layout {
            log::debug!("layout {name} {} layout={:?}", slot.rect, slot.layout);
        }
    }

    pub fn debug_draw(&self, name: &str, slot: &Slot) {
        if self.config.debug_draw {
            log::debug!("draw {name} {} draw={:?}", slot.rect, slot.draw);
        }
    }
}
