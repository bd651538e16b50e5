//! Discrete pointer and keyboard samples delivered to the root of the tree.

pub mod keys;
pub mod platform;

use glam::IVec2;

use crate::layout::Rect;

pub const BUTTON1: u32 = 1;
pub const BUTTON2: u32 = 2;
pub const BUTTON3: u32 = 4;

/// One pointer sample: position, button bitmask and timestamp in milliseconds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Mouse {
    pub point: IVec2,
    pub buttons: u32,
    pub msec: u32,
}

impl Mouse {
    pub fn new(point: IVec2, buttons: u32) -> Self {
        Self {
            point,
            buttons,
            msec: 0,
        }
    }

    pub fn at(mut self, msec: u32) -> Self {
        self.msec = msec;
        self
    }

    pub fn in_rect(&self, r: &Rect) -> bool {
        r.contains(self.point)
    }

    /// The same sample expressed in a frame whose origin is `origin`.
    pub fn relative_to(mut self, origin: IVec2) -> Self {
        self.point -= origin;
        self
    }

    pub fn b1(&self) -> bool {
        self.buttons & BUTTON1 != 0
    }
}
