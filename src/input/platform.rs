//! Translation of winit window events into the samples the tree consumes.

use std::time::Instant;

use ::winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use ::winit::keyboard::{Key, ModifiersState, NamedKey};
use glam::ivec2;

use super::{BUTTON1, BUTTON2, BUTTON3, Mouse, keys};

/// Accumulates cursor and button events into discrete [`Mouse`] samples.
pub struct PointerTracker {
    start: Instant,
    current: Mouse,
    modifiers: ModifiersState,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            current: Mouse::default(),
            modifiers: ModifiersState::empty(),
        }
    }

    pub fn current(&self) -> Mouse {
        self.current
    }

    pub fn modifiers(&self) -> ModifiersState {
        self.modifiers
    }

    fn stamp(&mut self) -> Mouse {
        self.current.msec = self.start.elapsed().as_millis() as u32;
        self.current
    }

    pub fn moved(&mut self, x: f64, y: f64) -> Mouse {
        self.current.point = ivec2(x as i32, y as i32);
        self.stamp()
    }

    pub fn button(&mut self, button: MouseButton, state: ElementState) -> Mouse {
        let bit = match button {
            MouseButton::Left => BUTTON1,
            MouseButton::Middle => BUTTON2,
            MouseButton::Right => BUTTON3,
            _ => 0,
        };
        match state {
            ElementState::Pressed => self.current.buttons |= bit,
            ElementState::Released => self.current.buttons &= !bit,
        }
        self.stamp()
    }

    /// Returns a pointer sample for pointer events, `None` for everything else.
    /// Modifier changes are remembered for [`PointerTracker::key`].
    pub fn handle(&mut self, event: &WindowEvent) -> Option<Mouse> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.moved(position.x, position.y)),
            WindowEvent::MouseInput { state, button, .. } => Some(self.button(*button, *state)),
            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = m.state();
                None
            }
            _ => None,
        }
    }

    /// Rune for a key press, using the last seen modifiers.
    pub fn key(&self, event: &KeyEvent) -> Option<char> {
        if event.state != ElementState::Pressed {
            return None;
        }
        key_rune(&event.logical_key, self.modifiers)
    }
}

/// Maps a logical key plus modifiers to the rune routed through the tree.
pub fn key_rune(key: &Key, mods: ModifiersState) -> Option<char> {
    match key {
        Key::Named(named) => named_rune(*named),
        Key::Character(s) => {
            let c = s.as_str().chars().next()?;
            if !c.is_ascii() {
                Some(c)
            } else if mods.super_key() {
                Some(keys::cmd(c.to_ascii_lowercase()))
            } else if mods.control_key() && c.is_ascii_alphabetic() {
                Some(keys::ctrl(c))
            } else {
                Some(c)
            }
        }
        _ => None,
    }
}

fn named_rune(key: NamedKey) -> Option<char> {
    let c = match key {
        NamedKey::ArrowUp => keys::UP,
        NamedKey::ArrowDown => keys::DOWN,
        NamedKey::ArrowLeft => keys::LEFT,
        NamedKey::ArrowRight => keys::RIGHT,
        NamedKey::Home => keys::HOME,
        NamedKey::End => keys::END,
        NamedKey::PageUp => keys::PAGE_UP,
        NamedKey::PageDown => keys::PAGE_DOWN,
        NamedKey::Insert => keys::INSERT,
        NamedKey::Backspace => keys::BACKSPACE,
        NamedKey::Delete => keys::DELETE,
        NamedKey::Escape => keys::ESCAPE,
        NamedKey::Tab => keys::TAB,
        NamedKey::Enter => keys::ENTER,
        NamedKey::Space => ' ',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use ::winit::keyboard::SmolStr;

    use super::*;

    #[test]
    fn buttons_accumulate_as_bits() {
        let mut t = PointerTracker::new();
        t.moved(12.7, 3.2);
        let m = t.button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(m.point, ivec2(12, 3));
        assert_eq!(m.buttons, BUTTON1);
        let m = t.button(MouseButton::Right, ElementState::Pressed);
        assert_eq!(m.buttons, BUTTON1 | BUTTON3);
        let m = t.button(MouseButton::Left, ElementState::Released);
        assert_eq!(m.buttons, BUTTON3);
    }

    #[test]
    fn characters_and_chords() {
        let a = Key::Character(SmolStr::new("a"));
        assert_eq!(key_rune(&a, ModifiersState::empty()), Some('a'));
        assert_eq!(key_rune(&a, ModifiersState::CONTROL), Some(keys::CTRL_A));
        let c = Key::Character(SmolStr::new("C"));
        assert_eq!(key_rune(&c, ModifiersState::SUPER), Some(keys::CMD_C));
        let tab = Key::Named(NamedKey::Tab);
        assert_eq!(key_rune(&tab, ModifiersState::empty()), Some('\t'));
        let f1 = Key::Named(NamedKey::F1);
        assert_eq!(key_rune(&f1, ModifiersState::empty()), None);
    }
}
