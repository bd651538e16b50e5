//! Key runes. Navigation keys use synthetic codes in the private-use range,
//! command chords are offset from `CMD`, control chords are `c & 0x1f`.

const FN: u32 = 0xF000;
const CMD: u32 = 0xF100;

const fn rune(v: u32) -> char {
    match char::from_u32(v) {
        Some(c) => c,
        None => panic!("invalid key rune"),
    }
}

pub const HOME: char = rune(FN | 0x0D);
pub const UP: char = rune(FN | 0x0E);
pub const PAGE_UP: char = rune(FN | 0x0F);
pub const LEFT: char = rune(FN | 0x11);
pub const RIGHT: char = rune(FN | 0x12);
pub const PAGE_DOWN: char = rune(FN | 0x13);
pub const INSERT: char = rune(FN | 0x14);
pub const END: char = rune(FN | 0x18);
pub const DOWN: char = rune(0x80);

pub const BACKSPACE: char = '\u{08}';
pub const TAB: char = '\t';
pub const ENTER: char = '\n';
pub const ESCAPE: char = '\u{1b}';
pub const DELETE: char = '\u{7f}';

/// Command (super) chord for `c`.
pub const fn cmd(c: char) -> char {
    rune(CMD + c as u32)
}

/// Control chord for an ASCII letter.
pub const fn ctrl(c: char) -> char {
    rune(c as u32 & 0x1f)
}

pub const CMD_A: char = cmd('a');
pub const CMD_C: char = cmd('c');
pub const CMD_V: char = cmd('v');
pub const CMD_X: char = cmd('x');

pub const CTRL_A: char = ctrl('a');
pub const CTRL_E: char = ctrl('e');
pub const CTRL_H: char = ctrl('h');
pub const CTRL_K: char = ctrl('k');
pub const CTRL_U: char = ctrl('u');
pub const CTRL_W: char = ctrl('w');

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chords_do_not_collide() {
        assert_eq!(CTRL_H, BACKSPACE);
        assert_ne!(CMD_C, 'c');
        assert_ne!(UP, DOWN);
        assert_eq!(cmd('v'), CMD_V);
    }
}
