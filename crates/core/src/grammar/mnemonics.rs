//! Mnemonic grammar: mark characters and command-name widths.
//!
//! Every ZPL command starts with one of two mark characters followed by a
//! short mnemonic. Mnemonics are two characters wide by default; a small
//! fixed set is one character wide because the character after the name is
//! already a parameter (`^A0N,28,28` — the font designator `0` belongs to
//! the parameters, not the name).

use serde::{Deserialize, Serialize};

/// One of the two reserved prefix characters that introduce every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// `^` — the primary mark (format commands).
    Caret,
    /// `~` — the secondary mark (control commands).
    Tilde,
}

impl Mark {
    /// The literal prefix character for this mark.
    pub fn as_char(self) -> char {
        match self {
            Mark::Caret => '^',
            Mark::Tilde => '~',
        }
    }

    /// The literal prefix byte for this mark.
    pub fn as_byte(self) -> u8 {
        match self {
            Mark::Caret => b'^',
            Mark::Tilde => b'~',
        }
    }

    /// Classify a byte as a mark character.
    pub fn from_byte(b: u8) -> Option<Mark> {
        match b {
            b'^' => Some(Mark::Caret),
            b'~' => Some(Mark::Tilde),
            _ => None,
        }
    }
}

/// Start-of-format mnemonic (`^XA`).
pub const FORMAT_START: &str = "XA";
/// End-of-format mnemonic (`^XZ`).
pub const FORMAT_END: &str = "XZ";
/// Field-data mnemonic (`^FD`).
pub const FIELD_DATA: &str = "FD";
/// Field-separator mnemonic (`^FS`).
pub const FIELD_SEPARATOR: &str = "FS";

/// Literal start-of-format command.
pub const FORMAT_START_BYTES: &[u8] = b"^XA";
/// Literal end-of-format command.
pub const FORMAT_END_BYTES: &[u8] = b"^XZ";
/// Literal field-data command.
pub const FIELD_DATA_BYTES: &[u8] = b"^FD";
/// Literal field-separator command. The format defines no `~` form.
pub const FIELD_SEPARATOR_BYTES: &[u8] = b"^FS";

/// Width in characters of the command name beginning with `c1`, where `c2`
/// is the character after it (if any).
///
/// `A` is the only one-character mnemonic: its font designator follows the
/// name with no separator. `A@` (font by name) is still two characters, and
/// the secondary command class defines no one-character mnemonics at all.
/// Outside the exception set the name is unconditionally two characters —
/// the third character onward is always parameters, even when it looks like
/// a name character.
pub fn name_len(mark: Mark, c1: char, c2: Option<char>) -> usize {
    if mark == Mark::Caret && c1 == 'A' && c2 != Some('@') {
        return 1;
    }
    if c2.is_some() { 2 } else { 1 }
}
