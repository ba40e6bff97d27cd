use serde::{Deserialize, Serialize};

use super::mnemonics::{FORMAT_END, FORMAT_START, Mark};

/// One element of a tokenized ZPL document.
///
/// The token vocabulary is lossless: any input splits into a sequence of
/// these five cases, and [`emit`](super::emit::emit) reconstructs the exact
/// original bytes by concatenating them in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
#[non_exhaustive]
pub enum Token {
    /// A command and its raw, uninterpreted parameter string.
    Command {
        /// The mark character that introduced the command.
        mark: Mark,
        /// The 1- or 2-character command name (e.g. `"XA"`, `"BC"`, `"A"`).
        name: String,
        /// Everything between the name and the next mark character,
        /// verbatim. Empty for commands with no parameters.
        params: String,
    },
    /// The literal payload of a `^FD` field-data block. The `^FD` itself is
    /// implicit and reconstructed on emission.
    FieldData {
        /// Raw field content. No escape processing is applied at this level.
        data: String,
    },
    /// The `^FS` marker closing a field-data block.
    FieldSeparator,
    /// An opaque byte span that is not valid text (e.g. an embedded binary
    /// payload), preserved verbatim.
    ByteRun {
        /// The raw bytes.
        buf: Vec<u8>,
    },
    /// Text that is not a command, field-data block, or byte run.
    RawText {
        /// The text, verbatim.
        text: String,
    },
}

impl Token {
    /// Build a [`Token::Command`] from borrowed parts.
    pub fn command(mark: Mark, name: &str, params: &str) -> Token {
        Token::Command {
            mark,
            name: name.to_string(),
            params: params.to_string(),
        }
    }

    /// True for the start-of-format command (`^XA`), regardless of params.
    pub fn is_format_start(&self) -> bool {
        matches!(
            self,
            Token::Command { mark: Mark::Caret, name, .. } if name == FORMAT_START
        )
    }

    /// True for the end-of-format command (`^XZ`), regardless of params.
    pub fn is_format_end(&self) -> bool {
        matches!(
            self,
            Token::Command { mark: Mark::Caret, name, .. } if name == FORMAT_END
        )
    }
}
