//! ZPL emitter — serializes a token sequence back to bytes, exactly.
//!
//! The emitter is the left inverse of the tokenizer: for any input `x`,
//! `emit(&tokenize_bytes(x)) == x`. Concatenation follows token order; no
//! reordering, deduplication, or reformatting is performed.

use super::mnemonics::{FIELD_DATA_BYTES, FIELD_SEPARATOR_BYTES};
use super::token::Token;

/// Serialize a token sequence to raw ZPL bytes.
pub fn emit(tokens: &[Token]) -> Vec<u8> {
    let mut out = Vec::new();
    for tok in tokens {
        match tok {
            Token::Command { mark, name, params } => {
                out.push(mark.as_byte());
                out.extend_from_slice(name.as_bytes());
                out.extend_from_slice(params.as_bytes());
            }
            // The field-data command is implicit in the token and always
            // reconstructed with the primary mark — the format defines no
            // alternate prefix for it.
            Token::FieldData { data } => {
                out.extend_from_slice(FIELD_DATA_BYTES);
                out.extend_from_slice(data.as_bytes());
            }
            Token::FieldSeparator => out.extend_from_slice(FIELD_SEPARATOR_BYTES),
            Token::ByteRun { buf } => out.extend_from_slice(buf),
            Token::RawText { text } => out.extend_from_slice(text.as_bytes()),
        }
    }
    out
}

/// Serialize a token sequence to a ZPL string.
///
/// Fails only when the sequence contains [`Token::ByteRun`] bytes that are
/// not valid UTF-8; sequences produced from text input always succeed.
pub fn emit_text(tokens: &[Token]) -> Result<String, std::string::FromUtf8Error> {
    String::from_utf8(emit(tokens))
}
