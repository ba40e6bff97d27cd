//! ZPL tokenizer — converts raw text or bytes into a lossless token sequence.
//!
//! The tokenizer is total: it never fails and never rejects input. Anything
//! it cannot classify is preserved as [`Token::RawText`] or
//! [`Token::ByteRun`], so `emit(&tokenize_bytes(x)) == x` for every input.
//! Re-invoking on the same input always yields an identical sequence.

use super::mnemonics::{self, FIELD_DATA, FIELD_SEPARATOR_BYTES, Mark};
use super::token::Token;

/// Tokenize ZPL text input.
///
/// Text input never yields [`Token::ByteRun`]: every span of a valid UTF-8
/// string that the scanner isolates is itself valid UTF-8 (mark characters
/// are ASCII, so span boundaries always fall on character boundaries).
pub fn tokenize(input: &str) -> Vec<Token> {
    scan(input.as_bytes())
}

/// Tokenize raw ZPL bytes.
///
/// Spans that cannot be interpreted as text — a free-standing run, a whole
/// command, or a whole field-data block — are preserved verbatim as
/// [`Token::ByteRun`] so that binary payloads are never corrupted by text
/// handling.
pub fn tokenize_bytes(input: &[u8]) -> Vec<Token> {
    scan(input)
}

// ── Scanner ─────────────────────────────────────────────────────────────

fn scan(b: &[u8]) -> Vec<Token> {
    let mut toks = Vec::new();
    let mut i = 0usize;

    while i < b.len() {
        // Maximal run of bytes before the next mark character.
        let run_start = i;
        while i < b.len() && Mark::from_byte(b[i]).is_none() {
            i += 1;
        }
        if i > run_start {
            toks.push(text_or_bytes(&b[run_start..i]));
        }
        if i >= b.len() {
            break;
        }

        let cmd_start = i;
        let Some(mark) = Mark::from_byte(b[i]) else {
            // The run loop above only stops early on a mark byte.
            unreachable!("scan stopped on a non-mark byte at offset {i}");
        };
        i += 1;

        // Command name: up to two characters, per the mnemonic grammar.
        let Some((c1, w1)) = decode_char(&b[i..]) else {
            // A mark at end of input, or followed by non-text bytes, cannot
            // form a command. Preserve the span through the next mark.
            while i < b.len() && Mark::from_byte(b[i]).is_none() {
                i += 1;
            }
            toks.push(text_or_bytes(&b[cmd_start..i]));
            continue;
        };
        let mut name_end = i + w1;
        let c2 = decode_char(&b[name_end..]);
        let mut name = String::new();
        name.push(c1);
        if mnemonics::name_len(mark, c1, c2.map(|(c, _)| c)) == 2
            && let Some((c, w)) = c2
        {
            name.push(c);
            name_end += w;
        }
        i = name_end;

        // The field-data command takes no parameters; it switches the
        // scanner into capture mode instead.
        if mark == Mark::Caret && name == FIELD_DATA {
            capture_field(b, cmd_start, &mut i, &mut toks);
            continue;
        }

        // Parameters: everything up to the next mark character or end of
        // input, verbatim.
        let params_start = i;
        while i < b.len() && Mark::from_byte(b[i]).is_none() {
            i += 1;
        }
        match std::str::from_utf8(&b[params_start..i]) {
            Ok(params) => toks.push(Token::Command {
                mark,
                name,
                params: params.to_string(),
            }),
            // Binary parameters: keep the whole command span opaque.
            Err(_) => toks.push(Token::ByteRun {
                buf: b[cmd_start..i].to_vec(),
            }),
        }
    }

    toks
}

/// Field-data capture: consume bytes verbatim — embedded mark characters are
/// not reinterpreted as commands — until the literal `^FS`.
///
/// `cmd_start` is the offset of the `^FD` that opened the block; if the
/// content turns out to be binary, the whole block (command included) is
/// preserved as one [`Token::ByteRun`] so the FieldData/FieldSeparator
/// pairing never has a stray token between them.
fn capture_field(b: &[u8], cmd_start: usize, i: &mut usize, toks: &mut Vec<Token>) {
    let data_start = *i;
    let sep = find_subsequence(&b[data_start..], FIELD_SEPARATOR_BYTES);

    match sep {
        Some(rel) => {
            let sep_at = data_start + rel;
            match std::str::from_utf8(&b[data_start..sep_at]) {
                Ok(data) => toks.push(Token::FieldData {
                    data: data.to_string(),
                }),
                Err(_) => toks.push(Token::ByteRun {
                    buf: b[cmd_start..sep_at].to_vec(),
                }),
            }
            toks.push(Token::FieldSeparator);
            *i = sep_at + FIELD_SEPARATOR_BYTES.len();
        }
        None => {
            // Unterminated block: all remaining bytes are data, and no
            // separator token is emitted.
            match std::str::from_utf8(&b[data_start..]) {
                Ok(data) => toks.push(Token::FieldData {
                    data: data.to_string(),
                }),
                Err(_) => toks.push(Token::ByteRun {
                    buf: b[cmd_start..].to_vec(),
                }),
            }
            *i = b.len();
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Classify a span as text when it is valid UTF-8, opaque bytes otherwise.
fn text_or_bytes(span: &[u8]) -> Token {
    match std::str::from_utf8(span) {
        Ok(s) => Token::RawText {
            text: s.to_string(),
        },
        Err(_) => Token::ByteRun { buf: span.to_vec() },
    }
}

/// Decode the first UTF-8 character of `b`, with its width in bytes.
fn decode_char(b: &[u8]) -> Option<(char, usize)> {
    let head = &b[..b.len().min(4)];
    let valid = match std::str::from_utf8(head) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&head[..e.valid_up_to()]).ok()?,
    };
    valid.chars().next().map(|c| (c, c.len_utf8()))
}

/// Offset of the first occurrence of `needle` in `haystack`.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
