//! Feature fragment builders.
//!
//! Each builder produces a small, self-contained ZPL fragment string that
//! [`Document::with_fragment`](crate::document::Document::with_fragment)
//! tokenizes and splices in before the document's `^XZ`. Builders validate
//! their parameters before any fragment text is constructed, so the core
//! tokenize/emit/splice path never sees invalid input — a failed field is
//! simply never built.

/// Barcode field builders (`^BY`, `^BC`, `^B3`, `^BQ`).
pub mod barcode;
/// Printer and label setup fragments (`^PW`, `^LL`, `^PR`, `~SD`, …).
pub mod config;
/// GS1 application-identifier payloads for Code 128 mode `D`.
pub mod gs1;
/// Image and stored-asset builders (`^GF`, `~DG`, `^XG`).
pub mod image;
/// RFID transponder field builders (`^RF`).
pub mod rfid;
/// Graphic primitives: boxes, diagonals, circles.
pub mod shapes;
/// Text field builder (`^FO` + `^A` + `^FD`).
pub mod text;

use crate::document::MeasurementContext;

/// A self-contained piece of label content that can be spliced into a
/// document.
pub trait Fragment {
    /// Render this fragment as ZPL text against the given measurement
    /// context.
    fn to_zpl(&self, ctx: &MeasurementContext) -> Result<String, FieldError>;
}

/// Why a fragment could not be built.
///
/// Every validation failure in the library surfaces here, before any token
/// exists — never as a tokenizer or emitter failure.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A numeric parameter fell outside the range the command accepts.
    #[error("{what} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        /// Which parameter was rejected.
        what: &'static str,
        /// The offending value, in device dots where applicable.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A write was requested on a memory bank that cannot be written.
    #[error("memory bank {bank} is read-only")]
    ReadOnlyBank {
        /// The rejected bank.
        bank: rfid::MemoryBank,
    },

    /// A string parameter does not fit the shape the command requires.
    #[error("invalid {what}: {reason}")]
    Invalid {
        /// Which parameter was rejected.
        what: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// An image buffer does not match its declared dimensions.
    #[error("bitmap data is not a whole number of {row_bytes}-byte rows ({len} bytes)")]
    BitmapShape {
        /// Row stride implied by the pixel width.
        row_bytes: usize,
        /// Actual buffer length.
        len: usize,
    },
}

pub(crate) fn check_range(
    what: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), FieldError> {
    if value < min || value > max {
        return Err(FieldError::OutOfRange {
            what,
            value,
            min,
            max,
        });
    }
    Ok(())
}

// ── Field-data escaping ─────────────────────────────────────────────────

/// Escape reserved characters for use inside a `^FD`…`^FS` block.
///
/// Returns the escaped data and whether a `^FH` prefix is required. `^`,
/// `~`, and the escape indicator `_` itself become `_XX` hex escapes;
/// everything else passes through untouched. Escaping happens here, at
/// fragment-construction time — the tokenizer and emitter never escape.
pub fn escape_field_data(data: &str) -> (String, bool) {
    if !data.contains(['^', '~', '_']) {
        return (data.to_string(), false);
    }
    let mut out = String::with_capacity(data.len() + 8);
    for ch in data.chars() {
        match ch {
            '^' => out.push_str("_5E"),
            '~' => out.push_str("_7E"),
            '_' => out.push_str("_5F"),
            _ => out.push(ch),
        }
    }
    (out, true)
}

/// Append a complete field-data block (`^FD`…`^FS`, with `^FH` when the
/// data needs escaping) to a fragment under construction.
pub(crate) fn push_field_data(out: &mut String, data: &str) {
    let (escaped, needs_hex) = escape_field_data(data);
    if needs_hex {
        out.push_str("^FH");
    }
    out.push_str("^FD");
    out.push_str(&escaped);
    out.push_str("^FS");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_data_passes_through() {
        assert_eq!(escape_field_data("Hello World"), ("Hello World".into(), false));
        assert_eq!(escape_field_data(""), (String::new(), false));
    }

    #[test]
    fn reserved_chars_become_hex_escapes() {
        assert_eq!(escape_field_data("a^b"), ("a_5Eb".into(), true));
        assert_eq!(escape_field_data("a~b"), ("a_7Eb".into(), true));
        assert_eq!(escape_field_data("a_b"), ("a_5Fb".into(), true));
        assert_eq!(escape_field_data("^~_"), ("_5E_7E_5F".into(), true));
    }

    #[test]
    fn multibyte_text_is_untouched() {
        assert_eq!(escape_field_data("日本語"), ("日本語".into(), false));
        assert_eq!(escape_field_data("é^é"), ("é_5Eé".into(), true));
    }

    #[test]
    fn push_field_data_adds_fh_only_when_needed() {
        let mut out = String::new();
        push_field_data(&mut out, "plain");
        assert_eq!(out, "^FDplain^FS");

        let mut out = String::new();
        push_field_data(&mut out, "5^ off");
        assert_eq!(out, "^FH^FD5_5E off^FS");
    }
}
