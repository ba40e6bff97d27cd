//! zpl-composer core library.
//!
//! A lossless ZPL II token pipeline — tokenizer and byte-exact emitter —
//! under an immutable document model with a splice engine, plus fragment
//! builders for the common label features (text, barcodes, shapes, images,
//! RFID, printer setup). The main entry points are [`tokenize`] /
//! [`tokenize_bytes`], [`emit`], and [`Document`].
//!
//! Everything is a pure function over values: documents are never mutated,
//! the tokenizer never rejects input, and `emit(&tokenize_bytes(x)) == x`
//! for every input `x`.

#![warn(missing_docs)]

/// Immutable document model and splice engine.
pub mod document;
/// Feature fragment builders (text, barcodes, shapes, images, RFID, setup).
pub mod fields;
/// ZPL grammar: mnemonic rules, token model, tokenizer, emitter.
pub mod grammar;
/// Measurement-to-dot conversion.
pub mod units;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Tokenizer / emitter
pub use grammar::emit::{emit, emit_text};
pub use grammar::lexer::{tokenize, tokenize_bytes};

// Token model
pub use grammar::mnemonics::Mark;
pub use grammar::token::Token;

// Document model
pub use document::{Document, MeasurementContext, insertion_point, wrap_if_needed};

// Fragment builders
pub use fields::{FieldError, Fragment, escape_field_data};

// Units
pub use units::{Resolution, Unit, to_dots};

// Serialization helpers
pub use grammar::dump::to_pretty_json;
