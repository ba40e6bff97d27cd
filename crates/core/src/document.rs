//! Immutable document model and the splice engine.
//!
//! A [`Document`] is a value: an ordered token sequence plus the measurement
//! context it is composed against. Builder calls never mutate a document —
//! each one returns a brand-new value with a fragment spliced in immediately
//! before the last `^XZ`, so concurrent callers may share a document freely.

use serde::{Deserialize, Serialize};

use crate::fields::{FieldError, Fragment};
use crate::grammar::emit::{emit, emit_text};
use crate::grammar::lexer::{tokenize, tokenize_bytes};
use crate::grammar::mnemonics::{FORMAT_END_BYTES, FORMAT_START_BYTES};
use crate::grammar::token::Token;
use crate::units::{Resolution, Unit, to_dots};

// ── Measurement context ─────────────────────────────────────────────────

/// Device resolution and measurement unit a document is composed against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementContext {
    /// Print-head resolution.
    pub resolution: Resolution,
    /// Unit in which caller-supplied positions and sizes are expressed.
    pub unit: Unit,
}

impl MeasurementContext {
    /// A context with the given resolution and unit.
    pub fn new(resolution: Resolution, unit: Unit) -> Self {
        Self { resolution, unit }
    }

    /// Convert a value in this context's unit to device dots.
    pub fn dots(&self, value: f64) -> i32 {
        to_dots(value, self.resolution, self.unit)
    }
}

// ── Document ────────────────────────────────────────────────────────────

/// An immutable ZPL document.
///
/// Two documents with identical token sequences and contexts are
/// interchangeable; there is no identity beyond content. A document may be
/// rendered any number of times, always identically, and composed further
/// after rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    tokens: Vec<Token>,
    context: MeasurementContext,
}

impl Document {
    /// A minimal skeleton document: one empty `^XA`…`^XZ` format block.
    pub fn new(context: MeasurementContext) -> Self {
        Self {
            tokens: tokenize("^XA^XZ"),
            context,
        }
    }

    /// Tokenize existing ZPL text and continue composing on top of it.
    pub fn parse(input: &str, context: MeasurementContext) -> Self {
        Self {
            tokens: tokenize(input),
            context,
        }
    }

    /// Tokenize raw ZPL bytes; binary payloads are preserved as byte runs.
    pub fn from_bytes(input: &[u8], context: MeasurementContext) -> Self {
        Self {
            tokens: tokenize_bytes(input),
            context,
        }
    }

    /// Wrap an already-tokenized sequence.
    pub fn from_tokens(tokens: Vec<Token>, context: MeasurementContext) -> Self {
        Self { tokens, context }
    }

    /// The token sequence, in rendering order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The measurement context this document is composed against.
    pub fn context(&self) -> MeasurementContext {
        self.context
    }

    /// Insert `fragment` immediately before the last `^XZ` command, or at
    /// the end when the document has none.
    ///
    /// Returns a new document; `self` is untouched.
    pub fn splice(&self, fragment: &[Token]) -> Document {
        let at = insertion_point(&self.tokens);
        let mut tokens = Vec::with_capacity(self.tokens.len() + fragment.len());
        tokens.extend_from_slice(&self.tokens[..at]);
        tokens.extend_from_slice(fragment);
        tokens.extend_from_slice(&self.tokens[at..]);
        Document {
            tokens,
            context: self.context,
        }
    }

    /// Build a feature fragment against this document's context and splice
    /// it in.
    ///
    /// Fails only when the fragment builder rejects its parameters; in that
    /// case no fragment is constructed and the splice never happens.
    pub fn with_fragment(&self, fragment: &impl Fragment) -> Result<Document, FieldError> {
        let zpl = fragment.to_zpl(&self.context)?;
        Ok(self.splice(&tokenize(&zpl)))
    }

    /// Serialize to raw ZPL bytes.
    pub fn render(&self) -> Vec<u8> {
        emit(&self.tokens)
    }

    /// Serialize to a ZPL string.
    ///
    /// Fails only when the document holds binary byte runs.
    pub fn render_text(&self) -> Result<String, std::string::FromUtf8Error> {
        emit_text(&self.tokens)
    }
}

// ── Placement primitives ────────────────────────────────────────────────

/// Index of the splice insertion point: immediately before the last
/// end-of-format (`^XZ`) command, or `tokens.len()` when there is none.
pub fn insertion_point(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .rposition(Token::is_format_end)
        .unwrap_or(tokens.len())
}

/// Enclose a token sequence in `^XA`…`^XZ` unless it already is.
///
/// Idempotent: wrapping an already-wrapped sequence returns it unchanged.
pub fn wrap_if_needed(tokens: &[Token]) -> Vec<Token> {
    if is_wrapped(tokens) {
        return tokens.to_vec();
    }
    let mut bytes = Vec::from(FORMAT_START_BYTES);
    bytes.extend_from_slice(&emit(tokens));
    bytes.extend_from_slice(FORMAT_END_BYTES);
    tokenize_bytes(&bytes)
}

fn is_wrapped(tokens: &[Token]) -> bool {
    if matches!(tokens.first(), Some(t) if t.is_format_start())
        && matches!(tokens.last(), Some(t) if t.is_format_end())
    {
        return true;
    }
    // An unterminated field block swallows a trailing ^XZ into its data, so
    // the token-level check alone would re-wrap such a sequence forever.
    // The emitted bytes decide instead.
    let bytes = emit(tokens);
    bytes.starts_with(FORMAT_START_BYTES) && bytes.ends_with(FORMAT_END_BYTES)
}
