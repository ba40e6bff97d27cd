//! Text field builder (`^FO` + `^A` + `^FD`).

use super::{FieldError, Fragment, check_range, push_field_data};
use crate::document::MeasurementContext;

// ── Shared field enums ──────────────────────────────────────────────────

/// Field rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Normal, unrotated.
    #[default]
    Normal,
    /// Rotated 90° clockwise.
    Rotated,
    /// Inverted 180°.
    Inverted,
    /// Read from bottom up (270° clockwise).
    BottomUp,
}

impl Orientation {
    pub(crate) fn code(self) -> char {
        match self {
            Orientation::Normal => 'N',
            Orientation::Rotated => 'R',
            Orientation::Inverted => 'I',
            Orientation::BottomUp => 'B',
        }
    }
}

/// Text justification inside a field block (`^FB`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Justification {
    /// Left-aligned.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
    /// Justified to both margins.
    Justified,
}

impl Justification {
    fn code(self) -> char {
        match self {
            Justification::Left => 'L',
            Justification::Center => 'C',
            Justification::Right => 'R',
            Justification::Justified => 'J',
        }
    }
}

// ── Font ────────────────────────────────────────────────────────────────

/// Font selection for a text field.
///
/// The designator is the single character directly after `^A` — the
/// canonical one-character mnemonic in the grammar. Character cell height
/// and width are in the document context's unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    designator: char,
    height: f64,
    width: f64,
}

impl Font {
    /// Font `designator` at the given cell size.
    pub fn new(designator: char, height: f64, width: f64) -> Self {
        Self {
            designator,
            height,
            width,
        }
    }

    /// The built-in scalable font (`^A0`) at the given cell size.
    pub fn scalable(height: f64, width: f64) -> Self {
        Self::new('0', height, width)
    }

    fn to_zpl(self, orientation: Orientation, ctx: &MeasurementContext) -> Result<String, FieldError> {
        if !self.designator.is_ascii_alphanumeric() {
            return Err(FieldError::Invalid {
                what: "font designator",
                reason: format!("'{}' is not A-Z or 0-9", self.designator),
            });
        }
        let h = ctx.dots(self.height);
        let w = ctx.dots(self.width);
        check_range("font height", i64::from(h), 10, 32000)?;
        check_range("font width", i64::from(w), 10, 32000)?;
        Ok(format!(
            "^A{}{},{},{}",
            self.designator,
            orientation.code(),
            h,
            w
        ))
    }
}

// ── Text field ──────────────────────────────────────────────────────────

/// A positioned text field.
///
/// Renders as `^FO` + optional `^A` + optional `^FB` + `^FD`…`^FS`.
/// Reserved characters in the data switch the field to hex-escape form
/// (`^FH^FD` with `_XX` escapes).
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    x: f64,
    y: f64,
    data: String,
    orientation: Orientation,
    font: Option<Font>,
    block: Option<FieldBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FieldBlock {
    width: f64,
    max_lines: u32,
    justification: Justification,
}

impl TextField {
    /// A text field at `(x, y)` (context units) with the given content.
    pub fn new(x: f64, y: f64, data: impl Into<String>) -> Self {
        Self {
            x,
            y,
            data: data.into(),
            orientation: Orientation::default(),
            font: None,
            block: None,
        }
    }

    /// Select a font. Without one, the printer's current default applies.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Rotate the field.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Wrap the text in a block `width` wide (context units) of at most
    /// `max_lines` lines.
    #[must_use]
    pub fn block(mut self, width: f64, max_lines: u32, justification: Justification) -> Self {
        self.block = Some(FieldBlock {
            width,
            max_lines,
            justification,
        });
        self
    }
}

impl Fragment for TextField {
    fn to_zpl(&self, ctx: &MeasurementContext) -> Result<String, FieldError> {
        let x = ctx.dots(self.x);
        let y = ctx.dots(self.y);
        check_range("field x", i64::from(x), 0, 32000)?;
        check_range("field y", i64::from(y), 0, 32000)?;

        let mut out = format!("^FO{x},{y}");

        match self.font {
            Some(font) => out.push_str(&font.to_zpl(self.orientation, ctx)?),
            // No font: a non-default rotation still needs stating, via the
            // default-orientation command.
            None => {
                if self.orientation != Orientation::Normal {
                    out.push_str("^FW");
                    out.push(self.orientation.code());
                }
            }
        }

        if let Some(block) = self.block {
            let w = ctx.dots(block.width);
            check_range("block width", i64::from(w), 0, 32000)?;
            check_range("block lines", i64::from(block.max_lines), 1, 9999)?;
            out.push_str(&format!(
                "^FB{},{},0,{}",
                w,
                block.max_lines,
                block.justification.code()
            ));
        }

        push_field_data(&mut out, &self.data);
        Ok(out)
    }
}
