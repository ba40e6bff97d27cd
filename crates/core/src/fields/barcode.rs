//! Barcode field builders (`^BY`, `^BC`, `^B3`, `^BQ`).
//!
//! Module-width setup (`^BY`) is emitted per fragment when requested, so a
//! barcode never depends on whatever the previous fragment happened to set.

use super::gs1::Gs1Payload;
use super::text::Orientation;
use super::{FieldError, Fragment, check_range, push_field_data};
use crate::document::MeasurementContext;

fn yn(flag: bool) -> char {
    if flag { 'Y' } else { 'N' }
}

// ── Code 128 ────────────────────────────────────────────────────────────

/// Code 128 encoding mode (`^BC` parameter `m`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Code128Mode {
    /// No mode selection.
    #[default]
    Normal,
    /// UCC case mode (exactly 19 digits, mod-10 check digit).
    Ucc,
    /// Automatic subset switching.
    Auto,
    /// UCC/EAN with application identifiers in parentheses.
    Gs1,
}

impl Code128Mode {
    fn code(self) -> char {
        match self {
            Code128Mode::Normal => 'N',
            Code128Mode::Ucc => 'U',
            Code128Mode::Auto => 'A',
            Code128Mode::Gs1 => 'D',
        }
    }
}

/// A Code 128 barcode (`^BC`).
#[derive(Debug, Clone, PartialEq)]
pub struct Code128 {
    x: f64,
    y: f64,
    data: String,
    height: f64,
    orientation: Orientation,
    module_width: Option<u32>,
    interpretation_line: bool,
    line_above: bool,
    check_digit: bool,
    mode: Code128Mode,
}

impl Code128 {
    /// A Code 128 barcode at `(x, y)` encoding `data`, `height` tall
    /// (context units).
    pub fn new(x: f64, y: f64, data: impl Into<String>, height: f64) -> Self {
        Self {
            x,
            y,
            data: data.into(),
            height,
            orientation: Orientation::default(),
            module_width: None,
            interpretation_line: true,
            line_above: false,
            check_digit: false,
            mode: Code128Mode::default(),
        }
    }

    /// A GS1-128 barcode: mode `D` with a parenthesized element string.
    pub fn gs1(x: f64, y: f64, payload: &Gs1Payload, height: f64) -> Result<Self, FieldError> {
        let data = payload.to_field_data()?;
        Ok(Self::new(x, y, data, height).mode(Code128Mode::Gs1))
    }

    /// Narrow-bar module width in dots (`^BY`), 1–10.
    #[must_use]
    pub fn module_width(mut self, dots: u32) -> Self {
        self.module_width = Some(dots);
        self
    }

    /// Rotate the barcode.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Print the human-readable interpretation line (on by default).
    #[must_use]
    pub fn interpretation_line(mut self, on: bool) -> Self {
        self.interpretation_line = on;
        self
    }

    /// Print the interpretation line above the code instead of below.
    #[must_use]
    pub fn line_above(mut self, on: bool) -> Self {
        self.line_above = on;
        self
    }

    /// Add a mod-103 check digit to the interpretation line.
    #[must_use]
    pub fn check_digit(mut self, on: bool) -> Self {
        self.check_digit = on;
        self
    }

    /// Select the encoding mode.
    #[must_use]
    pub fn mode(mut self, mode: Code128Mode) -> Self {
        self.mode = mode;
        self
    }
}

impl Fragment for Code128 {
    fn to_zpl(&self, ctx: &MeasurementContext) -> Result<String, FieldError> {
        if self.data.is_empty() {
            return Err(FieldError::Invalid {
                what: "barcode data",
                reason: "empty".into(),
            });
        }
        let x = ctx.dots(self.x);
        let y = ctx.dots(self.y);
        check_range("field x", i64::from(x), 0, 32000)?;
        check_range("field y", i64::from(y), 0, 32000)?;
        let h = ctx.dots(self.height);
        check_range("barcode height", i64::from(h), 1, 32000)?;

        let mut out = format!("^FO{x},{y}");
        if let Some(mw) = self.module_width {
            check_range("module width", i64::from(mw), 1, 10)?;
            out.push_str(&format!("^BY{mw}"));
        }
        out.push_str(&format!(
            "^BC{},{},{},{},{},{}",
            self.orientation.code(),
            h,
            yn(self.interpretation_line),
            yn(self.line_above),
            yn(self.check_digit),
            self.mode.code()
        ));
        push_field_data(&mut out, &self.data);
        Ok(out)
    }
}

// ── Code 39 ─────────────────────────────────────────────────────────────

/// A Code 39 barcode (`^B3`).
#[derive(Debug, Clone, PartialEq)]
pub struct Code39 {
    x: f64,
    y: f64,
    data: String,
    height: f64,
    orientation: Orientation,
    module_width: Option<u32>,
    interpretation_line: bool,
    line_above: bool,
    check_digit: bool,
}

impl Code39 {
    /// A Code 39 barcode at `(x, y)` encoding `data`, `height` tall
    /// (context units).
    pub fn new(x: f64, y: f64, data: impl Into<String>, height: f64) -> Self {
        Self {
            x,
            y,
            data: data.into(),
            height,
            orientation: Orientation::default(),
            module_width: None,
            interpretation_line: true,
            line_above: false,
            check_digit: false,
        }
    }

    /// Narrow-bar module width in dots (`^BY`), 1–10.
    #[must_use]
    pub fn module_width(mut self, dots: u32) -> Self {
        self.module_width = Some(dots);
        self
    }

    /// Rotate the barcode.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Print the human-readable interpretation line (on by default).
    #[must_use]
    pub fn interpretation_line(mut self, on: bool) -> Self {
        self.interpretation_line = on;
        self
    }

    /// Print the interpretation line above the code instead of below.
    #[must_use]
    pub fn line_above(mut self, on: bool) -> Self {
        self.line_above = on;
        self
    }

    /// Add a mod-43 check digit.
    #[must_use]
    pub fn check_digit(mut self, on: bool) -> Self {
        self.check_digit = on;
        self
    }
}

impl Fragment for Code39 {
    fn to_zpl(&self, ctx: &MeasurementContext) -> Result<String, FieldError> {
        // Code 39 encodes a restricted alphabet; reject anything outside it
        // rather than let the printer silently drop characters.
        if self.data.is_empty() {
            return Err(FieldError::Invalid {
                what: "barcode data",
                reason: "empty".into(),
            });
        }
        if let Some(bad) = self
            .data
            .chars()
            .find(|c| !c.is_ascii_digit() && !c.is_ascii_uppercase() && !"-.$/+% ".contains(*c))
        {
            return Err(FieldError::Invalid {
                what: "Code 39 data",
                reason: format!("character '{bad}' is not encodable"),
            });
        }
        let x = ctx.dots(self.x);
        let y = ctx.dots(self.y);
        check_range("field x", i64::from(x), 0, 32000)?;
        check_range("field y", i64::from(y), 0, 32000)?;
        let h = ctx.dots(self.height);
        check_range("barcode height", i64::from(h), 1, 32000)?;

        let mut out = format!("^FO{x},{y}");
        if let Some(mw) = self.module_width {
            check_range("module width", i64::from(mw), 1, 10)?;
            out.push_str(&format!("^BY{mw}"));
        }
        out.push_str(&format!(
            "^B3{},{},{},{},{}",
            self.orientation.code(),
            yn(self.check_digit),
            h,
            yn(self.interpretation_line),
            yn(self.line_above)
        ));
        push_field_data(&mut out, &self.data);
        Ok(out)
    }
}

// ── QR Code ─────────────────────────────────────────────────────────────

/// QR error-correction level (`^BQ` field-data switch).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorCorrection {
    /// ~7% recovery, maximum density.
    Low,
    /// ~15% recovery (standard).
    #[default]
    Standard,
    /// ~25% recovery.
    Quality,
    /// ~30% recovery, maximum reliability.
    High,
}

impl ErrorCorrection {
    fn code(self) -> char {
        match self {
            ErrorCorrection::Low => 'L',
            ErrorCorrection::Standard => 'M',
            ErrorCorrection::Quality => 'Q',
            ErrorCorrection::High => 'H',
        }
    }
}

/// A model-2 QR code (`^BQ`).
#[derive(Debug, Clone, PartialEq)]
pub struct QrCode {
    x: f64,
    y: f64,
    data: String,
    magnification: u32,
    error_correction: ErrorCorrection,
}

impl QrCode {
    /// A QR code at `(x, y)` encoding `data`.
    pub fn new(x: f64, y: f64, data: impl Into<String>) -> Self {
        Self {
            x,
            y,
            data: data.into(),
            magnification: 3,
            error_correction: ErrorCorrection::default(),
        }
    }

    /// Module magnification, 1–10 (default 3).
    #[must_use]
    pub fn magnification(mut self, factor: u32) -> Self {
        self.magnification = factor;
        self
    }

    /// Error-correction level.
    #[must_use]
    pub fn error_correction(mut self, level: ErrorCorrection) -> Self {
        self.error_correction = level;
        self
    }
}

impl Fragment for QrCode {
    fn to_zpl(&self, ctx: &MeasurementContext) -> Result<String, FieldError> {
        if self.data.is_empty() {
            return Err(FieldError::Invalid {
                what: "barcode data",
                reason: "empty".into(),
            });
        }
        let x = ctx.dots(self.x);
        let y = ctx.dots(self.y);
        check_range("field x", i64::from(x), 0, 32000)?;
        check_range("field y", i64::from(y), 0, 32000)?;
        check_range("magnification", i64::from(self.magnification), 1, 10)?;

        let mut out = format!("^FO{x},{y}^BQN,2,{}", self.magnification);
        // The error-correction switch and automatic-input flag ride at the
        // front of the field data.
        let data = format!("{}A,{}", self.error_correction.code(), self.data);
        push_field_data(&mut out, &data);
        Ok(out)
    }
}
