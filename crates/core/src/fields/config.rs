//! Printer and label setup fragment (`^PW`, `^LL`, `^LH`, `^PR`, `~SD`,
//! `^PO`, `^CI`).
//!
//! Setup is an explicit fragment like any other: splicing it early in a
//! document states the label geometry once instead of relying on whatever
//! state a previous job left behind.

use super::{FieldError, Fragment, check_range};
use crate::document::MeasurementContext;

/// Label print orientation (`^PO`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrintOrientation {
    /// Normal.
    #[default]
    Normal,
    /// Rotated 180°.
    Inverted,
}

impl PrintOrientation {
    fn code(self) -> char {
        match self {
            PrintOrientation::Normal => 'N',
            PrintOrientation::Inverted => 'I',
        }
    }
}

/// A block of printer/label setup commands.
///
/// Only the settings that were explicitly given are emitted; lengths are in
/// the document context's unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrinterConfig {
    width: Option<f64>,
    length: Option<f64>,
    home: Option<(f64, f64)>,
    print_rate: Option<u32>,
    darkness: Option<u32>,
    orientation: Option<PrintOrientation>,
    encoding: Option<u32>,
}

impl PrinterConfig {
    /// An empty setup block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Print width (`^PW`).
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Label length (`^LL`).
    #[must_use]
    pub fn length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    /// Label home offset (`^LH`).
    #[must_use]
    pub fn home(mut self, x: f64, y: f64) -> Self {
        self.home = Some((x, y));
        self
    }

    /// Print speed in inches per second (`^PR`), 1–14.
    #[must_use]
    pub fn print_rate(mut self, rate: u32) -> Self {
        self.print_rate = Some(rate);
        self
    }

    /// Darkness setting (`~SD`), 0–30.
    #[must_use]
    pub fn darkness(mut self, darkness: u32) -> Self {
        self.darkness = Some(darkness);
        self
    }

    /// Label orientation (`^PO`).
    #[must_use]
    pub fn orientation(mut self, orientation: PrintOrientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Character-set selection (`^CI`), 0–36.
    #[must_use]
    pub fn encoding(mut self, encoding: u32) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Select UTF-8 text handling (`^CI28`).
    #[must_use]
    pub fn utf8(self) -> Self {
        self.encoding(28)
    }
}

impl Fragment for PrinterConfig {
    fn to_zpl(&self, ctx: &MeasurementContext) -> Result<String, FieldError> {
        let mut out = String::new();

        if let Some(width) = self.width {
            let w = ctx.dots(width);
            check_range("print width", i64::from(w), 2, 32000)?;
            out.push_str(&format!("^PW{w}"));
        }
        if let Some(length) = self.length {
            let l = ctx.dots(length);
            check_range("label length", i64::from(l), 1, 32000)?;
            out.push_str(&format!("^LL{l}"));
        }
        if let Some((x, y)) = self.home {
            let hx = ctx.dots(x);
            let hy = ctx.dots(y);
            check_range("home x", i64::from(hx), 0, 32000)?;
            check_range("home y", i64::from(hy), 0, 32000)?;
            out.push_str(&format!("^LH{hx},{hy}"));
        }
        if let Some(rate) = self.print_rate {
            check_range("print rate", i64::from(rate), 1, 14)?;
            out.push_str(&format!("^PR{rate}"));
        }
        if let Some(darkness) = self.darkness {
            check_range("darkness", i64::from(darkness), 0, 30)?;
            // ~SD wants a fixed two-digit value.
            out.push_str(&format!("~SD{darkness:02}"));
        }
        if let Some(orientation) = self.orientation {
            out.push_str("^PO");
            out.push(orientation.code());
        }
        if let Some(encoding) = self.encoding {
            check_range("character set", i64::from(encoding), 0, 36)?;
            out.push_str(&format!("^CI{encoding}"));
        }

        Ok(out)
    }
}
