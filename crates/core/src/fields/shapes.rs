//! Graphic primitives: boxes, diagonals, circles.

use super::{FieldError, Fragment, check_range};
use crate::document::MeasurementContext;

/// Drawing color for graphic primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineColor {
    /// Black (the default).
    #[default]
    Black,
    /// White — used to knock content out of a dark area.
    White,
}

impl LineColor {
    fn code(self) -> char {
        match self {
            LineColor::Black => 'B',
            LineColor::White => 'W',
        }
    }
}

/// Direction of a diagonal line (`^GD`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagonalDirection {
    /// Bottom-left to top-right (`/`).
    #[default]
    Right,
    /// Top-left to bottom-right (`\`).
    Left,
}

impl DiagonalDirection {
    fn code(self) -> char {
        match self {
            DiagonalDirection::Right => 'R',
            DiagonalDirection::Left => 'L',
        }
    }
}

// ── Box ─────────────────────────────────────────────────────────────────

/// A rectangle or straight line (`^GB`).
///
/// A box with height equal to its border thickness is a horizontal line;
/// width equal to thickness gives a vertical line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphicBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    thickness: f64,
    color: LineColor,
    rounding: u8,
}

impl GraphicBox {
    /// A box at `(x, y)` of `width` × `height` (context units) with a
    /// 1-dot border.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            thickness: 0.0,
            color: LineColor::default(),
            rounding: 0,
        }
    }

    /// Border thickness (context units). Zero means one dot.
    #[must_use]
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Border color.
    #[must_use]
    pub fn color(mut self, color: LineColor) -> Self {
        self.color = color;
        self
    }

    /// Corner rounding, 0 (none) to 8 (heaviest).
    #[must_use]
    pub fn rounding(mut self, rounding: u8) -> Self {
        self.rounding = rounding;
        self
    }
}

impl Fragment for GraphicBox {
    fn to_zpl(&self, ctx: &MeasurementContext) -> Result<String, FieldError> {
        let x = ctx.dots(self.x);
        let y = ctx.dots(self.y);
        check_range("field x", i64::from(x), 0, 32000)?;
        check_range("field y", i64::from(y), 0, 32000)?;
        let t = ctx.dots(self.thickness).max(1);
        check_range("border thickness", i64::from(t), 1, 32000)?;
        // Width and height may not be thinner than the border itself.
        let w = ctx.dots(self.width).max(t);
        let h = ctx.dots(self.height).max(t);
        check_range("box width", i64::from(w), 1, 32000)?;
        check_range("box height", i64::from(h), 1, 32000)?;
        check_range("corner rounding", i64::from(self.rounding), 0, 8)?;

        Ok(format!(
            "^FO{x},{y}^GB{w},{h},{t},{},{}^FS",
            self.color.code(),
            self.rounding
        ))
    }
}

// ── Diagonal ────────────────────────────────────────────────────────────

/// A diagonal line (`^GD`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphicDiagonal {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    thickness: f64,
    color: LineColor,
    direction: DiagonalDirection,
}

impl GraphicDiagonal {
    /// A diagonal within the `(x, y)` + `width` × `height` bounding box.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            thickness: 0.0,
            color: LineColor::default(),
            direction: DiagonalDirection::default(),
        }
    }

    /// Line thickness (context units). Zero means one dot.
    #[must_use]
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Line color.
    #[must_use]
    pub fn color(mut self, color: LineColor) -> Self {
        self.color = color;
        self
    }

    /// Which way the line leans.
    #[must_use]
    pub fn direction(mut self, direction: DiagonalDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl Fragment for GraphicDiagonal {
    fn to_zpl(&self, ctx: &MeasurementContext) -> Result<String, FieldError> {
        let x = ctx.dots(self.x);
        let y = ctx.dots(self.y);
        check_range("field x", i64::from(x), 0, 32000)?;
        check_range("field y", i64::from(y), 0, 32000)?;
        let t = ctx.dots(self.thickness).max(1);
        check_range("line thickness", i64::from(t), 1, 32000)?;
        let w = ctx.dots(self.width).max(3);
        let h = ctx.dots(self.height).max(3);
        check_range("diagonal width", i64::from(w), 3, 32000)?;
        check_range("diagonal height", i64::from(h), 3, 32000)?;

        Ok(format!(
            "^FO{x},{y}^GD{w},{h},{t},{},{}^FS",
            self.color.code(),
            self.direction.code()
        ))
    }
}

// ── Circle ──────────────────────────────────────────────────────────────

/// A circle (`^GC`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphicCircle {
    x: f64,
    y: f64,
    diameter: f64,
    thickness: f64,
    color: LineColor,
}

impl GraphicCircle {
    /// A circle at `(x, y)` with the given `diameter` (context units).
    pub fn new(x: f64, y: f64, diameter: f64) -> Self {
        Self {
            x,
            y,
            diameter,
            thickness: 0.0,
            color: LineColor::default(),
        }
    }

    /// Border thickness (context units). Zero means one dot.
    #[must_use]
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Border color.
    #[must_use]
    pub fn color(mut self, color: LineColor) -> Self {
        self.color = color;
        self
    }
}

impl Fragment for GraphicCircle {
    fn to_zpl(&self, ctx: &MeasurementContext) -> Result<String, FieldError> {
        let x = ctx.dots(self.x);
        let y = ctx.dots(self.y);
        check_range("field x", i64::from(x), 0, 32000)?;
        check_range("field y", i64::from(y), 0, 32000)?;
        let d = ctx.dots(self.diameter);
        check_range("circle diameter", i64::from(d), 3, 4095)?;
        let t = ctx.dots(self.thickness).max(1);
        check_range("border thickness", i64::from(t), 1, 4095)?;

        Ok(format!(
            "^FO{x},{y}^GC{d},{t},{}^FS",
            self.color.code()
        ))
    }
}
