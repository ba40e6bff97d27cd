//! Image and stored-asset builders (`^GF`, `~DG`, `^XG`).
//!
//! Rasterization and dithering live outside this library; these builders
//! consume an already-packed 1-bit bitmap and encode it as the uppercase
//! hex form the graphic commands expect.

use std::fmt::Write as _;

use super::{FieldError, Fragment, check_range};
use crate::document::MeasurementContext;

// ── Bitmap ──────────────────────────────────────────────────────────────

/// A packed monochrome bitmap: one bit per pixel, rows padded to whole
/// bytes, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width_px: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wrap packed row data.
    ///
    /// `data.len()` must be a non-zero multiple of the row stride
    /// `ceil(width_px / 8)`.
    pub fn from_packed(width_px: u32, data: Vec<u8>) -> Result<Self, FieldError> {
        let row_bytes = (width_px as usize).div_ceil(8);
        if row_bytes == 0 || data.is_empty() || data.len() % row_bytes != 0 {
            return Err(FieldError::BitmapShape {
                row_bytes,
                len: data.len(),
            });
        }
        Ok(Self { width_px, data })
    }

    /// Width in pixels.
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Height in pixels (rows).
    pub fn height_px(&self) -> usize {
        self.data.len() / self.bytes_per_row()
    }

    /// Row stride in bytes.
    pub fn bytes_per_row(&self) -> usize {
        (self.width_px as usize).div_ceil(8)
    }

    /// Total payload size in bytes.
    pub fn total_bytes(&self) -> usize {
        self.data.len()
    }

    fn hex(&self) -> String {
        let mut out = String::with_capacity(self.data.len() * 2);
        for byte in &self.data {
            let _ = write!(out, "{byte:02X}");
        }
        out
    }
}

fn check_asset_name(name: &str) -> Result<(), FieldError> {
    if name.is_empty() || name.len() > 8 || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FieldError::Invalid {
            what: "graphic name",
            reason: format!("'{name}' is not 1-8 alphanumeric characters"),
        });
    }
    Ok(())
}

fn check_device(device: char) -> Result<(), FieldError> {
    if !matches!(device, 'R' | 'E' | 'B' | 'A') {
        return Err(FieldError::Invalid {
            what: "storage device",
            reason: format!("'{device}' is not one of R, E, B, A"),
        });
    }
    Ok(())
}

// ── Inline graphic ──────────────────────────────────────────────────────

/// An inline graphic field (`^GF` in ASCII-hex form).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicField {
    x: f64,
    y: f64,
    bitmap: Bitmap,
}

impl GraphicField {
    /// Place `bitmap` at `(x, y)` (context units).
    pub fn new(x: f64, y: f64, bitmap: Bitmap) -> Self {
        Self { x, y, bitmap }
    }
}

impl Fragment for GraphicField {
    fn to_zpl(&self, ctx: &MeasurementContext) -> Result<String, FieldError> {
        let x = ctx.dots(self.x);
        let y = ctx.dots(self.y);
        check_range("field x", i64::from(x), 0, 32000)?;
        check_range("field y", i64::from(y), 0, 32000)?;

        let total = self.bitmap.total_bytes();
        Ok(format!(
            "^FO{x},{y}^GFA,{total},{total},{},{}^FS",
            self.bitmap.bytes_per_row(),
            self.bitmap.hex()
        ))
    }
}

// ── Stored graphics ─────────────────────────────────────────────────────

/// Download a graphic into printer storage (`~DG`).
///
/// The stored image can then be recalled onto any number of labels with
/// [`RecallGraphic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadGraphic {
    device: char,
    name: String,
    bitmap: Bitmap,
}

impl DownloadGraphic {
    /// Store `bitmap` as `name` on `device` (`R` RAM, `E`/`B` flash,
    /// `A` option card).
    pub fn new(device: char, name: impl Into<String>, bitmap: Bitmap) -> Self {
        Self {
            device,
            name: name.into(),
            bitmap,
        }
    }
}

impl Fragment for DownloadGraphic {
    fn to_zpl(&self, _ctx: &MeasurementContext) -> Result<String, FieldError> {
        check_device(self.device)?;
        check_asset_name(&self.name)?;
        Ok(format!(
            "~DG{}:{}.GRF,{},{},{}",
            self.device,
            self.name,
            self.bitmap.total_bytes(),
            self.bitmap.bytes_per_row(),
            self.bitmap.hex()
        ))
    }
}

/// Recall a stored graphic onto the label (`^XG`).
#[derive(Debug, Clone, PartialEq)]
pub struct RecallGraphic {
    x: f64,
    y: f64,
    device: char,
    name: String,
    mag_x: u32,
    mag_y: u32,
}

impl RecallGraphic {
    /// Recall `name` from `device` at `(x, y)` (context units).
    pub fn new(x: f64, y: f64, device: char, name: impl Into<String>) -> Self {
        Self {
            x,
            y,
            device,
            name: name.into(),
            mag_x: 1,
            mag_y: 1,
        }
    }

    /// Magnification per axis, 1–10 each.
    #[must_use]
    pub fn magnification(mut self, mag_x: u32, mag_y: u32) -> Self {
        self.mag_x = mag_x;
        self.mag_y = mag_y;
        self
    }
}

impl Fragment for RecallGraphic {
    fn to_zpl(&self, ctx: &MeasurementContext) -> Result<String, FieldError> {
        check_device(self.device)?;
        check_asset_name(&self.name)?;
        let x = ctx.dots(self.x);
        let y = ctx.dots(self.y);
        check_range("field x", i64::from(x), 0, 32000)?;
        check_range("field y", i64::from(y), 0, 32000)?;
        check_range("x magnification", i64::from(self.mag_x), 1, 10)?;
        check_range("y magnification", i64::from(self.mag_y), 1, 10)?;

        Ok(format!(
            "^FO{x},{y}^XG{}:{}.GRF,{},{}^FS",
            self.device, self.name, self.mag_x, self.mag_y
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmap_shape_is_validated() {
        assert!(Bitmap::from_packed(16, vec![0xFF; 4]).is_ok());
        // 3 bytes is not a whole number of 2-byte rows.
        assert!(matches!(
            Bitmap::from_packed(16, vec![0xFF; 3]),
            Err(FieldError::BitmapShape { row_bytes: 2, len: 3 })
        ));
        assert!(Bitmap::from_packed(16, Vec::new()).is_err());
    }

    #[test]
    fn bitmap_geometry() {
        let bmp = Bitmap::from_packed(10, vec![0xAA; 6]).unwrap();
        assert_eq!(bmp.bytes_per_row(), 2);
        assert_eq!(bmp.height_px(), 3);
        assert_eq!(bmp.total_bytes(), 6);
    }

    #[test]
    fn hex_payload_is_uppercase() {
        let bmp = Bitmap::from_packed(8, vec![0x0f, 0xa0]).unwrap();
        assert_eq!(bmp.hex(), "0FA0");
    }
}
