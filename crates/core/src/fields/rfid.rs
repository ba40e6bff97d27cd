//! RFID transponder field builders (`^RF`).

use std::fmt;

use super::{FieldError, Fragment, check_range, push_field_data};
use crate::document::MeasurementContext;

/// Transponder memory bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryBank {
    /// EPC bank.
    Epc,
    /// Tag-identifier bank. Factory-programmed and not writable.
    Tid,
    /// User memory bank.
    User,
}

impl MemoryBank {
    fn code(self) -> char {
        match self {
            MemoryBank::Epc => 'E',
            MemoryBank::Tid => 'T',
            MemoryBank::User => 'U',
        }
    }

    /// True when the bank cannot be written.
    pub fn is_read_only(self) -> bool {
        matches!(self, MemoryBank::Tid)
    }
}

impl fmt::Display for MemoryBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryBank::Epc => write!(f, "EPC"),
            MemoryBank::Tid => write!(f, "TID"),
            MemoryBank::User => write!(f, "USER"),
        }
    }
}

/// Data format for RFID reads and writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RfidFormat {
    /// ASCII data.
    Ascii,
    /// Hexadecimal data (the default).
    #[default]
    Hex,
    /// EPC-encoded data.
    Epc,
}

impl RfidFormat {
    fn code(self) -> char {
        match self {
            RfidFormat::Ascii => 'A',
            RfidFormat::Hex => 'H',
            RfidFormat::Epc => 'E',
        }
    }
}

// ── Write ───────────────────────────────────────────────────────────────

/// Write data to a transponder memory bank (`^RFW`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RfidWrite {
    bank: MemoryBank,
    format: RfidFormat,
    data: String,
    block: u32,
}

impl RfidWrite {
    /// Write `data` (hex by default) to `bank`.
    pub fn new(bank: MemoryBank, data: impl Into<String>) -> Self {
        Self {
            bank,
            format: RfidFormat::default(),
            data: data.into(),
            block: 0,
        }
    }

    /// Data format.
    #[must_use]
    pub fn format(mut self, format: RfidFormat) -> Self {
        self.format = format;
        self
    }

    /// Starting block within the bank.
    #[must_use]
    pub fn block(mut self, block: u32) -> Self {
        self.block = block;
        self
    }
}

impl Fragment for RfidWrite {
    fn to_zpl(&self, _ctx: &MeasurementContext) -> Result<String, FieldError> {
        // The TID bank is factory-programmed; reject the write before any
        // fragment text exists.
        if self.bank.is_read_only() {
            return Err(FieldError::ReadOnlyBank { bank: self.bank });
        }
        if self.data.is_empty() {
            return Err(FieldError::Invalid {
                what: "RFID data",
                reason: "empty".into(),
            });
        }
        if self.format == RfidFormat::Hex
            && (self.data.len() % 2 != 0 || !self.data.chars().all(|c| c.is_ascii_hexdigit()))
        {
            return Err(FieldError::Invalid {
                what: "RFID data",
                reason: "hex format requires an even number of hex digits".into(),
            });
        }
        check_range("starting block", i64::from(self.block), 0, 65535)?;

        let mut out = format!(
            "^RFW,{},{},,{}",
            self.format.code(),
            self.block,
            self.bank.code()
        );
        push_field_data(&mut out, &self.data);
        Ok(out)
    }
}

// ── Read ────────────────────────────────────────────────────────────────

/// Read a memory bank during printing (`^RFR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RfidRead {
    bank: MemoryBank,
    format: RfidFormat,
    block: u32,
}

impl RfidRead {
    /// Read `bank` (hex by default).
    pub fn new(bank: MemoryBank) -> Self {
        Self {
            bank,
            format: RfidFormat::default(),
            block: 0,
        }
    }

    /// Data format.
    #[must_use]
    pub fn format(mut self, format: RfidFormat) -> Self {
        self.format = format;
        self
    }

    /// Starting block within the bank.
    #[must_use]
    pub fn block(mut self, block: u32) -> Self {
        self.block = block;
        self
    }
}

impl Fragment for RfidRead {
    fn to_zpl(&self, _ctx: &MeasurementContext) -> Result<String, FieldError> {
        check_range("starting block", i64::from(self.block), 0, 65535)?;
        Ok(format!(
            "^RFR,{},{},,{}^FS",
            self.format.code(),
            self.block,
            self.bank.code()
        ))
    }
}
