//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//!
//! ## What Cannot Be Reported
//!
//! The expander is write-only from the LCD's point of view. A wrong address
//! on a bus that still acknowledges, a wrong geometry or a wrong
//! [`DisplayType`](crate::DisplayType) all produce garbled or blank output
//! with no error. A lost byte leaves the controller out of step with the
//! driver until the next [`Lcd::init`](crate::Lcd::init). Nothing is retried.
//!
//! ## Example
//!
//! ```
//! use hd44780_i2c::{Builder, BuilderError, Geometry};
//!
//! // Address does not fit in 7 bits
//! let result = Builder::new().address(0x4E << 1).build();
//! assert!(matches!(result, Err(BuilderError::InvalidAddress { .. })));
//!
//! // Five rows are not addressable
//! let result = Geometry::new(20, 5);
//! assert!(result.is_err());
//! ```

use crate::interface::ExpanderInterface;

/// Maximum rows addressable through the fixed DDRAM row bases
pub const MAX_ROWS: u8 = 4;

/// Maximum characters per row supported by a single HD44780
pub const MAX_COLUMNS: u8 = 40;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
/// `Debug` only needs the bus error to be `Debug`, not the interface itself.
pub enum Error<I: ExpanderInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`ExpanderInterface`]
    /// implementation, e.g. a missing acknowledge.
    Interface(I::Error),
    /// Address does not fit in 7 bits
    InvalidAddress {
        /// Address requested
        address: u8,
    },
    /// Position outside the configured geometry
    ///
    /// Only returned by [`Lcd::goto_checked`](crate::Lcd::goto_checked).
    InvalidPosition {
        /// 1-based column requested
        col: u8,
        /// 1-based row requested
        row: u8,
    },
}

impl<I: ExpanderInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::InvalidAddress { address } => {
                write!(f, "Invalid I2C address: 0x{address:02x} (max 0x7f)")
            }
            Self::InvalidPosition { col, row } => {
                write!(f, "Invalid position: column {col}, row {row}")
            }
        }
    }
}

impl<I: ExpanderInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Self::InvalidAddress { address } => f
                .debug_struct("InvalidAddress")
                .field("address", address)
                .finish(),
            Self::InvalidPosition { col, row } => f
                .debug_struct("InvalidPosition")
                .field("col", col)
                .field("row", row)
                .finish(),
        }
    }
}

impl<I: ExpanderInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Invalid geometry provided
    ///
    /// See [`Geometry::new()`](crate::config::Geometry::new) for constraints.
    InvalidGeometry {
        /// Characters per row requested
        columns: u8,
        /// Number of rows requested
        rows: u8,
    },
    /// Address does not fit in 7 bits
    ///
    /// Pass 7-bit addresses to [`Builder::address()`](crate::config::Builder::address)
    /// and 8-bit write addresses to
    /// [`Builder::write_address()`](crate::config::Builder::write_address).
    InvalidAddress {
        /// Address requested
        address: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidGeometry { columns, rows } => write!(
                f,
                "Invalid geometry {columns}x{rows} (columns 1..={MAX_COLUMNS}, rows 1..={MAX_ROWS})"
            ),
            Self::InvalidAddress { address } => {
                write!(f, "Invalid I2C address: 0x{address:02x} (max 0x7f)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
