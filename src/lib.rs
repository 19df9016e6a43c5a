//! HD44780 Character LCD Driver over PCF8574 I2C
//!
//! A driver for HD44780-compatible character LCDs wired to a PCF8574-class
//! I2C I/O expander (the common "I2C backpack").
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - 4-bit initialization sequence with the controller's power-on recovery
//! - Cursor addressing by 1-based (column, row) for up to 4 rows
//! - Backlight control that survives unrelated command traffic
//! - `core::fmt::Write` support, plus `ufmt::uWrite` (with `ufmt` feature)
//!
//! ## Pin Mapping
//!
//! The expander byte is fixed: P7-P4 carry D7-D4, P3 the backlight, P2 EN,
//! P1 RW (held low) and P0 RS. See [`command`] for the constants.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use hd44780_i2c::{Builder, Geometry, I2cInterface, Lcd};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let delay = MockDelay;
//! let geometry = match Geometry::new(16, 2) {
//!     Ok(geometry) => geometry,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().write_address(0x4E).geometry(geometry).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut lcd = Lcd::new(I2cInterface::new(i2c), delay, config);
//! let _ = lcd.init();
//! let _ = lcd.print_at(1, 1, "Hello");
//! let _ = lcd.print_at(1, 2, "LCD I2C OK");
//! let _ = lcd.backlight_off();
//! ```
//!
//! ## Limitations
//!
//! The expander offers no way to read the controller back. Bus errors such
//! as a missing acknowledge are returned, but a byte the bus accepted may
//! still not reach the controller, and nothing in software can notice.

#![no_std]

#[cfg(test)]
extern crate alloc;

/// 4-bit nibble/byte protocol over the expander
pub mod bus;
/// HD44780 command definitions and expander pin map
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;

pub use bus::Bus;
pub use command::{DisplayControl, DisplayType, EntryDirection, EntryMode};
pub use config::{
    Builder, Config, DEFAULT_ADDRESS, Geometry, MAX_ADDRESS, MAX_COLUMNS, MAX_ROWS,
    from_write_address,
};
pub use display::{Lcd, row_base};
pub use error::{BuilderError, Error};
pub use interface::{ExpanderInterface, I2cInterface};
