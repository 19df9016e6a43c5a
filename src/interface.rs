//! Hardware interface abstraction
//!
//! This module provides the [`ExpanderInterface`] trait and the [`I2cInterface`]
//! struct for pushing single bytes to a PCF8574-class I/O expander.
//!
//! ## Hardware Requirements
//!
//! The expander requires:
//! - I2C bus (SDA + SCL), already configured for its clock rate
//! - The strap-configured 7-bit address (commonly `0x27` or `0x3F`)
//!
//! Every byte written lands on the eight expander pins at once. There is no
//! read-back path, so a successful write only means the bus accepted the
//! byte. Whether the LCD controller latched it cannot be observed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use hd44780_i2c::{ExpanderInterface, I2cInterface};
//! # use core::convert::Infallible;
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
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Backlight on, all other pins low
//! let _ = interface.write_byte(0x08);
//!
//! // Retarget a second backpack strapped to 0x3F
//! interface.set_address(0x3F);
//! let _ = interface.write_byte(0x08);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

use crate::config::DEFAULT_ADDRESS;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the single-byte transport to the I/O expander
///
/// This trait abstracts over the bus so the [`Lcd`](crate::display::Lcd)
/// can be retargeted, or driven by a recorder in tests.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. If the expander
/// sits behind a mux or a shared-bus wrapper, implement this trait on your
/// own type.
pub trait ExpanderInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write one byte to the expander output latch
    ///
    /// The implementation must issue one complete write transaction
    /// (start, address, one data byte, stop).
    ///
    /// # Errors
    ///
    /// Returns whatever the bus reports, e.g. a missing acknowledge. `Ok`
    /// means only that the bus accepted the byte.
    fn write_byte(&mut self, value: u8) -> InterfaceResult<(), Self::Error>;

    /// Current 7-bit target address
    fn address(&self) -> u8;

    /// Change the 7-bit target address
    ///
    /// Takes effect on the next write. Must not generate bus traffic.
    fn set_address(&mut self, address: u8);
}

/// Expander interface over an embedded-hal v1.0 I2C bus
///
/// ## Type Parameters
///
/// * `I2C` - bus implementing [`I2c`]
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus for communication
    i2c: I2C,
    /// 7-bit expander address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface targeting [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a new interface targeting `address` (7-bit)
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> ExpanderInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_byte(&mut self, value: u8) -> InterfaceResult<(), Self::Error> {
        log::trace!("pcf8574 0x{:02x} <- 0x{:02x}", self.address, value);
        self.i2c.write(self.address, &[value])
    }

    fn address(&self) -> u8 {
        self.address
    }

    fn set_address(&mut self, address: u8) {
        self.address = address;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn test_default_address() {
        let expectations: [I2cTransaction; 0] = [];
        let mut i2c = I2cMock::new(&expectations);
        let interface = I2cInterface::new(i2c.clone());
        assert_eq!(interface.address(), 0x27);
        i2c.done();
    }

    #[test]
    fn test_write_byte_is_single_byte_write() {
        let expectations = [
            I2cTransaction::write(0x27, alloc::vec![0x0C]),
            I2cTransaction::write(0x27, alloc::vec![0x08]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone());

        assert!(interface.write_byte(0x0C).is_ok());
        assert!(interface.write_byte(0x08).is_ok());
        i2c.done();
    }

    #[test]
    fn test_set_address_retargets_next_write() {
        let expectations = [
            I2cTransaction::write(0x27, alloc::vec![0x00]),
            I2cTransaction::write(0x3F, alloc::vec![0x00]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone());

        assert!(interface.write_byte(0x00).is_ok());
        interface.set_address(0x3F);
        assert_eq!(interface.address(), 0x3F);
        assert!(interface.write_byte(0x00).is_ok());
        i2c.done();
    }

    #[test]
    fn test_nack_is_propagated() {
        let expectations = [I2cTransaction::write(0x27, alloc::vec![0x08]).with_error(
            ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address),
        )];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone());

        let result = interface.write_byte(0x08);
        assert!(matches!(result, Err(ErrorKind::NoAcknowledge(_))));
        i2c.done();
    }
}
