//! 4-bit HD44780 bus over the expander
//!
//! [`Bus`] turns instruction and character bytes into the expander byte
//! stream the HD44780 expects in 4-bit mode. Each nibble costs three
//! expander writes:
//!
//! 1. nibble + RS with EN low (set up data lines)
//! 2. same byte with EN high
//! 3. same byte with EN low again (falling edge latches the nibble)
//!
//! followed by a settle delay. A full byte is the high nibble then the low
//! nibble, so six expander writes. The backlight bit is OR'ed into every
//! write because it shares the expander latch with the data lines.

use embedded_hal::delay::DelayNs;

use crate::command::{BACKLIGHT_BIT, ENABLE_BIT, NIBBLE_MASK, RS_BIT};
use crate::interface::ExpanderInterface;

type BusResult<I> = core::result::Result<(), <I as ExpanderInterface>::Error>;

/// Minimum EN high time in microseconds
pub const ENABLE_PULSE_US: u32 = 1;

/// Wait after each nibble in microseconds
pub const NIBBLE_SETTLE_US: u32 = 50;

/// Expander byte writes emitted per [`Bus::write_byte`]
pub const WRITES_PER_BYTE: usize = 6;

/// Nibble encoder and byte writer
///
/// Owns the transport together with the two pieces of state that are
/// encoded into every expander byte: the backlight bit and the transient
/// register-select bit.
pub struct Bus<I> {
    /// Byte transport to the expander
    interface: I,
    /// Backlight pin state
    backlight: bool,
    /// RS for the transfer in flight
    register_select: bool,
}

impl<I> Bus<I>
where
    I: ExpanderInterface,
{
    /// Create a new bus with register-select cleared
    pub fn new(interface: I, backlight: bool) -> Self {
        Self {
            interface,
            backlight,
            register_select: false,
        }
    }

    /// Write one raw byte to the expander with the backlight bit applied
    pub fn expander_write(&mut self, value: u8) -> BusResult<I> {
        let bits = if self.backlight { BACKLIGHT_BIT } else { 0 };
        self.interface.write_byte(value | bits)
    }

    /// Clock the top four bits of `nibble` into the controller
    ///
    /// Register-select comes from the last [`Bus::write_byte`] (or
    /// [`Bus::set_register_select`]).
    pub fn write_nibble<D: DelayNs>(&mut self, nibble: u8, delay: &mut D) -> BusResult<I> {
        let rs = if self.register_select { RS_BIT } else { 0 };
        let data = (nibble & NIBBLE_MASK) | rs;

        self.expander_write(data)?;
        self.expander_write(data | ENABLE_BIT)?;
        delay.delay_us(ENABLE_PULSE_US);
        self.expander_write(data & !ENABLE_BIT)?;
        delay.delay_us(NIBBLE_SETTLE_US);

        Ok(())
    }

    /// Send a full byte as high nibble then low nibble
    ///
    /// # Arguments
    ///
    /// * `value` - Instruction or character code
    /// * `is_data` - RS level: `true` for character data, `false` for instructions
    /// * `delay` - Delay implementation
    pub fn write_byte<D: DelayNs>(
        &mut self,
        value: u8,
        is_data: bool,
        delay: &mut D,
    ) -> BusResult<I> {
        self.register_select = is_data;
        self.write_nibble(value & NIBBLE_MASK, delay)?;
        self.write_nibble((value << 4) & NIBBLE_MASK, delay)
    }

    /// Send an instruction byte (RS low)
    pub fn write_command<D: DelayNs>(&mut self, command: u8, delay: &mut D) -> BusResult<I> {
        self.write_byte(command, false, delay)
    }

    /// Send a character code (RS high)
    pub fn write_data<D: DelayNs>(&mut self, code: u8, delay: &mut D) -> BusResult<I> {
        self.write_byte(code, true, delay)
    }

    /// Push the current backlight state to the pin
    ///
    /// Writes nibble 0 with EN low, which the controller ignores.
    pub fn refresh(&mut self) -> BusResult<I> {
        self.expander_write(0)
    }

    /// Backlight state encoded into subsequent writes
    pub fn backlight(&self) -> bool {
        self.backlight
    }

    /// Change the backlight bit without writing
    pub fn set_backlight(&mut self, on: bool) {
        self.backlight = on;
    }

    /// RS level of the last transfer
    pub fn register_select(&self) -> bool {
        self.register_select
    }

    /// Force the RS level used by the next bare [`Bus::write_nibble`]
    pub fn set_register_select(&mut self, is_data: bool) {
        self.register_select = is_data;
    }

    /// Access the underlying interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Mutably access the underlying interface
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Release the underlying interface
    pub fn release(self) -> I {
        self.interface
    }
}
