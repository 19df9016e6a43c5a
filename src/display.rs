//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::bus::Bus;
use crate::command::{
    BLINK_CURSOR_ON, CLEAR_DISPLAY, CURSOR_OFF, DisplayControl, ENTRY_INCREMENT, ENTRY_MODE_SET,
    EntryMode, FOURTH_ROW, INIT_4BIT_NIBBLE, INIT_8BIT_NIBBLE, MOVE_CURSOR_LEFT,
    MOVE_CURSOR_RIGHT, RETURN_HOME, ROW_BASES, SHIFT_LEFT, SHIFT_RIGHT, TURN_OFF, TURN_ON,
    UNDERLINE_ON,
};
use crate::config::{Config, Geometry, MAX_ADDRESS};
use crate::error::Error;
use crate::interface::ExpanderInterface;

type LcdResult<I> = core::result::Result<(), Error<I>>;

/// Wait after the pins-idle write for the controller's power-on reset
pub const POWER_ON_DELAY_MS: u32 = 40;

/// Wait after each initialization step
pub const INIT_STEP_DELAY_MS: u32 = 5;

/// Wait after clear and home
pub const CLEAR_DELAY_MS: u32 = 2;

/// DDRAM base for a 1-based row
///
/// Rows 1-4 map to `0x80`, `0xC0`, `0x94`, `0xD4`. Any other value falls back
/// to the row 4 base instead of being rejected.
pub fn row_base(row: u8) -> u8 {
    match row {
        1..=4 => ROW_BASES[usize::from(row - 1)],
        _ => {
            log::warn!("row {} out of range, using row 4", row);
            FOURTH_ROW
        }
    }
}

/// Character LCD driver for an HD44780 behind a PCF8574 expander
///
/// One instance owns one expander and the delay source. The driver keeps no
/// shadow of the controller's cursor or mode flags; it only tracks what must
/// be encoded into every expander byte (backlight and register-select).
///
/// The driver does no locking. If the bus is shared, serialize access around
/// each call, since a byte transfer is six separate bus writes.
pub struct Lcd<I, D>
where
    I: ExpanderInterface,
    D: DelayNs,
{
    /// 4-bit bus over the expander
    bus: Bus<I>,
    /// Blocking delay source
    delay: D,
    /// Display configuration
    config: Config,
}

impl<I, D> Lcd<I, D>
where
    I: ExpanderInterface,
    D: DelayNs,
{
    /// Create a new Lcd instance
    ///
    /// Applies the configured address to the interface but generates no bus
    /// traffic. Call [`Lcd::init`] before anything else.
    pub fn new(interface: I, delay: D, config: Config) -> Self {
        let mut bus = Bus::new(interface, config.backlight);
        bus.interface_mut().set_address(config.address);
        Self { bus, delay, config }
    }

    /// Reset driver state and run the 4-bit initialization sequence
    ///
    /// Restores the configured address and backlight, then:
    ///
    /// 1. pins idle, wait 40ms for power-on reset
    /// 2. nibble `0x3` three times, 5ms apart (forces 8-bit mode)
    /// 3. nibble `0x2` (switches to 4-bit mode)
    /// 4. function set, display on, clear, entry mode increment, cursor off
    ///
    /// Every step after the first is followed by a 5ms wait. The order and the
    /// minimum waits are required by the controller and must not be shortened.
    pub fn init(&mut self) -> LcdResult<I> {
        log::debug!(
            "init hd44780 at 0x{:02x}, {}x{}, {:?}",
            self.config.address,
            self.config.geometry.columns(),
            self.config.geometry.rows(),
            self.config.display_type
        );

        self.bus.interface_mut().set_address(self.config.address);
        self.bus.set_backlight(self.config.backlight);
        self.bus.set_register_select(false);

        self.bus.expander_write(0).map_err(Error::Interface)?;
        self.delay.delay_ms(POWER_ON_DELAY_MS);

        for _ in 0..3 {
            self.write_nibble(INIT_8BIT_NIBBLE)?;
            self.delay.delay_ms(INIT_STEP_DELAY_MS);
        }

        self.write_nibble(INIT_4BIT_NIBBLE)?;
        self.delay.delay_ms(INIT_STEP_DELAY_MS);

        let function_set = self.config.display_type.function_set();
        for command in [
            function_set,
            TURN_ON,
            CLEAR_DISPLAY,
            ENTRY_MODE_SET | ENTRY_INCREMENT,
            // Same byte as TURN_ON, sent again after entry mode
            CURSOR_OFF,
        ] {
            self.command(command)?;
            self.delay.delay_ms(INIT_STEP_DELAY_MS);
        }

        Ok(())
    }

    /// Override the expander address for subsequent writes
    ///
    /// Generates no bus traffic. [`Lcd::init`] restores the configured address.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAddress` if `address` does not fit in 7 bits.
    pub fn set_address(&mut self, address: u8) -> LcdResult<I> {
        if address > MAX_ADDRESS {
            return Err(Error::InvalidAddress { address });
        }
        log::debug!("expander address -> 0x{:02x}", address);
        self.bus.interface_mut().set_address(address);
        Ok(())
    }

    /// Current expander address
    pub fn address(&self) -> u8 {
        self.bus.interface().address()
    }

    /// Clear the display and return the cursor home
    pub fn clear(&mut self) -> LcdResult<I> {
        self.command(CLEAR_DISPLAY)?;
        self.delay.delay_ms(CLEAR_DELAY_MS);
        Ok(())
    }

    /// Return the cursor to row 1, column 1 and undo display shifts
    pub fn home(&mut self) -> LcdResult<I> {
        self.command(RETURN_HOME)?;
        self.delay.delay_ms(CLEAR_DELAY_MS);
        Ok(())
    }

    /// Move the cursor to a 1-based (column, row)
    ///
    /// Permissive: a column of 0 is treated as 1, and any row outside 1-4
    /// lands on row 4. Columns past the panel width are not checked. Use
    /// [`Lcd::goto_checked`] to reject such positions instead.
    pub fn goto(&mut self, col: u8, row: u8) -> LcdResult<I> {
        let base = row_base(row);
        let col = col.max(1);
        self.command(base.wrapping_add(col - 1))
    }

    /// Move the cursor to a 1-based (column, row) inside the configured geometry
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPosition` without touching the bus if the
    /// position is outside the configured columns and rows.
    pub fn goto_checked(&mut self, col: u8, row: u8) -> LcdResult<I> {
        if !self.config.geometry.contains(col, row) {
            return Err(Error::InvalidPosition { col, row });
        }
        self.goto(col, row)
    }

    /// Write one character code at the cursor
    ///
    /// The controller advances its own cursor according to the entry mode.
    pub fn put_char(&mut self, code: u8) -> LcdResult<I> {
        self.bus
            .write_data(code, &mut self.delay)
            .map_err(Error::Interface)
    }

    /// Write raw character codes in order
    ///
    /// No wrapping or truncation: text past the last column goes to DDRAM
    /// that is not visible (or onto another row, depending on the panel).
    pub fn print_bytes(&mut self, codes: &[u8]) -> LcdResult<I> {
        for &code in codes {
            self.put_char(code)?;
        }
        Ok(())
    }

    /// Write a string at the cursor
    ///
    /// Sends the UTF-8 bytes unchanged. The HD44780 ROM matches ASCII for
    /// `0x20..=0x7D`; anything else shows whatever the ROM has at that code.
    pub fn print(&mut self, text: &str) -> LcdResult<I> {
        self.print_bytes(text.as_bytes())
    }

    /// Move to a 1-based (column, row) and write a string
    ///
    /// Uses the permissive [`Lcd::goto`].
    pub fn print_at(&mut self, col: u8, row: u8, text: &str) -> LcdResult<I> {
        self.goto(col, row)?;
        self.print(text)
    }

    /// Turn the backlight on
    pub fn backlight_on(&mut self) -> LcdResult<I> {
        self.set_backlight(true)
    }

    /// Turn the backlight off
    pub fn backlight_off(&mut self) -> LcdResult<I> {
        self.set_backlight(false)
    }

    /// Set the backlight and push it to the pin immediately
    ///
    /// Writes nibble 0 with EN low, so controller state is untouched.
    pub fn set_backlight(&mut self, on: bool) -> LcdResult<I> {
        log::debug!("backlight {}", if on { "on" } else { "off" });
        self.bus.set_backlight(on);
        self.bus.refresh().map_err(Error::Interface)
    }

    /// Current backlight state
    pub fn backlight(&self) -> bool {
        self.bus.backlight()
    }

    /// Send the full display-control byte
    ///
    /// Flags are not merged with earlier calls.
    pub fn set_display_control(&mut self, control: DisplayControl) -> LcdResult<I> {
        self.command(control.bits())
    }

    /// Send the full entry-mode byte
    pub fn set_entry_mode(&mut self, mode: EntryMode) -> LcdResult<I> {
        self.command(mode.bits())
    }

    /// Display on, cursor hidden
    pub fn display_on(&mut self) -> LcdResult<I> {
        self.command(TURN_ON)
    }

    /// Display off (DDRAM is kept)
    pub fn display_off(&mut self) -> LcdResult<I> {
        self.command(TURN_OFF)
    }

    /// Hide the cursor
    pub fn cursor_off(&mut self) -> LcdResult<I> {
        self.command(CURSOR_OFF)
    }

    /// Show the underline cursor
    pub fn underline_cursor_on(&mut self) -> LcdResult<I> {
        self.command(UNDERLINE_ON)
    }

    /// Show the underline cursor with a blinking block
    pub fn blink_cursor_on(&mut self) -> LcdResult<I> {
        self.command(BLINK_CURSOR_ON)
    }

    /// Move the cursor one position left
    pub fn move_cursor_left(&mut self) -> LcdResult<I> {
        self.command(MOVE_CURSOR_LEFT)
    }

    /// Move the cursor one position right
    pub fn move_cursor_right(&mut self) -> LcdResult<I> {
        self.command(MOVE_CURSOR_RIGHT)
    }

    /// Shift the whole display one position left
    pub fn shift_display_left(&mut self) -> LcdResult<I> {
        self.command(SHIFT_LEFT)
    }

    /// Shift the whole display one position right
    pub fn shift_display_right(&mut self) -> LcdResult<I> {
        self.command(SHIFT_RIGHT)
    }

    /// Get the configured geometry
    pub fn geometry(&self) -> &Geometry {
        &self.config.geometry
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the interface and delay
    pub fn release(self) -> (I, D) {
        (self.bus.release(), self.delay)
    }

    /// Send an instruction byte
    fn command(&mut self, command: u8) -> LcdResult<I> {
        self.bus
            .write_command(command, &mut self.delay)
            .map_err(Error::Interface)
    }

    /// Send a bare nibble (initialization only)
    fn write_nibble(&mut self, nibble: u8) -> LcdResult<I> {
        self.bus
            .write_nibble(nibble, &mut self.delay)
            .map_err(Error::Interface)
    }
}

impl<I, D> core::fmt::Write for Lcd<I, D>
where
    I: ExpanderInterface,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.print(s).map_err(|_| core::fmt::Error)
    }
}

#[cfg(feature = "ufmt")]
impl<I, D> ufmt::uWrite for Lcd<I, D>
where
    I: ExpanderInterface,
    D: DelayNs,
{
    type Error = Error<I>;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.print(s)
    }
}
