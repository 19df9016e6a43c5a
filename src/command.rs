//! HD44780 command definitions and PCF8574 pin map
//!
//! This module defines the instruction bytes understood by the HD44780
//! controller and the bit layout of the PCF8574 expander byte that carries
//! them. Instructions are sent as two 4-bit transfers with RS low; character
//! codes are sent the same way with RS high.
//!
//! ## Expander Byte Layout
//!
//! | Bit | Expander pin | LCD signal |
//! |-----|--------------|------------|
//! | 7-4 | P7-P4        | D7-D4      |
//! | 3   | P3           | Backlight  |
//! | 2   | P2           | EN         |
//! | 1   | P1           | RW         |
//! | 0   | P0           | RS         |
//!
//! RW is never driven high: the driver is write-only.
//!
//! ## Example
//!
//! ```
//! use hd44780_i2c::command::{DisplayControl, EntryMode, DISPLAY_CONTROL, ENTRY_MODE_SET};
//!
//! assert_eq!(DisplayControl::default().bits(), DISPLAY_CONTROL | 0x04);
//! assert_eq!(EntryMode::default().bits(), ENTRY_MODE_SET | 0x02);
//! ```

// Expander pin map

/// Register-select bit (P0). High selects the data register.
pub const RS_BIT: u8 = 0x01;

/// Read/write bit (P1). Always low.
pub const RW_BIT: u8 = 0x02;

/// Enable strobe bit (P2). The falling edge latches the nibble.
pub const ENABLE_BIT: u8 = 0x04;

/// Backlight bit (P3)
pub const BACKLIGHT_BIT: u8 = 0x08;

/// Mask for the data nibble (P7-P4 wired to D7-D4)
pub const NIBBLE_MASK: u8 = 0xF0;

// Basic instructions

/// Clear display command (0x01)
///
/// Fills DDRAM with spaces and returns the cursor to address 0.
/// Needs at least 2ms to complete.
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Return home command (0x02)
///
/// Returns the cursor to address 0 and undoes any display shift.
/// Needs at least 2ms to complete.
pub const RETURN_HOME: u8 = 0x02;

/// Entry mode set command (0x04)
///
/// Combine with [`ENTRY_INCREMENT`] and [`ENTRY_SHIFT`].
pub const ENTRY_MODE_SET: u8 = 0x04;

/// Display on/off control command (0x08)
///
/// Combine with [`DISPLAY_ON`], [`CURSOR_ON`] and [`BLINK_ON`].
pub const DISPLAY_CONTROL: u8 = 0x08;

/// Cursor or display shift command (0x10)
pub const CURSOR_SHIFT: u8 = 0x10;

/// Function set command (0x20)
///
/// Data length, number of lines and font. In 4-bit mode DL stays low.
pub const FUNCTION_SET: u8 = 0x20;

/// Set DDRAM address command (0x80)
///
/// The low 7 bits carry the address.
pub const SET_DDRAM_ADDR: u8 = 0x80;

// Entry mode flags

/// Cursor moves right after each character
pub const ENTRY_INCREMENT: u8 = 0x02;

/// Display shifts with each character
pub const ENTRY_SHIFT: u8 = 0x01;

// Display control flags

/// Display on
pub const DISPLAY_ON: u8 = 0x04;

/// Underline cursor visible
pub const CURSOR_ON: u8 = 0x02;

/// Block cursor blinks
pub const BLINK_ON: u8 = 0x01;

// Cursor/display shift flags

/// Shift the display instead of moving the cursor
pub const SHIFT_DISPLAY: u8 = 0x08;

/// Move or shift to the right
pub const SHIFT_TO_RIGHT: u8 = 0x04;

// Composite commands used by the driver

/// Display on, cursor hidden (0x0C)
pub const TURN_ON: u8 = DISPLAY_CONTROL | DISPLAY_ON;

/// Display off (0x08)
pub const TURN_OFF: u8 = DISPLAY_CONTROL;

/// Cursor hidden, display left on (0x0C)
pub const CURSOR_OFF: u8 = DISPLAY_CONTROL | DISPLAY_ON;

/// Underline cursor visible (0x0E)
pub const UNDERLINE_ON: u8 = DISPLAY_CONTROL | DISPLAY_ON | CURSOR_ON;

/// Underline and blinking block cursor (0x0F)
pub const BLINK_CURSOR_ON: u8 = DISPLAY_CONTROL | DISPLAY_ON | CURSOR_ON | BLINK_ON;

/// Move cursor one position left (0x10)
pub const MOVE_CURSOR_LEFT: u8 = CURSOR_SHIFT;

/// Move cursor one position right (0x14)
pub const MOVE_CURSOR_RIGHT: u8 = CURSOR_SHIFT | SHIFT_TO_RIGHT;

/// Shift the whole display left (0x18)
pub const SHIFT_LEFT: u8 = CURSOR_SHIFT | SHIFT_DISPLAY;

/// Shift the whole display right (0x1E)
///
/// Bit 1 is set as in common backpack firmware; the two low bits are
/// don't-care for the controller.
pub const SHIFT_RIGHT: u8 = CURSOR_SHIFT | SHIFT_DISPLAY | SHIFT_TO_RIGHT | 0x02;

// Initialization nibbles

/// High nibble pulsed three times to force 8-bit mode
pub const INIT_8BIT_NIBBLE: u8 = 0x30;

/// High nibble that switches the controller to 4-bit mode
pub const INIT_4BIT_NIBBLE: u8 = 0x20;

// DDRAM row base addresses, already OR'ed with SET_DDRAM_ADDR.
// Rows 3 and 4 continue rows 1 and 2 after 20 characters.

/// Row 1 base (0x80)
pub const FIRST_ROW: u8 = SET_DDRAM_ADDR;

/// Row 2 base (0xC0)
pub const SECOND_ROW: u8 = SET_DDRAM_ADDR | 0x40;

/// Row 3 base (0x94)
pub const THIRD_ROW: u8 = SET_DDRAM_ADDR | 0x14;

/// Row 4 base (0xD4)
pub const FOURTH_ROW: u8 = SET_DDRAM_ADDR | 0x54;

/// Row bases indexed by `row - 1`
pub const ROW_BASES: [u8; 4] = [FIRST_ROW, SECOND_ROW, THIRD_ROW, FOURTH_ROW];

/// Controller line/font selector used by the function-set command
///
/// The discriminant is the selector value; the function-set byte is
/// `FUNCTION_SET | (selector << 2)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(u8)]
pub enum DisplayType {
    /// One line, 5x8 dot font
    OneLine5x8 = 0,
    /// One line, 5x10 dot font
    OneLine5x10 = 1,
    /// Two (or four) lines, 5x8 dot font
    #[default]
    TwoLine = 2,
}

impl DisplayType {
    /// Function-set command byte for this display type
    pub fn function_set(self) -> u8 {
        FUNCTION_SET | ((self as u8) << 2)
    }
}

/// Cursor direction after a character write
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum EntryDirection {
    /// Address counter increments (text flows left to right)
    #[default]
    Increment,
    /// Address counter decrements
    Decrement,
}

/// Entry mode flags
///
/// Not cached by the driver: every [`crate::Lcd::set_entry_mode`] call
/// sends the complete byte built from these fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EntryMode {
    /// Cursor direction
    pub direction: EntryDirection,
    /// Shift the display instead of moving the cursor
    pub shift: bool,
}

impl EntryMode {
    /// Entry-mode-set command byte
    pub fn bits(self) -> u8 {
        let mut bits = ENTRY_MODE_SET;
        if self.direction == EntryDirection::Increment {
            bits |= ENTRY_INCREMENT;
        }
        if self.shift {
            bits |= ENTRY_SHIFT;
        }
        bits
    }
}

/// Display on/off control flags
///
/// Defaults to display on with the cursor hidden, matching [`TURN_ON`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayControl {
    /// Display visible
    pub display: bool,
    /// Underline cursor visible
    pub cursor: bool,
    /// Block cursor blinking
    pub blink: bool,
}

impl Default for DisplayControl {
    fn default() -> Self {
        Self {
            display: true,
            cursor: false,
            blink: false,
        }
    }
}

impl DisplayControl {
    /// Display-control command byte
    pub fn bits(self) -> u8 {
        let mut bits = DISPLAY_CONTROL;
        if self.display {
            bits |= DISPLAY_ON;
        }
        if self.cursor {
            bits |= CURSOR_ON;
        }
        if self.blink {
            bits |= BLINK_ON;
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_set_per_display_type() {
        assert_eq!(DisplayType::OneLine5x8.function_set(), 0x20);
        assert_eq!(DisplayType::OneLine5x10.function_set(), 0x24);
        assert_eq!(DisplayType::TwoLine.function_set(), 0x28);
    }

    #[test]
    fn test_entry_mode_bits() {
        assert_eq!(EntryMode::default().bits(), 0x06);
        let mode = EntryMode {
            direction: EntryDirection::Decrement,
            shift: true,
        };
        assert_eq!(mode.bits(), 0x05);
    }

    #[test]
    fn test_display_control_matches_named_commands() {
        assert_eq!(DisplayControl::default().bits(), TURN_ON);
        let all = DisplayControl {
            display: true,
            cursor: true,
            blink: true,
        };
        assert_eq!(all.bits(), BLINK_CURSOR_ON);
        let off = DisplayControl {
            display: false,
            cursor: false,
            blink: false,
        };
        assert_eq!(off.bits(), TURN_OFF);
    }

    #[test]
    fn test_row_bases() {
        assert_eq!(ROW_BASES, [0x80, 0xC0, 0x94, 0xD4]);
    }

    #[test]
    fn test_composite_commands() {
        assert_eq!(UNDERLINE_ON, 0x0E);
        assert_eq!(BLINK_CURSOR_ON, 0x0F);
        assert_eq!(MOVE_CURSOR_LEFT, 0x10);
        assert_eq!(MOVE_CURSOR_RIGHT, 0x14);
        assert_eq!(SHIFT_LEFT, 0x18);
        assert_eq!(SHIFT_RIGHT, 0x1E);
    }
}
