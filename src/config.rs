//! Display configuration types and builder

use crate::command::DisplayType;
pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Default 7-bit expander address (PCF8574 with A0-A2 strapped high)
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Default column count
pub const DEFAULT_COLUMNS: u8 = 16;

/// Default row count
pub const DEFAULT_ROWS: u8 = 2;

/// Highest valid 7-bit I2C address
pub const MAX_ADDRESS: u8 = 0x7F;

/// Convert an 8-bit write address (e.g. `0x4E`) to its 7-bit form (`0x27`)
pub const fn from_write_address(address: u8) -> u8 {
    address >> 1
}

/// Character grid of the panel
///
/// Bounds [`crate::Lcd::goto_checked`]. The permissive
/// [`crate::Lcd::goto`] does not consult it. Only constructible through
/// [`Geometry::new`] (or `Default`), so rows stay within 1..=4.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Characters per row
    columns: u8,
    /// Number of rows
    rows: u8,
}

impl Geometry {
    /// Create a new geometry with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidGeometry` if:
    /// - columns == 0 or columns > MAX_COLUMNS
    /// - rows == 0 or rows > MAX_ROWS
    pub fn new(columns: u8, rows: u8) -> Result<Self, BuilderError> {
        if columns == 0 || columns > MAX_COLUMNS {
            return Err(BuilderError::InvalidGeometry { columns, rows });
        }
        if rows == 0 || rows > MAX_ROWS {
            return Err(BuilderError::InvalidGeometry { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Characters per row
    pub fn columns(&self) -> u8 {
        self.columns
    }

    /// Number of rows
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Whether a 1-based (column, row) position lies on the panel
    pub fn contains(&self, col: u8, row: u8) -> bool {
        (1..=self.columns).contains(&col) && (1..=self.rows).contains(&row)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

/// Display configuration
///
/// Holds the values [`crate::Lcd::init`] restores. Use `Builder` to create a
/// Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 7-bit expander address
    pub address: u8,
    /// Character grid
    pub geometry: Geometry,
    /// Line/font selector for the function-set command
    pub display_type: DisplayType,
    /// Backlight state after init
    pub backlight: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            geometry: Geometry::default(),
            display_type: DisplayType::default(),
            backlight: true,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use hd44780_i2c::{Builder, DisplayType, Geometry};
///
/// let geometry = match Geometry::new(20, 4) {
///     Ok(geometry) => geometry,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .write_address(0x4E)
///     .geometry(geometry)
///     .display_type(DisplayType::TwoLine)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.address, 0x27);
/// ```
#[must_use]
pub struct Builder {
    /// 7-bit expander address
    address: u8,
    /// Character grid
    geometry: Geometry,
    /// Line/font selector
    display_type: DisplayType,
    /// Backlight state after init
    backlight: bool,
}

impl Default for Builder {
    fn default() -> Self {
        let config = Config::default();
        Self {
            address: config.address,
            geometry: config.geometry,
            display_type: config.display_type,
            backlight: config.backlight,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 7-bit expander address
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the expander address from its 8-bit write form (`0x4E` -> `0x27`)
    pub fn write_address(mut self, address: u8) -> Self {
        self.address = from_write_address(address);
        self
    }

    /// Set the character grid
    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the line/font selector
    pub fn display_type(mut self, display_type: DisplayType) -> Self {
        self.display_type = display_type;
        self
    }

    /// Set the backlight state applied by init
    pub fn backlight(mut self, on: bool) -> Self {
        self.backlight = on;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidAddress` if the address does not fit in
    /// 7 bits.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.address > MAX_ADDRESS {
            return Err(BuilderError::InvalidAddress {
                address: self.address,
            });
        }
        Ok(Config {
            address: self.address,
            geometry: self.geometry,
            display_type: self.display_type,
            backlight: self.backlight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_common_backpack() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.address, 0x27);
        assert_eq!(config.geometry.columns(), 16);
        assert_eq!(config.geometry.rows(), 2);
        assert_eq!(config.display_type, DisplayType::TwoLine);
        assert!(config.backlight);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_write_address_is_shifted() {
        let config = Builder::new().write_address(0x4E).build().unwrap();
        assert_eq!(config.address, 0x27);
        assert_eq!(from_write_address(0x7E), 0x3F);
    }

    #[test]
    fn test_address_out_of_range_returns_error() {
        let result = Builder::new().address(0x80).build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidAddress { address: 0x80 })
        ));
    }

    #[test]
    fn test_geometry_rejects_zero_and_five_rows() {
        assert!(matches!(
            Geometry::new(16, 0),
            Err(BuilderError::InvalidGeometry { rows: 0, .. })
        ));
        assert!(matches!(
            Geometry::new(20, 5),
            Err(BuilderError::InvalidGeometry { rows: 5, .. })
        ));
        assert!(matches!(
            Geometry::new(0, 2),
            Err(BuilderError::InvalidGeometry { columns: 0, .. })
        ));
        assert!(Geometry::new(41, 1).is_err());
    }

    #[test]
    fn test_geometry_accepts_common_panels() {
        assert!(Geometry::new(16, 1).is_ok());
        assert!(Geometry::new(16, 2).is_ok());
        assert!(Geometry::new(20, 4).is_ok());
        assert!(Geometry::new(40, 2).is_ok());
    }

    #[test]
    fn test_geometry_accessors_match_validated_values() {
        let geometry = Geometry::new(20, 4).unwrap();
        assert_eq!(geometry.columns(), 20);
        assert_eq!(geometry.rows(), 4);
        assert_eq!(Geometry::default(), Geometry::new(16, 2).unwrap());
        assert!(!geometry.contains(1, 5));
    }

    #[test]
    fn test_geometry_contains_is_one_based() {
        let geometry = Geometry::new(16, 2).unwrap();
        assert!(geometry.contains(1, 1));
        assert!(geometry.contains(16, 2));
        assert!(!geometry.contains(0, 1));
        assert!(!geometry.contains(17, 1));
        assert!(!geometry.contains(1, 3));
    }
}
