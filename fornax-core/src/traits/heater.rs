//! Heater bank and temperature sensor traits

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion failed on one of the raw channels
    ConversionError,
}

/// Trait for the oven temperature sensor
///
/// Implementations average the oven's raw analog channels and convert
/// through their calibration to whole degrees Celsius.
pub trait TemperatureSensor {
    /// Read the current temperature in whole degrees Celsius
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_celsius(&mut self) -> Result<i16, SensorError>;
}

/// Discrete heating power applied to the element bank
///
/// The oven has three heating elements; a level selects how many are
/// energized. Elements are priority-ordered: level `Two` means elements
/// 1 and 2 are on and element 3 is off, never any other combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeatLevel {
    /// All elements off
    #[default]
    Off,
    /// Element 1 only
    One,
    /// Elements 1 and 2
    Two,
    /// All three elements
    Three,
}

impl HeatLevel {
    /// Number of elements energized at this level
    pub fn element_count(self) -> u8 {
        match self {
            HeatLevel::Off => 0,
            HeatLevel::One => 1,
            HeatLevel::Two => 2,
            HeatLevel::Three => 3,
        }
    }

    /// Select the heating power for a temperature deficit (target - current)
    ///
    /// A larger shortfall brings more elements in; at or above target the
    /// bank is off.
    pub fn for_deficit(deficit_c: i16) -> Self {
        if deficit_c >= 30 {
            HeatLevel::Three
        } else if deficit_c >= 20 {
            HeatLevel::Two
        } else if deficit_c > 0 {
            HeatLevel::One
        } else {
            HeatLevel::Off
        }
    }
}

/// Trait for the heating element bank
///
/// Implementations drive the three element output lines. Writes are
/// physical side effects and assumed to succeed.
pub trait HeaterBank {
    /// Energize exactly `level.element_count()` elements, in priority order
    fn set_level(&mut self, level: HeatLevel);

    /// The last level applied
    fn level(&self) -> HeatLevel;
}
