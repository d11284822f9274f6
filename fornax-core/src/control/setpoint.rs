//! Bake setpoint

/// User-requested target temperature and bake duration
///
/// Assembled by setpoint entry, immutable for the duration of the bake,
/// and cleared when the controller returns to input collection. Values
/// are taken exactly as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Setpoint {
    /// Target chamber temperature in whole degrees Celsius
    pub target_c: i16,
    /// Requested bake time in whole seconds
    pub duration_s: u16,
}
