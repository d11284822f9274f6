//! Circulation fan trait

/// Fan drive direction
///
/// Forward circulates hot air through the chamber while heating;
/// reverse expels it during active cooling and venting. The two
/// directions are realized over a pair of drive lines and are
/// mutually exclusive - there are no intermediate speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FanDirection {
    /// Fan stopped
    #[default]
    Off,
    /// Circulate into the chamber
    Forward,
    /// Expel air out of the chamber
    Reverse,
}

/// Trait for the circulation fan driver
///
/// Writes are physical side effects and assumed to succeed.
pub trait FanDriver {
    /// Apply a drive direction
    fn set_direction(&mut self, direction: FanDirection);

    /// The last direction applied
    fn direction(&self) -> FanDirection;
}
