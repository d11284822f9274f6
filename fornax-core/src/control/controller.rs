//! Oven control cycle
//!
//! One cycle consumes at most one keypress, the temperature sampled for
//! this cycle, and the current instant, and produces the actuator
//! commands plus a display frame. The temperature is sampled once per
//! cycle and every branch decides against that same sample.

use crate::input::entry::SetpointEntry;
use crate::input::keys::Key;
use crate::render::{self, DisplayFrame};
use crate::state::machine::{OvenState, VentPhase};
use crate::traits::fan::FanDirection;
use crate::traits::heater::HeatLevel;

use super::countdown::Countdown;
use super::setpoint::Setpoint;

/// Degrees above target tolerated before active cooling engages
pub const TOLERANCE_BAND_C: i16 = 5;

/// Chamber temperature below which venting is done expelling and the
/// end-of-bake alarm sounds
pub const VENT_COMPLETE_C: i16 = 30;

/// Buzzer pulses in the end-of-bake alarm
pub const ALARM_PULSES: u8 = 5;

/// Buzzer on/off half-period in milliseconds
pub const ALARM_HALF_PERIOD_MS: u32 = 300;

/// Actuator commands and display frame produced by one control cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOutput {
    /// Heating element bank level
    pub heat: HeatLevel,
    /// Circulation fan drive
    pub fan: FanDirection,
    /// Buzzer line state
    pub alarm: bool,
    /// Frame for the character display
    pub display: DisplayFrame,
}

/// The oven controller
///
/// Owns the state machine, the active setpoint, the countdown, and the
/// last-issued actuator commands. Commands persist between cycles: each
/// state's branch rewrites only the lines it is responsible for, and the
/// hardware holds everything else at its previous command.
pub struct OvenController {
    state: OvenState,
    entry: SetpointEntry,
    setpoint: Option<Setpoint>,
    countdown: Countdown,
    heat: HeatLevel,
    fan: FanDirection,
    alarm: bool,
}

impl OvenController {
    /// Create a controller in the input-collection state, all outputs off
    pub const fn new() -> Self {
        Self {
            state: OvenState::AwaitingInput,
            entry: SetpointEntry::new(),
            setpoint: None,
            countdown: Countdown::new(),
            heat: HeatLevel::Off,
            fan: FanDirection::Off,
            alarm: false,
        }
    }

    /// Current state
    pub fn state(&self) -> OvenState {
        self.state
    }

    /// The active setpoint, if a bake is in progress
    pub fn setpoint(&self) -> Option<Setpoint> {
        self.setpoint
    }

    /// Remaining bake time in whole seconds
    pub fn remaining_s(&self) -> u16 {
        self.countdown.remaining_s()
    }

    /// Run one control cycle
    pub fn tick(&mut self, key: Option<Key>, temp_c: i16, now_ms: u32) -> CycleOutput {
        match self.state {
            OvenState::AwaitingInput => {
                if let Some(key) = key {
                    if let Some(setpoint) = self.entry.push_key(key) {
                        self.begin_bake(setpoint, now_ms);
                    }
                }
            }
            OvenState::Finished => {
                // Any key acknowledges the finished bake
                if key.is_some() {
                    self.reset();
                }
            }
            OvenState::Heating
            | OvenState::Cooling
            | OvenState::Baking
            | OvenState::Venting(_) => {
                // Expiry is observed one cycle after the countdown hits
                // zero: check first, then advance
                if self.countdown.is_expired() && !self.state.is_venting() {
                    self.state = OvenState::Venting(VentPhase::Purging);
                }
                self.countdown.advance(now_ms);
                self.run_active(temp_c, now_ms);
            }
        }

        CycleOutput {
            heat: self.heat,
            fan: self.fan,
            alarm: self.alarm,
            display: self.render(temp_c),
        }
    }

    /// Latch the setpoint and start heating
    fn begin_bake(&mut self, setpoint: Setpoint, now_ms: u32) {
        self.countdown.start(setpoint.duration_s, now_ms);
        self.setpoint = Some(setpoint);
        self.state = OvenState::Heating;
    }

    /// Clear the bake and return to input collection
    fn reset(&mut self) {
        self.state = OvenState::AwaitingInput;
        self.setpoint = None;
        self.entry.reset();
        self.heat = HeatLevel::Off;
        self.fan = FanDirection::Off;
        self.alarm = false;
    }

    /// Dispatch the per-state decision for an in-progress bake
    fn run_active(&mut self, temp_c: i16, now_ms: u32) {
        let target = match self.setpoint {
            Some(setpoint) => setpoint.target_c,
            None => return,
        };

        match self.state {
            OvenState::Heating => self.run_heating(temp_c, target),
            OvenState::Cooling => self.run_cooling(temp_c, target),
            OvenState::Baking => self.run_baking(temp_c, target),
            OvenState::Venting(phase) => self.run_venting(phase, temp_c, now_ms),
            OvenState::AwaitingInput | OvenState::Finished => {}
        }
    }

    fn run_heating(&mut self, temp_c: i16, target: i16) {
        if temp_c > target + TOLERANCE_BAND_C {
            // Overshot past the band: kill everything, cool actively
            self.fan = FanDirection::Off;
            self.heat = HeatLevel::Off;
            self.state = OvenState::Cooling;
        } else if temp_c >= target {
            // Holding band reached
            self.state = OvenState::Baking;
        } else {
            self.fan = FanDirection::Forward;
            self.heat = HeatLevel::for_deficit(target - temp_c);
        }
    }

    fn run_cooling(&mut self, temp_c: i16, target: i16) {
        if temp_c > target + TOLERANCE_BAND_C {
            self.fan = FanDirection::Reverse;
            self.heat = HeatLevel::Off;
        } else if temp_c < target {
            self.fan = FanDirection::Off;
            self.state = OvenState::Heating;
        } else {
            self.state = OvenState::Baking;
        }
    }

    fn run_baking(&mut self, temp_c: i16, target: i16) {
        self.heat = HeatLevel::Off;
        self.fan = FanDirection::Off;

        if temp_c > target + TOLERANCE_BAND_C {
            self.state = OvenState::Cooling;
        } else if temp_c < target {
            self.state = OvenState::Heating;
        }
    }

    fn run_venting(&mut self, phase: VentPhase, temp_c: i16, now_ms: u32) {
        match phase {
            VentPhase::Purging => {
                self.heat = HeatLevel::Off;
                if temp_c >= VENT_COMPLETE_C {
                    // Residual heat left: keep expelling
                    self.fan = FanDirection::Reverse;
                } else {
                    self.fan = FanDirection::Off;
                    self.alarm = true;
                    self.state = OvenState::Venting(VentPhase::Alarming {
                        pulses_left: ALARM_PULSES,
                        alarm_on: true,
                        next_toggle_ms: now_ms.wrapping_add(ALARM_HALF_PERIOD_MS),
                    });
                }
            }
            VentPhase::Alarming {
                pulses_left,
                alarm_on,
                next_toggle_ms,
            } => {
                // Advance one buzzer toggle per cycle; the loop keeps
                // running between toggles
                if (now_ms.wrapping_sub(next_toggle_ms) as i32) < 0 {
                    return;
                }

                if alarm_on {
                    self.alarm = false;
                    self.state = OvenState::Venting(VentPhase::Alarming {
                        pulses_left,
                        alarm_on: false,
                        next_toggle_ms: now_ms.wrapping_add(ALARM_HALF_PERIOD_MS),
                    });
                } else if pulses_left <= 1 {
                    // Last off half-period done: the sequence is over
                    self.state = OvenState::Finished;
                } else {
                    self.alarm = true;
                    self.state = OvenState::Venting(VentPhase::Alarming {
                        pulses_left: pulses_left - 1,
                        alarm_on: true,
                        next_toggle_ms: now_ms.wrapping_add(ALARM_HALF_PERIOD_MS),
                    });
                }
            }
        }
    }

    /// Build the display frame for this cycle
    fn render(&self, temp_c: i16) -> DisplayFrame {
        match self.state {
            OvenState::AwaitingInput => {
                render::entry_frame(self.entry.phase(), self.entry.pending())
            }
            _ => render::status_frame(self.state.label(), temp_c, self.countdown.remaining_s()),
        }
    }
}

impl Default for OvenController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Keypresses for a decimal value, most significant digit first
    fn digit_keys(value: u16) -> Vec<Key, 5> {
        let mut reversed: Vec<u8, 5> = Vec::new();
        let mut v = value;
        loop {
            let _ = reversed.push((v % 10) as u8);
            v /= 10;
            if v == 0 {
                break;
            }
        }
        reversed.iter().rev().map(|&d| Key::Digit(d)).collect()
    }

    /// Drive the keypad entry for a complete setpoint, ending in Heating
    fn controller_in_bake(target: u16, duration_s: u16) -> OvenController {
        let mut ctrl = OvenController::new();
        for key in digit_keys(target) {
            ctrl.tick(Some(key), 20, 0);
        }
        ctrl.tick(Some(Key::Confirm), 20, 0);
        for key in digit_keys(duration_s) {
            ctrl.tick(Some(key), 20, 0);
        }
        ctrl.tick(Some(Key::Confirm), 20, 0);
        assert_eq!(ctrl.state(), OvenState::Heating);
        ctrl
    }

    #[test]
    fn test_entry_completion_starts_heating() {
        let ctrl = controller_in_bake(180, 3600);
        assert_eq!(
            ctrl.setpoint(),
            Some(Setpoint {
                target_c: 180,
                duration_s: 3600,
            })
        );
        assert_eq!(ctrl.remaining_s(), 3600);
    }

    #[test]
    fn test_full_deficit_heats_at_full_power() {
        // S=180, T=150: deficit of exactly 30 brings in all elements
        let mut ctrl = controller_in_bake(180, 3600);
        let out = ctrl.tick(None, 150, 100);
        assert_eq!(ctrl.state(), OvenState::Heating);
        assert_eq!(out.heat, HeatLevel::Three);
        assert_eq!(out.fan, FanDirection::Forward);
    }

    #[test]
    fn test_power_ladder_follows_deficit() {
        let mut ctrl = controller_in_bake(180, 3600);

        let out = ctrl.tick(None, 155, 100); // deficit 25
        assert_eq!(out.heat, HeatLevel::Two);

        let out = ctrl.tick(None, 170, 200); // deficit 10
        assert_eq!(out.heat, HeatLevel::One);

        let out = ctrl.tick(None, 100, 300); // deficit 80
        assert_eq!(out.heat, HeatLevel::Three);
    }

    #[test]
    fn test_overshoot_enters_cooling_then_reverses() {
        // S=180, T=186: past the +5 band. The overshoot cycle kills the
        // outputs; the reverse drive starts on the next cycle.
        let mut ctrl = controller_in_bake(180, 3600);
        let out = ctrl.tick(None, 186, 100);
        assert_eq!(ctrl.state(), OvenState::Cooling);
        assert_eq!(out.heat, HeatLevel::Off);
        assert_eq!(out.fan, FanDirection::Off);

        let out = ctrl.tick(None, 186, 200);
        assert_eq!(out.fan, FanDirection::Reverse);
        assert_eq!(out.heat, HeatLevel::Off);
    }

    #[test]
    fn test_in_band_holds_in_baking() {
        // S=180, T=182: inside [180, 185]
        let mut ctrl = controller_in_bake(180, 3600);
        ctrl.tick(None, 182, 100);
        assert_eq!(ctrl.state(), OvenState::Baking);

        let out = ctrl.tick(None, 182, 200);
        assert_eq!(out.heat, HeatLevel::Off);
        assert_eq!(out.fan, FanDirection::Off);
        assert_eq!(ctrl.state(), OvenState::Baking);
    }

    #[test]
    fn test_baking_is_idempotent_at_constant_temperature() {
        let mut ctrl = controller_in_bake(180, 3600);
        ctrl.tick(None, 182, 100);
        let first = ctrl.tick(None, 182, 200);

        for i in 0..5 {
            let out = ctrl.tick(None, 182, 300 + i * 100);
            assert_eq!(ctrl.state(), OvenState::Baking);
            assert_eq!(out.heat, first.heat);
            assert_eq!(out.fan, first.fan);
            assert_eq!(out.alarm, first.alarm);
        }
    }

    #[test]
    fn test_baking_drops_back_to_heating() {
        let mut ctrl = controller_in_bake(180, 3600);
        ctrl.tick(None, 182, 100);
        assert_eq!(ctrl.state(), OvenState::Baking);

        ctrl.tick(None, 179, 200);
        assert_eq!(ctrl.state(), OvenState::Heating);

        let out = ctrl.tick(None, 179, 300);
        assert_eq!(out.heat, HeatLevel::One);
        assert_eq!(out.fan, FanDirection::Forward);
    }

    #[test]
    fn test_baking_escapes_to_cooling_above_band() {
        let mut ctrl = controller_in_bake(180, 3600);
        ctrl.tick(None, 182, 100);
        ctrl.tick(None, 190, 200);
        assert_eq!(ctrl.state(), OvenState::Cooling);
    }

    #[test]
    fn test_cooling_returns_through_band() {
        let mut ctrl = controller_in_bake(180, 3600);
        ctrl.tick(None, 190, 100);
        assert_eq!(ctrl.state(), OvenState::Cooling);

        // Back inside the band: settle into Baking
        ctrl.tick(None, 183, 200);
        assert_eq!(ctrl.state(), OvenState::Baking);
    }

    #[test]
    fn test_cooling_undershoot_reheats() {
        let mut ctrl = controller_in_bake(180, 3600);
        ctrl.tick(None, 190, 100);
        let out = ctrl.tick(None, 175, 200);
        assert_eq!(ctrl.state(), OvenState::Heating);
        assert_eq!(out.fan, FanDirection::Off);
    }

    #[test]
    fn test_countdown_expiry_forces_venting_next_cycle() {
        let mut ctrl = controller_in_bake(180, 2);
        ctrl.tick(None, 182, 100); // Baking
        assert_eq!(ctrl.state(), OvenState::Baking);

        ctrl.tick(None, 182, 1000);
        assert_eq!(ctrl.remaining_s(), 1);
        ctrl.tick(None, 182, 2000);
        assert_eq!(ctrl.remaining_s(), 0);
        // Still baking on the cycle the countdown hit zero
        assert_eq!(ctrl.state(), OvenState::Baking);

        ctrl.tick(None, 182, 2100);
        assert_eq!(ctrl.state(), OvenState::Venting(VentPhase::Purging));
    }

    #[test]
    fn test_countdown_expiry_forces_venting_from_heating_and_cooling() {
        for temp in [100, 200] {
            let mut ctrl = controller_in_bake(180, 1);
            ctrl.tick(None, temp, 100);
            ctrl.tick(None, temp, 1100); // deducts the only second
            ctrl.tick(None, temp, 1200);
            assert!(ctrl.state().is_venting(), "temp {}", temp);
        }
    }

    #[test]
    fn test_zero_duration_vents_immediately() {
        // No validation: a zero duration is accepted and the very next
        // cycle vents (and, cold as it is, goes straight to the alarm)
        let mut ctrl = controller_in_bake(180, 0);
        ctrl.tick(None, 20, 100);
        assert!(ctrl.state().is_venting());
    }

    #[test]
    fn test_countdown_is_monotonic() {
        let mut ctrl = controller_in_bake(180, 10);
        let mut last = ctrl.remaining_s();
        for i in 1..40 {
            ctrl.tick(None, 170, i * 333);
            let remaining = ctrl.remaining_s();
            assert!(remaining <= last);
            last = remaining;
        }
    }

    #[test]
    fn test_venting_expels_while_hot() {
        let mut ctrl = controller_in_bake(180, 0);
        let out = ctrl.tick(None, 120, 100);
        assert_eq!(ctrl.state(), OvenState::Venting(VentPhase::Purging));
        assert_eq!(out.fan, FanDirection::Reverse);
        assert_eq!(out.heat, HeatLevel::Off);

        // Stays purging down to the threshold
        let out = ctrl.tick(None, 30, 200);
        assert_eq!(out.fan, FanDirection::Reverse);
        assert_eq!(ctrl.state(), OvenState::Venting(VentPhase::Purging));
    }

    #[test]
    fn test_alarm_pulses_then_finishes() {
        // Venting at T=25: five 300 ms on/300 ms off pulses, advanced
        // cycle by cycle with the loop running throughout
        let mut ctrl = controller_in_bake(180, 0);
        let mut now = 100;
        let out = ctrl.tick(None, 25, now);
        assert!(out.alarm);
        assert_eq!(out.fan, FanDirection::Off);

        let mut rising_edges = 1; // the pulse that just started
        let mut was_on = true;
        // 100 ms cycles, far more than the ~3 s sequence needs
        for _ in 0..60 {
            now += 100;
            let out = ctrl.tick(None, 25, now);
            if out.alarm && !was_on {
                rising_edges += 1;
            }
            was_on = out.alarm;
            if ctrl.state() == OvenState::Finished {
                break;
            }
        }

        assert_eq!(ctrl.state(), OvenState::Finished);
        assert_eq!(rising_edges, ALARM_PULSES);
        assert!(!was_on);
    }

    #[test]
    fn test_finished_resets_on_any_key() {
        let mut ctrl = controller_in_bake(180, 0);
        let mut now = 100;
        ctrl.tick(None, 25, now);
        while ctrl.state() != OvenState::Finished {
            now += 100;
            ctrl.tick(None, 25, now);
        }

        // Keyless cycles stay Finished with everything off
        let out = ctrl.tick(None, 25, now + 100);
        assert_eq!(ctrl.state(), OvenState::Finished);
        assert_eq!(out.heat, HeatLevel::Off);
        assert_eq!(out.fan, FanDirection::Off);
        assert!(!out.alarm);

        // Any key at all acknowledges - not just the confirm key
        let out = ctrl.tick(Some(Key::Star), 25, now + 200);
        assert_eq!(ctrl.state(), OvenState::AwaitingInput);
        assert_eq!(ctrl.setpoint(), None);
        assert_eq!(out.display.line(0), "Set temperature");
        assert_eq!(out.display.line(1), "");
    }

    #[test]
    fn test_keys_ignored_during_bake() {
        let mut ctrl = controller_in_bake(180, 3600);
        ctrl.tick(Some(Key::Digit(7)), 150, 100);
        ctrl.tick(Some(Key::Confirm), 150, 200);
        assert_eq!(ctrl.state(), OvenState::Heating);
        assert_eq!(
            ctrl.setpoint(),
            Some(Setpoint {
                target_c: 180,
                duration_s: 3600,
            })
        );
    }

    #[test]
    fn test_band_rules_cover_all_temperatures() {
        // From each of the three regulation states, any sample lands in
        // a defined regulation state while the countdown runs
        for temp in -40..=400 {
            let mut ctrl = controller_in_bake(180, 3600);
            for now in [100, 200, 300] {
                ctrl.tick(None, temp, now);
                assert!(
                    matches!(
                        ctrl.state(),
                        OvenState::Heating | OvenState::Cooling | OvenState::Baking
                    ),
                    "temp {} left the regulation states",
                    temp
                );
            }
        }
    }

    #[test]
    fn test_status_display_during_bake() {
        let mut ctrl = controller_in_bake(180, 600);
        let out = ctrl.tick(None, 150, 100);
        assert_eq!(out.display.line(0), "Heating");
        assert_eq!(out.display.line(1), "Temp:150 Time:60");
    }
}
