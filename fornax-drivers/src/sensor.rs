//! Chamber temperature sensor
//!
//! The oven carries three independent analog transducers; one reading
//! averages all three raw channels and converts through a fixed linear
//! calibration (10 mV per degree against the ADC reference), truncating
//! to whole degrees.

use fornax_core::traits::{SensorError, TemperatureSensor};

/// Raw analog channels averaged per reading
pub const RAW_CHANNELS: usize = 3;

/// Transducer output slope in millivolts per degree Celsius
const MV_PER_DEGREE: u32 = 10;

/// ADC access for the sensor's raw channels
pub trait AdcBank {
    /// Read one raw channel (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self, channel: usize) -> Result<u16, ()>;
}

/// Three-channel averaging temperature sensor
pub struct TrioSensor<A> {
    adc: A,
    /// ADC reference voltage in mV
    vref_mv: u32,
    /// ADC resolution (typically 4096 for 12-bit)
    adc_max: u32,
}

impl<A: AdcBank> TrioSensor<A> {
    /// Create a new sensor
    ///
    /// # Arguments
    /// - `adc`: ADC access covering the three raw channels
    /// - `vref_mv`: reference voltage in millivolts (typically 3300)
    pub fn new(adc: A, vref_mv: u16) -> Self {
        Self {
            adc,
            vref_mv: vref_mv as u32,
            adc_max: 4096, // 12-bit ADC
        }
    }
}

impl<A: AdcBank> TemperatureSensor for TrioSensor<A> {
    fn read_celsius(&mut self) -> Result<i16, SensorError> {
        let mut sum: u32 = 0;
        for channel in 0..RAW_CHANNELS {
            let raw = self
                .adc
                .read(channel)
                .map_err(|_| SensorError::ConversionError)?;
            sum += raw as u32;
        }

        let average = sum / RAW_CHANNELS as u32;
        let millivolts = average * self.vref_mv / self.adc_max;

        Ok((millivolts / MV_PER_DEGREE) as i16)
    }
}
