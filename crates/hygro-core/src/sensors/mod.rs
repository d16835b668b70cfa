//! Sensor traits and shared types.
//!
//! The hardware drivers live in the firmware crate; this module defines
//! the narrow contracts the demos consume, plus the retry bounds for the
//! sensor polling loop.

pub mod convert;

use thiserror_no_std::Error;

/// Maximum consecutive read attempts before the sensor loop gives up on
/// the current cycle and logs the failure.
pub const MAX_READ_ATTEMPTS: u8 = 5;

/// Delay between retried sensor reads, in milliseconds.
pub const READ_RETRY_BACKOFF_MS: u64 = 50;

/// Error types for sensor operations.
#[derive(Debug, Error)]
pub enum SensorError {
    /// The driver reported a communication or measurement failure.
    #[error("{sensor} read failed: {details}")]
    ReadFailed {
        /// Sensor name, e.g. "SHT40"
        sensor: &'static str,
        /// Human-readable failure description
        details: &'static str,
    },

    /// The driver has no fresh measurement yet.
    #[error("{sensor} not ready")]
    NotReady {
        /// Sensor name
        sensor: &'static str,
    },

    /// Every retry attempt failed within one polling cycle.
    #[error("sensor read exhausted after {attempts} attempts")]
    Exhausted {
        /// Number of attempts made
        attempts: u8,
    },
}

/// Temperature scale for [`Measurement::temperature_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// One combined humidity/temperature reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub temperature_celsius: f32,
    pub humidity_percent: f32,
}

impl Measurement {
    /// The temperature converted into the requested unit.
    pub fn temperature_in(&self, unit: TemperatureUnit) -> f32 {
        match unit {
            TemperatureUnit::Celsius => self.temperature_celsius,
            TemperatureUnit::Fahrenheit => convert::celsius_to_fahrenheit(self.temperature_celsius),
            TemperatureUnit::Kelvin => convert::celsius_to_kelvin(self.temperature_celsius),
        }
    }
}

/// Blocking-style humidity/temperature sensor contract.
pub trait HumiditySensor {
    /// Reads one measurement; resolves when the driver reports data ready.
    fn read(&mut self) -> impl Future<Output = Result<Measurement, SensorError>>;
}

/// Ambient light sensor contract.
pub trait LightSensor {
    /// Reads one normalized sample in the 0.0 to 1.0 range.
    fn read_normalized(&mut self) -> impl Future<Output = Result<f32, SensorError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_in_unit() {
        let measurement = Measurement {
            temperature_celsius: 25.0,
            humidity_percent: 40.0,
        };
        assert_eq!(measurement.temperature_in(TemperatureUnit::Celsius), 25.0);
        assert_eq!(measurement.temperature_in(TemperatureUnit::Fahrenheit), 77.0);
        assert_eq!(measurement.temperature_in(TemperatureUnit::Kelvin), 298.15);
    }
}
