//! BH1750 ambient light driver wrapper.

use bh1750_embedded::{Address, Resolution, r#async::Bh1750Async};
use embedded_hal_async::i2c::I2c;
use hygro_core::sensors::{LightSensor, SensorError};

/// Full-scale lux value used to normalize readings into 0.0..=1.0.
const FULL_SCALE_LUX: f32 = 65535.0;

pub struct Bh1750Light<I> {
    sensor: Bh1750Async<I, embassy_time::Delay>,
}

impl<I: I2c> Bh1750Light<I> {
    pub fn new(i2c: I) -> Self {
        Self {
            sensor: Bh1750Async::<I, embassy_time::Delay>::new(
                i2c,
                embassy_time::Delay,
                Address::Low,
            ),
        }
    }
}

impl<I: I2c> LightSensor for Bh1750Light<I> {
    async fn read_normalized(&mut self) -> Result<f32, SensorError> {
        let lux = self
            .sensor
            .one_time_measurement(Resolution::High)
            .await
            .map_err(|e| {
                log::error!("BH1750 one_time_measurement failed: {:?}", e);
                SensorError::ReadFailed {
                    sensor: "BH1750",
                    details: "failed to read lux value during a one-time measurement",
                }
            })?;

        Ok((lux / FULL_SCALE_LUX).clamp(0.0, 1.0))
    }
}
