//! SHT40 humidity/temperature driver wrapper.

use embedded_hal_async::i2c::I2c;
use hygro_core::sensors::{HumiditySensor, Measurement, SensorError};
use sht4x::Sht4xAsync;

pub struct Sht40<I> {
    sensor: Sht4xAsync<I, embassy_time::Delay>,
}

impl<I: I2c> Sht40<I> {
    pub fn new(i2c: I) -> Self {
        Self {
            sensor: Sht4xAsync::<I, embassy_time::Delay>::new(i2c),
        }
    }
}

impl<I: I2c> HumiditySensor for Sht40<I> {
    async fn read(&mut self) -> Result<Measurement, SensorError> {
        let measurement = self
            .sensor
            .measure(sht4x::Precision::High, &mut embassy_time::Delay)
            .await
            .map_err(|e| {
                log::error!("SHT40 measurement failed: {:?}", e);
                SensorError::ReadFailed {
                    sensor: "SHT40",
                    details: "I2C communication error or sensor not responding",
                }
            })?;

        Ok(Measurement {
            temperature_celsius: measurement.temperature_celsius().to_num::<f32>(),
            humidity_percent: measurement.humidity_percent().to_num::<f32>(),
        })
    }
}
