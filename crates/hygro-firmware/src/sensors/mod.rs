//! Hardware sensor drivers behind the `hygro-core` sensor traits.

mod bh1750;
mod sht40;

pub use bh1750::Bh1750Light;
pub use sht40::Sht40;

use embassy_time::{Duration, Timer};
use hygro_core::sensors::{
    HumiditySensor, MAX_READ_ATTEMPTS, Measurement, READ_RETRY_BACKOFF_MS, SensorError,
};

/// Reads one measurement with a bounded retry.
///
/// Failed attempts back off for [`READ_RETRY_BACKOFF_MS`] before trying
/// again, up to [`MAX_READ_ATTEMPTS`] per cycle; after that the cycle
/// gives up with [`SensorError::Exhausted`] and the polling loop moves
/// on.
pub async fn read_with_retry<S: HumiditySensor>(sensor: &mut S) -> Result<Measurement, SensorError> {
    for attempt in 1..=MAX_READ_ATTEMPTS {
        match sensor.read().await {
            Ok(measurement) => return Ok(measurement),
            Err(e) => {
                log::warn!("sensor read attempt {attempt}/{MAX_READ_ATTEMPTS} failed: {e:?}");
                Timer::after(Duration::from_millis(READ_RETRY_BACKOFF_MS)).await;
            }
        }
    }
    Err(SensorError::Exhausted {
        attempts: MAX_READ_ATTEMPTS,
    })
}
