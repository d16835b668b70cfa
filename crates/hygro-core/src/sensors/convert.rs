//! Temperature scale conversions. Pure arithmetic.

const KELVIN_OFFSET: f32 = 273.15;
const FAHRENHEIT_SCALE: f32 = 1.8;
const FAHRENHEIT_OFFSET: f32 = 32.0;

pub fn kelvin_to_celsius(degrees: f32) -> f32 {
    degrees - KELVIN_OFFSET
}

pub fn kelvin_to_fahrenheit(degrees: f32) -> f32 {
    (degrees - KELVIN_OFFSET) * FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET
}

pub fn fahrenheit_to_celsius(degrees: f32) -> f32 {
    (degrees - FAHRENHEIT_OFFSET) / FAHRENHEIT_SCALE
}

pub fn fahrenheit_to_kelvin(degrees: f32) -> f32 {
    (degrees - FAHRENHEIT_OFFSET) / FAHRENHEIT_SCALE + KELVIN_OFFSET
}

pub fn celsius_to_kelvin(degrees: f32) -> f32 {
    degrees + KELVIN_OFFSET
}

pub fn celsius_to_fahrenheit(degrees: f32) -> f32 {
    degrees * FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_round_trips() {
        assert_eq!(kelvin_to_celsius(celsius_to_kelvin(21.5)), 21.5);
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
    }

    #[test]
    fn test_fahrenheit_kelvin() {
        assert_eq!(fahrenheit_to_kelvin(32.0), 273.15);
        assert_eq!(kelvin_to_fahrenheit(273.15), 32.0);
    }
}
