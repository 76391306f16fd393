//! Frequency/wavelength conversions used by the depth formula.

/// Speed of sound in dry air at 20 °C, in metres per second.
pub const SPEED_OF_SOUND: f64 = 343.0;

/// Default well width in centimetres.
pub const DEFAULT_WELL_WIDTH_CM: f64 = 3.81;

/// Wavelength in metres of `frequency` Hz at `speed_of_sound` m/s.
pub fn wavelength_m(frequency: f64, speed_of_sound: f64) -> f64 {
    speed_of_sound / frequency
}

/// Wavelength in centimetres of `frequency` Hz at `speed_of_sound` m/s.
pub fn wavelength_cm(frequency: f64, speed_of_sound: f64) -> f64 {
    wavelength_m(frequency, speed_of_sound) * 100.0
}

/// Frequency in Hz whose wavelength is `length_m` metres.
pub fn frequency_from_wavelength_m(length_m: f64, speed_of_sound: f64) -> f64 {
    speed_of_sound / length_m
}

/// Frequency in Hz whose wavelength is `length_cm` centimetres.
pub fn frequency_from_wavelength_cm(length_cm: f64, speed_of_sound: f64) -> f64 {
    frequency_from_wavelength_m(length_cm / 100.0, speed_of_sound)
}
