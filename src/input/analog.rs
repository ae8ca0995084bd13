//! Range-mapped, damped analog input (potentiometers, faders).
//!
//! Each sample is mapped linearly from `0..=input_max` onto
//! `out_min..=out_max` and folded into a running average that weights the
//! history 7:1:
//!
//! ```text
//! mapped = raw * (out_max - out_min) / input_max + out_min   (truncating)
//! acc    = (7 * acc + (mapped << FRAC_BITS)) >> 3
//! value  = round(acc / 2^FRAC_BITS)
//! ```
//!
//! The accumulator carries [`FRAC_BITS`] fractional bits, so the flooring
//! shift never leaves the reported value short of the mapped one. The
//! average starts at 0 and needs a few dozen samples to reach the first
//! real reading.

use crate::config::DEFAULT_ANALOG_MAX;
use crate::error::ConfigError;
use crate::platform::{AnalogInput, PinId, PinMode};

/// Fractional bits of the damped accumulator. Must be at least 4 for a
/// rising input to round up to its target.
pub const FRAC_BITS: u32 = 4;

/// Analog input tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogConfig {
    /// Full-scale converter reading.
    pub input_max: u16,
    /// Output at a raw reading of 0.
    pub out_min: i32,
    /// Output at a raw reading of `input_max`.
    pub out_max: i32,
}

impl AnalogConfig {
    /// Map onto `out_min..=out_max` from a 10-bit converter.
    pub const fn new(out_min: i32, out_max: i32) -> Self {
        Self {
            input_max: DEFAULT_ANALOG_MAX,
            out_min,
            out_max,
        }
    }

    pub const fn with_input_max(mut self, input_max: u16) -> Self {
        self.input_max = input_max;
        self
    }

    /// Linear map of one raw reading, truncating toward zero.
    ///
    /// Readings above `input_max` clamp to it. A zero `input_max` maps
    /// everything to `out_min`.
    pub fn map(&self, raw: u16) -> i32 {
        let raw = raw.min(self.input_max);
        let span = i64::from(self.out_max) - i64::from(self.out_min);
        let scaled = (i64::from(raw) * span)
            .checked_div(i64::from(self.input_max))
            .unwrap_or(0);
        // |scaled| <= |span|, so the sum stays between out_min and out_max.
        (scaled + i64::from(self.out_min)) as i32
    }

    /// Report a tuning that makes the input useless.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.input_max == 0 {
            return Err(ConfigError::ZeroInputRange);
        }
        Ok(())
    }
}

/// Jitter-suppressing analog input.
pub struct AnalogSmoother {
    pin: PinId,
    config: AnalogConfig,
    /// Damped average, scaled by `2^FRAC_BITS`.
    acc: i64,
    value: i32,
}

impl AnalogSmoother {
    /// Input on `pin` reporting `out_min..=out_max` from a 10-bit converter.
    pub fn new<P: AnalogInput + ?Sized>(io: &mut P, pin: PinId, out_min: i32, out_max: i32) -> Self {
        Self::with_config(io, pin, AnalogConfig::new(out_min, out_max))
    }

    pub fn with_config<P: AnalogInput + ?Sized>(io: &mut P, pin: PinId, config: AnalogConfig) -> Self {
        io.configure_pin(pin, PinMode::Analog);

        #[cfg(feature = "defmt")]
        defmt::debug!("Analog on pin {}: {}", pin, config);

        Self {
            pin,
            config,
            acc: 0,
            value: 0,
        }
    }

    /// Sample the pin. Returns `true` if [`value`](Self::value) changed.
    pub fn poll<P: AnalogInput + ?Sized>(&mut self, io: &mut P) -> bool {
        let raw = io.read_analog(self.pin);
        self.update(raw)
    }

    /// Fold one raw reading into the average.
    pub fn update(&mut self, raw: u16) -> bool {
        let target = i64::from(self.config.map(raw)) << FRAC_BITS;
        self.acc = (self.acc * 7 + target) >> 3;

        // Stays between the old value and the mapped one, so it fits an i32.
        let rounded = ((self.acc + (1 << (FRAC_BITS - 1))) >> FRAC_BITS) as i32;
        if rounded == self.value {
            return false;
        }
        self.value = rounded;

        #[cfg(feature = "defmt")]
        defmt::trace!("Analog on pin {} -> {}", self.pin, self.value);

        true
    }

    /// Last reported value.
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }

    pub fn config(&self) -> &AnalogConfig {
        &self.config
    }
}
