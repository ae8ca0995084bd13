//! Platform access layer - the capabilities each classifier needs.
//!
//! Classifiers never touch hardware directly. They are handed an object
//! implementing the traits below on construction and on every poll, so the
//! same code runs against real GPIO/ADC peripherals on the target and
//! against [`crate::sim::SimBoard`] on the host.
//!
//! | Capability        | Used by                                   |
//! |-------------------|-------------------------------------------|
//! | [`DigitalInput`]  | switch, button, encoder                   |
//! | [`AnalogInput`]   | analog smoother                           |
//! | [`Clock`]         | switch, button                            |
//! | [`EdgeInterrupt`] | encoder (interrupt-driven platforms only) |

/// Opaque pin identifier. Trusted as-is; classifiers never validate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

/// Electrical level at which an input counts as active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Active when the pin reads low (switch to ground, pull-up).
    #[default]
    Low,
    /// Active when the pin reads high (switch to supply, pull-down).
    High,
}

impl Level {
    /// Returns `true` when a raw reading equals this level.
    pub const fn matches(self, raw_high: bool) -> bool {
        match self {
            Level::Low => !raw_high,
            Level::High => raw_high,
        }
    }
}

/// Pin configuration requested at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Floating digital input.
    Input,
    /// Digital input with pull-up.
    InputPullUp,
    /// Digital input with pull-down.
    InputPullDown,
    /// Analog converter input.
    Analog,
}

impl PinMode {
    /// Pull resistor that holds an input inactive while the contact is open.
    pub const fn pulled_for(active: Level) -> Self {
        match active {
            Level::Low => PinMode::InputPullUp,
            Level::High => PinMode::InputPullDown,
        }
    }
}

/// Digital pin configuration and sampling.
pub trait DigitalInput {
    /// One-time pin setup.
    fn configure_pin(&mut self, pin: PinId, mode: PinMode);

    /// Instantaneous level of `pin` (`true` = high).
    fn read_digital(&mut self, pin: PinId) -> bool;
}

/// Analog pin sampling.
pub trait AnalogInput: DigitalInput {
    /// Instantaneous reading of `pin`, in `0..=ceiling` of the converter.
    fn read_analog(&mut self, pin: PinId) -> u16;
}

/// Monotonic millisecond clock.
///
/// The counter is allowed to wrap; consumers only ever subtract timestamps
/// with [`elapsed_ms`].
pub trait Clock {
    /// Milliseconds since an arbitrary epoch.
    fn now_ms(&mut self) -> u32;
}

/// Handler run on a pin edge. It receives a reader for sampling pins from
/// the interrupt context.
pub type EdgeHandler = fn(&mut dyn DigitalInput);

/// Edge-triggered interrupt registration.
pub trait EdgeInterrupt: DigitalInput {
    /// Run `handler` on every rising and falling edge of `pin`.
    fn register_edge_interrupt(&mut self, pin: PinId, handler: EdgeHandler);
}

/// Milliseconds from `since` to `now`, tolerant of counter wraparound.
#[inline]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
