//! Debounced single-throw switch.

use crate::config::DEFAULT_STABLE_MS;
use crate::platform::{elapsed_ms, Clock, DigitalInput, Level, PinId, PinMode};

/// Switch tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchConfig {
    /// Time the raw level must hold before it is accepted (ms).
    pub stable_ms: u32,
    /// Level at which the switch reads as "on".
    pub active: Level,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            stable_ms: DEFAULT_STABLE_MS,
            active: Level::Low,
        }
    }
}

/// Debounced switch.
///
/// [`value`](Self::value) is `true` while the switch is on. It changes only
/// after the raw level has held for longer than `stable_ms`; any flicker
/// restarts the wait. Poll more often than `stable_ms`.
pub struct SwitchDebouncer {
    pin: PinId,
    config: SwitchConfig,
    value: bool,
    raw: bool,
    last_flip: u32,
}

impl SwitchDebouncer {
    /// Switch on `pin` with default tuning (25 ms, active-low).
    pub fn new<P, C>(io: &mut P, clock: &mut C, pin: PinId) -> Self
    where
        P: DigitalInput + ?Sized,
        C: Clock + ?Sized,
    {
        Self::with_config(io, clock, pin, SwitchConfig::default())
    }

    /// Switch on `pin` with explicit tuning.
    ///
    /// The pin is read once here and its level becomes the starting value,
    /// so the first polls report no change.
    pub fn with_config<P, C>(io: &mut P, clock: &mut C, pin: PinId, config: SwitchConfig) -> Self
    where
        P: DigitalInput + ?Sized,
        C: Clock + ?Sized,
    {
        io.configure_pin(pin, PinMode::pulled_for(config.active));
        let value = config.active.matches(io.read_digital(pin));

        #[cfg(feature = "defmt")]
        defmt::debug!("Switch on pin {} starts {}", pin, value);

        Self {
            pin,
            config,
            value,
            raw: value,
            last_flip: clock.now_ms(),
        }
    }

    /// Sample the pin. Returns `true` if [`value`](Self::value) changed.
    pub fn poll<P, C>(&mut self, io: &mut P, clock: &mut C) -> bool
    where
        P: DigitalInput + ?Sized,
        C: Clock + ?Sized,
    {
        let raw = self.config.active.matches(io.read_digital(self.pin));
        self.update(clock.now_ms(), raw)
    }

    /// Feed one sample taken at `now`; `on` is the raw, undebounced state.
    pub fn update(&mut self, now: u32, on: bool) -> bool {
        if on != self.raw {
            self.raw = on;
            self.last_flip = now;
            return false;
        }

        if self.raw != self.value && elapsed_ms(now, self.last_flip) > self.config.stable_ms {
            self.value = self.raw;

            #[cfg(feature = "defmt")]
            defmt::trace!("Switch on pin {} -> {}", self.pin, self.value);

            return true;
        }

        false
    }

    /// Debounced state.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Monitored pin.
    pub fn pin(&self) -> PinId {
        self.pin
    }

    /// Current tuning.
    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Retune at runtime. Changing `active` takes effect on the next poll.
    pub fn config_mut(&mut self) -> &mut SwitchConfig {
        &mut self.config
    }
}
