//! Momentary push button with click, double-click, long-press and repeat
//! recognition.
//!
//! ```text
//!            press ──debounce──▶ confirmed ──hold > long_press_ms──▶ LongPress
//!              ▲                    │                                   │
//!              │                 release                      hold ≥ repeat_ms
//!              │                    ▼                                   ▼
//!   pending ◀──┴── window ── released (debounced)                   Repeat ⟲
//!   single           │
//!                    ├─ second press confirmed in window ─▶ release ─▶ Double
//!                    └─ window expired / double-click off ────────────▶ Single
//! ```
//!
//! Every raw flip restarts the transition timer, so nothing is reported
//! until the level has held for longer than `stable_ms`. Window expiry is
//! detected on the next poll; there are no scheduled callbacks.

use crate::config::{DEFAULT_DOUBLE_CLICK_MS, DEFAULT_LONG_PRESS_MS, DEFAULT_REPEAT_MS, DEFAULT_STABLE_MS};
use crate::error::ConfigError;
use crate::platform::{elapsed_ms, Clock, DigitalInput, Level, PinId, PinMode};

/// Recognised button gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Press and release (button is released).
    Single,
    /// Two presses within the double-click window (button is released).
    Double,
    /// Held past the long-press threshold (button is still pressed).
    LongPress,
    /// Still held after a long press (button is still pressed).
    Repeat,
}

/// Event returned by [`ButtonClassifier::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub gesture: Gesture,
    /// Milliseconds held: press to release for `Single`/`Double`, press to
    /// now for `LongPress`, previous firing to now for `Repeat`. Summing the
    /// `LongPress` and `Repeat` values gives the total hold time.
    pub held_ms: u32,
}

/// Button tuning. Features are off by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Time a level must hold before it is trusted (ms).
    pub stable_ms: u32,
    /// Maximum release-to-press gap of a double click (ms).
    pub double_click_ms: u32,
    /// Hold time before a long press (ms).
    pub long_press_ms: u32,
    /// Spacing of repeats after a long press (ms).
    pub repeat_ms: u32,
    /// Report `Double` instead of two `Single`s.
    pub double_click: bool,
    /// Report `LongPress`.
    pub long_press: bool,
    /// Report `Repeat`; has no effect unless `long_press` is set.
    pub repeat: bool,
    /// Level of the pin while pressed.
    pub active: Level,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            stable_ms: DEFAULT_STABLE_MS,
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
            repeat_ms: DEFAULT_REPEAT_MS,
            double_click: false,
            long_press: false,
            repeat: false,
            active: Level::Low,
        }
    }
}

impl ButtonConfig {
    pub fn with_double_click(mut self) -> Self {
        self.double_click = true;
        self
    }

    pub fn with_long_press(mut self) -> Self {
        self.long_press = true;
        self
    }

    /// Enable repeats. Long press must be enabled as well.
    pub fn with_repeat(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// Button wired to the supply rather than to ground.
    pub fn active_high(mut self) -> Self {
        self.active = Level::High;
        self
    }

    /// Report the first tuning under which a gesture silently never fires
    /// or fires in a way the timings do not suggest.
    ///
    /// The classifier itself never calls this.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.repeat && !self.long_press {
            return Err(ConfigError::RepeatWithoutLongPress);
        }
        if self.long_press && self.long_press_ms <= self.stable_ms {
            return Err(ConfigError::LongPressWithinDebounce);
        }
        if self.double_click && self.double_click_ms <= self.stable_ms {
            return Err(ConfigError::DoubleClickWithinDebounce);
        }
        if self.repeat && self.repeat_ms >= self.long_press_ms {
            return Err(ConfigError::RepeatNotShorterThanLongPress);
        }
        Ok(())
    }
}

/// Gesture recogniser for one push button.
pub struct ButtonClassifier {
    pin: PinId,
    config: ButtonConfig,
    /// Last observed (raw) press state.
    pressed: bool,
    /// A press has been confirmed and not yet reported.
    have_press: bool,
    /// A confirmed click is waiting for the double-click window.
    have_click: bool,
    /// Second press of a double click confirmed.
    in_double: bool,
    /// LongPress already reported for the current hold.
    did_long_press: bool,
    /// `held_ms` already captured for the current press.
    got_held: bool,
    last_transition: u32,
    held_ms: u32,
}

impl ButtonClassifier {
    /// Button on `pin`. The pin is configured with the pull resistor that
    /// matches the active level.
    pub fn new<P: DigitalInput + ?Sized>(io: &mut P, pin: PinId, config: ButtonConfig) -> Self {
        io.configure_pin(pin, PinMode::pulled_for(config.active));

        #[cfg(feature = "defmt")]
        defmt::debug!("Button on pin {}: {}", pin, config);

        Self {
            pin,
            config,
            pressed: false,
            have_press: false,
            have_click: false,
            in_double: false,
            did_long_press: false,
            got_held: false,
            last_transition: 0,
            held_ms: 0,
        }
    }

    /// Sample the pin and advance the recogniser.
    pub fn poll<P, C>(&mut self, io: &mut P, clock: &mut C) -> Option<ButtonEvent>
    where
        P: DigitalInput + ?Sized,
        C: Clock + ?Sized,
    {
        let pressed = self.config.active.matches(io.read_digital(self.pin));
        self.update(clock.now_ms(), pressed)
    }

    /// Advance the recogniser with a sample taken at `now`.
    ///
    /// At most one event is returned per call.
    pub fn update(&mut self, now: u32, pressed: bool) -> Option<ButtonEvent> {
        let delta = elapsed_ms(now, self.last_transition);
        let cfg = self.config;

        if self.pressed != pressed {
            // Release after a confirmed press: remember how long it was held.
            if !pressed && self.have_press && !self.got_held {
                self.held_ms = delta;
                self.got_held = true;
            }
            self.last_transition = now;
            self.pressed = pressed;
            self.did_long_press = false;
            return None;
        }

        if delta <= cfg.stable_ms {
            return None;
        }

        let gesture = if self.pressed {
            self.on_held(now, delta)
        } else if self.have_press {
            self.on_released(delta)
        } else {
            None
        };

        let event = gesture.map(|gesture| ButtonEvent {
            gesture,
            held_ms: self.held_ms,
        });

        #[cfg(feature = "defmt")]
        {
            if let Some(event) = event {
                defmt::trace!("Button on pin {}: {}", self.pin, event);
            }
        }

        event
    }

    fn on_held(&mut self, now: u32, delta: u32) -> Option<Gesture> {
        let cfg = self.config;

        // Long press and repeat are checked first and preempt click bookkeeping.
        let gesture = if self.in_double {
            None
        } else if cfg.long_press && !self.did_long_press && delta > cfg.long_press_ms {
            Some(Gesture::LongPress)
        } else if cfg.repeat && self.did_long_press && delta >= cfg.repeat_ms {
            Some(Gesture::Repeat)
        } else {
            None
        };

        if gesture.is_some() {
            self.held_ms = delta;
            self.last_transition = now;
            self.have_press = false;
            self.have_click = false;
            self.in_double = false;
            self.did_long_press = true;
        } else if !self.did_long_press {
            self.have_press = true;
            self.got_held = false;
            if self.have_click {
                self.in_double = true;
            }
        }

        gesture
    }

    fn on_released(&mut self, delta: u32) -> Option<Gesture> {
        let cfg = self.config;

        let gesture = if self.in_double {
            self.in_double = false;
            Some(Gesture::Double)
        } else if !cfg.double_click || delta > cfg.double_click_ms {
            Some(Gesture::Single)
        } else {
            self.have_click = true;
            None
        };

        if gesture.is_some() {
            self.have_press = false;
            self.have_click = false;
        }

        gesture
    }

    /// Last observed press state (not debounced).
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// `true` between the confirmation of a second press and its release.
    pub fn in_double_click(&self) -> bool {
        self.in_double
    }

    /// Held duration of the most recent event. Only meaningful right after a
    /// poll that returned one.
    pub fn held_ms(&self) -> u32 {
        self.held_ms
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Retune at runtime; takes effect on the next poll.
    pub fn config_mut(&mut self) -> &mut ButtonConfig {
        &mut self.config
    }
}
