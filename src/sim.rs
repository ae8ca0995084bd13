//! Simulated board for host tests and desktop simulation.
//!
//! [`SimBoard`] implements every platform capability with plain in-memory
//! state: scripted pin levels and analog readings, a hand-driven
//! millisecond clock, and edge interrupts that fire synchronously when a
//! level changes. It needs no allocator.

use heapless::Vec;

use crate::platform::{AnalogInput, Clock, DigitalInput, EdgeHandler, EdgeInterrupt, PinId, PinMode};

/// Highest pin id (exclusive) the simulated board exposes.
pub const SIM_PIN_COUNT: usize = 48;

/// Maximum number of distinct pins that can be configured.
pub const MAX_CONFIGURED: usize = SIM_PIN_COUNT;

/// Maximum number of registered edge handlers.
pub const MAX_HANDLERS: usize = 16;

/// In-memory board.
///
/// Digital inputs idle high, as pulled-up inputs with open contacts do.
///
/// Configuring more than [`MAX_CONFIGURED`] distinct pins or registering
/// more than [`MAX_HANDLERS`] edge handlers panics in debug builds.
pub struct SimBoard {
    levels: [bool; SIM_PIN_COUNT],
    analog: [u16; SIM_PIN_COUNT],
    now: u32,
    modes: Vec<(PinId, PinMode), MAX_CONFIGURED>,
    handlers: Vec<(PinId, EdgeHandler), MAX_HANDLERS>,
}

impl SimBoard {
    /// Board at t = 0 with all digital inputs high and analog inputs at 0.
    pub const fn new() -> Self {
        Self {
            levels: [true; SIM_PIN_COUNT],
            analog: [0; SIM_PIN_COUNT],
            now: 0,
            modes: Vec::new(),
            handlers: Vec::new(),
        }
    }

    /// Drive `pin` to a level, firing its edge handlers if the level changed.
    pub fn set_level(&mut self, pin: PinId, high: bool) {
        if self.apply_level(pin, high) {
            self.fire(pin);
        }
    }

    /// Drive several pins at once, then fire handlers for each pin that
    /// changed. Handlers observe the final levels of every pin, which is what
    /// an interrupt sees when two edges land inside one sampling window.
    pub fn set_levels(&mut self, changes: &[(PinId, bool)]) {
        // Only in-range pins change, so at most SIM_PIN_COUNT distinct ids.
        let mut changed: Vec<PinId, SIM_PIN_COUNT> = Vec::new();
        for &(pin, high) in changes {
            if self.apply_level(pin, high) && !changed.contains(&pin) {
                let pushed = changed.push(pin);
                debug_assert!(pushed.is_ok());
            }
        }
        for pin in changed {
            self.fire(pin);
        }
    }

    /// Current level of `pin`; out-of-range pins read high.
    pub fn level(&self, pin: PinId) -> bool {
        self.levels.get(usize::from(pin.0)).copied().unwrap_or(true)
    }

    /// Set the value returned by [`AnalogInput::read_analog`] for `pin`.
    pub fn set_analog(&mut self, pin: PinId, value: u16) {
        if let Some(slot) = self.analog.get_mut(usize::from(pin.0)) {
            *slot = value;
        }
    }

    /// Jump the clock to an absolute time.
    pub fn set_time(&mut self, ms: u32) {
        self.now = ms;
    }

    /// Move the clock forward, wrapping like a hardware counter.
    pub fn advance(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
    }

    /// Mode `pin` was last configured with.
    pub fn pin_mode(&self, pin: PinId) -> Option<PinMode> {
        self.modes
            .iter()
            .find(|(p, _)| *p == pin)
            .map(|(_, mode)| *mode)
    }

    /// Returns `true` if an edge handler is registered on `pin`.
    pub fn has_edge_handler(&self, pin: PinId) -> bool {
        self.handlers.iter().any(|(p, _)| *p == pin)
    }

    fn apply_level(&mut self, pin: PinId, high: bool) -> bool {
        match self.levels.get_mut(usize::from(pin.0)) {
            Some(level) if *level != high => {
                *level = high;
                true
            }
            _ => false,
        }
    }

    fn fire(&mut self, pin: PinId) {
        let handlers = self.handlers.clone();
        for (p, handler) in handlers.iter() {
            if *p == pin {
                handler(self);
            }
        }
    }
}

impl Default for SimBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitalInput for SimBoard {
    fn configure_pin(&mut self, pin: PinId, mode: PinMode) {
        if let Some(entry) = self.modes.iter_mut().find(|(p, _)| *p == pin) {
            entry.1 = mode;
        } else {
            let pushed = self.modes.push((pin, mode));
            debug_assert!(pushed.is_ok(), "SimBoard: more than {} configured pins", MAX_CONFIGURED);
        }
    }

    fn read_digital(&mut self, pin: PinId) -> bool {
        self.level(pin)
    }
}

impl AnalogInput for SimBoard {
    fn read_analog(&mut self, pin: PinId) -> u16 {
        self.analog.get(usize::from(pin.0)).copied().unwrap_or(0)
    }
}

impl Clock for SimBoard {
    fn now_ms(&mut self) -> u32 {
        self.now
    }
}

impl EdgeInterrupt for SimBoard {
    fn register_edge_interrupt(&mut self, pin: PinId, handler: EdgeHandler) {
        let pushed = self.handlers.push((pin, handler));
        debug_assert!(pushed.is_ok(), "SimBoard: more than {} edge handlers", MAX_HANDLERS);
    }
}
