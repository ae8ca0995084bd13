//! Quadrature decoder for mechanical rotary encoders.
//!
//! The two encoder phases form a 2-bit Gray code. Every edge on either pin
//! shifts the current pair into a 4-bit history (previous pair, current
//! pair) that indexes [`STEP_TABLE`]:
//!
//! ```text
//! state = A | B << 1
//! forward:  00 → 10 → 11 → 01 → 00   (+1 per edge, +4 per cycle)
//! backward: 00 → 01 → 11 → 10 → 00   (-1 per edge)
//! ```
//!
//! Repeated states and double-bit jumps (a missed edge or a glitch) map to
//! 0, so contact bounce cancels out instead of being counted.
//!
//! The edge handler runs in interrupt context while [`QuadratureDecoder::take_steps`]
//! runs in the polling loop; both touch the history and step accumulator
//! inside a `critical_section`, so no step is lost or counted twice.

use core::cell::Cell;

use critical_section::Mutex;

use crate::platform::{DigitalInput, EdgeHandler, EdgeInterrupt, PinId, PinMode};

/// Step delta for each `(previous << 2) | current` history value.
pub const STEP_TABLE: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

#[derive(Clone, Copy)]
struct DecoderState {
    history: u8,
    steps: i32,
}

/// Interrupt-safe rotary encoder decoder.
///
/// `new` is `const`, so a decoder can live in a `static` reachable from
/// the edge handler:
///
/// ```
/// use panel_input::{DigitalInput, PinId, QuadratureDecoder};
///
/// static KNOB: QuadratureDecoder = QuadratureDecoder::new(PinId(24), PinId(25));
///
/// fn on_knob_edge(io: &mut dyn DigitalInput) {
///     KNOB.on_pin_transition(io);
/// }
/// ```
pub struct QuadratureDecoder {
    pin_a: PinId,
    pin_b: PinId,
    state: Mutex<Cell<DecoderState>>,
}

impl QuadratureDecoder {
    /// Decoder for an encoder wired to `pin_a` / `pin_b`.
    pub const fn new(pin_a: PinId, pin_b: PinId) -> Self {
        Self {
            pin_a,
            pin_b,
            state: Mutex::new(Cell::new(DecoderState { history: 0, steps: 0 })),
        }
    }

    /// Configure both pins as pulled-up inputs and run `handler` on every
    /// edge of either one. `handler` should call [`Self::on_pin_transition`].
    pub fn attach<P: EdgeInterrupt + ?Sized>(&self, io: &mut P, handler: EdgeHandler) {
        self.configure(io);
        io.register_edge_interrupt(self.pin_a, handler);
        io.register_edge_interrupt(self.pin_b, handler);
    }

    /// Configure both pins without registering an interrupt, for executors
    /// that await the edges themselves.
    pub fn configure<P: DigitalInput + ?Sized>(&self, io: &mut P) {
        io.configure_pin(self.pin_a, PinMode::InputPullUp);
        io.configure_pin(self.pin_b, PinMode::InputPullUp);

        #[cfg(feature = "defmt")]
        defmt::debug!("Encoder on pins {}/{} configured", self.pin_a, self.pin_b);
    }

    /// Sample both pins and fold the new state into the step count.
    ///
    /// Call on every edge of either pin.
    pub fn on_pin_transition<P: DigitalInput + ?Sized>(&self, io: &mut P) {
        let a = io.read_digital(self.pin_a);
        let b = io.read_digital(self.pin_b);
        self.on_levels(a, b);
    }

    /// Fold already-sampled pin levels into the step count.
    pub fn on_levels(&self, a: bool, b: bool) {
        let current = u8::from(a) | (u8::from(b) << 1);
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.history = ((state.history << 2) | current) & 0x0f;
            let delta = STEP_TABLE[usize::from(state.history)];
            state.steps = state.steps.wrapping_add(i32::from(delta));
            cell.set(state);
        });
    }

    /// Net steps since the previous call (positive = forward), clearing the
    /// count.
    pub fn take_steps(&self) -> i32 {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            let steps = state.steps;
            state.steps = 0;
            cell.set(state);
            steps
        })
    }

    /// Net steps accumulated so far, without clearing them.
    pub fn peek_steps(&self) -> i32 {
        critical_section::with(|cs| self.state.borrow(cs).get().steps)
    }

    /// Phase A pin.
    pub fn pin_a(&self) -> PinId {
        self.pin_a
    }

    /// Phase B pin.
    pub fn pin_b(&self) -> PinId {
        self.pin_b
    }
}
