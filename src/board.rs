//! nRF52840 bindings for the platform traits.
//!
//! - [`FlexBank`]: a few GPIO pins addressed by [`PinId`]
//! - [`AdcSnapshot`]: the last SAADC sample, read back as an analog pin
//! - [`EmbassyClock`]: `embassy_time` uptime in milliseconds
//!
//! Edges are awaited by the tasks in `panel.rs` through GPIOTE rather than
//! registered as raw interrupt handlers, so nothing here implements
//! `EdgeInterrupt`.

use defmt::warn;
use embassy_futures::select::select;
use embassy_nrf::gpio::{Flex, Pull};
use embassy_time::Instant;
use panel_input::{AnalogInput, Clock, DigitalInput, PinId, PinMode};

/// GPIO pins owned by one task.
pub struct FlexBank<'d, const N: usize> {
    pins: [(PinId, Flex<'d>); N],
}

impl<'d, const N: usize> FlexBank<'d, N> {
    pub fn new(pins: [(PinId, Flex<'d>); N]) -> Self {
        Self { pins }
    }

    fn pin_mut(&mut self, id: PinId) -> Option<&mut Flex<'d>> {
        self.pins
            .iter_mut()
            .find(|(pin, _)| *pin == id)
            .map(|(_, flex)| flex)
    }
}

impl<'d> FlexBank<'d, 2> {
    /// Wait until either pin changes level.
    pub async fn wait_for_any_edge(&mut self) {
        let [(_, a), (_, b)] = &mut self.pins;
        select(a.wait_for_any_edge(), b.wait_for_any_edge()).await;
    }
}

impl<const N: usize> DigitalInput for FlexBank<'_, N> {
    fn configure_pin(&mut self, pin: PinId, mode: PinMode) {
        let Some(flex) = self.pin_mut(pin) else {
            warn!("Board: configure of unbound pin {}", pin);
            return;
        };
        match mode {
            PinMode::Input => flex.set_as_input(Pull::None),
            PinMode::InputPullUp => flex.set_as_input(Pull::Up),
            PinMode::InputPullDown => flex.set_as_input(Pull::Down),
            PinMode::Analog => flex.set_as_disconnected(),
        }
    }

    fn read_digital(&mut self, pin: PinId) -> bool {
        // Unbound pins read as the idle level of a pulled-up input.
        self.pin_mut(pin).map_or(true, |flex| flex.is_high())
    }
}

/// Most recent SAADC conversion, exposed as an analog pin.
///
/// The converter is driven asynchronously by the pot task; the smoother
/// reads the stored sample through [`AnalogInput`].
pub struct AdcSnapshot {
    pin: PinId,
    raw: u16,
}

impl AdcSnapshot {
    pub const fn new(pin: PinId) -> Self {
        Self { pin, raw: 0 }
    }

    /// Store one conversion. Single-ended samples can dip slightly below
    /// zero near ground; those clamp to 0.
    pub fn store(&mut self, sample: i16) {
        self.raw = sample.max(0) as u16;
    }
}

impl DigitalInput for AdcSnapshot {
    fn configure_pin(&mut self, pin: PinId, mode: PinMode) {
        // The SAADC channel is configured when the driver is created.
        if pin != self.pin || mode != PinMode::Analog {
            warn!("Board: ADC snapshot cannot configure {} as {}", pin, mode);
        }
    }

    fn read_digital(&mut self, pin: PinId) -> bool {
        pin == self.pin && self.raw > 0
    }
}

impl AnalogInput for AdcSnapshot {
    fn read_analog(&mut self, pin: PinId) -> u16 {
        if pin == self.pin {
            self.raw
        } else {
            0
        }
    }
}

/// Millisecond uptime. Truncates to `u32`, wrapping after ~49.7 days.
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&mut self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
