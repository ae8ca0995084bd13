//! Control-panel tasks.
//!
//! Each physical control is served by one async task that samples it and
//! sends a `PanelEvent` to the report channel:
//!
//! - **controls**: button + toggle switch, polled every millisecond; also
//!   drains the encoder's accumulated steps
//! - **encoder**: wakes on either encoder edge and decodes it
//! - **pot**: samples the SAADC and smooths the reading

use defmt::{info, Format};
use embassy_nrf::saadc::Saadc;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Ticker};
use panel_input::config::{
    CONTROLS_POLL_MS, ENCODER_A_PIN, ENCODER_B_PIN, EVENT_QUEUE_DEPTH, POT_SAMPLE_MS,
};
use panel_input::{
    AnalogSmoother, ButtonClassifier, ButtonEvent, QuadratureDecoder, SwitchDebouncer,
};

use crate::board::{AdcSnapshot, EmbassyClock, FlexBank};

/// Decoder shared between the encoder task (writer) and the controls task
/// (reader).
pub static ENCODER: QuadratureDecoder = QuadratureDecoder::new(ENCODER_A_PIN, ENCODER_B_PIN);

/// Panel events, oldest first.
pub static EVENTS: Channel<CriticalSectionRawMutex, PanelEvent, EVENT_QUEUE_DEPTH> =
    Channel::new();

/// Classified input from any control.
#[derive(Clone, Copy, PartialEq, Eq, Format)]
pub enum PanelEvent {
    Button(ButtonEvent),
    /// Debounced switch state (`true` = closed).
    Switch(bool),
    /// Encoder steps since the last report. Four per detent on most parts.
    Encoder(i32),
    /// New smoothed pot value.
    Pot(i32),
}

#[embassy_executor::task]
pub async fn controls_task(
    mut pins: FlexBank<'static, 2>,
    mut button: ButtonClassifier,
    mut switch: SwitchDebouncer,
) -> ! {
    let mut clock = EmbassyClock;
    let mut ticker = Ticker::every(Duration::from_millis(CONTROLS_POLL_MS));

    loop {
        ticker.next().await;

        if let Some(event) = button.poll(&mut pins, &mut clock) {
            EVENTS.send(PanelEvent::Button(event)).await;
        }
        if switch.poll(&mut pins, &mut clock) {
            EVENTS.send(PanelEvent::Switch(switch.value())).await;
        }

        let steps = ENCODER.take_steps();
        if steps != 0 {
            EVENTS.send(PanelEvent::Encoder(steps)).await;
        }
    }
}

#[embassy_executor::task]
pub async fn encoder_task(mut pins: FlexBank<'static, 2>) -> ! {
    // Seed the history with the resting position.
    ENCODER.on_pin_transition(&mut pins);
    ENCODER.take_steps();

    loop {
        pins.wait_for_any_edge().await;
        ENCODER.on_pin_transition(&mut pins);
    }
}

#[embassy_executor::task]
pub async fn pot_task(
    mut saadc: Saadc<'static, 1>,
    mut snapshot: AdcSnapshot,
    mut pot: AnalogSmoother,
) -> ! {
    saadc.calibrate().await;

    let mut ticker = Ticker::every(Duration::from_millis(POT_SAMPLE_MS));
    let mut buf = [0i16; 1];

    loop {
        ticker.next().await;

        saadc.sample(&mut buf).await;
        snapshot.store(buf[0]);
        if pot.poll(&mut snapshot) {
            EVENTS.send(PanelEvent::Pot(pot.value())).await;
        }
    }
}

#[embassy_executor::task]
pub async fn report_task() -> ! {
    loop {
        match EVENTS.receive().await {
            PanelEvent::Button(event) => {
                info!("Button: {} after {} ms", event.gesture, event.held_ms)
            }
            PanelEvent::Switch(on) => info!("Switch: {}", if on { "on" } else { "off" }),
            PanelEvent::Encoder(steps) => info!("Encoder: {=i32} steps", steps),
            PanelEvent::Pot(value) => info!("Pot: {=i32}", value),
        }
    }
}
