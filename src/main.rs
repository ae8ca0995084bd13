//! panel-input demo firmware - nRF52840 control panel.
//!
//! Reads a push button, a toggle switch, a rotary encoder and a
//! potentiometer, classifies them with the `panel_input` library and logs
//! every event over RTT.
//!
//! # Wiring (nRF52840-DK)
//!
//! | Control        | Pin   | Notes                          |
//! |----------------|-------|--------------------------------|
//! | Push button    | P0.11 | To ground, internal pull-up    |
//! | Toggle switch  | P0.12 | To ground, internal pull-up    |
//! | Encoder A / B  | P0.24 / P0.25 | Common pin to ground   |
//! | Pot wiper      | P0.02 | AIN0, ends across VDD / GND    |

#![no_std]
#![no_main]

mod board;
mod panel;

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Flex;
use embassy_nrf::saadc::{self, ChannelConfig, Saadc};
use embassy_nrf::bind_interrupts;
use panel_input::config::{
    ANALOG_MAX_12BIT, BUTTON_PIN, ENCODER_A_PIN, ENCODER_B_PIN, POT_OUT_MAX, POT_OUT_MIN,
    POT_PIN, SWITCH_PIN,
};
use panel_input::{
    AnalogConfig, AnalogSmoother, ButtonClassifier, ButtonConfig, SwitchDebouncer,
};
use {defmt_rtt as _, panic_probe as _};

use board::{AdcSnapshot, EmbassyClock, FlexBank};
use panel::ENCODER;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("panel-input starting");

    // --- Button + switch ---
    let mut controls = FlexBank::new([
        (BUTTON_PIN, Flex::new(p.P0_11)),
        (SWITCH_PIN, Flex::new(p.P0_12)),
    ]);

    let button_config = ButtonConfig::default()
        .with_double_click()
        .with_long_press()
        .with_repeat();
    if let Err(e) = button_config.check() {
        warn!("Button config: {}", e);
    }
    let button = ButtonClassifier::new(&mut controls, BUTTON_PIN, button_config);
    let switch = SwitchDebouncer::new(&mut controls, &mut EmbassyClock, SWITCH_PIN);

    // --- Encoder ---
    let mut encoder_pins = FlexBank::new([
        (ENCODER_A_PIN, Flex::new(p.P0_24)),
        (ENCODER_B_PIN, Flex::new(p.P0_25)),
    ]);
    ENCODER.configure(&mut encoder_pins);

    // --- Potentiometer (12-bit SAADC) ---
    let channel = ChannelConfig::single_ended(p.P0_02);
    let saadc = Saadc::new(p.SAADC, Irqs, saadc::Config::default(), [channel]);
    let mut snapshot = AdcSnapshot::new(POT_PIN);

    let pot_config = AnalogConfig::new(POT_OUT_MIN, POT_OUT_MAX).with_input_max(ANALOG_MAX_12BIT);
    if let Err(e) = pot_config.check() {
        warn!("Pot config: {}", e);
    }
    let pot = AnalogSmoother::with_config(&mut snapshot, POT_PIN, pot_config);

    unwrap!(spawner.spawn(panel::report_task()));
    unwrap!(spawner.spawn(panel::encoder_task(encoder_pins)));
    unwrap!(spawner.spawn(panel::controls_task(controls, button, switch)));
    unwrap!(spawner.spawn(panel::pot_task(saadc, snapshot, pot)));

    info!("panel-input running");
}
