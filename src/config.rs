//! Crate-wide constants and compile-time configuration.
//!
//! Default classifier timings live here so they can be tuned in one place,
//! together with the pin assignment and poll rates of the demo firmware.

use crate::platform::PinId;

// Classifier timing defaults (milliseconds)

/// Time a raw level must hold before a switch or button accepts it.
pub const DEFAULT_STABLE_MS: u32 = 25;

/// Maximum gap between a release and the next press for a double click.
pub const DEFAULT_DOUBLE_CLICK_MS: u32 = 250;

/// Hold time before a button reports a long press.
pub const DEFAULT_LONG_PRESS_MS: u32 = 1000;

/// Spacing between repeat events while a long press is held.
pub const DEFAULT_REPEAT_MS: u32 = 333;

// Analog converters

/// Full-scale reading of a 10-bit converter (AVR-class parts).
pub const ANALOG_MAX_10BIT: u16 = 1023;

/// Full-scale reading of a 12-bit converter (nRF52840 SAADC, ESP32).
pub const ANALOG_MAX_12BIT: u16 = 4095;

/// Default input ceiling used by [`crate::AnalogConfig`].
pub const DEFAULT_ANALOG_MAX: u16 = ANALOG_MAX_10BIT;

// Demo firmware pin assignment (nRF52840-DK)
//
// Logical ids map onto port 0 pin numbers; `board.rs` binds them to the
// matching `embassy_nrf::peripherals::P0_xx`.
//
//   Button (active-low)   → P0.11
//   Toggle switch         → P0.12
//   Encoder A             → P0.24
//   Encoder B             → P0.25
//   Pot wiper (AIN0)      → P0.02

/// Push button, active-low with internal pull-up.
pub const BUTTON_PIN: PinId = PinId(11);

/// Toggle switch, closed to ground.
pub const SWITCH_PIN: PinId = PinId(12);

/// Encoder phase A.
pub const ENCODER_A_PIN: PinId = PinId(24);

/// Encoder phase B.
pub const ENCODER_B_PIN: PinId = PinId(25);

/// Potentiometer wiper.
pub const POT_PIN: PinId = PinId(2);

// Demo firmware scheduling

/// Poll period of the button/switch task (ms). Must stay well under
/// [`DEFAULT_STABLE_MS`].
pub const CONTROLS_POLL_MS: u64 = 1;

/// Sample period of the potentiometer task (ms).
pub const POT_SAMPLE_MS: u64 = 10;

/// Pot output range reported to the application (percent).
pub const POT_OUT_MIN: i32 = 0;
pub const POT_OUT_MAX: i32 = 100;

/// Depth of the panel event channel.
pub const EVENT_QUEUE_DEPTH: usize = 8;
