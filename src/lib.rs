//! Input classifiers for control-panel firmware.
//!
//! Turns raw, bouncing pin readings into clean events:
//!
//! - [`QuadratureDecoder`] - rotary encoder edges → signed step counts
//! - [`SwitchDebouncer`] - switch level → debounced on/off
//! - [`ButtonClassifier`] - push button → single / double / long press / repeat
//! - [`AnalogSmoother`] - potentiometer reading → mapped, damped value
//!
//! Hardware access goes through the capability traits in [`platform`], so
//! every classifier runs unchanged on the target and on the host against
//! [`sim::SimBoard`].
//!
//! Usage: `cargo test` runs all classifier logic on the host.
//!
//! Note: the demo firmware in main.rs is `#![no_std]` / `#![no_main]` and
//! only builds with `--features embedded` for the nRF52840.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod input;
pub mod platform;
pub mod sim;

pub use error::ConfigError;
pub use input::{
    AnalogConfig, AnalogSmoother, ButtonClassifier, ButtonConfig, ButtonEvent, Gesture,
    QuadratureDecoder, SwitchConfig, SwitchDebouncer,
};
pub use platform::{
    elapsed_ms, AnalogInput, Clock, DigitalInput, EdgeHandler, EdgeInterrupt, Level, PinId,
    PinMode,
};
