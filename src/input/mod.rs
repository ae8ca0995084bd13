//! Input classifiers - one instance per physical control.
//!
//! Each classifier owns only its own counters and timestamps; none of them
//! know about each other. The host loop (or an ISR, for the encoder) samples
//! pins through the platform layer and feeds the classifier.
//!
//! ## Components
//!
//! - **QuadratureDecoder**: encoder edges → signed step count (ISR-safe)
//! - **SwitchDebouncer**: raw level → debounced on/off
//! - **ButtonClassifier**: raw level → Single / Double / LongPress / Repeat
//! - **AnalogSmoother**: ADC reading → mapped, damped value

pub mod analog;
pub mod button;
pub mod encoder;
pub mod switch;


pub use analog::{AnalogConfig, AnalogSmoother};
pub use button::{ButtonClassifier, ButtonConfig, ButtonEvent, Gesture};
pub use encoder::{QuadratureDecoder, STEP_TABLE};
pub use switch::{SwitchConfig, SwitchDebouncer};
