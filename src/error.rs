//! Configuration diagnostics.
//!
//! Classifiers never fail at runtime: bounce and glitches are absorbed, and
//! a badly tuned classifier simply never reports the affected gesture.
//! [`ConfigError`] names those tunings so an application can check its
//! configuration once at startup and log what will not work.
//!
//! We avoid `alloc` - all variants are fieldless.

use core::fmt;

/// A tuning the classifiers accept but that defeats one of their features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    // Button
    /// Repeat is enabled but long press is not; repeats need a long press first.
    RepeatWithoutLongPress,

    /// The long-press threshold is not above the debounce time.
    LongPressWithinDebounce,

    /// The double-click window is not above the debounce time, so the
    /// release is never confirmed inside the window.
    DoubleClickWithinDebounce,

    /// The repeat interval is not shorter than the long-press threshold.
    RepeatNotShorterThanLongPress,

    // Analog
    /// The analog input ceiling is zero, so every reading maps to the minimum.
    ZeroInputRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::RepeatWithoutLongPress => {
                write!(f, "repeat enabled without long press")
            }
            ConfigError::LongPressWithinDebounce => {
                write!(f, "long-press threshold not above debounce time")
            }
            ConfigError::DoubleClickWithinDebounce => {
                write!(f, "double-click window not above debounce time")
            }
            ConfigError::RepeatNotShorterThanLongPress => {
                write!(f, "repeat interval not shorter than long-press threshold")
            }
            ConfigError::ZeroInputRange => write!(f, "analog input ceiling is zero"),
        }
    }
}
