//! Unified error type for numguess.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The display did not answer during initialisation.
    ///
    /// Fatal: the firmware halts and processes no further input.
    DisplayInit,

    /// An I²C transfer to an already initialised display failed.
    Display,
}
