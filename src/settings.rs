//! Runtime-tunable settings with registered validators.
//!
//! A [`Setting`] is constructed once at process start (it is `const`-friendly,
//! so a `static` works) and handed to components by reference. Interior
//! mutability goes through `critical-section`, which keeps reads and writes
//! safe from both thread and interrupt context.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::RejectReason;

/// A single tunable value guarded by a validator predicate.
///
/// Candidates failing the validator are rejected and the prior value is
/// retained.
pub struct Setting<T: Copy> {
    value: Mutex<RefCell<T>>,
    validate: fn(T) -> bool,
}

impl<T: Copy> Setting<T> {
    /// Create a setting with its default value and validator.
    ///
    /// The default is not passed through the validator; it is trusted.
    pub const fn new(default: T, validate: fn(T) -> bool) -> Self {
        Self {
            value: Mutex::new(RefCell::new(default)),
            validate,
        }
    }

    /// Read the current value.
    pub fn get(&self) -> T {
        critical_section::with(|cs| *self.value.borrow(cs).borrow())
    }

    /// Replace the value if the candidate passes the validator.
    pub fn set(&self, candidate: T) -> Result<(), RejectReason> {
        if !(self.validate)(candidate) {
            return Err(RejectReason::InvalidConfig);
        }
        critical_section::with(|cs| {
            *self.value.borrow(cs).borrow_mut() = candidate;
        });
        Ok(())
    }
}

/// Default minimum delay between fade steps, in milliseconds.
pub const DEFAULT_FADE_DELAY_MS: u64 = 5;

/// Minimum milliseconds between fade steps.
///
/// Valid candidates are strictly between 0 and 200: zero would flood the
/// output with writes, while anything slower makes level changes feel
/// unresponsive.
pub type FadeDelay = Setting<u64>;

const fn valid_fade_delay(candidate: u64) -> bool {
    candidate > 0 && candidate < 200
}

/// Create the fade-delay setting with its default and bounds.
pub const fn fade_delay() -> FadeDelay {
    Setting::new(DEFAULT_FADE_DELAY_MS, valid_fade_delay)
}
