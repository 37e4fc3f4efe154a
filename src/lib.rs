#![no_std]

pub mod channel;
pub mod engine;
pub mod gamma;
pub mod logger;
pub mod settings;

pub use channel::{CHANNEL_COUNT, Channel, ChannelBank, ChannelConfig, ChannelStatus, RGBW_TAGS};
pub use engine::{FadeConfig, FadeEngine};
pub use gamma::{DRIVE_MAX, LEVEL_MAX, correct};
pub use logger::{LogLevel, Logger, NullLogger};
pub use settings::{DEFAULT_FADE_DELAY_MS, FadeDelay, Setting, fade_delay};

pub use embassy_time::{Duration, Instant};

/// Abstract hardware output driver trait
///
/// Implement this trait to support different hardware platforms.
/// The fade engine is generic over this trait and never calls [`write`]
/// for a channel without a wired output.
///
/// [`write`]: OutputDriver::write
pub trait OutputDriver {
    /// Configure an output for driving. Called once per wired channel
    /// during setup, before any write.
    fn set_output_mode(&mut self, output: u8);

    /// Write a gamma-corrected drive value to an output.
    fn write(&mut self, output: u8, value: u16);
}

/// Upward confirmation seam into the hosting pub/sub framework.
pub trait Publisher {
    /// Publish a property value as a confirmation echo.
    fn publish(&mut self, property: char, value: &str);
}

/// Why a write or configuration candidate was refused.
///
/// Every rejection leaves prior state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The property tag does not address any channel.
    UnknownChannel,
    /// The payload is not an integer in `0..=100`.
    OutOfRange,
    /// The configuration candidate is outside its valid bounds.
    InvalidConfig,
}

/// Capability: handle inbound property writes.
pub trait InputHandler {
    fn handle_input(&mut self, property: char, value: &str) -> Result<(), RejectReason>;
}

/// Capability: advance on a periodic timer.
pub trait Periodic {
    fn poll(&mut self, now: Instant);
}

/// Capability: expose channel state for status rendering.
pub trait StatusSource {
    fn channel_status(&self) -> [ChannelStatus; CHANNEL_COUNT];
}
