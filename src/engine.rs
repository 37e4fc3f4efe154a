//! The fade engine: input acceptance, gated fading, lifecycle glue.
//!
//! [`FadeEngine`] owns the four-channel bank and the collaborator seams. The
//! hosting framework drives it from a single execution context: inbound
//! property writes go through [`FadeEngine::accept_write`], a periodic timer
//! calls [`FadeEngine::tick`]. Neither path blocks; accepting a write seeds
//! the next fade target instead of snapping hardware to it.

use core::fmt::Write as _;

use embassy_time::Instant;
use heapless::{String, Vec};

use crate::channel::{CHANNEL_COUNT, ChannelBank, ChannelConfig, ChannelStatus, RGBW_TAGS};
use crate::logger::{LogLevel, Logger};
use crate::settings::FadeDelay;
use crate::{InputHandler, OutputDriver, Periodic, Publisher, RejectReason, StatusSource, gamma};

const ORIGIN_INPUT: &str = "fader/input";
const ORIGIN_FADE: &str = "fader/fade";
const ORIGIN_SETTINGS: &str = "fader/settings";

/// Static configuration of the engine: which tags map to which outputs.
#[derive(Debug, Clone, Copy)]
pub struct FadeConfig {
    pub channels: [ChannelConfig; CHANNEL_COUNT],
}

impl FadeConfig {
    /// Conventional `r`/`g`/`b`/`w` wiring from an array of output ids.
    pub const fn rgbw(outputs: [Option<u8>; CHANNEL_COUNT]) -> Self {
        let mut channels = [ChannelConfig {
            tag: ' ',
            output: None,
        }; CHANNEL_COUNT];
        let mut i = 0;
        while i < CHANNEL_COUNT {
            channels[i] = ChannelConfig {
                tag: RGBW_TAGS[i],
                output: outputs[i],
            };
            i += 1;
        }
        Self { channels }
    }
}

/// Four-channel fade engine.
///
/// Generic over the hardware output, the upward publisher and the logger so
/// hosts can plug in their platform implementations (or recording fakes in
/// tests).
pub struct FadeEngine<'a, O: OutputDriver, P: Publisher, L: Logger> {
    channels: ChannelBank,
    delay: &'a FadeDelay,
    output: O,
    publisher: P,
    logger: L,
    advertised: Vec<char, CHANNEL_COUNT>,
    ready: bool,
    last_step: Option<Instant>,
}

impl<'a, O: OutputDriver, P: Publisher, L: Logger> FadeEngine<'a, O, P, L> {
    /// Create an engine with all intensities at zero.
    ///
    /// The advertised-property list is built here, once: one settable
    /// property per channel with a wired output.
    pub fn new(
        config: &FadeConfig,
        delay: &'a FadeDelay,
        output: O,
        publisher: P,
        logger: L,
    ) -> Self {
        let channels = ChannelBank::new(config.channels);
        let mut advertised = Vec::new();
        for channel in channels.iter() {
            if channel.output().is_some() {
                let _ = advertised.push(channel.tag());
            }
        }
        Self {
            channels,
            delay,
            output,
            publisher,
            logger,
            advertised,
            ready: false,
            last_step: None,
        }
    }

    /// Settable property tags declared to the framework at registration.
    pub fn properties(&self) -> &[char] {
        &self.advertised
    }

    /// Whether [`on_ready`](Self::on_ready) has run.
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Channel state snapshots for status rendering.
    pub fn status(&self) -> [ChannelStatus; CHANNEL_COUNT] {
        self.channels.status()
    }

    /// Get a reference to the hardware output driver.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Get a reference to the publisher.
    pub const fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Get a reference to the logger.
    pub const fn logger(&self) -> &L {
        &self.logger
    }

    /// Configure every wired channel's output for driving.
    ///
    /// Must run before any hardware write. Safe to call more than once.
    pub fn setup(&mut self) {
        for index in 0..CHANNEL_COUNT {
            let wired = self.channels.channel(index).output();
            if let Some(output) = wired {
                self.output.set_output_mode(output);
            }
        }
    }

    /// One-time hook for the node becoming fully operational.
    ///
    /// Forces a full push of all channels so hardware reflects engine state
    /// regardless of what pin-reset defaults left behind.
    pub fn on_ready(&mut self) {
        self.ready = true;
        self.logger.log(ORIGIN_FADE, LogLevel::Debug, "ready to operate");
        let mut msg: String<64> = String::new();
        let _ = write!(msg, "fade delay: {} ms", self.delay.get());
        self.logger.log(ORIGIN_SETTINGS, LogLevel::Info, &msg);
        for index in 0..CHANNEL_COUNT {
            self.push_channel(index);
        }
    }

    /// Apply a fade-delay candidate from configuration.
    ///
    /// Candidates outside the valid bounds are refused, keeping the prior
    /// value.
    pub fn set_fade_delay(&mut self, candidate: u64) -> Result<(), RejectReason> {
        match self.delay.set(candidate) {
            Ok(()) => Ok(()),
            Err(reason) => {
                let mut msg: String<64> = String::new();
                let _ = write!(msg, "fade delay {candidate} out of bounds");
                self.logger.log(ORIGIN_SETTINGS, LogLevel::Error, &msg);
                Err(reason)
            }
        }
    }

    /// Validate and apply an externally delivered channel write.
    ///
    /// On success the new target is stored, the channel's *live* value is
    /// pushed to hardware (the fade starts from wherever the output is now)
    /// and the accepted value is republished upward as confirmation. On
    /// rejection no state changes.
    pub fn accept_write(&mut self, property: char, raw: &str) -> Result<(), RejectReason> {
        if self.logger.enabled(LogLevel::Debug) {
            let mut msg: String<96> = String::new();
            let _ = write!(msg, "received property {property} (value={raw})");
            self.logger.log(ORIGIN_INPUT, LogLevel::Debug, &msg);
        }

        let Some(index) = self.channels.index_of(property) else {
            let mut msg: String<96> = String::new();
            let _ = write!(msg, "unrecognized property {property}");
            self.logger.log(ORIGIN_INPUT, LogLevel::Error, &msg);
            return Err(RejectReason::UnknownChannel);
        };
        let Some(level) = parse_level(raw) else {
            let mut msg: String<96> = String::new();
            let _ = write!(msg, "value {raw} for property {property} out of range");
            self.logger.log(ORIGIN_INPUT, LogLevel::Error, &msg);
            return Err(RejectReason::OutOfRange);
        };

        self.channels.channel_mut(index).set_requested(level);
        self.push_channel(index);
        self.publish_channel(index);
        Ok(())
    }

    /// Advance every unconverged channel one unit, at most once per
    /// configured delay.
    ///
    /// `now` comes from the host's monotonic clock. A tick arriving early is
    /// skipped entirely; a long pause still yields a single step per channel,
    /// never a catch-up burst. Fading drives hardware only: no publishes.
    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_step {
            if now.as_millis() < last.as_millis() + self.delay.get() {
                return;
            }
        }
        self.last_step = Some(now);
        for index in 0..CHANNEL_COUNT {
            if self.channels.channel(index).is_converged() {
                continue;
            }
            self.channels.channel_mut(index).step();
            self.push_channel(index);
        }
    }

    /// Drive one channel's gamma-corrected live value to hardware.
    ///
    /// Unwired channels are skipped. A completion line is logged only when
    /// the value just written equals the channel's requested value, so an
    /// overlapping retarget cannot log a stale completion.
    fn push_channel(&mut self, index: usize) {
        let channel = *self.channels.channel(index);
        let level = channel.current();
        let drive = gamma::correct(level);
        let Some(output) = channel.output() else {
            return;
        };
        self.output.write(output, drive);
        if channel.requested() == level && self.logger.enabled(LogLevel::Info) {
            let mut msg: String<96> = String::new();
            let _ = write!(
                msg,
                "channel {} on output {} at {}% (drive {})",
                channel.tag(),
                output,
                level,
                drive
            );
            self.logger.log(ORIGIN_FADE, LogLevel::Info, &msg);
        }
    }

    /// Republish a channel's accepted target upward as a decimal string.
    fn publish_channel(&mut self, index: usize) {
        let channel = *self.channels.channel(index);
        let mut value: String<8> = String::new();
        let _ = write!(value, "{}", channel.requested());
        self.publisher.publish(channel.tag(), &value);
    }
}

/// Parse a raw property payload into an intensity level.
///
/// Anything that is not an integer in `0..=100` is rejected.
fn parse_level(raw: &str) -> Option<u8> {
    let value: i32 = raw.trim().parse().ok()?;
    u8::try_from(value).ok().filter(|level| *level <= gamma::LEVEL_MAX)
}

impl<O: OutputDriver, P: Publisher, L: Logger> InputHandler for FadeEngine<'_, O, P, L> {
    fn handle_input(&mut self, property: char, value: &str) -> Result<(), RejectReason> {
        self.accept_write(property, value)
    }
}

impl<O: OutputDriver, P: Publisher, L: Logger> Periodic for FadeEngine<'_, O, P, L> {
    fn poll(&mut self, now: Instant) {
        self.tick(now);
    }
}

impl<O: OutputDriver, P: Publisher, L: Logger> StatusSource for FadeEngine<'_, O, P, L> {
    fn channel_status(&self) -> [ChannelStatus; CHANNEL_COUNT] {
        self.status()
    }
}
