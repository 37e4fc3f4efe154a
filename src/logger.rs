//! Leveled logging seam.
//!
//! The engine reports through a [`Logger`] collaborator instead of a global
//! facade, so hosts decide where lines go (serial, network, nowhere). The
//! engine never depends on log output for correctness.

/// Log severity, ordered `Debug < Info < Error < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
    Critical,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Sink for `(origin, level, message)` log triples.
pub trait Logger {
    /// Emit one log line.
    fn log(&mut self, origin: &str, level: LogLevel, message: &str);

    /// Whether `level` would be emitted.
    ///
    /// Lets callers skip formatting a message that the sink would drop.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }
}

/// Logger that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&mut self, _origin: &str, _level: LogLevel, _message: &str) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Serial logger over `esp-println` with a level threshold.
#[cfg(feature = "esp32-log")]
#[derive(Debug, Clone, Copy)]
pub struct SerialLogger {
    threshold: LogLevel,
}

#[cfg(feature = "esp32-log")]
impl SerialLogger {
    pub const fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }
}

#[cfg(feature = "esp32-log")]
impl Logger for SerialLogger {
    fn log(&mut self, origin: &str, level: LogLevel, message: &str) {
        if self.enabled(level) {
            esp_println::println!("{} {}: {}", level.as_str(), origin, message);
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.threshold
    }
}
