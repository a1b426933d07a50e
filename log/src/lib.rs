use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Gold,
    Gray,
}

impl Color {
    const fn ansi(self) -> &'static str {
        match self {
            Color::Green => "\x1b[32m",
            Color::Red => "\x1b[31m",
            Color::Gold => "\x1b[33m",
            Color::Gray => "\x1b[90m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Verbosity, ordered from quietest to loudest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Trace = 3,
}

impl Level {
    const fn from_u8(level: u8) -> Level {
        match level {
            0 => Level::Error,
            1 => Level::Warn,
            2 => Level::Info,
            _ => Level::Trace,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Trace => "trace",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown log level '{}', expected one of: error, warn, info, trace", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "trace" => Ok(Level::Trace),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn level() -> Level {
    Level::from_u8(LEVEL.load(Ordering::Relaxed))
}

#[inline]
pub fn enabled(level: Level) -> bool {
    level <= self::level()
}

#[doc(hidden)]
pub fn append(level: Level, line: String, color: Color) {
    if enabled(level) {
        LOGGER
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .append(line, color);
    }
}

#[macro_export]
macro_rules! notify {
    () => {};

    ($($arg:tt)*) => {{
        $crate::append($crate::Level::Info, format!($($arg)*), $crate::Color::Green);
    }};
}

#[macro_export]
macro_rules! strong {
    () => {};

    ($($arg:tt)*) => {{
        $crate::append($crate::Level::Info, format!($($arg)*), $crate::Color::Red);
    }};
}

#[macro_export]
macro_rules! warning {
    () => {};

    ($($arg:tt)*) => {{
        $crate::append($crate::Level::Warn, format!($($arg)*), $crate::Color::Gold);
    }};
}

#[macro_export]
macro_rules! error {
    () => {};

    ($($arg:tt)*) => {{
        $crate::append($crate::Level::Error, format!($($arg)*), $crate::Color::Red);
    }};
}

#[macro_export]
macro_rules! trace {
    () => {};

    ($($arg:tt)*) => {{
        if $crate::enabled($crate::Level::Trace) {
            $crate::append($crate::Level::Trace, format!($($arg)*), $crate::Color::Gray);
        }
    }};
}

pub static LOGGER: Lazy<Mutex<Logger<300>>> = Lazy::new(|| Mutex::new(Logger::new()));

/// Fixed capacity ring buffer of log lines. Once full, the oldest line is overwritten.
pub struct Logger<const N: usize> {
    lines: [(String, Color); N],
    head: usize,
    len: usize,
}

impl<const N: usize> Logger<N> {
    pub fn new() -> Self {
        Self {
            lines: std::array::from_fn(|_| (String::new(), Color::Gray)),
            head: 0,
            len: 0,
        }
    }

    pub fn append(&mut self, line: String, color: Color) {
        self.lines[self.head] = (line + "\n", color);
        self.head = (self.head + 1) % N;
        self.len = (self.len + 1).min(N);
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn lines(&self) -> (&[(String, Color)], &[(String, Color)]) {
        if self.len < N {
            (&self.lines[0..self.len], &[])
        } else {
            // wrapped around, so we need to return two slices
            let (a, b) = self.lines.split_at(self.head);

            (b, a)
        }
    }

    /// Oldest to newest, without colors.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let (a, b) = self.lines();
        a.iter().chain(b).map(|(line, _)| line.trim_end_matches('\n'))
    }

    /// Every buffered line wrapped in ANSI color codes.
    pub fn format(&self) -> String {
        let (a, b) = self.lines();
        let mut out = String::new();

        for (line, color) in a.iter().chain(b) {
            out.push_str(color.ansi());
            out.push_str(line.trim_end_matches('\n'));
            out.push_str(RESET);
            out.push('\n');
        }

        out
    }

    /// Write out the formatted lines and empty the buffer.
    pub fn drain_to(&mut self, mut f: impl Write) -> io::Result<()> {
        f.write_all(self.format().as_bytes())?;
        f.flush()?;
        self.clear();
        Ok(())
    }
}

impl<const N: usize> Default for Logger<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut logger = Logger::<3>::new();
        for idx in 0..5 {
            logger.append(format!("line {idx}"), Color::Gray);
        }

        assert_eq!(logger.len(), 3);
        assert_eq!(logger.iter().collect::<Vec<_>>(), ["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn colors_every_line() {
        let mut logger = Logger::<4>::new();
        logger.append("ok".to_string(), Color::Green);
        logger.append("bad".to_string(), Color::Red);

        assert_eq!(logger.format(), "\x1b[32mok\x1b[0m\n\x1b[31mbad\x1b[0m\n");
    }

    #[test]
    fn drain_empties_the_buffer() {
        let mut logger = Logger::<4>::new();
        logger.append("first".to_string(), Color::Gold);

        let mut out = Vec::new();
        logger.drain_to(&mut out).unwrap();

        assert_eq!(out, b"\x1b[33mfirst\x1b[0m\n");
        assert!(logger.is_empty());
        assert_eq!(logger.format(), "");
    }

    #[test]
    fn levels_are_ordered() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Info < Level::Trace);
        assert_eq!("WARN".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("trace".parse::<Level>(), Ok(Level::Trace));
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn filter_by_level() {
        set_level(Level::Warn);
        assert!(enabled(Level::Error));
        assert!(enabled(Level::Warn));
        assert!(!enabled(Level::Info));
        set_level(Level::Info);
        assert_eq!(level(), Level::Info);
    }
}
