//! Bitmask log levels
//!
//! A [`Level`] is a set of severities rather than a single cutoff. Each of the
//! seven canonical severities owns one bit, ordered from least verbose
//! ([`Level::PANIC`]) to most verbose ([`Level::TRACE`]). Backends turn a
//! configured value into an active set with [`Level::cumulative`], which gives
//! the familiar "this severity and everything less verbose" behavior.
//!
//! # Examples
//!
//! ```
//! use rust_level_logger::Level;
//!
//! let level: Level = "error|debug".parse().unwrap();
//! assert!(level.has(Level::ERROR));
//! assert!(!level.has(Level::INFO));
//! assert_eq!(level.format().unwrap(), "error|debug");
//!
//! let active = Level::DEBUG.cumulative();
//! assert!(active.has(Level::INFO));
//! assert!(!active.has(Level::TRACE));
//! ```

use super::error::{LoggerError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

/// Separator between severity names in the text form of a level
pub const LEVEL_SEPARATOR: char = '|';

/// Number of canonical severities
pub const LEVEL_COUNT: usize = 7;

/// Label returned by [`Level::fixed_label`] for non-canonical values
pub const OTHER_LABEL: &str = "OTHER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Level(u32);

impl Level {
    pub const PANIC: Level = Level(1);
    pub const FATAL: Level = Level(1 << 1);
    pub const ERROR: Level = Level(1 << 2);
    pub const WARN: Level = Level(1 << 3);
    pub const INFO: Level = Level(1 << 4);
    pub const DEBUG: Level = Level(1 << 5);
    pub const TRACE: Level = Level(1 << 6);

    /// Union of every canonical severity
    pub const ALL: Level = Level(
        Self::PANIC.0
            | Self::FATAL.0
            | Self::ERROR.0
            | Self::WARN.0
            | Self::INFO.0
            | Self::DEBUG.0
            | Self::TRACE.0,
    );

    /// The empty set
    pub const NONE: Level = Level(0);

    const CANONICAL: [Level; LEVEL_COUNT] = [
        Self::PANIC,
        Self::FATAL,
        Self::ERROR,
        Self::WARN,
        Self::INFO,
        Self::DEBUG,
        Self::TRACE,
    ];

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Level(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The canonical severities, least verbose first
    pub fn levels() -> &'static [Level] {
        &Self::CANONICAL
    }

    /// True if any bit of `flag` is present
    #[inline]
    #[must_use]
    pub const fn has(self, flag: Level) -> bool {
        self.0 & flag.0 != 0
    }

    #[inline]
    pub fn set(&mut self, flag: Level) {
        self.0 |= flag.0;
    }

    #[inline]
    pub fn clear(&mut self, flag: Level) {
        self.0 &= !flag.0;
    }

    #[inline]
    pub fn toggle(&mut self, flag: Level) {
        self.0 ^= flag.0;
    }

    /// Position of a single canonical bit in the canonical order
    fn index(self) -> Option<usize> {
        Self::CANONICAL.iter().position(|lv| *lv == self)
    }

    fn name(self) -> Option<&'static str> {
        self.index().map(|idx| {
            ["panic", "fatal", "error", "warn", "info", "debug", "trace"][idx]
        })
    }

    fn from_token(token: &str) -> Option<Level> {
        match token {
            "panic" => Some(Self::PANIC),
            "fatal" => Some(Self::FATAL),
            "error" => Some(Self::ERROR),
            "warn" => Some(Self::WARN),
            "info" => Some(Self::INFO),
            "debug" => Some(Self::DEBUG),
            "trace" => Some(Self::TRACE),
            "all" => Some(Self::ALL),
            _ => None,
        }
    }

    /// Parse a severity name, `all`, or a `|`-separated list of them.
    ///
    /// Matching is case-insensitive and unrecognized tokens are skipped. Fails
    /// only when nothing matched at all.
    pub fn parse(text: &str) -> Result<Level> {
        let lowered = text.to_lowercase();
        if let Some(level) = Self::from_token(&lowered) {
            return Ok(level);
        }

        let mut level = Level::NONE;
        for token in lowered.split(LEVEL_SEPARATOR) {
            if let Some(lv) = Self::from_token(token.trim()) {
                level.set(lv);
            }
        }

        if level.is_empty() {
            return Err(LoggerError::unknown_level(text));
        }
        Ok(level)
    }

    /// `|`-joined names of the active canonical severities, least verbose first
    pub fn format(self) -> Result<String> {
        let names: Vec<&str> = Self::CANONICAL
            .iter()
            .filter(|lv| self.has(**lv))
            .filter_map(|lv| lv.name())
            .collect();

        if names.is_empty() {
            return Err(LoggerError::InvalidLevel(self.0));
        }
        Ok(names.join(&LEVEL_SEPARATOR.to_string()))
    }

    /// Five-character label for a single canonical severity, `OTHER` otherwise
    #[must_use]
    pub fn fixed_label(self) -> &'static str {
        match self {
            Self::PANIC => "PANIC",
            Self::FATAL => "FATAL",
            Self::ERROR => "ERROR",
            Self::WARN => "WARNN",
            Self::INFO => "INFOO",
            Self::DEBUG => "DEBUG",
            Self::TRACE => "TRACE",
            _ => OTHER_LABEL,
        }
    }

    /// Most verbose canonical severity present, if any
    #[must_use]
    pub fn most_verbose(self) -> Option<Level> {
        Self::CANONICAL.iter().rev().copied().find(|lv| self.has(*lv))
    }

    /// Every canonical severity from `PANIC` up to the most verbose one present.
    ///
    /// `DEBUG` alone activates `PANIC` through `DEBUG`. A value with no
    /// canonical bit yields the empty set.
    #[must_use]
    pub fn cumulative(self) -> Level {
        let Some(idx) = self.most_verbose().and_then(Level::index) else {
            return Level::NONE;
        };
        Self::CANONICAL[..=idx]
            .iter()
            .fold(Level::NONE, |acc, lv| acc | *lv)
    }

    #[cfg(feature = "console")]
    pub fn color(self) -> colored::Color {
        use colored::Color::*;
        match self {
            Self::PANIC => BrightRed,
            Self::FATAL => BrightMagenta,
            Self::ERROR => Red,
            Self::WARN => Yellow,
            Self::INFO => Green,
            Self::DEBUG => Blue,
            Self::TRACE => Cyan,
            _ => White,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format() {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str("unknown"),
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Level::parse(s)
    }
}

impl BitOr for Level {
    type Output = Level;

    fn bitor(self, rhs: Level) -> Level {
        Level(self.0 | rhs.0)
    }
}

impl BitOrAssign for Level {
    fn bitor_assign(&mut self, rhs: Level) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Level {
    type Output = Level;

    fn bitand(self, rhs: Level) -> Level {
        Level(self.0 & rhs.0)
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let text = self.format().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Level::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bits_are_distinct() {
        let mut seen = Level::NONE;
        for lv in Level::levels() {
            assert_eq!(lv.bits().count_ones(), 1);
            assert!(!seen.has(*lv));
            seen.set(*lv);
        }
        assert_eq!(seen, Level::ALL);
    }

    #[test]
    fn test_set_has_clear_toggle() {
        let mut level = Level::NONE;
        level.set(Level::WARN);
        assert!(level.has(Level::WARN));
        assert!(!level.has(Level::ERROR));

        // combined flags match if any bit is present
        assert!(level.has(Level::WARN | Level::TRACE));

        level.toggle(Level::INFO | Level::WARN);
        assert!(level.has(Level::INFO));
        assert!(!level.has(Level::WARN));

        level.clear(Level::INFO);
        assert!(level.is_empty());
    }

    #[test]
    fn test_parse_single_and_all() {
        assert_eq!(Level::parse("debug").unwrap(), Level::DEBUG);
        assert_eq!(Level::parse("WARN").unwrap(), Level::WARN);
        assert_eq!(Level::parse("all").unwrap(), Level::ALL);
    }

    #[test]
    fn test_parse_combined_skips_unknown_tokens() {
        let level = Level::parse("error|bogus|trace").unwrap();
        assert_eq!(level, Level::ERROR | Level::TRACE);

        let level = Level::parse("info | debug").unwrap();
        assert_eq!(level, Level::INFO | Level::DEBUG);
    }

    #[test]
    fn test_parse_nothing_matched() {
        let err = Level::parse("verbose|loud").unwrap_err();
        assert!(matches!(err, LoggerError::UnknownLevel(ref s) if s == "verbose|loud"));
        assert!(Level::parse("").is_err());
    }

    #[test]
    fn test_format_canonical_order() {
        let level = Level::TRACE | Level::PANIC | Level::WARN;
        assert_eq!(level.format().unwrap(), "panic|warn|trace");
        assert_eq!(
            Level::ALL.format().unwrap(),
            "panic|fatal|error|warn|info|debug|trace"
        );
    }

    #[test]
    fn test_format_zero_fails() {
        assert!(matches!(Level::NONE.format(), Err(LoggerError::InvalidLevel(0))));
        assert!(Level::from_bits(1 << 12).format().is_err());
        assert_eq!(Level::NONE.to_string(), "unknown");
    }

    #[test]
    fn test_fixed_label() {
        assert_eq!(Level::PANIC.fixed_label(), "PANIC");
        assert_eq!(Level::WARN.fixed_label(), "WARNN");
        assert_eq!(Level::INFO.fixed_label(), "INFOO");
        assert_eq!(Level::TRACE.fixed_label(), "TRACE");
        assert_eq!(Level::NONE.fixed_label(), "OTHER");
        assert_eq!((Level::INFO | Level::DEBUG).fixed_label(), "OTHER");
        assert_eq!(Level::from_bits(1 << 20).fixed_label(), "OTHER");
        for lv in Level::levels() {
            assert_eq!(lv.fixed_label().len(), 5);
        }
    }

    #[test]
    fn test_cumulative_debug() {
        let active = Level::DEBUG.cumulative();
        for lv in [Level::PANIC, Level::FATAL, Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG] {
            assert!(active.has(lv), "{} should be active", lv);
        }
        assert!(!active.has(Level::TRACE));
    }

    #[test]
    fn test_cumulative_uses_most_verbose_bit() {
        assert_eq!((Level::PANIC | Level::WARN).cumulative(), Level::WARN.cumulative());
        assert_eq!(Level::TRACE.cumulative(), Level::ALL);
        assert_eq!(Level::PANIC.cumulative(), Level::PANIC);
        assert_eq!(Level::NONE.cumulative(), Level::NONE);
        assert_eq!(Level::from_bits(1 << 9).cumulative(), Level::NONE);
    }

    #[test]
    fn test_serde_as_text() {
        let json = serde_json::to_string(&(Level::ERROR | Level::INFO)).unwrap();
        assert_eq!(json, "\"error|info\"");

        let level: Level = serde_json::from_str("\"warn|debug\"").unwrap();
        assert_eq!(level, Level::WARN | Level::DEBUG);

        assert!(serde_json::to_string(&Level::NONE).is_err());
        assert!(serde_json::from_str::<Level>("\"nope\"").is_err());
    }
}
