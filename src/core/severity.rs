//! Canonical severity levels
//!
//! Six named tiers, each split into four steps, plus `Undefined`. The steps
//! let a foreign logging API with finer-grained levels keep its ordering
//! after it is bridged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Severity {
    #[default]
    Undefined = 0,
    Trace = 1,
    Trace2 = 2,
    Trace3 = 3,
    Trace4 = 4,
    Debug = 5,
    Debug2 = 6,
    Debug3 = 7,
    Debug4 = 8,
    Info = 9,
    Info2 = 10,
    Info3 = 11,
    Info4 = 12,
    Warn = 13,
    Warn2 = 14,
    Warn3 = 15,
    Warn4 = 16,
    Error = 17,
    Error2 = 18,
    Error3 = 19,
    Error4 = 20,
    Fatal = 21,
    Fatal2 = 22,
    Fatal3 = 23,
    Fatal4 = 24,
}

impl Severity {
    /// Every severity in ordinal order, starting with `Undefined`.
    pub const ALL: [Severity; 25] = [
        Severity::Undefined,
        Severity::Trace,
        Severity::Trace2,
        Severity::Trace3,
        Severity::Trace4,
        Severity::Debug,
        Severity::Debug2,
        Severity::Debug3,
        Severity::Debug4,
        Severity::Info,
        Severity::Info2,
        Severity::Info3,
        Severity::Info4,
        Severity::Warn,
        Severity::Warn2,
        Severity::Warn3,
        Severity::Warn4,
        Severity::Error,
        Severity::Error2,
        Severity::Error3,
        Severity::Error4,
        Severity::Fatal,
        Severity::Fatal2,
        Severity::Fatal3,
        Severity::Fatal4,
    ];

    /// Lowest named severity.
    pub const MIN: Severity = Severity::Trace;

    /// Highest named severity.
    pub const MAX: Severity = Severity::Fatal4;

    /// Canonical name, e.g. `"Info"` or `"Warn3"`.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Undefined => "Undefined",
            Severity::Trace => "Trace",
            Severity::Trace2 => "Trace2",
            Severity::Trace3 => "Trace3",
            Severity::Trace4 => "Trace4",
            Severity::Debug => "Debug",
            Severity::Debug2 => "Debug2",
            Severity::Debug3 => "Debug3",
            Severity::Debug4 => "Debug4",
            Severity::Info => "Info",
            Severity::Info2 => "Info2",
            Severity::Info3 => "Info3",
            Severity::Info4 => "Info4",
            Severity::Warn => "Warn",
            Severity::Warn2 => "Warn2",
            Severity::Warn3 => "Warn3",
            Severity::Warn4 => "Warn4",
            Severity::Error => "Error",
            Severity::Error2 => "Error2",
            Severity::Error3 => "Error3",
            Severity::Error4 => "Error4",
            Severity::Fatal => "Fatal",
            Severity::Fatal2 => "Fatal2",
            Severity::Fatal3 => "Fatal3",
            Severity::Fatal4 => "Fatal4",
        }
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Map an arbitrary ordinal onto the named range, clamping values below
    /// `Trace` or above `Fatal4`.
    pub fn saturating_from_ordinal(ordinal: i64) -> Self {
        let clamped = ordinal.clamp(i64::from(Self::MIN as u8), i64::from(Self::MAX as u8));
        Self::ALL[clamped as usize]
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::{Blue, BrightBlack, BrightRed, Green, Red, White, Yellow};
        match self.ordinal() {
            0 => White,
            1..=4 => BrightBlack,
            5..=8 => Blue,
            9..=12 => Green,
            13..=16 => Yellow,
            17..=20 => Red,
            _ => BrightRed,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|severity| severity.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Invalid severity: '{}'", s))
    }
}
