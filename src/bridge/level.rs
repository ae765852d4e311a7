//! Foreign leveled-log levels and their canonical mapping

use crate::core::Severity;
use std::fmt;

/// Distance between a foreign level and its canonical ordinal.
///
/// Foreign `INFO` (0) lands on `Severity::Info` (9).
pub const LEVEL_OFFSET: i32 = 9;

/// Level of a foreign log call. Larger is more severe; any `i32` is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(pub i32);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);

    /// Canonical severity: `level + LEVEL_OFFSET`, clamped to the named
    /// range. Strictly increasing for levels `-8..=15`.
    pub fn to_severity(self) -> Severity {
        Severity::saturating_from_ordinal(i64::from(self.0) + i64::from(LEVEL_OFFSET))
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        level.to_severity()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, base) = if *self < Level::INFO {
            ("DEBUG", Level::DEBUG.0)
        } else if *self < Level::WARN {
            ("INFO", Level::INFO.0)
        } else if *self < Level::ERROR {
            ("WARN", Level::WARN.0)
        } else {
            ("ERROR", Level::ERROR.0)
        };
        let delta = i64::from(self.0) - i64::from(base);
        if delta == 0 {
            f.write_str(name)
        } else {
            write!(f, "{}{:+}", name, delta)
        }
    }
}
