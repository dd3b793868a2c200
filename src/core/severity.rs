//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, least to most severe.
///
/// `All` and `Off` are threshold sentinels: a node with an `All` threshold
/// admits every record, a node with an `Off` threshold suppresses every
/// record, whatever its severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    All = 0,
    Finest = 1,
    Finer = 2,
    Fine = 3,
    Config = 4,
    #[default]
    Info = 5,
    Warning = 6,
    Severe = 7,
    Off = 8,
}

impl Severity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::All => "ALL",
            Severity::Finest => "FINEST",
            Severity::Finer => "FINER",
            Severity::Fine => "FINE",
            Severity::Config => "CONFIG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Severe => "SEVERE",
            Severity::Off => "OFF",
        }
    }

    /// Numeric rank used by the threshold comparison.
    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Whether a record at this severity passes the given threshold.
    ///
    /// This is the single filtering rule of the resolver: a record is
    /// emitted iff its severity is at least as severe as the threshold.
    /// An `Off` threshold suppresses every record, even one logged at
    /// `Off` itself.
    #[inline]
    pub fn passes(&self, threshold: Severity) -> bool {
        if threshold == Severity::Off {
            return false;
        }
        *self >= threshold
    }

    /// All severities usable as record levels or thresholds, ascending.
    pub const ALL_LEVELS: [Severity; 9] = [
        Severity::All,
        Severity::Finest,
        Severity::Finer,
        Severity::Fine,
        Severity::Config,
        Severity::Info,
        Severity::Warning,
        Severity::Severe,
        Severity::Off,
    ];

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::All | Severity::Finest => BrightBlack,
            Severity::Finer => Cyan,
            Severity::Fine => Blue,
            Severity::Config => Magenta,
            Severity::Info => Green,
            Severity::Warning => Yellow,
            Severity::Severe => Red,
            Severity::Off => BrightRed,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(Severity::All),
            "FINEST" => Ok(Severity::Finest),
            "FINER" => Ok(Severity::Finer),
            "FINE" => Ok(Severity::Fine),
            "CONFIG" => Ok(Severity::Config),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "SEVERE" => Ok(Severity::Severe),
            "OFF" => Ok(Severity::Off),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_matches_rank() {
        assert!(Severity::Fine < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Severe);
        assert!(Severity::Severe < Severity::Off);
        assert!(Severity::All < Severity::Finest);
    }

    #[test]
    fn test_passes_threshold() {
        assert!(Severity::Severe.passes(Severity::Info));
        assert!(Severity::Info.passes(Severity::Info));
        assert!(!Severity::Fine.passes(Severity::Info));

        // Off suppresses everything, All admits everything
        assert!(!Severity::Severe.passes(Severity::Off));
        assert!(!Severity::Off.passes(Severity::Off));
        assert!(Severity::Finest.passes(Severity::All));
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_warn_alias() {
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warning));
    }
}
