use std::{fmt, str::FromStr};

use crate::critical_value::{
    CONFIDENCE_80, CONFIDENCE_90, CONFIDENCE_95, CONFIDENCE_98, CONFIDENCE_99, CriticalValueTable,
};

/// Confidence level used to pick the Student-t critical values.
///
/// Levels are conventionally numbered 1 to 5, from the most lenient to the most
/// conservative. Each variant is named after the two-tailed confidence of its column
/// in the critical value table.
///
/// # Examples
///
/// ```
/// use tautest_core::Strictness;
///
/// let strictness: Strictness = "4".parse().unwrap();
/// assert_eq!(strictness, Strictness::Confidence98);
/// assert_eq!(strictness.level(), 4);
/// assert_eq!(Strictness::default(), Strictness::Confidence95);
/// assert!(Strictness::try_from(6).is_err());
/// ```
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Strictness {
    /// Level 1: two-tailed 80% (one-tailed 90%).
    Confidence80,
    /// Level 2: two-tailed 90% (one-tailed 95%).
    Confidence90,
    /// Level 3: two-tailed 95%.
    #[default]
    Confidence95,
    /// Level 4: two-tailed 98% (one-tailed 99%).
    Confidence98,
    /// Level 5: two-tailed 99% (one-tailed 99.5%).
    Confidence99,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StrictnessError {
    #[display("unsupported strictness level {level}; expected 1 to 5")]
    OutOfRange { level: u8 },
    #[display("unrecognized strictness '{input}'; expected 1 to 5 or a name like 'confidence95'")]
    Unrecognized { input: String },
}

impl Strictness {
    pub const ALL: [Self; 5] = [
        Self::Confidence80,
        Self::Confidence90,
        Self::Confidence95,
        Self::Confidence98,
        Self::Confidence99,
    ];

    /// Converts a numeric level (1 to 5) into a strictness.
    pub const fn from_level(level: u8) -> Result<Self, StrictnessError> {
        match level {
            1 => Ok(Self::Confidence80),
            2 => Ok(Self::Confidence90),
            3 => Ok(Self::Confidence95),
            4 => Ok(Self::Confidence98),
            5 => Ok(Self::Confidence99),
            _ => Err(StrictnessError::OutOfRange { level }),
        }
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Confidence80 => 1,
            Self::Confidence90 => 2,
            Self::Confidence95 => 3,
            Self::Confidence98 => 4,
            Self::Confidence99 => 5,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Confidence80 => "confidence80",
            Self::Confidence90 => "confidence90",
            Self::Confidence95 => "confidence95",
            Self::Confidence98 => "confidence98",
            Self::Confidence99 => "confidence99",
        }
    }

    /// Two-tailed confidence in percent.
    #[must_use]
    pub const fn two_tailed_confidence(self) -> f64 {
        match self {
            Self::Confidence80 => 80.0,
            Self::Confidence90 => 90.0,
            Self::Confidence95 => 95.0,
            Self::Confidence98 => 98.0,
            Self::Confidence99 => 99.0,
        }
    }

    /// The critical value column for this level.
    #[must_use]
    pub fn critical_values(self) -> &'static CriticalValueTable {
        match self {
            Self::Confidence80 => &CONFIDENCE_80,
            Self::Confidence90 => &CONFIDENCE_90,
            Self::Confidence95 => &CONFIDENCE_95,
            Self::Confidence98 => &CONFIDENCE_98,
            Self::Confidence99 => &CONFIDENCE_99,
        }
    }
}

impl TryFrom<u8> for Strictness {
    type Error = StrictnessError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level)
    }
}

impl From<Strictness> for u8 {
    fn from(strictness: Strictness) -> Self {
        strictness.level()
    }
}

impl FromStr for Strictness {
    type Err = StrictnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(level) = s.parse::<u8>() {
            return Self::from_level(level);
        }
        Self::ALL
            .into_iter()
            .find(|strictness| strictness.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| StrictnessError::Unrecognized {
                input: s.to_owned(),
            })
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}% two-tailed)",
            self.level(),
            self.two_tailed_confidence()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_round_trip() {
        for strictness in Strictness::ALL {
            assert_eq!(Strictness::from_level(strictness.level()), Ok(strictness));
        }
    }

    #[test]
    fn test_out_of_range_levels() {
        assert_eq!(
            Strictness::try_from(0),
            Err(StrictnessError::OutOfRange { level: 0 })
        );
        assert_eq!(
            Strictness::try_from(6),
            Err(StrictnessError::OutOfRange { level: 6 })
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("1".parse(), Ok(Strictness::Confidence80));
        assert_eq!(" 5 ".parse(), Ok(Strictness::Confidence99));
        assert_eq!("Confidence90".parse(), Ok(Strictness::Confidence90));
        assert_eq!(
            "6".parse::<Strictness>(),
            Err(StrictnessError::OutOfRange { level: 6 })
        );
        assert!(matches!(
            "strict".parse::<Strictness>(),
            Err(StrictnessError::Unrecognized { .. })
        ));
        assert!(matches!(
            "-1".parse::<Strictness>(),
            Err(StrictnessError::Unrecognized { .. })
        ));
    }

    #[test]
    fn test_serde_uses_level() {
        let json = serde_json::to_string(&Strictness::Confidence98).unwrap();
        assert_eq!(json, "4");
        let parsed: Strictness = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, Strictness::Confidence90);
        assert!(serde_json::from_str::<Strictness>("0").is_err());
    }
}
