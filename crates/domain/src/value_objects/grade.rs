//! Grade value object - the ordinal power scale used by every physical stat.
//!
//! Grades run F < E < D < C < B < A < S < Ø. The scale is closed: there is no
//! way to hold a `Grade` that is not one of the eight variants, so every lookup
//! keyed by a grade is total over its grade axis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Number of grades on the scale.
pub const GRADE_COUNT: usize = 8;

/// A capability grade, ordered by power level.
///
/// `Ord` follows declaration order, which is also rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    F,
    E,
    D,
    C,
    B,
    A,
    S,
    /// The off-scale grade, rendered as `Ø`
    #[serde(rename = "Ø")]
    Null,
}

/// A color token used by the presentation layer when rendering a grade badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorToken(&'static str);

impl ColorToken {
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    /// The hex color string (e.g. `#9ca3af`)
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Grade {
    /// All grades in ascending power order.
    pub const ALL: [Grade; GRADE_COUNT] = [
        Grade::F,
        Grade::E,
        Grade::D,
        Grade::C,
        Grade::B,
        Grade::A,
        Grade::S,
        Grade::Null,
    ];

    /// Get all grades for UI dropdowns, weakest first
    pub fn all() -> &'static [Grade] {
        &Self::ALL
    }

    /// Numeric rank, 0 for F through 7 for Ø.
    pub const fn rank(self) -> u8 {
        match self {
            Grade::F => 0,
            Grade::E => 1,
            Grade::D => 2,
            Grade::C => 3,
            Grade::B => 4,
            Grade::A => 5,
            Grade::S => 6,
            Grade::Null => 7,
        }
    }

    /// Rank as an array index.
    pub const fn index(self) -> usize {
        self.rank() as usize
    }

    /// Construct a grade from its rank.
    pub fn from_rank(rank: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(rank as usize)
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Grade rank out of range: {}", rank)))
    }

    /// Single-character badge label.
    pub const fn label(self) -> char {
        match self {
            Grade::F => 'F',
            Grade::E => 'E',
            Grade::D => 'D',
            Grade::C => 'C',
            Grade::B => 'B',
            Grade::A => 'A',
            Grade::S => 'S',
            Grade::Null => 'Ø',
        }
    }

    /// Get a display name for the grade
    pub fn display_name(&self) -> &'static str {
        match self {
            Grade::F => "F-Grade",
            Grade::E => "E-Grade",
            Grade::D => "D-Grade",
            Grade::C => "C-Grade",
            Grade::B => "B-Grade",
            Grade::A => "A-Grade",
            Grade::S => "S-Grade",
            Grade::Null => "Null-Grade",
        }
    }

    /// Badge color for the grade
    pub const fn color(self) -> ColorToken {
        match self {
            Grade::F => ColorToken::new("#6b7280"),
            Grade::E => ColorToken::new("#9ca3af"),
            Grade::D => ColorToken::new("#22c55e"),
            Grade::C => ColorToken::new("#3b82f6"),
            Grade::B => ColorToken::new("#a855f7"),
            Grade::A => ColorToken::new("#f59e0b"),
            Grade::S => ColorToken::new("#ef4444"),
            Grade::Null => ColorToken::new("#f8fafc"),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<u8> for Grade {
    type Error = DomainError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::from_rank(rank)
    }
}

impl FromStr for Grade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "F" => Ok(Grade::F),
            "E" => Ok(Grade::E),
            "D" => Ok(Grade::D),
            "C" => Ok(Grade::C),
            "B" => Ok(Grade::B),
            "A" => Ok(Grade::A),
            "S" => Ok(Grade::S),
            // ASCII aliases for keyboards without Ø
            "Ø" | "0" | "NULL" => Ok(Grade::Null),
            _ => Err(DomainError::parse(format!("Unknown grade: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rank_is_bijection_onto_zero_to_seven() {
        let ranks: HashSet<u8> = Grade::ALL.iter().map(|g| g.rank()).collect();
        assert_eq!(ranks, (0..8).collect::<HashSet<u8>>());
    }

    #[test]
    fn test_rank_follows_power_order() {
        for pair in Grade::ALL.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Grade::F.rank(), 0);
        assert_eq!(Grade::Null.rank(), 7);
    }

    #[test]
    fn test_from_rank_round_trips_and_rejects_out_of_range() {
        for grade in Grade::ALL {
            assert_eq!(Grade::from_rank(grade.rank()), Ok(grade));
        }
        assert!(matches!(Grade::from_rank(8), Err(DomainError::Parse(_))));
        assert!(Grade::try_from(255u8).is_err());
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: HashSet<char> = Grade::ALL.iter().map(|g| g.label()).collect();
        assert_eq!(labels.len(), GRADE_COUNT);
        assert_eq!(Grade::Null.label(), 'Ø');
        assert_eq!(Grade::S.to_string(), "S");
    }

    #[test]
    fn test_colors_are_hex_tokens() {
        for grade in Grade::ALL {
            let color = grade.color().as_str();
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
        }
    }

    #[test]
    fn test_grade_parse() {
        assert_eq!("a".parse::<Grade>().unwrap(), Grade::A);
        assert_eq!(" S ".parse::<Grade>().unwrap(), Grade::S);
        assert_eq!("Ø".parse::<Grade>().unwrap(), Grade::Null);
        assert_eq!("ø".parse::<Grade>().unwrap(), Grade::Null);
        assert_eq!("null".parse::<Grade>().unwrap(), Grade::Null);
        assert!("G".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Grade::Null).unwrap(), "\"Ø\"");
        assert_eq!(serde_json::to_string(&Grade::B).unwrap(), "\"B\"");
        let parsed: Grade = serde_json::from_str("\"Ø\"").unwrap();
        assert_eq!(parsed, Grade::Null);
    }
}
