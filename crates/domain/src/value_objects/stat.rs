//! Stat value objects - the physical stat axes a character is graded on.
//!
//! Five categories each own exactly four subcategories. Membership is fixed at
//! compile time by `StatCategory::subcategories` and `StatSubcategory::category`,
//! and the tests below check the two agree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Number of stat categories.
pub const CATEGORY_COUNT: usize = 5;

/// Number of subcategories per category.
pub const SUBCATEGORIES_PER_CATEGORY: usize = 4;

/// Total number of subcategories.
pub const SUBCATEGORY_COUNT: usize = 20;

/// Physical stat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatCategory {
    /// Raw physical power
    Strength,
    /// Capacity to absorb punishment
    Durability,
    /// Speed and freedom of movement
    Agility,
    /// Control and accuracy
    Precision,
    /// Combat-relevant thinking
    Intelligence,
}

impl StatCategory {
    pub const ALL: [StatCategory; CATEGORY_COUNT] = [
        StatCategory::Strength,
        StatCategory::Durability,
        StatCategory::Agility,
        StatCategory::Precision,
        StatCategory::Intelligence,
    ];

    /// Returns the kebab-case identifier (e.g., "strength").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Durability => "durability",
            Self::Agility => "agility",
            Self::Precision => "precision",
            Self::Intelligence => "intelligence",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Durability => "Durability",
            Self::Agility => "Agility",
            Self::Precision => "Precision",
            Self::Intelligence => "Intelligence",
        }
    }

    /// Header text shown above the category on a stat page.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Strength => "How much force a character can produce and apply.",
            Self::Durability => "How much punishment a character can take and recover from.",
            Self::Agility => "How fast and freely a character moves.",
            Self::Precision => "How exactly a character places every action.",
            Self::Intelligence => "How well a character thinks while under pressure.",
        }
    }

    /// The four subcategories owned by this category.
    pub const fn subcategories(self) -> [StatSubcategory; SUBCATEGORIES_PER_CATEGORY] {
        use StatSubcategory::*;
        match self {
            Self::Strength => [Lifting, Striking, Grappling, Throwing],
            Self::Durability => [Toughness, Endurance, Regeneration, Resistance],
            Self::Agility => [Speed, Reflexes, Flexibility, Balance],
            Self::Precision => [Accuracy, Dexterity, Perception, Timing],
            Self::Intelligence => [Reasoning, Memory, Tactics, Learning],
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for StatCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| DomainError::parse(format!("Unknown stat category: {}", s)))
    }
}

/// Fine-grained physical capability axis.
///
/// Declaration order groups subcategories by category, which `index` relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatSubcategory {
    // Strength
    Lifting,
    Striking,
    Grappling,
    Throwing,
    // Durability
    Toughness,
    Endurance,
    Regeneration,
    Resistance,
    // Agility
    Speed,
    Reflexes,
    Flexibility,
    Balance,
    // Precision
    Accuracy,
    Dexterity,
    Perception,
    Timing,
    // Intelligence
    Reasoning,
    Memory,
    Tactics,
    Learning,
}

impl StatSubcategory {
    pub const ALL: [StatSubcategory; SUBCATEGORY_COUNT] = [
        Self::Lifting,
        Self::Striking,
        Self::Grappling,
        Self::Throwing,
        Self::Toughness,
        Self::Endurance,
        Self::Regeneration,
        Self::Resistance,
        Self::Speed,
        Self::Reflexes,
        Self::Flexibility,
        Self::Balance,
        Self::Accuracy,
        Self::Dexterity,
        Self::Perception,
        Self::Timing,
        Self::Reasoning,
        Self::Memory,
        Self::Tactics,
        Self::Learning,
    ];

    /// Position in `ALL`, used as the row index of the descriptor table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The category that owns this subcategory.
    pub const fn category(self) -> StatCategory {
        match self {
            Self::Lifting | Self::Striking | Self::Grappling | Self::Throwing => {
                StatCategory::Strength
            }
            Self::Toughness | Self::Endurance | Self::Regeneration | Self::Resistance => {
                StatCategory::Durability
            }
            Self::Speed | Self::Reflexes | Self::Flexibility | Self::Balance => {
                StatCategory::Agility
            }
            Self::Accuracy | Self::Dexterity | Self::Perception | Self::Timing => {
                StatCategory::Precision
            }
            Self::Reasoning | Self::Memory | Self::Tactics | Self::Learning => {
                StatCategory::Intelligence
            }
        }
    }

    /// Returns the kebab-case identifier (e.g., "lifting").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lifting => "lifting",
            Self::Striking => "striking",
            Self::Grappling => "grappling",
            Self::Throwing => "throwing",
            Self::Toughness => "toughness",
            Self::Endurance => "endurance",
            Self::Regeneration => "regeneration",
            Self::Resistance => "resistance",
            Self::Speed => "speed",
            Self::Reflexes => "reflexes",
            Self::Flexibility => "flexibility",
            Self::Balance => "balance",
            Self::Accuracy => "accuracy",
            Self::Dexterity => "dexterity",
            Self::Perception => "perception",
            Self::Timing => "timing",
            Self::Reasoning => "reasoning",
            Self::Memory => "memory",
            Self::Tactics => "tactics",
            Self::Learning => "learning",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Lifting => "Lifting",
            Self::Striking => "Striking",
            Self::Grappling => "Grappling",
            Self::Throwing => "Throwing",
            Self::Toughness => "Toughness",
            Self::Endurance => "Endurance",
            Self::Regeneration => "Regeneration",
            Self::Resistance => "Resistance",
            Self::Speed => "Speed",
            Self::Reflexes => "Reflexes",
            Self::Flexibility => "Flexibility",
            Self::Balance => "Balance",
            Self::Accuracy => "Accuracy",
            Self::Dexterity => "Dexterity",
            Self::Perception => "Perception",
            Self::Timing => "Timing",
            Self::Reasoning => "Reasoning",
            Self::Memory => "Memory",
            Self::Tactics => "Tactics",
            Self::Learning => "Learning",
        }
    }

    /// One-line explanation of what the axis measures.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Lifting => "Weight that can be lifted, carried, or held in place.",
            Self::Striking => "Force delivered by a single blow.",
            Self::Grappling => "Ability to hold, pin, or overpower at close range.",
            Self::Throwing => "Mass and distance of thrown objects.",
            Self::Toughness => "Damage the body can absorb before it breaks.",
            Self::Endurance => "How long peak effort can be sustained.",
            Self::Regeneration => "How quickly injuries close and lost tissue returns.",
            Self::Resistance => "Protection against heat, cold, poison, and energy.",
            Self::Speed => "Top movement speed over ground or air.",
            Self::Reflexes => "Reaction time to sudden threats.",
            Self::Flexibility => "Range of motion and contortion.",
            Self::Balance => "Footing and body control on unstable ground.",
            Self::Accuracy => "How reliably attacks land where intended.",
            Self::Dexterity => "Fine motor control of hands and tools.",
            Self::Perception => "Detail picked up by the senses.",
            Self::Timing => "Placing an action at exactly the right instant.",
            Self::Reasoning => "Working through problems logically.",
            Self::Memory => "Recall of facts, faces, and techniques.",
            Self::Tactics => "Reading and shaping a fight as it unfolds.",
            Self::Learning => "How quickly new skills are absorbed.",
        }
    }
}

impl fmt::Display for StatSubcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for StatSubcategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sub| sub.as_str() == needle)
            .ok_or_else(|| DomainError::parse(format!("Unknown stat subcategory: {}", s)))
    }
}
