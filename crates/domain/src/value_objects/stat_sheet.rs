//! StatSheet - the grades a single character holds on each physical stat.
//!
//! Display-only: grades are assigned by content authors and never combined or
//! averaged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Grade, StatCategory, StatSubcategory};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSheet {
    grades: BTreeMap<StatSubcategory, Grade>,
}

impl StatSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style grade assignment.
    pub fn with_grade(mut self, subcategory: StatSubcategory, grade: Grade) -> Self {
        self.set_grade(subcategory, grade);
        self
    }

    /// Assign a grade, returning the previous one if any.
    pub fn set_grade(&mut self, subcategory: StatSubcategory, grade: Grade) -> Option<Grade> {
        self.grades.insert(subcategory, grade)
    }

    pub fn clear_grade(&mut self, subcategory: StatSubcategory) -> Option<Grade> {
        self.grades.remove(&subcategory)
    }

    pub fn grade(&self, subcategory: StatSubcategory) -> Option<Grade> {
        self.grades.get(&subcategory).copied()
    }

    /// Graded subcategories in table order.
    pub fn iter(&self) -> impl Iterator<Item = (StatSubcategory, Grade)> + '_ {
        self.grades.iter().map(|(sub, grade)| (*sub, *grade))
    }

    /// Graded subcategories belonging to one category.
    pub fn in_category(
        &self,
        category: StatCategory,
    ) -> impl Iterator<Item = (StatSubcategory, Grade)> + '_ {
        self.iter().filter(move |(sub, _)| sub.category() == category)
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_grade_replaces_previous() {
        let mut sheet = StatSheet::new().with_grade(StatSubcategory::Speed, Grade::C);
        assert_eq!(sheet.set_grade(StatSubcategory::Speed, Grade::A), Some(Grade::C));
        assert_eq!(sheet.grade(StatSubcategory::Speed), Some(Grade::A));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_iter_follows_table_order() {
        let sheet = StatSheet::new()
            .with_grade(StatSubcategory::Learning, Grade::B)
            .with_grade(StatSubcategory::Lifting, Grade::S);
        let subs: Vec<_> = sheet.iter().map(|(sub, _)| sub).collect();
        assert_eq!(subs, vec![StatSubcategory::Lifting, StatSubcategory::Learning]);
    }

    #[test]
    fn test_in_category_filters() {
        let sheet = StatSheet::new()
            .with_grade(StatSubcategory::Toughness, Grade::D)
            .with_grade(StatSubcategory::Speed, Grade::E)
            .with_grade(StatSubcategory::Regeneration, Grade::Null);
        let durability: Vec<_> = sheet.in_category(StatCategory::Durability).collect();
        assert_eq!(
            durability,
            vec![
                (StatSubcategory::Toughness, Grade::D),
                (StatSubcategory::Regeneration, Grade::Null)
            ]
        );
    }

    #[test]
    fn test_serializes_as_label_map() {
        let sheet = StatSheet::new().with_grade(StatSubcategory::Striking, Grade::Null);
        let json = serde_json::to_value(&sheet).unwrap();
        assert_eq!(json["grades"]["striking"], "Ø");

        let back: StatSheet = serde_json::from_value(json).unwrap();
        assert_eq!(back, sheet);
    }
}
