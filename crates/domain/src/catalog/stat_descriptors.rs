//! Stat Descriptor Table - canonical text for every (subcategory, grade) pair.
//!
//! The table has a fixed shape of 20 × 8 cells, so every valid key maps to a
//! cell; a cell may still be unauthored. Authored cells are checked at compile
//! time to be non-empty.

use serde::Serialize;

use crate::content::stat_descriptions::{CategoryDescriptions, BY_CATEGORY};
use crate::error::DomainError;
use crate::value_objects::{
    Grade, StatCategory, StatDescription, StatSheet, StatSubcategory, CATEGORY_COUNT,
    GRADE_COUNT, SUBCATEGORIES_PER_CATEGORY, SUBCATEGORY_COUNT,
};

/// Row per subcategory (in `StatSubcategory::ALL` order), column per grade rank.
pub type DescriptorGrid = [[Option<&'static str>; GRADE_COUNT]; SUBCATEGORY_COUNT];

const fn flatten(by_category: &[CategoryDescriptions; CATEGORY_COUNT]) -> DescriptorGrid {
    let mut grid: DescriptorGrid = [[None; GRADE_COUNT]; SUBCATEGORY_COUNT];
    let mut c = 0;
    while c < CATEGORY_COUNT {
        let mut s = 0;
        while s < SUBCATEGORIES_PER_CATEGORY {
            grid[c * SUBCATEGORIES_PER_CATEGORY + s] = by_category[c][s];
            s += 1;
        }
        c += 1;
    }
    grid
}

const fn has_empty_description(grid: &DescriptorGrid) -> bool {
    let mut row = 0;
    while row < SUBCATEGORY_COUNT {
        let mut col = 0;
        while col < GRADE_COUNT {
            if let Some(text) = grid[row][col] {
                if text.is_empty() {
                    return true;
                }
            }
            col += 1;
        }
        row += 1;
    }
    false
}

static STAT_DESCRIPTIONS: DescriptorGrid = flatten(&BY_CATEGORY);

const _: () = assert!(
    !has_empty_description(&flatten(&BY_CATEGORY)),
    "an authored stat description is empty; use None for unauthored cells"
);

/// Summary of how much of the table is authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub authored: usize,
    pub total: usize,
    pub gaps: Vec<(StatSubcategory, Grade)>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }
}

/// One rendered line of a character's stat sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRow {
    pub category: StatCategory,
    pub subcategory: StatSubcategory,
    pub grade: Grade,
    pub description: StatDescription,
}

/// Read-only view over a descriptor grid.
#[derive(Debug, Clone, Copy)]
pub struct StatDescriptorTable {
    grid: &'static DescriptorGrid,
}

impl Default for StatDescriptorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StatDescriptorTable {
    /// The table compiled into this crate.
    pub fn builtin() -> Self {
        Self {
            grid: &STAT_DESCRIPTIONS,
        }
    }

    /// Wrap an arbitrary grid (content previews, tests).
    pub fn from_grid(grid: &'static DescriptorGrid) -> Self {
        Self { grid }
    }

    /// Look up the description for one stat at one grade.
    pub fn describe(&self, subcategory: StatSubcategory, grade: Grade) -> StatDescription {
        StatDescription::from(self.grid[subcategory.index()][grade.index()])
    }

    /// Every grade's description for a subcategory, weakest first.
    pub fn describe_all(
        &self,
        subcategory: StatSubcategory,
    ) -> impl Iterator<Item = (Grade, StatDescription)> + '_ {
        Grade::ALL
            .into_iter()
            .map(move |grade| (grade, self.describe(subcategory, grade)))
    }

    /// Descriptions for a whole category, grouped by subcategory.
    pub fn describe_category(
        &self,
        category: StatCategory,
        grade: Grade,
    ) -> [(StatSubcategory, StatDescription); SUBCATEGORIES_PER_CATEGORY] {
        category
            .subcategories()
            .map(|sub| (sub, self.describe(sub, grade)))
    }

    /// Pair each graded stat on a sheet with its description.
    pub fn describe_sheet(&self, sheet: &StatSheet) -> Vec<StatRow> {
        sheet
            .iter()
            .map(|(subcategory, grade)| StatRow {
                category: subcategory.category(),
                subcategory,
                grade,
                description: self.describe(subcategory, grade),
            })
            .collect()
    }

    /// Every (subcategory, grade) pair with no authored text.
    pub fn coverage_gaps(&self) -> Vec<(StatSubcategory, Grade)> {
        StatSubcategory::ALL
            .into_iter()
            .flat_map(|sub| Grade::ALL.into_iter().map(move |grade| (sub, grade)))
            .filter(|&(sub, grade)| !self.describe(sub, grade).is_authored())
            .collect()
    }

    pub fn coverage(&self) -> CoverageReport {
        let gaps = self.coverage_gaps();
        let total = SUBCATEGORY_COUNT * GRADE_COUNT;
        CoverageReport {
            authored: total - gaps.len(),
            total,
            gaps,
        }
    }

    /// Reject cells that hold an empty string instead of `None`.
    ///
    /// The builtin grid is already checked at compile time; this covers grids
    /// supplied through [`StatDescriptorTable::from_grid`].
    pub fn validate(&self) -> Result<(), DomainError> {
        for sub in StatSubcategory::ALL {
            for grade in Grade::ALL {
                if let Some(text) = self.grid[sub.index()][grade.index()] {
                    if text.trim().is_empty() {
                        return Err(DomainError::validation(format!(
                            "empty description for {} at grade {}",
                            sub.as_str(),
                            grade
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_layout_matches_enum_order() {
        for (c, category) in StatCategory::ALL.iter().enumerate() {
            for (s, sub) in category.subcategories().iter().enumerate() {
                assert_eq!(sub.index(), c * SUBCATEGORIES_PER_CATEGORY + s);
            }
        }
    }

    #[test]
    fn test_describe_is_total_and_never_empty() {
        let table = StatDescriptorTable::builtin();
        for sub in StatSubcategory::ALL {
            for grade in Grade::ALL {
                match table.describe(sub, grade) {
                    StatDescription::Authored(text) => assert!(!text.is_empty()),
                    StatDescription::Unavailable => {}
                }
            }
        }
    }

    #[test]
    fn test_describe_known_cells() {
        let table = StatDescriptorTable::builtin();
        assert_eq!(
            table.describe(StatSubcategory::Lifting, Grade::F),
            StatDescription::Authored("Struggles with a full backpack.")
        );
        assert_eq!(
            table.describe(StatSubcategory::Flexibility, Grade::Null),
            StatDescription::Unavailable
        );
    }

    #[test]
    fn test_partial_coverage_is_reported() {
        let report = StatDescriptorTable::builtin().coverage();
        assert_eq!(report.total, 160);
        assert_eq!(report.authored + report.gaps.len(), report.total);
        assert!(!report.is_complete());
        assert!(report.gaps.contains(&(StatSubcategory::Memory, Grade::Null)));
    }

    #[test]
    fn test_builtin_validates() {
        assert!(StatDescriptorTable::builtin().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_text() {
        let mut grid: DescriptorGrid = [[None; GRADE_COUNT]; SUBCATEGORY_COUNT];
        grid[StatSubcategory::Speed.index()][Grade::C.index()] = Some("   ");
        let table = StatDescriptorTable::from_grid(Box::leak(Box::new(grid)));

        let err = table.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("speed"));
    }

    #[test]
    fn test_blank_text_describes_as_unavailable() {
        let mut grid: DescriptorGrid = [[None; GRADE_COUNT]; SUBCATEGORY_COUNT];
        grid[StatSubcategory::Speed.index()][Grade::C.index()] = Some("   ");
        let table = StatDescriptorTable::from_grid(Box::leak(Box::new(grid)));

        assert_eq!(
            table.describe(StatSubcategory::Speed, Grade::C),
            StatDescription::Unavailable
        );
        assert!(table
            .coverage_gaps()
            .contains(&(StatSubcategory::Speed, Grade::C)));
    }

    #[test]
    fn test_describe_category_groups_subcategories() {
        let rows =
            StatDescriptorTable::builtin().describe_category(StatCategory::Agility, Grade::E);
        let subs: Vec<_> = rows.iter().map(|(sub, _)| *sub).collect();
        assert_eq!(subs, StatCategory::Agility.subcategories().to_vec());
        assert!(rows.iter().all(|(_, d)| d.is_authored()));
    }

    #[test]
    fn test_describe_sheet_marks_gaps() {
        let sheet = StatSheet::new()
            .with_grade(StatSubcategory::Lifting, Grade::B)
            .with_grade(StatSubcategory::Learning, Grade::S);
        let rows = StatDescriptorTable::builtin().describe_sheet(&sheet);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, StatCategory::Strength);
        assert!(rows[0].description.is_authored());
        assert_eq!(rows[1].category, StatCategory::Intelligence);
        assert_eq!(rows[1].description, StatDescription::Unavailable);
    }

    #[test]
    fn test_describe_all_walks_grades_in_order() {
        let grades: Vec<_> = StatDescriptorTable::builtin()
            .describe_all(StatSubcategory::Speed)
            .map(|(grade, _)| grade)
            .collect();
        assert_eq!(grades, Grade::ALL.to_vec());
    }
}
