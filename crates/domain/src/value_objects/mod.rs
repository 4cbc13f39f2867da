//! Value objects - Immutable objects defined by their attributes

mod grade;
mod stat;
mod stat_description;
mod stat_sheet;

pub use grade::{ColorToken, Grade, GRADE_COUNT};
pub use stat::{
    StatCategory, StatSubcategory, CATEGORY_COUNT, SUBCATEGORIES_PER_CATEGORY, SUBCATEGORY_COUNT,
};
pub use stat_description::{StatDescription, NO_DESCRIPTION};
pub use stat_sheet::StatSheet;
