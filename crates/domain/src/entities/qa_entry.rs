//! QaEntry entity - a static question/answer pair from the wiki's reference pages

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QaEntry {
    /// Stable slug used in page anchors
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}
