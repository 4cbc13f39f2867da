use crate::content::faq::FAQ;
use crate::entities::QaEntry;
use crate::error::DomainError;

/// All reference Q&A entries in page order.
pub fn faq_entries() -> &'static [QaEntry] {
    FAQ
}

/// Look up one entry by slug.
pub fn find_faq(id: &str) -> Result<&'static QaEntry, DomainError> {
    FAQ.iter()
        .find(|entry| entry.id == id)
        .ok_or_else(|| DomainError::not_found("QaEntry", id))
}
