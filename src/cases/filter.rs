use crate::cases::{CaseRecord, Category, ConsentStatus};
use chrono::NaiveDate;

/// Conjunction of optional predicates used by [`CaseStore::list`].
///
/// Every field is independent; `None` means "don't filter on this". The date
/// bounds are inclusive.
///
/// [`CaseStore::list`]: crate::cases::CaseStore::list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseFilter {
    pub category: Option<Category>,
    pub consent_status: Option<ConsentStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl CaseFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn consent_status(mut self, status: ConsentStatus) -> Self {
        self.consent_status = Some(status);
        self
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    pub fn matches(&self, case: &CaseRecord) -> bool {
        self.category.is_none_or(|c| case.category == c)
            && self.consent_status.is_none_or(|s| case.consent_status == s)
            && self.from.is_none_or(|d| case.date >= d)
            && self.to.is_none_or(|d| case.date <= d)
    }
}
