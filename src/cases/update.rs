use crate::cases::{Assessment, CaseRecord, Category, ConsentStatus};
use chrono::NaiveDate;

/// Partial update of a case. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseUpdate {
    pub description: Option<String>,
    pub category: Option<Category>,
    pub consent_status: Option<ConsentStatus>,
    pub ai_assessment: Option<Assessment>,
    pub resolution: Option<String>,
    pub date: Option<NaiveDate>,
}

impl CaseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn consent_status(mut self, status: ConsentStatus) -> Self {
        self.consent_status = Some(status);
        self
    }

    pub fn ai_assessment(mut self, assessment: Assessment) -> Self {
        self.ai_assessment = Some(assessment);
        self
    }

    pub fn resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.category.is_none()
            && self.consent_status.is_none()
            && self.ai_assessment.is_none()
            && self.resolution.is_none()
            && self.date.is_none()
    }

    pub(crate) fn apply_to(&self, case: &mut CaseRecord) {
        if let Some(description) = &self.description {
            case.description.clone_from(description);
        }
        if let Some(category) = self.category {
            case.category = category;
        }
        if let Some(status) = self.consent_status {
            case.consent_status = status;
        }
        if let Some(assessment) = self.ai_assessment {
            case.ai_assessment = assessment;
        }
        if let Some(resolution) = &self.resolution {
            case.resolution.clone_from(resolution);
        }
        if let Some(date) = self.date {
            case.date = date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case() -> CaseRecord {
        CaseRecord::new(
            3,
            "before edit",
            Category::Profiling,
            ConsentStatus::NoConsent,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut c = case();
        let before = c.clone();
        let u = CaseUpdate::new();
        assert!(u.is_empty());
        u.apply_to(&mut c);
        assert_eq!(c, before);
    }

    #[test]
    fn only_named_fields_change() {
        let mut c = case();
        CaseUpdate::new()
            .resolution("Closed.")
            .consent_status(ConsentStatus::ConsentObtained)
            .apply_to(&mut c);

        assert_eq!(c.resolution, "Closed.");
        assert_eq!(c.consent_status, ConsentStatus::ConsentObtained);
        assert_eq!(c.description, "before edit");
        assert_eq!(c.category, Category::Profiling);
        assert_eq!(c.ai_assessment, Assessment::Pending);
        assert_eq!(c.id, 3);
    }
}
