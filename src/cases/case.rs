use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub type CaseId = u64;

/// Area of consent law a case falls under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Category {
    #[serde(rename = "Data Sharing")]
    #[strum(serialize = "Data Sharing")]
    DataSharing,
    #[serde(rename = "Purpose Limitation")]
    #[strum(serialize = "Purpose Limitation")]
    PurposeLimitation,
    #[serde(rename = "Sensitive Data")]
    #[strum(serialize = "Sensitive Data")]
    SensitiveData,
    #[serde(rename = "Documentation")]
    #[strum(serialize = "Documentation")]
    Documentation,
    #[serde(rename = "Valid Consent")]
    #[strum(serialize = "Valid Consent")]
    ValidConsent,
    #[serde(rename = "Fairness")]
    #[strum(serialize = "Fairness")]
    Fairness,
    #[serde(rename = "Specificity")]
    #[strum(serialize = "Specificity")]
    Specificity,
    #[serde(rename = "Withdrawal of Consent")]
    #[strum(serialize = "Withdrawal of Consent")]
    WithdrawalOfConsent,
    #[serde(rename = "Profiling")]
    #[strum(serialize = "Profiling")]
    Profiling,
    #[serde(rename = "Children's Data")]
    #[strum(serialize = "Children's Data")]
    ChildrensData,
    #[serde(rename = "Data Retention")]
    #[strum(serialize = "Data Retention")]
    DataRetention,
    #[serde(rename = "Cross-border Transfer")]
    #[strum(serialize = "Cross-border Transfer")]
    CrossBorderTransfer,
    #[serde(rename = "Transparency")]
    #[strum(serialize = "Transparency")]
    Transparency,
    #[serde(rename = "Data Access")]
    #[strum(serialize = "Data Access")]
    DataAccess,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum ConsentStatus {
    #[serde(rename = "No Consent")]
    #[strum(serialize = "No Consent")]
    NoConsent,
    #[serde(rename = "Insufficient Consent")]
    #[strum(serialize = "Insufficient Consent")]
    InsufficientConsent,
    #[serde(rename = "Consent Obtained")]
    #[strum(serialize = "Consent Obtained")]
    ConsentObtained,
}

/// Risk label stored on a case. `Pending` marks a case nobody has labelled
/// yet; such cases are left out of every training snapshot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Assessment {
    #[serde(rename = "High Risk")]
    #[strum(serialize = "High Risk")]
    HighRisk,
    #[serde(rename = "Medium Risk")]
    #[strum(serialize = "Medium Risk")]
    MediumRisk,
    #[serde(rename = "Low Risk")]
    #[strum(serialize = "Low Risk")]
    LowRisk,
    #[default]
    #[serde(rename = "Pending")]
    #[strum(serialize = "Pending")]
    Pending,
}

/// Label space of the risk model. Unlike [`Assessment`] there is no pending
/// state, so a model can never predict one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum RiskTier {
    #[serde(rename = "High Risk")]
    #[strum(serialize = "High Risk")]
    High,
    #[serde(rename = "Medium Risk")]
    #[strum(serialize = "Medium Risk")]
    Medium,
    #[serde(rename = "Low Risk")]
    #[strum(serialize = "Low Risk")]
    Low,
}

impl RiskTier {
    pub const COUNT: usize = 3;

    #[inline]
    pub fn index(self) -> usize {
        match self {
            RiskTier::High => 0,
            RiskTier::Medium => 1,
            RiskTier::Low => 2,
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<RiskTier> {
        match index {
            0 => Some(RiskTier::High),
            1 => Some(RiskTier::Medium),
            2 => Some(RiskTier::Low),
            _ => None,
        }
    }
}

impl From<RiskTier> for Assessment {
    fn from(tier: RiskTier) -> Self {
        match tier {
            RiskTier::High => Assessment::HighRisk,
            RiskTier::Medium => Assessment::MediumRisk,
            RiskTier::Low => Assessment::LowRisk,
        }
    }
}

impl Assessment {
    /// The tier this assessment labels, or `None` while still pending.
    pub fn tier(self) -> Option<RiskTier> {
        match self {
            Assessment::HighRisk => Some(RiskTier::High),
            Assessment::MediumRisk => Some(RiskTier::Medium),
            Assessment::LowRisk => Some(RiskTier::Low),
            Assessment::Pending => None,
        }
    }

    pub fn is_pending(self) -> bool {
        matches!(self, Assessment::Pending)
    }
}

pub const PENDING_RESOLUTION: &str = "Pending";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: CaseId,
    pub description: String,
    pub category: Category,
    pub consent_status: ConsentStatus,
    pub ai_assessment: Assessment,
    pub resolution: String,
    pub date: NaiveDate,
}

impl CaseRecord {
    pub fn new(
        id: CaseId,
        description: impl Into<String>,
        category: Category,
        consent_status: ConsentStatus,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            category,
            consent_status,
            ai_assessment: Assessment::Pending,
            resolution: PENDING_RESOLUTION.to_string(),
            date,
        }
    }

    pub fn with_assessment(mut self, assessment: Assessment, resolution: impl Into<String>) -> Self {
        self.ai_assessment = assessment;
        self.resolution = resolution.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn fourteen_categories_with_readable_labels() {
        assert_eq!(Category::iter().count(), 14);
        assert_eq!(Category::ChildrensData.to_string(), "Children's Data");
        assert_eq!(
            Category::from_str("Cross-border Transfer").unwrap(),
            Category::CrossBorderTransfer
        );
    }

    #[test]
    fn pending_has_no_tier() {
        assert_eq!(Assessment::Pending.tier(), None);
        assert_eq!(Assessment::LowRisk.tier(), Some(RiskTier::Low));
        for tier in RiskTier::iter() {
            assert_eq!(Assessment::from(tier).tier(), Some(tier));
            assert_eq!(RiskTier::from_index(tier.index()), Some(tier));
        }
    }

    #[test]
    fn labels_serialize_as_displayed() {
        let json = serde_json::to_string(&ConsentStatus::InsufficientConsent).unwrap();
        assert_eq!(json, "\"Insufficient Consent\"");
        let back: Assessment = serde_json::from_str("\"Medium Risk\"").unwrap();
        assert_eq!(back, Assessment::MediumRisk);
    }

    #[test]
    fn new_record_is_pending() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let c = CaseRecord::new(7, "x", Category::Fairness, ConsentStatus::NoConsent, date);
        assert!(c.ai_assessment.is_pending());
        assert_eq!(c.resolution, PENDING_RESOLUTION);
    }
}
