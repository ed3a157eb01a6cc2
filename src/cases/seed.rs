use crate::cases::{Assessment, CaseRecord, Category, ConsentStatus};
use chrono::NaiveDate;

fn seed(
    id: u64,
    description: &str,
    category: Category,
    consent_status: ConsentStatus,
    assessment: Assessment,
    resolution: &str,
    (y, m, d): (i32, u32, u32),
) -> CaseRecord {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    CaseRecord::new(id, description, category, consent_status, date)
        .with_assessment(assessment, resolution)
}

/// The twenty labelled demonstration cases a session starts from.
pub fn seed_cases() -> Vec<CaseRecord> {
    vec![
        seed(
            1,
            "Unauthorized data sharing with third parties.",
            Category::DataSharing,
            ConsentStatus::NoConsent,
            Assessment::HighRisk,
            "Legal action initiated.",
            (2024, 1, 15),
        ),
        seed(
            2,
            "Use of data for unrelated purposes without consent.",
            Category::PurposeLimitation,
            ConsentStatus::InsufficientConsent,
            Assessment::MediumRisk,
            "Rectification of data usage.",
            (2024, 2, 20),
        ),
        seed(
            3,
            "Failure to obtain consent for sensitive data processing.",
            Category::SensitiveData,
            ConsentStatus::NoConsent,
            Assessment::HighRisk,
            "Data deletion and policy review.",
            (2024, 3, 10),
        ),
        seed(
            4,
            "Consent obtained but not properly documented.",
            Category::Documentation,
            ConsentStatus::ConsentObtained,
            Assessment::LowRisk,
            "Improved documentation process.",
            (2024, 4, 5),
        ),
        seed(
            5,
            "Use of pre-ticked boxes for consent.",
            Category::ValidConsent,
            ConsentStatus::ConsentObtained,
            Assessment::MediumRisk,
            "Change consent mechanism.",
            (2024, 5, 12),
        ),
        seed(
            6,
            "Denial of service for users refusing consent.",
            Category::Fairness,
            ConsentStatus::NoConsent,
            Assessment::HighRisk,
            "Service access restored.",
            (2024, 6, 18),
        ),
        seed(
            7,
            "Consent not specific enough for data processing.",
            Category::Specificity,
            ConsentStatus::InsufficientConsent,
            Assessment::MediumRisk,
            "Obtain specific consent.",
            (2024, 7, 22),
        ),
        seed(
            8,
            "Data processed for a new purpose without re-obtaining consent",
            Category::PurposeLimitation,
            ConsentStatus::NoConsent,
            Assessment::HighRisk,
            "Stop processing data for new purpose.",
            (2024, 8, 1),
        ),
        seed(
            9,
            "Sharing data with a subsidiary without explicit consent.",
            Category::DataSharing,
            ConsentStatus::InsufficientConsent,
            Assessment::MediumRisk,
            "Review data sharing agreement.",
            (2024, 9, 8),
        ),
        seed(
            10,
            "Failure to provide users with an option to withdraw consent.",
            Category::WithdrawalOfConsent,
            ConsentStatus::ConsentObtained,
            Assessment::MediumRisk,
            "Implement consent withdrawal mechanism.",
            (2024, 10, 15),
        ),
        seed(
            11,
            "Using data for profiling without explicit consent.",
            Category::Profiling,
            ConsentStatus::NoConsent,
            Assessment::HighRisk,
            "Stop profiling and delete associated data.",
            (2024, 11, 2),
        ),
        seed(
            12,
            "Consent request buried in lengthy terms and conditions.",
            Category::ValidConsent,
            ConsentStatus::ConsentObtained,
            Assessment::MediumRisk,
            "Make consent request prominent and clear.",
            (2024, 12, 9),
        ),
        seed(
            13,
            "Processing children's data without parental consent.",
            Category::ChildrensData,
            ConsentStatus::NoConsent,
            Assessment::HighRisk,
            "Delete data and obtain proper consent.",
            (2025, 1, 20),
        ),
        seed(
            14,
            "Storing data longer than necessary without explicit consent.",
            Category::DataRetention,
            ConsentStatus::InsufficientConsent,
            Assessment::MediumRisk,
            "Implement data retention policy.",
            (2025, 2, 28),
        ),
        seed(
            15,
            "Transferring data to a country with inadequate privacy laws.",
            Category::CrossBorderTransfer,
            ConsentStatus::NoConsent,
            Assessment::HighRisk,
            "Halt data transfer and review legal basis.",
            (2025, 3, 18),
        ),
        seed(
            16,
            "Using collected data for targeted advertising without consent.",
            Category::PurposeLimitation,
            ConsentStatus::NoConsent,
            Assessment::HighRisk,
            "Cease targeted advertising.",
            (2025, 4, 10),
        ),
        seed(
            17,
            "Failing to inform users about the purpose of data collection.",
            Category::Transparency,
            ConsentStatus::NoConsent,
            Assessment::MediumRisk,
            "Update privacy policy.",
            (2025, 5, 5),
        ),
        seed(
            18,
            "Obtaining consent through deceptive practices.",
            Category::ValidConsent,
            ConsentStatus::ConsentObtained,
            Assessment::HighRisk,
            "Revise consent process.",
            (2025, 6, 12),
        ),
        seed(
            19,
            "Using consent for one purpose to justify another, unrelated purpose.",
            Category::PurposeLimitation,
            ConsentStatus::NoConsent,
            Assessment::HighRisk,
            "Stop unauthorized data use.",
            (2025, 7, 1),
        ),
        seed(
            20,
            "Not providing a clear and easy way for users to access their data.",
            Category::DataAccess,
            ConsentStatus::InsufficientConsent,
            Assessment::MediumRisk,
            "Implement data access mechanism.",
            (2025, 8, 8),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_one_through_twenty() {
        let ids: Vec<u64> = seed_cases().iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn every_tier_is_represented() {
        let tiers: HashSet<_> = seed_cases()
            .iter()
            .filter_map(|c| c.ai_assessment.tier())
            .collect();
        assert_eq!(tiers.len(), 3);
    }

    #[test]
    fn dates_are_real() {
        let cases = seed_cases();
        assert_eq!(cases[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(cases[19].date, NaiveDate::from_ymd_opt(2025, 8, 8).unwrap());
    }
}
