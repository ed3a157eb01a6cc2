use crate::cases::{CaseFilter, CaseId, CaseRecord, CaseUpdate, Category, ConsentStatus, RiskTier};
use chrono::{Local, NaiveDate};

/// One `(description, tier)` pair of a training snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPair {
    pub description: String,
    pub tier: RiskTier,
}

impl TrainingPair {
    pub fn new(description: impl Into<String>, tier: RiskTier) -> Self {
        Self {
            description: description.into(),
            tier,
        }
    }
}

/// In-memory, insertion-ordered collection of case records.
///
/// Ids are assigned as `max(existing) + 1`, so an id freed by a delete of the
/// newest record may be handed out again; ids are never shared by two live
/// records.
#[derive(Debug, Clone, Default)]
pub struct CaseStore {
    cases: Vec<CaseRecord>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cases(cases: Vec<CaseRecord>) -> Self {
        Self { cases }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaseRecord> {
        self.cases.iter()
    }

    pub fn get(&self, id: CaseId) -> Option<&CaseRecord> {
        self.cases.iter().find(|c| c.id == id)
    }

    fn next_id(&self) -> CaseId {
        self.cases.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
    }

    /// Appends a new pending case dated today.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        category: Category,
        consent_status: ConsentStatus,
    ) -> &CaseRecord {
        self.add_on(description, category, consent_status, Local::now().date_naive())
    }

    pub fn add_on(
        &mut self,
        description: impl Into<String>,
        category: Category,
        consent_status: ConsentStatus,
        date: NaiveDate,
    ) -> &CaseRecord {
        let case = CaseRecord::new(self.next_id(), description, category, consent_status, date);
        self.cases.push(case);
        &self.cases[self.cases.len() - 1]
    }

    /// Returns `false` when no case has `id`.
    pub fn update(&mut self, id: CaseId, update: &CaseUpdate) -> bool {
        match self.cases.iter_mut().find(|c| c.id == id) {
            Some(case) => {
                update.apply_to(case);
                true
            }
            None => false,
        }
    }

    /// Returns `false` when no case has `id`.
    pub fn delete(&mut self, id: CaseId) -> bool {
        match self.cases.iter().position(|c| c.id == id) {
            Some(pos) => {
                self.cases.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn list(&self, filter: &CaseFilter) -> Vec<&CaseRecord> {
        self.cases.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Labelled cases as training pairs, in store order.
    pub fn snapshot(&self) -> Vec<TrainingPair> {
        self.cases
            .iter()
            .filter_map(|c| {
                c.ai_assessment
                    .tier()
                    .map(|tier| TrainingPair::new(c.description.clone(), tier))
            })
            .collect()
    }

    /// Earliest and latest case dates, `None` on an empty store.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.cases.iter().map(|c| c.date).min()?;
        let max = self.cases.iter().map(|c| c.date).max()?;
        Some((min, max))
    }

    /// Distinct categories present, sorted.
    pub fn categories(&self) -> Vec<Category> {
        let mut out: Vec<Category> = self.cases.iter().map(|c| c.category).collect();
        out.sort();
        out.dedup();
        out
    }

    /// Distinct consent statuses present, sorted.
    pub fn consent_statuses(&self) -> Vec<ConsentStatus> {
        let mut out: Vec<ConsentStatus> = self.cases.iter().map(|c| c.consent_status).collect();
        out.sort();
        out.dedup();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::{Assessment, PENDING_RESOLUTION, seed_cases};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded() -> CaseStore {
        CaseStore::with_cases(seed_cases())
    }

    #[test]
    fn first_id_on_empty_store_is_one() {
        let mut store = CaseStore::new();
        let c = store.add("a", Category::Fairness, ConsentStatus::NoConsent);
        assert_eq!(c.id, 1);
    }

    #[test]
    fn add_assigns_max_plus_one_and_pending() {
        let mut store = seeded();
        let before = store.len();
        let prev_max = store.iter().map(|c| c.id).max().unwrap();

        let c = store
            .add("test case", Category::DataSharing, ConsentStatus::NoConsent)
            .clone();

        assert_eq!(c.id, prev_max + 1);
        assert_eq!(c.ai_assessment, Assessment::Pending);
        assert_eq!(c.resolution, PENDING_RESOLUTION);
        assert_eq!(c.date, Local::now().date_naive());
        assert_eq!(store.len(), before + 1);
        assert_eq!(store.iter().last(), Some(&c));
    }

    #[test]
    fn add_uses_max_not_len_after_gaps() {
        let mut store = seeded();
        assert!(store.delete(3));
        let c = store.add_on("x", Category::Profiling, ConsentStatus::NoConsent, date(2025, 1, 1));
        assert_eq!(c.id, 21);
    }

    #[test]
    fn delete_twice() {
        let mut store = seeded();
        let id = store
            .add_on("gone soon", Category::Fairness, ConsentStatus::NoConsent, date(2025, 9, 1))
            .id;
        let before = store.len();

        assert!(store.delete(id));
        assert_eq!(store.len(), before - 1);
        assert!(store.get(id).is_none());
        assert!(!store.delete(id));
        assert_eq!(store.len(), before - 1);
    }

    #[test]
    fn update_unknown_id_leaves_store_unchanged() {
        let mut store = seeded();
        let before: Vec<CaseRecord> = store.iter().cloned().collect();

        assert!(!store.update(999, &CaseUpdate::new().description("nope")));

        let after: Vec<CaseRecord> = store.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn partial_update_touches_only_named_fields() {
        let mut store = seeded();
        let before = store.get(5).unwrap().clone();

        assert!(store.update(5, &CaseUpdate::new().resolution("Mechanism replaced.")));

        let after = store.get(5).unwrap();
        assert_eq!(after.resolution, "Mechanism replaced.");
        assert_eq!(after.description, before.description);
        assert_eq!(after.category, before.category);
        assert_eq!(after.consent_status, before.consent_status);
        assert_eq!(after.ai_assessment, before.ai_assessment);
        assert_eq!(after.date, before.date);
    }

    #[test]
    fn list_without_filters_keeps_insertion_order() {
        let store = seeded();
        let ids: Vec<CaseId> = store.list(&CaseFilter::all()).iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn list_by_category_is_exact() {
        let store = seeded();
        let hits = store.list(&CaseFilter::all().category(Category::PurposeLimitation));
        let ids: Vec<CaseId> = hits.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 8, 16, 19]);
        assert!(hits.iter().all(|c| c.category == Category::PurposeLimitation));
    }

    #[test]
    fn list_combines_filters() {
        let store = seeded();
        let f = CaseFilter::all()
            .category(Category::PurposeLimitation)
            .consent_status(ConsentStatus::NoConsent)
            .between(date(2025, 1, 1), date(2025, 12, 31));
        let ids: Vec<CaseId> = store.list(&f).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![16, 19]);
    }

    #[test]
    fn list_with_no_match_is_empty() {
        let store = seeded();
        let f = CaseFilter::all()
            .category(Category::ChildrensData)
            .consent_status(ConsentStatus::ConsentObtained);
        assert!(store.list(&f).is_empty());
    }

    #[test]
    fn snapshot_skips_pending() {
        let mut store = seeded();
        store.add("fresh", Category::DataSharing, ConsentStatus::NoConsent);
        let snap = store.snapshot();
        assert_eq!(snap.len(), 20);
        assert!(snap.iter().all(|p| p.description != "fresh"));
        assert_eq!(snap[0].tier, RiskTier::High);
    }

    #[test]
    fn date_bounds_and_distinct_values() {
        let store = seeded();
        assert_eq!(store.date_bounds(), Some((date(2024, 1, 15), date(2025, 8, 8))));
        assert_eq!(store.categories().len(), 14);
        assert_eq!(store.consent_statuses().len(), 3);
        assert_eq!(CaseStore::new().date_bounds(), None);
    }
}
