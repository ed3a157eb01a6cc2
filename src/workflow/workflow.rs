use crate::cases::{
    CaseFilter, CaseId, CaseRecord, CaseStore, CaseUpdate, Category, ConsentStatus, seed_cases,
};
use crate::evaluation::{FitSnapshot, RefitTrigger, TrainingHistory};
use crate::pipeline::{ClassifierPipeline, FitReport, RiskAssessment, RiskModel};
use crate::workflow::WorkflowError;

/// One session's cases and the risk model fitted on them.
///
/// Every successful mutation refits the model on the current store before
/// returning, so an assessment always reflects the latest labelled cases.
/// A failed refit leaves the mutation in place and clears the model.
pub struct CaseWorkflow {
    store: CaseStore,
    pipeline: ClassifierPipeline,
    model: Option<RiskModel>,
    last_report: Option<FitReport>,
    history: TrainingHistory,
    fits: u64,
}

impl CaseWorkflow {
    /// Takes ownership of `store` and fits the first model. The workflow is
    /// returned even when that fit fails; the error is handed back alongside.
    pub fn new(
        store: CaseStore,
        pipeline: ClassifierPipeline,
    ) -> (Self, Result<FitReport, WorkflowError>) {
        let mut workflow = Self {
            store,
            pipeline,
            model: None,
            last_report: None,
            history: TrainingHistory::default(),
            fits: 0,
        };
        let first = workflow.refit(RefitTrigger::Startup);
        (workflow, first)
    }

    /// Workflow over the demonstration cases with the default pipeline.
    pub fn seeded() -> Result<Self, WorkflowError> {
        let (workflow, first) = Self::new(
            CaseStore::with_cases(seed_cases()),
            ClassifierPipeline::default(),
        );
        first.map(|_| workflow)
    }

    pub fn store(&self) -> &CaseStore {
        &self.store
    }

    pub fn pipeline(&self) -> &ClassifierPipeline {
        &self.pipeline
    }

    pub fn model(&self) -> Option<&RiskModel> {
        self.model.as_ref()
    }

    pub fn last_report(&self) -> Option<&FitReport> {
        self.last_report.as_ref()
    }

    /// Accuracy of the current model, `None` when there is no model.
    pub fn accuracy(&self) -> Option<f64> {
        self.model
            .as_ref()
            .and(self.last_report.as_ref())
            .map(FitReport::accuracy)
    }

    pub fn history(&self) -> &TrainingHistory {
        &self.history
    }

    pub fn get(&self, id: CaseId) -> Option<&CaseRecord> {
        self.store.get(id)
    }

    pub fn list(&self, filter: &CaseFilter) -> Vec<&CaseRecord> {
        self.store.list(filter)
    }

    fn refit(&mut self, trigger: RefitTrigger) -> Result<FitReport, WorkflowError> {
        self.model = None;
        match self.pipeline.fit(&self.store.snapshot()) {
            Ok((model, report)) => {
                self.fits += 1;
                self.history.push(FitSnapshot {
                    fit_number: self.fits,
                    trigger,
                    training_size: report.training_size,
                    test_size: report.test_size,
                    accuracy: report.accuracy(),
                    kappa: report.kappa(),
                });
                self.model = Some(model);
                self.last_report = Some(report.clone());
                Ok(report)
            }
            Err(e) => {
                tracing::warn!(%trigger, error = %e, "refit failed; model cleared");
                self.last_report = None;
                Err(e.into())
            }
        }
    }

    /// Adds a pending case dated today and refits.
    ///
    /// The case is kept even if the refit fails; the refit error is returned
    /// alongside the new record.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        category: Category,
        consent_status: ConsentStatus,
    ) -> (CaseRecord, Result<FitReport, WorkflowError>) {
        let case = self.store.add(description, category, consent_status).clone();
        tracing::info!(id = case.id, "case added");
        let report = self.refit(RefitTrigger::Add);
        (case, report)
    }

    pub fn update(&mut self, id: CaseId, update: &CaseUpdate) -> Result<FitReport, WorkflowError> {
        if !self.store.update(id, update) {
            return Err(WorkflowError::CaseNotFound(id));
        }
        tracing::info!(id, "case updated");
        self.refit(RefitTrigger::Update)
    }

    pub fn delete(&mut self, id: CaseId) -> Result<FitReport, WorkflowError> {
        if !self.store.delete(id) {
            return Err(WorkflowError::CaseNotFound(id));
        }
        tracing::info!(id, "case deleted");
        self.refit(RefitTrigger::Delete)
    }

    /// Refits on the current store without changing it.
    pub fn retrain(&mut self) -> Result<FitReport, WorkflowError> {
        self.refit(RefitTrigger::Manual)
    }

    /// Swaps the pipeline configuration and refits with it.
    pub fn reconfigure(&mut self, pipeline: ClassifierPipeline) -> Result<FitReport, WorkflowError> {
        self.pipeline = pipeline;
        self.refit(RefitTrigger::Reconfigure)
    }

    /// Assesses `description` with the current model. Never touches the store.
    pub fn assess(&self, description: &str) -> Result<RiskAssessment, WorkflowError> {
        let model = self.model.as_ref().ok_or(WorkflowError::NoModel)?;
        Ok(model.infer(description)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::{Assessment, PENDING_RESOLUTION, RiskTier};
    use crate::pipeline::PipelineError;

    fn workflow() -> CaseWorkflow {
        CaseWorkflow::seeded().unwrap()
    }

    #[test]
    fn seeded_workflow_is_fitted() {
        let wf = workflow();
        assert_eq!(wf.store().len(), 20);
        assert!(wf.model().is_some());
        assert_eq!(wf.history().len(), 1);
        assert_eq!(wf.history().latest().unwrap().trigger, RefitTrigger::Startup);
        let acc = wf.accuracy().unwrap();
        assert!((0.0..=1.0).contains(&acc));
    }

    #[test]
    fn add_refits_and_creates_pending_case() {
        let mut wf = workflow();
        let prev_max = wf.store().iter().map(|c| c.id).max().unwrap();

        let (case, report) = wf.add("test case", Category::DataSharing, ConsentStatus::NoConsent);

        assert_eq!(case.id, prev_max + 1);
        assert_eq!(case.ai_assessment, Assessment::Pending);
        assert_eq!(case.resolution, PENDING_RESOLUTION);
        // Pending cases stay out of training.
        let report = report.unwrap();
        assert_eq!(report.training_size + report.test_size, 20);
        assert_eq!(wf.history().len(), 2);
        assert_eq!(wf.history().latest().unwrap().trigger, RefitTrigger::Add);
    }

    #[test]
    fn update_unknown_id_is_not_found_and_does_not_refit() {
        let mut wf = workflow();
        let err = wf
            .update(404, &CaseUpdate::new().resolution("x"))
            .unwrap_err();
        assert_eq!(err, WorkflowError::CaseNotFound(404));
        assert_eq!(wf.history().len(), 1);
        assert!(wf.model().is_some());
    }

    #[test]
    fn labelling_a_pending_case_adds_it_to_training() {
        let mut wf = workflow();
        let (case, _) = wf.add(
            "Selling browsing history to advertisers.",
            Category::DataSharing,
            ConsentStatus::NoConsent,
        );

        let report = wf
            .update(case.id, &CaseUpdate::new().ai_assessment(Assessment::HighRisk))
            .unwrap();
        assert_eq!(report.training_size + report.test_size, 21);
        assert_eq!(wf.get(case.id).unwrap().ai_assessment, Assessment::HighRisk);
    }

    #[test]
    fn delete_twice() {
        let mut wf = workflow();
        wf.delete(1).unwrap();
        assert!(wf.get(1).is_none());
        assert_eq!(wf.delete(1).unwrap_err(), WorkflowError::CaseNotFound(1));
        assert_eq!(wf.history().len(), 2);
    }

    #[test]
    fn deleting_last_low_risk_case_clears_model() {
        let mut wf = workflow();
        let err = wf.delete(4).unwrap_err();
        assert_eq!(
            err,
            WorkflowError::Pipeline(PipelineError::MissingRiskTier(RiskTier::Low))
        );
        assert!(wf.get(4).is_none());
        assert!(wf.model().is_none());
        assert_eq!(wf.accuracy(), None);
        assert_eq!(wf.assess("anything").unwrap_err(), WorkflowError::NoModel);

        // Relabelling another case as Low Risk brings the model back.
        wf.update(5, &CaseUpdate::new().ai_assessment(Assessment::LowRisk))
            .unwrap();
        assert!(wf.assess("pre-ticked boxes").is_ok());
    }

    #[test]
    fn assess_does_not_mutate() {
        let wf = workflow();
        let before: Vec<CaseRecord> = wf.store().iter().cloned().collect();
        let a = wf
            .assess("Unauthorized data sharing with third parties.")
            .unwrap();
        assert!((a.high + a.medium + a.low - 1.0).abs() < 1e-9);
        let after: Vec<CaseRecord> = wf.store().iter().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(wf.history().len(), 1);
    }

    #[test]
    fn retrain_and_reconfigure_record_history() {
        let mut wf = workflow();
        wf.retrain().unwrap();
        let pipeline = ClassifierPipeline::new(0.0, 7, || {
            Box::new(crate::classifiers::LogisticRegression::default())
        })
        .unwrap();
        let report = wf.reconfigure(pipeline).unwrap();
        assert_eq!(report.test_size, 0);
        assert_eq!(wf.pipeline().seed(), 7);

        let triggers: Vec<RefitTrigger> = wf.history().iter().map(|s| s.trigger).collect();
        assert_eq!(
            triggers,
            vec![RefitTrigger::Startup, RefitTrigger::Manual, RefitTrigger::Reconfigure]
        );
        assert_eq!(wf.history().latest().unwrap().fit_number, 3);
    }

    #[test]
    fn add_keeps_case_when_refit_fails() {
        let cases: Vec<CaseRecord> = seed_cases()
            .into_iter()
            .filter(|c| c.ai_assessment != Assessment::LowRisk)
            .collect();
        let (mut wf, first) = CaseWorkflow::new(CaseStore::with_cases(cases), ClassifierPipeline::default());
        assert!(first.is_err());
        let before = wf.store().len();

        let (case, report) = wf.add("test case", Category::DataSharing, ConsentStatus::NoConsent);

        assert_eq!(
            report.unwrap_err(),
            WorkflowError::Pipeline(PipelineError::MissingRiskTier(RiskTier::Low))
        );
        assert_eq!(wf.store().len(), before + 1);
        assert_eq!(wf.get(case.id), Some(&case));
        assert_eq!(case.ai_assessment, Assessment::Pending);
        assert!(wf.model().is_none());
        assert!(wf.history().is_empty());
    }

    #[test]
    fn empty_store_starts_without_model() {
        let (wf, first) = CaseWorkflow::new(CaseStore::new(), ClassifierPipeline::default());
        assert!(first.is_err());
        assert!(wf.model().is_none());
        assert!(wf.history().is_empty());
    }
}
