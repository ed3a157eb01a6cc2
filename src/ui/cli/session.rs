use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::Write;
use strum::IntoEnumIterator;

use crate::cases::{Assessment, CaseFilter, CaseId, CaseRecord, CaseUpdate, Category, ConsentStatus};
use crate::evaluation::{HistoryFormat, format_metric};
use crate::pipeline::FitReport;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::render::{CaseDetails, headline};
use crate::ui::cli::wizard::{
    prompt_choice, prompt_enum, prompt_enum_or_none, prompt_kind, prompt_output_path,
};
use crate::ui::types::build::build_pipeline;
use crate::ui::types::choices::{ActionChoice, ClassifierChoice};
use crate::workflow::{CaseWorkflow, WorkflowError};

const MENU_HELP: &str = "↑/↓ to navigate, ↵ to select";
const ALL: &str = "All";
const DONE: &str = "Back to menu";

/// Interactive menu loop over a [`CaseWorkflow`].
///
/// Prompts go through `D`, everything else is written to `W`. Workflow
/// errors are reported and the loop carries on; prompt and I/O failures end
/// the session.
pub struct Session<D: PromptDriver, W: Write> {
    driver: D,
    out: W,
    workflow: CaseWorkflow,
}

impl<D: PromptDriver, W: Write> Session<D, W> {
    pub fn new(driver: D, out: W, workflow: CaseWorkflow) -> Self {
        Self {
            driver,
            out,
            workflow,
        }
    }

    pub fn workflow(&self) -> &CaseWorkflow {
        &self.workflow
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Consent Compliance Case Tracker")?;
        match self.workflow.accuracy() {
            Some(acc) => writeln!(self.out, "AI Model trained. Accuracy: {}", format_metric(acc))?,
            None => writeln!(self.out, "No AI model available. Fix the training data and use Train Model.")?,
        }

        loop {
            let action: ActionChoice = prompt_kind(&self.driver, "What would you like to do?", MENU_HELP)?;
            if !self.handle(action)? {
                return Ok(());
            }
        }
    }

    /// Runs one menu action; `false` means the session should end.
    pub fn handle(&mut self, action: ActionChoice) -> Result<bool> {
        let name: &'static str = action.into();
        tracing::debug!(action = name, "menu action");
        match action {
            ActionChoice::ViewCases => self.view_cases()?,
            ActionChoice::AddCase => self.add_case()?,
            ActionChoice::AssessCase => self.assess_case()?,
            ActionChoice::UpdateCase => self.update_case()?,
            ActionChoice::DeleteCase => self.delete_case()?,
            ActionChoice::TrainModel => self.train_model()?,
            ActionChoice::ExportHistory => self.export_history()?,
            ActionChoice::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn select_or_all<T: Copy + Display>(&self, title: &str, values: &[T]) -> Result<Option<T>> {
        let labels: Vec<String> = std::iter::once(ALL.to_string())
            .chain(values.iter().map(ToString::to_string))
            .collect();
        let idx = self.driver.select(title, MENU_HELP, &labels)?;
        Ok(idx.checked_sub(1).and_then(|i| values.get(i).copied()))
    }

    fn keep_or_pick<T>(&self, title: &str, current: T) -> Result<Option<T>>
    where
        T: Copy + Display + PartialEq + IntoEnumIterator,
    {
        let keep = format!("Keep current ({current})");
        let picked = prompt_enum_or_none(&self.driver, title, MENU_HELP, &keep)?;
        Ok(picked.filter(|v| *v != current))
    }

    fn ask_case_id(&self) -> Result<CaseId> {
        self.driver
            .ask_u64("Case ID", "Numeric id shown in the case list", 1, Some(1), None)
    }

    fn report_refit(&mut self, result: Result<FitReport, WorkflowError>) -> Result<()> {
        match result {
            Ok(report) => writeln!(
                self.out,
                "AI Model re-trained. New Accuracy: {}",
                format_metric(report.accuracy())
            )?,
            Err(e) => writeln!(self.out, "AI Model could not be re-trained: {e}")?,
        }
        Ok(())
    }

    fn view_cases(&mut self) -> Result<()> {
        let store = self.workflow.store();
        let category = self.select_or_all("Filter by Category", &store.categories())?;
        let status = self.select_or_all("Filter by Consent Status", &store.consent_statuses())?;

        let mut filter = CaseFilter {
            category,
            consent_status: status,
            ..CaseFilter::all()
        };
        if let Some((first, last)) = store.date_bounds() {
            if self.driver.ask_bool("Filter by date range?", "", false)? {
                let from = self.driver.ask_date("From", "YYYY-MM-DD, inclusive", first)?;
                let to = self.driver.ask_date("To", "YYYY-MM-DD, inclusive", last)?;
                filter = filter.between(from, to);
            }
        }

        let cases: Vec<&CaseRecord> = self.workflow.list(&filter);
        if cases.is_empty() {
            writeln!(self.out, "No cases found matching the criteria.")?;
            return Ok(());
        }
        for case in &cases {
            writeln!(self.out, "{}", headline(case))?;
        }

        let labels: Vec<String> = std::iter::once(DONE.to_string())
            .chain(cases.iter().map(|c| headline(c)))
            .collect();
        loop {
            let idx = self.driver.select("Show details of", MENU_HELP, &labels)?;
            match idx.checked_sub(1).and_then(|i| cases.get(i)) {
                Some(case) => writeln!(self.out, "{}\n", CaseDetails(case))?,
                None => return Ok(()),
            }
        }
    }

    fn add_case(&mut self) -> Result<()> {
        let description = self.driver.ask_string("Case Description", "", "")?;
        let category: Category = prompt_enum(&self.driver, "Category", MENU_HELP)?;
        let status: ConsentStatus = prompt_enum(&self.driver, "Consent Status", MENU_HELP)?;

        let (case, refit) = self.workflow.add(description, category, status);
        writeln!(self.out, "Case added successfully!")?;
        writeln!(self.out, "{}", CaseDetails(&case))?;
        self.report_refit(refit)
    }

    fn assess_case(&mut self) -> Result<()> {
        let description = self
            .driver
            .ask_string("Case Description", "Nothing is saved", "")?;
        match self.workflow.assess(&description) {
            Ok(assessment) => writeln!(self.out, "{assessment}")?,
            Err(e) => writeln!(self.out, "Assessment unavailable: {e}")?,
        }
        Ok(())
    }

    fn update_case(&mut self) -> Result<()> {
        let id = self.ask_case_id()?;
        let Some(current) = self.workflow.get(id).cloned() else {
            writeln!(self.out, "Case not found.")?;
            return Ok(());
        };

        let mut update = CaseUpdate::new();
        let description = self
            .driver
            .ask_string("Description", "", &current.description)?;
        if description != current.description {
            update = update.description(description);
        }
        if let Some(c) = self.keep_or_pick::<Category>("Category", current.category)? {
            update = update.category(c);
        }
        if let Some(s) = self.keep_or_pick::<ConsentStatus>("Consent Status", current.consent_status)? {
            update = update.consent_status(s);
        }
        if let Some(a) = self.keep_or_pick::<Assessment>("AI Assessment", current.ai_assessment)? {
            update = update.ai_assessment(a);
        }
        let resolution = self.driver.ask_string("Resolution", "", &current.resolution)?;
        if resolution != current.resolution {
            update = update.resolution(resolution);
        }
        let date = self.driver.ask_date("Date", "YYYY-MM-DD", current.date)?;
        if date != current.date {
            update = update.date(date);
        }

        if update.is_empty() {
            writeln!(self.out, "Nothing changed.")?;
            return Ok(());
        }
        match self.workflow.update(id, &update) {
            Err(WorkflowError::CaseNotFound(_)) => writeln!(self.out, "Case not found.")?,
            refit => {
                writeln!(self.out, "Case updated successfully!")?;
                self.report_refit(refit)?;
            }
        }
        Ok(())
    }

    fn delete_case(&mut self) -> Result<()> {
        let id = self.ask_case_id()?;
        match self.workflow.delete(id) {
            Err(WorkflowError::CaseNotFound(_)) => writeln!(self.out, "Case not found.")?,
            refit => {
                writeln!(self.out, "Case deleted successfully!")?;
                self.report_refit(refit)?;
            }
        }
        Ok(())
    }

    fn train_model(&mut self) -> Result<()> {
        let edit = self.driver.ask_bool(
            "Edit model settings?",
            "Choose no to retrain with the current settings",
            false,
        )?;

        let result = if edit {
            let choice: ClassifierChoice = prompt_choice(&self.driver)?;
            match build_pipeline(choice) {
                Ok(pipeline) => self.workflow.reconfigure(pipeline),
                Err(e) => {
                    writeln!(self.out, "Invalid settings: {e}")?;
                    return Ok(());
                }
            }
        } else {
            self.workflow.retrain()
        };

        match result {
            Ok(report) => {
                writeln!(
                    self.out,
                    "AI Model re-trained. Accuracy: {}",
                    format_metric(report.accuracy())
                )?;
                writeln!(self.out, "Model has been successfully retrained!")?;
            }
            Err(e) => writeln!(self.out, "Training failed: {e}")?,
        }
        Ok(())
    }

    fn export_history(&mut self) -> Result<()> {
        if self.workflow.history().is_empty() {
            writeln!(self.out, "No training runs recorded yet.")?;
            return Ok(());
        }
        let format: HistoryFormat = prompt_enum(&self.driver, "Export format", MENU_HELP)?;
        let ext = format.extension();
        let path = prompt_output_path(
            &self.driver,
            "Output file",
            "The file is overwritten if it exists",
            &format!("training_history.{ext}"),
            &[ext],
        )?;
        self.workflow
            .history()
            .export(&path, format)
            .with_context(|| format!("writing {}", path.display()))?;
        writeln!(
            self.out,
            "Training history ({} runs) written to {}",
            self.workflow.history().len(),
            path.display()
        )?;
        Ok(())
    }
}
