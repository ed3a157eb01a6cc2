use anyhow::Result;
use consent_cases::cases::{CaseStore, seed_cases};
use consent_cases::pipeline::ClassifierPipeline;
use consent_cases::ui::cli::Session;
use consent_cases::ui::cli::drivers::InquireDriver;
use consent_cases::workflow::CaseWorkflow;
use inquire::InquireError;
use std::io;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "consent_cases=warn".into()),
        )
        .init();

    let (workflow, first_fit) = CaseWorkflow::new(
        CaseStore::with_cases(seed_cases()),
        ClassifierPipeline::default(),
    );
    if let Err(e) = first_fit {
        eprintln!("Initial training failed: {e}");
    }

    let mut session = Session::new(InquireDriver, io::stdout(), workflow);
    match session.run() {
        Ok(()) => Ok(()),
        Err(e)
            if matches!(
                e.downcast_ref::<InquireError>(),
                Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
            ) =>
        {
            Ok(())
        }
        Err(e) => Err(e),
    }
}
