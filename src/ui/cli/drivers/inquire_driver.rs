use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, bail};
use chrono::NaiveDate;
use inquire::{Confirm, CustomType, Select, Text, validator::Validation};
use std::fmt::Display;
use std::str::FromStr;

pub struct InquireDriver;

fn ask_bounded<T>(title: &str, help: &str, default: T, min: Option<T>, max: Option<T>) -> Result<T>
where
    T: Copy + Clone + PartialOrd + Display + FromStr + ToString + Send + Sync + 'static,
{
    let mut q = CustomType::<T>::new(title)
        .with_default(default)
        .with_help_message(help);

    if min.is_some() || max.is_some() {
        q = q.with_validator(move |x: &T| {
            let below = min.is_some_and(|lo| *x < lo);
            let above = max.is_some_and(|hi| *x > hi);
            if !below && !above {
                return Ok(Validation::Valid);
            }
            let msg = match (min, max) {
                (Some(lo), Some(hi)) => format!("Must be between {lo} and {hi}"),
                (Some(lo), None) => format!("Must be ≥ {lo}"),
                (None, Some(hi)) => format!("Must be ≤ {hi}"),
                (None, None) => unreachable!(),
            };
            Ok(Validation::Invalid(msg.into()))
        });
    }

    Ok(q.prompt()?)
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        ask_bounded(title, help, default, min, max)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        ask_bounded(title, help, default, min, max)
    }

    fn ask_date(&self, title: &str, help: &str, default: NaiveDate) -> Result<NaiveDate> {
        Ok(CustomType::<NaiveDate>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_error_message("Please type a date as YYYY-MM-DD")
            .prompt()?)
    }

    fn select(&self, title: &str, help: &str, options: &[String]) -> Result<usize> {
        if options.is_empty() {
            bail!("nothing to choose from for '{title}'");
        }
        Ok(Select::new(title, options.to_vec())
            .with_help_message(help)
            .raw_prompt()?
            .index)
    }
}
