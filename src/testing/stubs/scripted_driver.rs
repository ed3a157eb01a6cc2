use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::VecDeque;

/// One canned reply. `Default` accepts whatever default the prompt offers
/// (the first entry for a select).
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Default,
    Bool(bool),
    Text(String),
    Int(u64),
    Float(f64),
    Choice(usize),
    Date(NaiveDate),
}

/// [`PromptDriver`] that replays a fixed list of answers in order.
///
/// Running out of answers is an error unless [`with_defaults`] was called,
/// in which case every further prompt takes its default.
///
/// [`with_defaults`]: ScriptedDriver::with_defaults
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    defaults_when_empty: bool,
}

impl ScriptedDriver {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            defaults_when_empty: false,
        }
    }

    pub fn with_defaults(mut self) -> Self {
        self.defaults_when_empty = true;
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        match self.answers.borrow_mut().pop_front() {
            Some(a) => Ok(a),
            None if self.defaults_when_empty => Ok(Answer::Default),
            None => Err(anyhow!("script exhausted at prompt '{title}'")),
        }
    }
}

fn check_bounds<T: PartialOrd + std::fmt::Display>(
    title: &str,
    x: T,
    min: Option<T>,
    max: Option<T>,
) -> Result<T> {
    if min.as_ref().is_some_and(|lo| x < *lo) || max.as_ref().is_some_and(|hi| x > *hi) {
        bail!("answer {x} out of range at prompt '{title}'");
    }
    Ok(x)
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Default => Ok(default),
            Answer::Bool(b) => Ok(b),
            other => bail!("expected a bool at '{title}', got {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        match self.next(title)? {
            Answer::Default => Ok(default.to_string()),
            Answer::Text(s) => Ok(s),
            other => bail!("expected text at '{title}', got {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        match self.next(title)? {
            Answer::Default => Ok(default),
            Answer::Int(n) => check_bounds(title, n, min, max),
            other => bail!("expected an integer at '{title}', got {other:?}"),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        match self.next(title)? {
            Answer::Default => Ok(default),
            Answer::Float(x) => check_bounds(title, x, min, max),
            other => bail!("expected a number at '{title}', got {other:?}"),
        }
    }

    fn ask_date(&self, title: &str, _help: &str, default: NaiveDate) -> Result<NaiveDate> {
        match self.next(title)? {
            Answer::Default => Ok(default),
            Answer::Date(d) => Ok(d),
            other => bail!("expected a date at '{title}', got {other:?}"),
        }
    }

    fn select(&self, title: &str, _help: &str, options: &[String]) -> Result<usize> {
        if options.is_empty() {
            bail!("nothing to choose from for '{title}'");
        }
        match self.next(title)? {
            Answer::Default => Ok(0),
            Answer::Choice(i) => Ok(i),
            other => bail!("expected a choice at '{title}', got {other:?}"),
        }
    }
}
