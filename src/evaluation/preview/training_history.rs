use crate::evaluation::FitSnapshot;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum HistoryFormat {
    Csv,
    Tsv,
    Json,
}

impl HistoryFormat {
    pub fn extension(self) -> &'static str {
        self.into()
    }
}

/// Every successful fit of a session, oldest first.
#[derive(Debug, Clone, Default)]
pub struct TrainingHistory {
    entries: Vec<FitSnapshot>,
}

impl TrainingHistory {
    pub fn push(&mut self, snapshot: FitSnapshot) {
        self.entries.push(snapshot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&FitSnapshot> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FitSnapshot> {
        self.entries.iter()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: HistoryFormat) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        match fmt {
            HistoryFormat::Csv => self.write_delimited(&mut w, ',')?,
            HistoryFormat::Tsv => self.write_delimited(&mut w, '\t')?,
            HistoryFormat::Json => {
                serde_json::to_writer_pretty(&mut w, &self.entries)?;
                writeln!(w)?;
            }
        }
        w.flush()
    }

    fn write_delimited<W: Write>(&self, w: &mut W, delimiter: char) -> Result<(), Error> {
        writeln!(
            w,
            "fit_number{d}trigger{d}training_size{d}test_size{d}accuracy{d}kappa",
            d = delimiter
        )?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                s.fit_number,
                s.trigger,
                s.training_size,
                s.test_size,
                metric_cell(s.accuracy),
                metric_cell(s.kappa),
                d = delimiter
            )?;
        }
        Ok(())
    }
}

/// Six decimals, or an empty cell when the metric is undefined (JSON writes
/// `null` for the same value).
fn metric_cell(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.6}")
    } else {
        String::new()
    }
}
