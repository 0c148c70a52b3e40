use crate::error::{QuizError, Result};
use crate::words::WordPair;
use itertools::Itertools;
use log::info;
use std::fs;
use std::path::Path;

/// Text listing the missed pairs in the order they were missed.
pub fn render_wrong_answers(wrong: &[WordPair]) -> String {
    let mut report = String::from("Wrong answers:\n");
    for pair in wrong {
        report.push_str(&format!("\t- {pair}\n"));
    }
    report
}

/// Write the report, replacing any report left by an earlier run.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report).map_err(|source| QuizError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// How one word list ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Scored(f64),
    Failed(String),
}

/// Per-file results in the order the files were given.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    entries: Vec<(String, SessionOutcome)>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, outcome: SessionOutcome) {
        self.entries.push((label.into(), outcome));
    }

    pub fn all_scored(&self) -> bool {
        self.entries
            .iter()
            .all(|(_, outcome)| matches!(outcome, SessionOutcome::Scored(_)))
    }

    pub fn render(&self) -> String {
        let lines = self
            .entries
            .iter()
            .map(|(label, outcome)| match outcome {
                SessionOutcome::Scored(score) => format!("{label}={score:.2}"),
                SessionOutcome::Failed(reason) => format!("{label}=failed: {reason}"),
            })
            .join("\n");
        format!("# Summary\n{lines}")
    }
}
