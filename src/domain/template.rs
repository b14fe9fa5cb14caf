//! Overwrite policy and bookkeeping for applying prompt templates.

use crate::domain::AppError;

/// How existing target files are treated during one template run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    #[default]
    Ask,
    OverwriteAll,
    SkipAll,
}

/// Answer to a single conflict prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    Overwrite,
    OverwriteAll,
    Skip,
    SkipAll,
    Cancel,
}

impl ConflictChoice {
    pub const ALL: [ConflictChoice; 5] = [
        ConflictChoice::Overwrite,
        ConflictChoice::OverwriteAll,
        ConflictChoice::Skip,
        ConflictChoice::SkipAll,
        ConflictChoice::Cancel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConflictChoice::Overwrite => "Overwrite",
            ConflictChoice::OverwriteAll => "Overwrite All",
            ConflictChoice::Skip => "Skip",
            ConflictChoice::SkipAll => "Skip All",
            ConflictChoice::Cancel => "Cancel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteDecision {
    Write,
    Skip,
    Cancel,
}

impl OverwritePolicy {
    /// Decide what to do with an existing target, asking only while the
    /// policy is still `Ask`. "All" answers stick for the rest of the run.
    pub fn resolve_conflict<F>(&mut self, ask: F) -> Result<WriteDecision, AppError>
    where
        F: FnOnce() -> Result<ConflictChoice, AppError>,
    {
        match self {
            OverwritePolicy::OverwriteAll => return Ok(WriteDecision::Write),
            OverwritePolicy::SkipAll => return Ok(WriteDecision::Skip),
            OverwritePolicy::Ask => {}
        }

        let decision = match ask()? {
            ConflictChoice::Overwrite => WriteDecision::Write,
            ConflictChoice::OverwriteAll => {
                *self = OverwritePolicy::OverwriteAll;
                WriteDecision::Write
            }
            ConflictChoice::Skip => WriteDecision::Skip,
            ConflictChoice::SkipAll => {
                *self = OverwritePolicy::SkipAll;
                WriteDecision::Skip
            }
            ConflictChoice::Cancel => WriteDecision::Cancel,
        };
        Ok(decision)
    }
}

/// Per-run tally of template file outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopySummary {
    pub copied: usize,
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Completed(CopySummary),
    Cancelled,
}
