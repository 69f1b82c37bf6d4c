use crate::core::{ExtractedKeyView, ExtractionSummary, LanguageOverview};
use crate::messages::{ExportSummary, ImportSummary};
use crate::store::KeyAction;

use super::super::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Init,
    Extract(ExtractionSummary),
    Status(LanguageOverview),
    Keys(Vec<ExtractedKeyView>),
    Languages(Vec<String>),
    Get { label: String, value: String },
    Changed(ChangeSummary),
    Import(ImportSummary),
    Export(ExportSummary),
    /// The command was refused; the message is shown on stderr.
    Refused(String),
}

#[derive(Debug)]
pub enum ChangeKind {
    Key(KeyAction),
    Removed,
}

#[derive(Debug)]
pub struct ChangeSummary {
    pub kind: ChangeKind,
    pub label: String,
}

/// Result of running a tolk command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Print machine-readable JSON instead of the human report.
    pub json: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            json: false,
        }
    }

    pub fn json(summary: CommandSummary, json: bool) -> Self {
        Self { summary, json }
    }

    pub fn refused(message: impl Into<String>) -> Self {
        Self::new(CommandSummary::Refused(message.into()))
    }

    pub fn exit_status(&self) -> ExitStatus {
        match self.summary {
            CommandSummary::Refused(_) => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
