use std::sync::Arc;

use serde::Serialize;

use super::classifier::{IssueClassifier, KeywordClassifier};
use super::domain::{AssignmentDecision, AssignmentStatus, MaintenanceRequest};
use super::engine::{TriageEngine, TriageError};
use super::reply::render_reply;
use super::vendors::VendorDirectory;

/// Decision plus the rendered reply, as handed back to inbound adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageOutcome {
    #[serde(flatten)]
    pub decision: AssignmentDecision,
    pub status: AssignmentStatus,
    pub reply: String,
}

/// Service composing the engine with the process-wide vendor directory.
pub struct MaintenanceTriageService<C = KeywordClassifier> {
    engine: TriageEngine<C>,
    directory: Arc<VendorDirectory>,
}

impl MaintenanceTriageService<KeywordClassifier> {
    pub fn new(directory: Arc<VendorDirectory>) -> Self {
        Self::with_classifier(KeywordClassifier, directory)
    }
}

impl<C> MaintenanceTriageService<C>
where
    C: IssueClassifier,
{
    pub fn with_classifier(classifier: C, directory: Arc<VendorDirectory>) -> Self {
        Self {
            engine: TriageEngine::new(classifier),
            directory,
        }
    }

    pub fn submit(&self, request: &MaintenanceRequest) -> Result<TriageOutcome, TriageError> {
        let decision = self.engine.triage(request, &self.directory)?;
        let reply = render_reply(&decision);

        Ok(TriageOutcome {
            status: decision.status(),
            decision,
            reply,
        })
    }

    pub fn submit_text(&self, text: &str) -> Result<TriageOutcome, TriageError> {
        self.submit(&MaintenanceRequest::new(text))
    }

    pub fn directory(&self) -> &VendorDirectory {
        &self.directory
    }
}
