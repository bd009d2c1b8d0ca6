use tracing::{debug, info};

use super::classifier::{IssueClassifier, KeywordClassifier};
use super::domain::{AssignmentDecision, Category, MaintenanceRequest};
use super::vendors::VendorDirectory;

/// Per-request failure. Only reachable when a directory skipped validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriageError {
    #[error("no vendor available for category {category}")]
    NoVendorAvailable { category: Category },
}

/// Progress of a single request through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageStage {
    Received,
    Classified,
    Priced,
    Decided,
}

/// Stateless pipeline turning a complaint into an assignment decision.
#[derive(Debug, Clone, Default)]
pub struct TriageEngine<C = KeywordClassifier> {
    classifier: C,
}

impl TriageEngine<KeywordClassifier> {
    pub fn keyword() -> Self {
        Self::new(KeywordClassifier)
    }
}

impl<C> TriageEngine<C>
where
    C: IssueClassifier,
{
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn triage(
        &self,
        request: &MaintenanceRequest,
        directory: &VendorDirectory,
    ) -> Result<AssignmentDecision, TriageError> {
        debug!(
            stage = ?TriageStage::Received,
            received_at = %request.timestamp(),
            "maintenance request received"
        );

        let classification = self.classifier.classify(request.text());
        debug!(
            stage = ?TriageStage::Classified,
            category = %classification.category,
            matched_keyword = classification.matched_keyword.as_deref().unwrap_or("-"),
            "maintenance request classified"
        );

        let profile = classification.category.profile();
        debug!(
            stage = ?TriageStage::Priced,
            priority = %profile.priority,
            estimated_cost_aed = profile.estimated_cost_aed,
            "maintenance request priced"
        );

        let vendor = directory.lookup(classification.category)?;
        let needs_approval = profile.needs_approval();

        let decision = AssignmentDecision {
            category: classification.category,
            priority: profile.priority,
            estimated_cost_aed: profile.estimated_cost_aed,
            matched_keyword: classification.matched_keyword,
            vendor: (!needs_approval).then(|| vendor.clone()),
            needs_approval,
        };

        info!(
            stage = ?TriageStage::Decided,
            category = %decision.category,
            priority = %decision.priority,
            estimated_cost_aed = decision.estimated_cost_aed,
            needs_approval,
            vendor = decision.vendor.as_ref().map(|v| v.id.as_str()).unwrap_or("pending"),
            "maintenance request triaged"
        );

        Ok(decision)
    }
}

/// Triage with the default keyword classifier.
pub fn triage(
    request: &MaintenanceRequest,
    directory: &VendorDirectory,
) -> Result<AssignmentDecision, TriageError> {
    TriageEngine::keyword().triage(request, directory)
}
