//! Maintenance request triage: classification, pricing, and vendor assignment.
//!
//! The pipeline is synchronous and holds no mutable state. The only shared
//! resource is the [`VendorDirectory`], which is validated once at startup and
//! then read concurrently by every request.

pub mod classifier;
pub mod domain;
pub mod engine;
pub mod reply;
pub mod router;
pub mod service;
pub mod vendors;

#[cfg(test)]
mod tests;

pub use classifier::{classify, ClassificationResult, IssueClassifier, KeywordClassifier};
pub use domain::{
    AssignmentDecision, AssignmentStatus, Category, MaintenanceRequest, Priority,
    PriorityCostProfile, APPROVAL_THRESHOLD_AED,
};
pub use engine::{triage, TriageEngine, TriageError, TriageStage};
pub use reply::{render_reply, welcome_message, FAILURE_REPLY};
pub use router::{triage_router, TriageRequestBody};
pub use service::{MaintenanceTriageService, TriageOutcome};
pub use vendors::{DirectoryError, Vendor, VendorDirectory};
