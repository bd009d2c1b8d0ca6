use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::triage::classifier::{ClassificationResult, IssueClassifier};
use crate::triage::domain::Category;
use crate::triage::service::MaintenanceTriageService;
use crate::triage::vendors::{Vendor, VendorDirectory};
use crate::triage::triage_router;

pub(super) fn vendor(id: &str, name: &str, category: Category) -> Vendor {
    Vendor {
        id: id.to_string(),
        name: name.to_string(),
        category,
        contact: "+971 4 000 0000".to_string(),
    }
}

pub(super) fn vendors() -> Vec<Vendor> {
    vec![
        vendor("plumb-1", "Al Noor Plumbing Services", Category::PlumbingLeak),
        vendor("plumb-2", "Jumeirah Pipe & Drain", Category::PlumbingLeak),
        vendor("ac-1", "Desert Breeze AC Maintenance", Category::AcMaintenance),
        vendor("elec-1", "Emirates Spark Electrical", Category::ElectricalIssue),
        vendor("gen-1", "Marina Handyman Co.", Category::GeneralMaintenance),
    ]
}

pub(super) fn directory() -> VendorDirectory {
    VendorDirectory::from_vendors(vendors()).expect("fixture directory is complete")
}

/// Directory that skipped validation and has no general handyman.
pub(super) fn directory_without_handyman() -> VendorDirectory {
    VendorDirectory::unchecked(
        vendors()
            .into_iter()
            .filter(|vendor| vendor.category != Category::GeneralMaintenance)
            .collect(),
    )
}

pub(super) fn build_service() -> MaintenanceTriageService {
    MaintenanceTriageService::new(Arc::new(directory()))
}

pub(super) fn triage_router_with_service(service: MaintenanceTriageService) -> axum::Router {
    triage_router(Arc::new(service))
}

/// Stand-in for a learned model: always answers with one category.
pub(super) struct FixedClassifier(pub(super) Category);

impl IssueClassifier for FixedClassifier {
    fn classify(&self, _text: &str) -> ClassificationResult {
        ClassificationResult {
            category: self.0,
            matched_keyword: None,
        }
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
