use super::common::*;
use crate::triage::domain::{Category, MaintenanceRequest, Priority, APPROVAL_THRESHOLD_AED};
use crate::triage::engine::{triage, TriageEngine, TriageError};
use crate::triage::classify;
use chrono::{Duration, TimeZone, Utc};

fn request(text: &str) -> MaintenanceRequest {
    MaintenanceRequest::new(text)
}

#[test]
fn leaking_bathroom_needs_approval() {
    let decision =
        triage(&request("Water is leaking in my bathroom"), &directory()).expect("triages");

    assert_eq!(decision.category, Category::PlumbingLeak);
    assert_eq!(decision.priority, Priority::High);
    assert_eq!(decision.estimated_cost_aed, 1500);
    assert!(decision.needs_approval);
    assert!(decision.vendor.is_none());
}

#[test]
fn ac_not_cooling_is_auto_assigned() {
    let decision = triage(&request("AC not cooling"), &directory()).expect("triages");

    assert_eq!(decision.category, Category::AcMaintenance);
    assert_eq!(decision.priority, Priority::Medium);
    assert_eq!(decision.estimated_cost_aed, 600);
    assert!(!decision.needs_approval);
    let vendor = decision.vendor.expect("vendor assigned");
    assert_eq!(vendor.id, "ac-1");
}

#[test]
fn broken_door_handle_goes_to_handyman() {
    let decision = triage(&request("Door handle broken"), &directory()).expect("triages");

    assert_eq!(decision.category, Category::GeneralMaintenance);
    assert_eq!(decision.priority, Priority::Low);
    assert_eq!(decision.estimated_cost_aed, 300);
    assert!(!decision.needs_approval);
    assert!(decision.matched_keyword.is_none());
    assert_eq!(
        decision.vendor.map(|vendor| vendor.name),
        Some("Marina Handyman Co.".to_string())
    );
}

#[test]
fn dead_outlet_needs_approval() {
    let decision = triage(&request("Power outlet not working"), &directory()).expect("triages");

    assert_eq!(decision.category, Category::ElectricalIssue);
    assert_eq!(decision.priority, Priority::High);
    assert_eq!(decision.estimated_cost_aed, 1200);
    assert!(decision.needs_approval);
}

#[test]
fn plumbing_wins_over_electrical_when_both_match() {
    let decision = triage(
        &request("Power went out after a LEAK near the fuse box"),
        &directory(),
    )
    .expect("triages");

    assert_eq!(decision.category, Category::PlumbingLeak);
    assert_eq!(decision.matched_keyword.as_deref(), Some("leak"));
}

#[test]
fn category_keywords_are_case_insensitive() {
    assert_eq!(classify("Ceiling LeAk").category, Category::PlumbingLeak);
    assert_eq!(classify("room won't COOL down").category, Category::AcMaintenance);
    assert_eq!(classify("no POWER in kitchen").category, Category::ElectricalIssue);
    assert_eq!(classify("window stuck").category, Category::GeneralMaintenance);
}

#[test]
fn triage_is_deterministic_and_ignores_receipt_time() {
    let directory = directory();
    let texts = ["Water is leaking", "AC not cooling", "", "Door handle broken"];
    let morning = Utc
        .with_ymd_and_hms(2025, 7, 1, 8, 0, 0)
        .single()
        .expect("valid timestamp");

    for text in texts {
        let first = MaintenanceRequest::received_at(text, morning);
        let later = MaintenanceRequest::received_at(text, morning + Duration::hours(9));

        let a = triage(&first, &directory).expect("triages");
        let b = triage(&first, &directory).expect("triages");
        let c = triage(&later, &directory).expect("triages");
        assert_eq!(a, b, "{text:?}");
        assert_eq!(a, c, "{text:?}");
    }
}

#[test]
fn approval_flag_tracks_threshold_for_every_category() {
    let directory = directory();
    for category in Category::ordered() {
        let engine = TriageEngine::new(FixedClassifier(category));
        let decision = engine
            .triage(&request("anything"), &directory)
            .expect("triages");

        assert_eq!(
            decision.needs_approval,
            decision.estimated_cost_aed > APPROVAL_THRESHOLD_AED,
            "{category}"
        );
        assert_eq!(decision.vendor.is_some(), !decision.needs_approval);
    }
}

#[test]
fn missing_vendor_fails_single_request() {
    let directory = directory_without_handyman();

    let err = triage(&request("Door handle broken"), &directory).expect_err("no handyman");
    assert_eq!(
        err,
        TriageError::NoVendorAvailable {
            category: Category::GeneralMaintenance
        }
    );

    let decision = triage(&request("AC not cooling"), &directory).expect("others still work");
    assert_eq!(decision.category, Category::AcMaintenance);
}
