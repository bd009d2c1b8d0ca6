use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::vendors::Vendor;

/// Repair cost above which a decision is held for human sign-off.
pub const APPROVAL_THRESHOLD_AED: u32 = 1000;

/// Fixed problem classes a maintenance request can be triaged into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PlumbingLeak,
    AcMaintenance,
    ElectricalIssue,
    GeneralMaintenance,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::PlumbingLeak,
            Self::AcMaintenance,
            Self::ElectricalIssue,
            Self::GeneralMaintenance,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PlumbingLeak => "Plumbing Leak",
            Self::AcMaintenance => "AC Maintenance",
            Self::ElectricalIssue => "Electrical Issue",
            Self::GeneralMaintenance => "General Maintenance",
        }
    }

    /// Priority and cost estimate for the category. Total over the enum.
    pub const fn profile(self) -> PriorityCostProfile {
        match self {
            Self::PlumbingLeak => PriorityCostProfile::new(Priority::High, 1500),
            Self::AcMaintenance => PriorityCostProfile::new(Priority::Medium, 600),
            Self::ElectricalIssue => PriorityCostProfile::new(Priority::High, 1200),
            Self::GeneralMaintenance => PriorityCostProfile::new(Priority::Low, 300),
        }
    }

    /// Resolves both canonical snake_case names and the labels used by older
    /// vendor files (`Plumbing`, `AC`, `Electrical`, `General`).
    pub fn from_directory_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "plumbing_leak" | "plumbing" | "plumbing leak" => Some(Self::PlumbingLeak),
            "ac_maintenance" | "ac" | "ac maintenance" => Some(Self::AcMaintenance),
            "electrical_issue" | "electrical" | "electrical issue" => Some(Self::ElectricalIssue),
            "general_maintenance" | "general" | "general maintenance" => {
                Some(Self::GeneralMaintenance)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityCostProfile {
    pub priority: Priority,
    pub estimated_cost_aed: u32,
}

impl PriorityCostProfile {
    const fn new(priority: Priority, estimated_cost_aed: u32) -> Self {
        Self {
            priority,
            estimated_cost_aed,
        }
    }

    pub const fn needs_approval(&self) -> bool {
        self.estimated_cost_aed > APPROVAL_THRESHOLD_AED
    }
}

/// Inbound complaint as received from the tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceRequest {
    text: String,
    received_at: DateTime<Utc>,
}

impl MaintenanceRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self::received_at(text, Utc::now())
    }

    pub fn received_at(text: impl Into<String>, received_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            received_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.received_at
    }
}

/// Whether a decision went straight to a vendor or is waiting on a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    AutoAssigned,
    PendingApproval,
}

impl AssignmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AutoAssigned => "Vendor auto-assigned",
            Self::PendingApproval => "Waiting for human approval (cost > 1000 AED)",
        }
    }
}

/// Final outcome of triaging one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentDecision {
    pub category: Category,
    pub priority: Priority,
    pub estimated_cost_aed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,
    pub vendor: Option<Vendor>,
    pub needs_approval: bool,
}

impl AssignmentDecision {
    pub fn status(&self) -> AssignmentStatus {
        if self.needs_approval {
            AssignmentStatus::PendingApproval
        } else {
            AssignmentStatus::AutoAssigned
        }
    }
}
