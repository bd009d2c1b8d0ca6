use std::fmt::Write;

use super::domain::{AssignmentDecision, AssignmentStatus};

/// Sent to the tenant whenever a request could not be triaged.
pub const FAILURE_REPLY: &str =
    "Sorry, something went wrong processing your request. Please try again.";

const EXAMPLE_COMPLAINTS: [&str; 3] = [
    "Water leaking from the ceiling",
    "AC not cooling properly",
    "Door handle broken",
];

/// Tenant-facing summary of a decision.
pub fn render_reply(decision: &AssignmentDecision) -> String {
    let status = decision.status();
    let mut reply = String::from("Issue Received\n\n");

    // Writing into a String cannot fail.
    let _ = writeln!(reply, "Type: {}", decision.category.label());
    let _ = writeln!(reply, "Priority: {}", decision.priority.label());
    let _ = writeln!(reply, "Estimated Cost: AED {}\n", decision.estimated_cost_aed);
    let _ = writeln!(reply, "Status: {}", status.label());

    if let (AssignmentStatus::AutoAssigned, Some(vendor)) = (status, &decision.vendor) {
        let _ = writeln!(reply, "Vendor: {}", vendor.name);
    }

    reply
}

pub fn welcome_message() -> String {
    let mut message = String::from(
        "Tenant Maintenance Triage\n\n\
         Describe your maintenance issue in plain text, for example:\n",
    );
    for example in EXAMPLE_COMPLAINTS {
        let _ = writeln!(message, "- \"{example}\"");
    }
    message.push_str(
        "\nYou will receive the issue type, priority, estimated cost, \
         and whether a vendor was assigned or the request awaits approval.\n",
    );
    message
}
