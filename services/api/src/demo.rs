use crate::infra::{load_vendor_directory, resolve_directory_path};
use clap::Args;
use std::path::PathBuf;
use tenant_triage::config::AppConfig;
use tenant_triage::error::AppError;
use tenant_triage::triage::{
    Category, MaintenanceTriageService, TriageOutcome, VendorDirectory, FAILURE_REPLY,
};

const SAMPLE_COMPLAINTS: [&str; 5] = [
    "There is water leaking from the ceiling in the bathroom",
    "The AC is not cooling properly",
    "Door handle broken",
    "Power outlet not working",
    "Something is broken",
];

#[derive(Args, Debug)]
pub(crate) struct TriageArgs {
    /// Complaint text as the tenant wrote it
    #[arg(required = true, num_args = 1..)]
    pub(crate) words: Vec<String>,
    /// Vendor directory file (JSON, or CSV by extension)
    #[arg(long)]
    pub(crate) vendors: Option<PathBuf>,
    /// Print the full decision as JSON instead of the tenant reply
    #[arg(long)]
    pub(crate) json: bool,
}

impl TriageArgs {
    pub(crate) fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct VendorsArgs {
    /// Vendor directory file (JSON, or CSV by extension)
    #[arg(long)]
    pub(crate) vendors: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Vendor directory file (JSON, or CSV by extension)
    #[arg(long)]
    pub(crate) vendors: Option<PathBuf>,
}

pub(crate) fn run_triage(args: TriageArgs) -> Result<(), AppError> {
    let text = args.text();
    let service = build_service(args.vendors)?;

    let outcome = match service.submit_text(&text) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("{FAILURE_REPLY}");
            return Err(err.into());
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Decision payload unavailable: {err}"),
        }
    } else {
        print!("{}", outcome.reply);
    }

    Ok(())
}

pub(crate) fn run_vendors(args: VendorsArgs) -> Result<(), AppError> {
    let service = build_service(args.vendors)?;
    render_directory(service.directory());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = build_service(args.vendors)?;

    println!("Maintenance triage demo");
    render_directory(service.directory());

    println!("\nSample complaints");
    for complaint in SAMPLE_COMPLAINTS {
        println!("\n> {complaint}");
        match service.submit_text(complaint) {
            Ok(outcome) => render_outcome(&outcome),
            Err(err) => println!("  {FAILURE_REPLY} ({err})"),
        }
    }

    Ok(())
}

fn build_service(vendors: Option<PathBuf>) -> Result<MaintenanceTriageService, AppError> {
    let config = AppConfig::load()?;
    let path = resolve_directory_path(vendors, &config);
    let directory = load_vendor_directory(path.as_deref())?;
    Ok(MaintenanceTriageService::new(directory))
}

fn render_directory(directory: &VendorDirectory) {
    println!("Vendor directory ({} vendors)", directory.len());
    for category in Category::ordered() {
        println!("- {}", category.label());
        for (idx, vendor) in directory.vendors(category).iter().enumerate() {
            let default_note = if idx == 0 { " (default)" } else { "" };
            println!(
                "    {} | {} | {}{}",
                vendor.id, vendor.name, vendor.contact, default_note
            );
        }
    }
}

fn render_outcome(outcome: &TriageOutcome) {
    let decision = &outcome.decision;
    let keyword = decision.matched_keyword.as_deref().unwrap_or("none");
    println!(
        "  {} | {} | AED {} | matched keyword: {}",
        decision.category.label(),
        decision.priority.label(),
        decision.estimated_cost_aed,
        keyword
    );
    match &decision.vendor {
        Some(vendor) => println!("  {} -> {}", outcome.status.label(), vendor.name),
        None => println!("  {}", outcome.status.label()),
    }
}
