use crate::demo::{run_demo, run_triage, run_vendors, DemoArgs, TriageArgs, VendorsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tenant_triage::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Tenant Maintenance Triage",
    about = "Triage tenant maintenance requests into priced vendor assignments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Triage a single maintenance complaint and print the tenant reply
    Triage(TriageArgs),
    /// List the vendor directory grouped by category
    Vendors(VendorsArgs),
    /// Run the sample complaints through the triage engine
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Vendor directory file (JSON, or CSV by extension)
    #[arg(long)]
    pub(crate) vendors: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Triage(args) => run_triage(args),
        Command::Vendors(args) => run_vendors(args),
        Command::Demo(args) => run_demo(args),
    }
}
