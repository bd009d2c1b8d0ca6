use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tenant_triage::config::AppConfig;
use tenant_triage::error::AppError;
use tenant_triage::triage::VendorDirectory;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Command-line override first, then `TRIAGE_VENDOR_DIRECTORY`, then the
/// bundled directory.
pub(crate) fn resolve_directory_path(
    cli_override: Option<PathBuf>,
    config: &AppConfig,
) -> Option<PathBuf> {
    cli_override.or_else(|| config.triage.vendor_directory.clone())
}

/// Loads and validates the vendor directory once for the process lifetime.
pub(crate) fn load_vendor_directory(path: Option<&Path>) -> Result<Arc<VendorDirectory>, AppError> {
    let directory = VendorDirectory::load(path)?;

    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled".to_string());
    info!(
        %source,
        vendors = directory.len(),
        "vendor directory loaded"
    );

    Ok(Arc::new(directory))
}
