use crate::cli::ServeArgs;
use crate::infra::{load_vendor_directory, resolve_directory_path, AppState};
use crate::routes::with_triage_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tenant_triage::config::AppConfig;
use tenant_triage::error::AppError;
use tenant_triage::telemetry;
use tenant_triage::triage::MaintenanceTriageService;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    // An invalid directory aborts startup before the listener is bound.
    let directory_path = resolve_directory_path(args.vendors.take(), &config);
    let directory = load_vendor_directory(directory_path.as_deref())?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let triage_service = Arc::new(MaintenanceTriageService::new(directory));

    let app = with_triage_routes(triage_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "maintenance triage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
