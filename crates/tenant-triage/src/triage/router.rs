use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::classifier::IssueClassifier;
use super::domain::Category;
use super::reply::{welcome_message, FAILURE_REPLY};
use super::service::MaintenanceTriageService;
use super::vendors::Vendor;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TriageRequestBody {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryVendors<'a> {
    category: Category,
    label: &'static str,
    vendors: &'a [Vendor],
}

/// Router builder exposing the maintenance intake endpoints.
pub fn triage_router<C>(service: Arc<MaintenanceTriageService<C>>) -> Router
where
    C: IssueClassifier + 'static,
{
    Router::new()
        .route("/api/v1/maintenance/triage", post(triage_handler::<C>))
        .route("/api/v1/maintenance/vendors", get(vendors_handler::<C>))
        .route("/api/v1/maintenance/welcome", get(welcome_handler))
        .with_state(service)
}

pub(crate) async fn triage_handler<C>(
    State(service): State<Arc<MaintenanceTriageService<C>>>,
    axum::Json(body): axum::Json<TriageRequestBody>,
) -> Response
where
    C: IssueClassifier + 'static,
{
    match service.submit_text(&body.text) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(err) => {
            error!(error = %err, "maintenance triage failed");
            let payload = json!({
                "error": FAILURE_REPLY,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn vendors_handler<C>(
    State(service): State<Arc<MaintenanceTriageService<C>>>,
) -> Response
where
    C: IssueClassifier + 'static,
{
    let directory = service.directory();
    let categories: Vec<CategoryVendors<'_>> = Category::ordered()
        .into_iter()
        .map(|category| CategoryVendors {
            category,
            label: category.label(),
            vendors: directory.vendors(category),
        })
        .collect();

    (
        StatusCode::OK,
        axum::Json(json!({ "categories": categories })),
    )
        .into_response()
}

pub(crate) async fn welcome_handler() -> Response {
    let payload = json!({ "message": welcome_message() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
