//! Dashboard endpoint.

use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;
use tracing::debug;

use crate::api::ApiState;
use crate::dashboard::DashboardView;

/// GET /api/dashboard
///
/// Returns the dashboard view model for the current session, if any.
pub async fn get_dashboard(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Json<DashboardView> {
    let session = state.session.current_user(&headers);
    debug!("Building dashboard (signed in: {})", session.is_some());
    Json(DashboardView::build(session.as_ref()))
}
