use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::{parse_date_param, parse_list_param, ApiError};
use crate::models::{Selection, SelectionBounds};
use crate::report::Dashboard;

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub team: Option<String>,
    /// Comma-separated tournament names
    pub tournaments: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub n: Option<usize>,
}

impl DashboardParams {
    fn into_selection(self) -> Result<Selection, ApiError> {
        let team = self
            .team
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::BadRequest("team is required".to_string()))?;

        Ok(Selection {
            team,
            tournaments: parse_list_param(self.tournaments.as_deref()),
            start_date: parse_date_param(self.from.as_deref(), "from")?,
            end_date: parse_date_param(self.to.as_deref(), "to")?,
            limit: self.n,
        })
    }
}

/// Ranges the selection widgets should offer for the given choices.
pub async fn selection_options(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<SelectionBounds>, ApiError> {
    let selection = params.into_selection()?;
    let filtered = state.pipeline.run(&state.dataset, &selection)?;
    Ok(Json(filtered.bounds))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<Dashboard>, ApiError> {
    let selection = params.into_selection()?;
    let filtered = state.pipeline.run(&state.dataset, &selection)?;

    tracing::debug!(
        "Dashboard for {}: {} matches",
        filtered.team,
        filtered.matches.len()
    );
    Ok(Json(Dashboard::build(filtered)))
}
