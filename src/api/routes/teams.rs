use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    pub teams: Vec<String>,
    pub default_matches: usize,
}

pub async fn list_teams(State(state): State<AppState>) -> Json<TeamsResponse> {
    Json(TeamsResponse {
        teams: state.pipeline.roster().teams().map(str::to_string).collect(),
        default_matches: state.pipeline.default_limit(),
    })
}
