use std::sync::Arc;

use crate::filter::FilterPipeline;
use crate::models::Match;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Vec<Match>>,
    pub pipeline: Arc<FilterPipeline>,
}

impl AppState {
    pub fn new(dataset: Vec<Match>, pipeline: FilterPipeline) -> Self {
        Self {
            dataset: Arc::new(dataset),
            pipeline: Arc::new(pipeline),
        }
    }
}
