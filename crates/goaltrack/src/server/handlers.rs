//! Route handlers. Thin wrappers that run a loader against the shared state.

use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

use super::AppState;
use crate::error::{Error, Result};
use crate::loaders::{self, GoalListPage, GoalPage, HomePage};

pub(crate) async fn home_handler(State(state): State<AppState>) -> Json<HomePage> {
    Json(loaders::load_home(state.catalog()))
}

pub(crate) async fn goal_list_handler(State(state): State<AppState>) -> Json<GoalListPage> {
    Json(loaders::load_goal_list(state.catalog()))
}

pub(crate) async fn goal_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<GoalPage>> {
    loaders::load_goal(state.catalog(), state.slug_mode(), &slug)
        .inspect_err(|_| debug!(slug = %slug, mode = %state.slug_mode(), "No goal for slug"))
        .map(Json)
}

pub(crate) async fn fallback_handler() -> Error {
    Error::NotFound {
        message: "Not Found".to_string(),
    }
}
