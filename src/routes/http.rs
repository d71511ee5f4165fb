//! HTTP endpoint handlers: read-only views over the content store.
//! Each handler is instrumented and logs basic result info.

use std::sync::Arc;
use axum::{extract::{Path, State}, http::StatusCode, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_list_languages(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let languages: Vec<LanguageListItem> = state
    .content
    .languages()
    .map(|l| LanguageListItem {
      name: l.name.clone(),
      difficulty: l.difficulty.clone(),
      challenges: l.challenges.len(),
    })
    .collect();
  info!(target: "challenge", count = languages.len(), "HTTP language list served");
  Json(LanguagesOut { languages })
}

#[instrument(level = "info", skip(state), fields(%name))]
pub async fn http_get_language(
  State(state): State<Arc<AppState>>,
  Path(name): Path<String>,
) -> impl IntoResponse {
  match state.content.language(&name) {
    Some(entry) => {
      info!(target: "challenge", language = %name, "HTTP language served");
      (StatusCode::OK, Json(entry.clone())).into_response()
    }
    None => {
      info!(target: "challenge", language = %name, "HTTP unknown language");
      (StatusCode::NOT_FOUND, Json(ErrorOut { error: format!("Unknown language: {name}") })).into_response()
    }
  }
}
