//! Request handlers. Failures log the underlying error server-side and
//! return a generic 500 payload that does not leak internals; empty results
//! are always 200 with an empty array.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::data::snapshot::Zone;
use crate::data::source::SourceError;
use crate::data::spells::{find_spell, CharmSpell, CHARM_SPELLS};
use crate::pipeline::{self, EnrichedNpc};
use crate::server::AppState;

#[derive(Debug)]
pub struct ApiError {
    message: &'static str,
    source: SourceError,
}

impl ApiError {
    fn new(message: &'static str, source: SourceError) -> ApiError {
        ApiError { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.source, "{}", self.message);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "status": "error", "message": self.message })),
        )
            .into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NpcQuery {
    #[serde(rename = "maxLevel")]
    pub max_level: Option<i64>,
    #[serde(rename = "spellId")]
    pub spell_id: Option<i64>,
}

/// GET /api/zones — all known zones, ordered by display name at the source.
pub async fn list_zones(State(state): State<AppState>) -> Result<Json<Vec<Zone>>, ApiError> {
    let zones = state
        .source
        .zones()
        .await
        .map_err(|err| ApiError::new("Failed to fetch zones", err))?;
    Ok(Json(zones))
}

/// GET /api/charm-spells — the static catalog verbatim.
pub async fn list_charm_spells() -> Json<&'static [CharmSpell]> {
    Json(CHARM_SPELLS)
}

/// GET /api/npcs/:zone?maxLevel=&spellId= — filtered, enriched, ordered NPCs.
/// An unknown spell id disables spell narrowing, the same as omitting it.
pub async fn zone_npcs(
    State(state): State<AppState>,
    Path(zone): Path<String>,
    Query(query): Query<NpcQuery>,
) -> Result<Json<Vec<EnrichedNpc>>, ApiError> {
    let spell = query.spell_id.and_then(find_spell);
    let required_bodytype = spell.and_then(|spell| spell.restriction.required_bodytype());

    let npcs = state
        .source
        .npcs_for_zone(&zone, query.max_level, required_bodytype)
        .await
        .map_err(|err| ApiError::new("Failed to fetch NPCs", err))?;

    Ok(Json(pipeline::run(npcs, query.max_level, spell)))
}

/// GET /api/health — loaded counts in snapshot mode, a backing-store ping in
/// live mode.
pub async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let payload = state
        .source
        .health()
        .await
        .map_err(|err| ApiError::new("Backing store unreachable", err))?;
    Ok(Json(payload))
}
