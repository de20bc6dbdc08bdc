use std::collections::HashMap;

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::personality::clusters::{cluster_profile, ClusterProfile, CLUSTERS};
use crate::personality::ipip::score_ipip50;
use crate::personality::items::{OceanTrait, ITEM_SPECS};
use crate::personality::scoring::{score, QuestionnaireResponse};
use crate::personality::traits::TraitScoreSet;

/// Answers stay untyped so strings, nulls and fractions surface as
/// validation errors naming the offending index.
#[derive(Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<Value>,
}

#[derive(Deserialize)]
pub struct IpipScoreRequest {
    pub answers: HashMap<String, f64>,
}

#[derive(Debug, Serialize)]
pub struct ItemView {
    /// 1-based statement number as shown on the form.
    pub position: usize,
    #[serde(rename = "trait")]
    pub trait_group: OceanTrait,
    pub trait_code: &'static str,
    pub reversed: bool,
}

/// GET /api/v1/personality/items
pub async fn handle_list_items() -> Json<Vec<ItemView>> {
    let items = ITEM_SPECS
        .iter()
        .enumerate()
        .map(|(i, spec)| ItemView {
            position: i + 1,
            trait_group: spec.trait_group,
            trait_code: spec.trait_group.code(),
            reversed: spec.is_reversed(),
        })
        .collect();
    Json(items)
}

/// POST /api/v1/personality/score
pub async fn handle_score(
    Json(req): Json<ScoreRequest>,
) -> Result<Json<TraitScoreSet>, AppError> {
    let responses = QuestionnaireResponse::from_json(&req.answers).map_err(|e| {
        warn!("Rejected questionnaire: {e}");
        e
    })?;
    let scores = score(&responses);
    debug!(?scores, "Scored questionnaire");
    Ok(Json(scores))
}

/// POST /api/v1/personality/score/ipip
pub async fn handle_score_ipip(
    Json(req): Json<IpipScoreRequest>,
) -> Result<Json<TraitScoreSet>, AppError> {
    let scores = score_ipip50(&req.answers).map_err(|e| {
        warn!("Rejected IPIP-50 answers: {e}");
        e
    })?;
    debug!(?scores, "Scored IPIP-50 inventory");
    Ok(Json(scores))
}

/// GET /api/v1/personality/clusters
pub async fn handle_list_clusters() -> Json<&'static [ClusterProfile]> {
    Json(&CLUSTERS[..])
}

/// GET /api/v1/personality/clusters/:id
pub async fn handle_get_cluster(
    Path(id): Path<u8>,
) -> Result<Json<&'static ClusterProfile>, AppError> {
    cluster_profile(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Cluster {id} not found")))
}
