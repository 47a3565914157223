use serde::Serialize;

use crate::model::features::FeatureSet;
use crate::model::profile::ProfileSummary;
use crate::model::traits::TraitScores;
use crate::report::{DominantStat, ReportError, ToolMeta, TraitStats};

#[derive(Debug, Serialize)]
pub struct ProfileSummaryJson<'a> {
    pub tool: ToolMeta,
    pub profile: &'a ProfileSummary,
    pub features: &'a FeatureSet,
    pub scores: &'a TraitScores,
    pub dominant_trait: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BatchProfileJson<'a> {
    pub username: &'a str,
    pub platform: &'static str,
    pub scores: &'a TraitScores,
    pub dominant_trait: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BatchSummaryJson<'a> {
    pub tool: ToolMeta,
    pub n_profiles: usize,
    pub traits: &'a [TraitStats],
    pub dominant: &'a [DominantStat],
    pub profiles: Vec<BatchProfileJson<'a>>,
}

pub fn render_profile_json(
    summary: &ProfileSummary,
    features: &FeatureSet,
    scores: &TraitScores,
) -> Result<String, ReportError> {
    let doc = ProfileSummaryJson {
        tool: ToolMeta::current(),
        profile: summary,
        features,
        scores,
        dominant_trait: scores.dominant().name(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn render_batch_json(doc: &BatchSummaryJson<'_>) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(doc)?)
}
